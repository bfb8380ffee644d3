//! JSON export.
//!
//! Output is an array of two-key objects, primary key first, pretty-printed
//! with 2-space indentation. Non-ASCII text is written as UTF-8, not escaped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::layout::Entry;

/// Entry serialized under the configured field names, in order.
struct NamedEntry<'a> {
    entry: &'a Entry,
    fields: &'a ExportConfig,
}

impl Serialize for NamedEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.fields.primary_field, &self.entry.primary)?;
        map.serialize_entry(&self.fields.secondary_field, &self.entry.secondary)?;
        map.end()
    }
}

struct NamedEntries<'a> {
    entries: &'a [Entry],
    fields: &'a ExportConfig,
}

impl Serialize for NamedEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in self.entries {
            seq.serialize_element(&NamedEntry {
                entry,
                fields: self.fields,
            })?;
        }
        seq.end()
    }
}

/// Writes entries as a JSON array.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    fields: ExportConfig,
}

impl JsonExporter {
    /// Create an exporter.
    ///
    /// Field names must be non-empty and distinct.
    pub fn new(fields: ExportConfig) -> Result<Self> {
        if fields.primary_field.is_empty() || fields.secondary_field.is_empty() {
            return Err(Error::InvalidConfig("export field names must not be empty".to_string()));
        }
        if fields.primary_field == fields.secondary_field {
            return Err(Error::InvalidConfig(format!(
                "export field names must differ, both are {:?}",
                fields.primary_field
            )));
        }
        Ok(Self { fields })
    }

    /// Field names in use.
    pub fn fields(&self) -> &ExportConfig {
        &self.fields
    }

    /// Serialize `entries` to a JSON string.
    pub fn to_json_string(&self, entries: &[Entry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.named(entries))?)
    }

    /// Serialize `entries` into `writer`.
    pub fn write_to<W: Write>(&self, entries: &[Entry], writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &self.named(entries))?;
        Ok(())
    }

    fn named<'a>(&'a self, entries: &'a [Entry]) -> NamedEntries<'a> {
        NamedEntries {
            entries,
            fields: &self.fields,
        }
    }

    /// Write `entries` to the file at `path`, replacing it.
    pub fn export(&self, entries: &[Entry], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(entries, &mut writer)?;
        writer.flush()?;
        log::info!("Wrote {} entries to {}", entries.len(), path.display());
        Ok(())
    }
}
