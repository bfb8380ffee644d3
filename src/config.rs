//! Configuration for dictionary reconstruction.
//!
//! The geometric tolerances are heuristics calibrated on one dictionary's
//! typography. They are exposed here instead of being baked into the layout
//! code so other sources can be tuned without code changes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::text::script::ScriptRange;

/// What the document pipeline does when the token provider fails on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageErrorPolicy {
    /// Stop and return the provider error (default)
    #[default]
    Abort,
    /// Log the failure, count the page as failed and continue
    Skip,
}

/// Reconstruction configuration.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Maximum `top` distance for two tokens to share a visual line.
    pub vertical_tolerance: f32,

    /// Slack above the column's left margin within which a line still starts
    /// a new entry. Lines indented further are continuations.
    pub indentation_tolerance: f32,

    /// Horizontal tolerance forwarded to the token provider.
    pub word_x_tolerance: f32,

    /// Vertical tolerance forwarded to the token provider.
    pub word_y_tolerance: f32,

    /// Code-point range of the secondary (translation) script.
    pub secondary_script: ScriptRange,

    /// Running-header patterns; empty disables header filtering.
    pub header_patterns: Vec<String>,

    /// Process at most this many pages from the start of the document.
    pub max_pages: Option<usize>,

    /// Provider failure handling.
    pub page_error_policy: PageErrorPolicy,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            vertical_tolerance: 5.0,
            indentation_tolerance: 5.0,
            word_x_tolerance: 1.0,
            word_y_tolerance: 1.0,
            secondary_script: ScriptRange::ARABIC,
            header_patterns: Vec::new(),
            max_pages: None,
            page_error_policy: PageErrorPolicy::Abort,
        }
    }

    /// Set the line clustering tolerance.
    pub fn with_vertical_tolerance(mut self, tolerance: f32) -> Self {
        self.vertical_tolerance = tolerance;
        self
    }

    /// Set the indentation tolerance of the entry boundary test.
    pub fn with_indentation_tolerance(mut self, tolerance: f32) -> Self {
        self.indentation_tolerance = tolerance;
        self
    }

    /// Set the tolerances forwarded to the token provider.
    pub fn with_word_tolerances(mut self, x_tolerance: f32, y_tolerance: f32) -> Self {
        self.word_x_tolerance = x_tolerance;
        self.word_y_tolerance = y_tolerance;
        self
    }

    /// Set the secondary script range.
    pub fn with_secondary_script(mut self, range: ScriptRange) -> Self {
        self.secondary_script = range;
        self
    }

    /// Set the running-header patterns.
    pub fn with_header_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Limit the number of processed pages.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the provider failure policy.
    pub fn with_page_error_policy(mut self, policy: PageErrorPolicy) -> Self {
        self.page_error_policy = policy;
        self
    }

    /// Load a configuration from JSON, filling missing keys with defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is inside its accepted domain.
    pub fn validate(&self) -> Result<()> {
        let tolerances = [
            ("vertical_tolerance", self.vertical_tolerance),
            ("indentation_tolerance", self.indentation_tolerance),
            ("word_x_tolerance", self.word_x_tolerance),
            ("word_y_tolerance", self.word_y_tolerance),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        // zero slack leaves no line strictly left of margin + tolerance
        if self.indentation_tolerance <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "indentation_tolerance must be positive, got {}",
                self.indentation_tolerance
            )));
        }

        if self.secondary_script.start > self.secondary_script.end {
            return Err(Error::InvalidConfig(format!(
                "secondary_script range is inverted: {:#06X}..={:#06X}",
                self.secondary_script.start, self.secondary_script.end
            )));
        }

        if self.max_pages == Some(0) {
            return Err(Error::InvalidConfig("max_pages must be at least 1".to_string()));
        }

        Ok(())
    }
}

/// Field names used by the JSON exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Key holding the head phrase
    pub primary_field: String,
    /// Key holding the translation
    pub secondary_field: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            primary_field: "indonesian".to_string(),
            secondary_field: "arabic".to_string(),
        }
    }
}

impl ExportConfig {
    /// Create an export configuration with custom field names.
    pub fn new(primary_field: impl Into<String>, secondary_field: impl Into<String>) -> Self {
        Self {
            primary_field: primary_field.into(),
            secondary_field: secondary_field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LexiconConfig::default();
        assert_eq!(config.vertical_tolerance, 5.0);
        assert_eq!(config.indentation_tolerance, 5.0);
        assert_eq!(config.word_x_tolerance, 1.0);
        assert_eq!(config.word_y_tolerance, 1.0);
        assert_eq!(config.secondary_script, ScriptRange::ARABIC);
        assert!(config.header_patterns.is_empty());
        assert_eq!(config.max_pages, None);
        assert_eq!(config.page_error_policy, PageErrorPolicy::Abort);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = LexiconConfig::new()
            .with_vertical_tolerance(3.0)
            .with_indentation_tolerance(8.0)
            .with_word_tolerances(2.0, 2.5)
            .with_header_patterns(["ا ب", "١"])
            .with_max_pages(Some(20))
            .with_page_error_policy(PageErrorPolicy::Skip);

        assert_eq!(config.vertical_tolerance, 3.0);
        assert_eq!(config.indentation_tolerance, 8.0);
        assert_eq!(config.word_x_tolerance, 2.0);
        assert_eq!(config.word_y_tolerance, 2.5);
        assert_eq!(config.header_patterns, vec!["ا ب".to_string(), "١".to_string()]);
        assert_eq!(config.max_pages, Some(20));
        assert_eq!(config.page_error_policy, PageErrorPolicy::Skip);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            LexiconConfig::from_json_str(r#"{"indentation_tolerance": 7.5, "page_error_policy": "skip"}"#)
                .unwrap();
        assert_eq!(config.indentation_tolerance, 7.5);
        assert_eq!(config.vertical_tolerance, 5.0);
        assert_eq!(config.page_error_policy, PageErrorPolicy::Skip);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let config = LexiconConfig::new().with_vertical_tolerance(-1.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_indentation_tolerance_rejected() {
        let config = LexiconConfig::new().with_indentation_tolerance(0.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        // zero is fine for the line tolerance
        assert!(LexiconConfig::new().with_vertical_tolerance(0.0).validate().is_ok());
    }

    #[test]
    fn test_nan_tolerance_rejected() {
        let config = LexiconConfig::new().with_indentation_tolerance(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_script_range_rejected() {
        let config = LexiconConfig::new().with_secondary_script(ScriptRange::new(0x06FF, 0x0600));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_pages_rejected() {
        let config = LexiconConfig::new().with_max_pages(Some(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_export_config_defaults() {
        let export = ExportConfig::default();
        assert_eq!(export.primary_field, "indonesian");
        assert_eq!(export.secondary_field, "arabic");

        let custom = ExportConfig::new("head", "translation");
        assert_eq!(custom.primary_field, "head");
        assert_eq!(custom.secondary_field, "translation");
    }
}
