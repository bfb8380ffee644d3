//! Extract a Bilingual Dictionary
//!
//! Reconstructs dictionary entries from a JSON token dump of a two-column
//! dictionary PDF and writes them as a JSON array.
//!
//! Usage:
//!   cargo run --release --bin extract_dictionary -- tokens.json
//!   cargo run --release --bin extract_dictionary -- tokens.json --output out.json --max-pages 20
//!
//! Options:
//!   --output, -o PATH        output file (default: dictionary_data_clean.json)
//!   --config PATH            JSON file overriding LexiconConfig defaults
//!   --max-pages N            process at most N pages
//!   --primary-field NAME     key of the head phrase (default: indonesian)
//!   --secondary-field NAME   key of the translation (default: arabic)
//!   --skip-failed-pages      skip pages the extractor failed on
//!   --dictionary-headers     drop the Arabic-Indonesian running headers
//!   --parallel               reconstruct pages on all cores
//!   --verbose, -v            debug logging (RUST_LOG overrides)
//!
//! A page progress bar is drawn on stderr unless --verbose is set or stderr
//! is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};
use pdf_lexicon::config::{ExportConfig, LexiconConfig, PageErrorPolicy};
use pdf_lexicon::converters::JsonExporter;
use pdf_lexicon::layout::HeaderFilter;
use pdf_lexicon::pipeline::DictionaryPipeline;
use pdf_lexicon::provider::TokenDump;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;

struct ExtractConfig {
    input: PathBuf,
    output: PathBuf,
    config_file: Option<PathBuf>,
    max_pages: Option<usize>,
    primary_field: Option<String>,
    secondary_field: Option<String>,
    skip_failed_pages: bool,
    dictionary_headers: bool,
    parallel: bool,
    verbose: bool,
}

impl ExtractConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut config = Self {
            input: PathBuf::new(),
            output: PathBuf::from("dictionary_data_clean.json"),
            config_file: None,
            max_pages: None,
            primary_field: None,
            secondary_field: None,
            skip_failed_pages: false,
            dictionary_headers: false,
            parallel: false,
            verbose: false,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    config.output = PathBuf::from(value_of(&args, &mut i)?);
                },
                "--config" => {
                    config.config_file = Some(PathBuf::from(value_of(&args, &mut i)?));
                },
                "--max-pages" => {
                    let raw = value_of(&args, &mut i)?;
                    let pages = raw
                        .parse::<usize>()
                        .map_err(|_| format!("--max-pages expects a number, got {:?}", raw))?;
                    config.max_pages = Some(pages);
                },
                "--primary-field" => {
                    config.primary_field = Some(value_of(&args, &mut i)?.to_string());
                },
                "--secondary-field" => {
                    config.secondary_field = Some(value_of(&args, &mut i)?.to_string());
                },
                "--skip-failed-pages" => config.skip_failed_pages = true,
                "--dictionary-headers" => config.dictionary_headers = true,
                "--parallel" => config.parallel = true,
                "--verbose" | "-v" => config.verbose = true,
                other if other.starts_with('-') => {
                    return Err(format!("Unknown option: {}", other));
                },
                other => {
                    if input.is_some() {
                        return Err(format!("Unexpected argument: {}", other));
                    }
                    input = Some(PathBuf::from(other));
                },
            }
            i += 1;
        }

        config.input = input.ok_or_else(|| "Missing input token dump".to_string())?;
        Ok(config)
    }

    fn lexicon_config(&self) -> Result<LexiconConfig, Box<dyn std::error::Error>> {
        let mut lexicon = match &self.config_file {
            Some(path) => LexiconConfig::from_json_str(&std::fs::read_to_string(path)?)?,
            None => LexiconConfig::default(),
        };

        if self.max_pages.is_some() {
            lexicon.max_pages = self.max_pages;
        }
        if self.skip_failed_pages {
            lexicon.page_error_policy = PageErrorPolicy::Skip;
        }
        if self.dictionary_headers {
            lexicon.header_patterns = HeaderFilter::dictionary_patterns();
        }
        Ok(lexicon)
    }

    fn export_config(&self) -> ExportConfig {
        let mut export = ExportConfig::default();
        if let Some(field) = &self.primary_field {
            export.primary_field = field.clone();
        }
        if let Some(field) = &self.secondary_field {
            export.secondary_field = field.clone();
        }
        export
    }
}

fn value_of<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} expects a value", flag))
}

fn page_progress(total: usize, visible: bool) -> Result<ProgressBar, Box<dyn std::error::Error>> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}: [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
            .progress_chars("█▓▒░  "),
    );
    pb.set_message("Processing pages");
    Ok(pb)
}

fn run(config: &ExtractConfig) -> Result<(), Box<dyn std::error::Error>> {
    let lexicon = config.lexicon_config()?;
    let exporter = JsonExporter::new(config.export_config())?;
    let pipeline = DictionaryPipeline::with_config(lexicon)?;

    let start = Instant::now();
    let dump = TokenDump::open(&config.input)?;

    let visible = !config.verbose && std::io::stderr().is_terminal();
    let progress = page_progress(pipeline.page_limit(&dump)?, visible)?;
    let tick = |_page: usize| progress.inc(1);

    let result = if config.parallel {
        pipeline.process_document_parallel_with_progress(&dump, tick)
    } else {
        pipeline.process_document_with_progress(&dump, tick)
    };
    progress.finish_and_clear();
    let result = result?;

    exporter.export(&result.entries, &config.output)?;

    let stats = &result.stats;
    println!("\n{}", "=".repeat(70));
    println!("Extraction Complete");
    println!("{}", "=".repeat(70));
    println!("Pages processed:    {}", stats.pages_processed);
    println!("Pages failed:       {}", stats.pages_failed());
    println!("Lines:              {}", stats.lines);
    println!("Entries emitted:    {}", stats.entries_emitted);
    println!("Partial discarded:  {}", stats.partial_discarded);
    println!("Orphan lines:       {}", stats.orphan_lines);
    println!("Duplicates removed: {}", stats.duplicates_removed);
    println!("Unique entries:     {}", stats.unique_entries);
    println!("Time: {:?}", start.elapsed());
    println!("Output: {}", config.output.display());
    println!("{}", "=".repeat(70));

    Ok(())
}

fn main() {
    let config = match ExtractConfig::from_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: extract_dictionary <tokens.json> [--output PATH] [--config PATH] [--max-pages N]");
            eprintln!("       [--primary-field NAME] [--secondary-field NAME] [--skip-failed-pages]");
            eprintln!("       [--dictionary-headers] [--parallel] [--verbose]");
            std::process::exit(2);
        },
    };

    let default_filter = if config.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    println!("Bilingual Dictionary Extractor");
    println!("==============================");
    println!("Input:  {}", config.input.display());
    println!("Output: {}", config.output.display());

    if let Err(e) = run(&config) {
        eprintln!("✗ Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_progress() {
        let pb = page_progress(12, false).unwrap();
        assert!(pb.is_hidden());
        pb.inc(1);
        assert_eq!(pb.position(), 1);
    }

    #[test]
    fn test_progress_length() {
        let pb = page_progress(12, true).unwrap();
        assert_eq!(pb.length(), Some(12));
        pb.finish_and_clear();
    }
}
