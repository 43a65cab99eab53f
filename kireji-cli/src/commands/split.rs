//! Split command implementation

use anyhow::Result;
use clap::Args;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use kireji_core::{DelimiterMode, SplitOptions};

use crate::error::CliError;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Text to split (reads stdin when omitted)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input file to split instead of TEXT
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Delimiter string
    #[arg(short, long, value_name = "STRING", default_value = ",")]
    pub delimiter: String,

    /// Treat the delimiter as a set of alternatives instead of one sequence
    #[arg(short, long)]
    pub any: bool,

    /// Decompose the delimiter set per byte instead of per codepoint
    #[arg(long, requires = "any")]
    pub byte_mode: bool,

    /// Strip leading and trailing ASCII spaces from each entry
    #[arg(short, long)]
    pub trim: bool,

    /// Drop entries that are empty after trimming
    #[arg(short, long)]
    pub remove_empty: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one entry per line
    Text,
    /// JSON array of entries with metadata
    Json,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting split");
        log::debug!("Arguments: {:?}", self);

        let source = self.read_source()?;
        let delimiter = self.delimiter.as_bytes();
        let options = self.options();

        let entries = if self.any {
            kireji_core::split_any_with(&source, delimiter, options, self.mode())?
                .collect_decoded()
        } else {
            kireji_core::split_with(&source, delimiter, options)?.collect_decoded()
        };

        log::info!("Produced {} entries", entries.len());
        self.write_entries(&entries)
    }

    /// Map the flag pair onto the options bitset
    fn options(&self) -> SplitOptions {
        let mut options = SplitOptions::empty();
        if self.trim {
            options |= SplitOptions::TRIM_ENTRIES;
        }
        if self.remove_empty {
            options |= SplitOptions::REMOVE_EMPTY_ENTRIES;
        }
        options
    }

    fn mode(&self) -> DelimiterMode {
        if self.byte_mode {
            DelimiterMode::Byte
        } else {
            DelimiterMode::Codepoint
        }
    }

    /// Read the source bytes from TEXT, --input, or stdin.
    ///
    /// Stdin input has one trailing newline stripped, so piped shell text
    /// splits the way it reads.
    fn read_source(&self) -> Result<Vec<u8>> {
        if let Some(path) = &self.input {
            let bytes = fs::read(path)
                .map_err(|e| CliError::InputRead(format!("{}: {e}", path.display())))?;
            return Ok(bytes);
        }
        if let Some(text) = &self.text {
            return Ok(text.clone().into_bytes());
        }

        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .map_err(|e| CliError::InputRead(format!("stdin: {e}")))?;
        if buffer.ends_with(b"\n") {
            buffer.pop();
            if buffer.ends_with(b"\r") {
                buffer.pop();
            }
        }
        Ok(buffer)
    }

    fn write_entries(&self, entries: &[String]) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = fs::File::create(path)
                    .map_err(|e| CliError::OutputWrite(format!("{}: {e}", path.display())))?;
                Box::new(file)
            }
            None => Box::new(io::stdout().lock()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for (index, entry) in entries.iter().enumerate() {
            formatter.format_entry(entry, index)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
