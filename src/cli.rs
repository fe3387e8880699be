use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output formats for the parsed index
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The index as JSON
    Json,
    /// Error and warning counts per URI
    Summary,
}

/// Verbosity levels for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VerbosityLevel {
    /// Only show errors
    Quiet,
    /// Show warnings
    #[default]
    Normal,
    /// Show progress information
    Verbose,
}

impl VerbosityLevel {
    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            VerbosityLevel::Quiet => "error",
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "info",
        }
    }
}

/// Index the diagnostics of saved markup validator SOAP responses
#[derive(Parser, Debug, Clone)]
#[command(name = "html-validator-parser")]
#[command(about = "Parse markup validator SOAP responses into errors and warnings by URI and line")]
#[command(version)]
pub struct Cli {
    /// SOAP response files to parse
    #[arg(required = true, help = "SOAP response files to parse")]
    pub inputs: Vec<PathBuf>,

    /// Configuration file (TOML or JSON)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Only show results for this URI
    #[arg(short = 'u', long = "uri")]
    pub uri: Option<String>,

    /// Only show results for this line (requires --uri)
    #[arg(short = 'l', long = "line", requires = "uri")]
    pub line: Option<u32>,

    /// URI under which SOAP faults are indexed
    #[arg(long = "fault-uri")]
    pub fault_uri: Option<String>,

    /// Stop at the first response that cannot be parsed
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", help = "Enable verbose output")]
    pub verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Quiet mode",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        for input in &self.inputs {
            if !input.is_file() {
                return Err(format!("Input file does not exist: {}", input.display()));
            }
        }
        Ok(())
    }
}
