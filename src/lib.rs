//! # html-validator-parser Library
//!
//! Parses SOAP responses from a markup validation service into errors and
//! warnings, indexed by document URI and by source line. Both normal
//! validation results and SOAP faults are understood; results from repeated
//! parses accumulate until the index is cleared.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod index;
pub mod output;
pub mod record;
pub mod shared;

pub use classifier::{ResponseKind, classify};
pub use cli::{Cli, OutputFormat, VerbosityLevel};
pub use config::{Config, ConfigError, ConfigManager, OutputConfig, ParserConfig};
pub use error::{ParseError, Result};
pub use extractor::{Extraction, extract};
pub use index::{FAULT_URI, LineBucket, ResultIndex, UriEntry};
pub use output::{Output, Selection};
pub use record::{Record, Section, normalize_field};
pub use shared::SharedResultIndex;
