use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use html_validator_parser::{
    Cli, ConfigManager, Output, OutputFormat, ParseError, ResultIndex, Selection,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        return ExitCode::from(2);
    }

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Parse every input into one index and print it. Returns whether all inputs parsed.
async fn run(cli: Cli) -> Result<bool> {
    let config = ConfigManager::load_config(&cli)
        .await
        .context("Failed to load configuration")?;

    init_logging(config.output.verbosity().filter_directive());

    let mut index = ResultIndex::with_fault_uri(config.parser.fault_uri.clone());
    let mut all_parsed = true;

    for input in &cli.inputs {
        match parse_file(&mut index, input).await? {
            Ok(()) => tracing::info!(path = %input.display(), "Parsed validator response"),
            Err(e) => {
                tracing::warn!(path = %input.display(), error = %e, "Skipping unparsable response");
                all_parsed = false;
                if config.parser.fail_fast {
                    break;
                }
            }
        }
    }

    let selection = Selection {
        uri: cli.uri.clone(),
        line: cli.line,
    };
    let output = Output::new(OutputFormat::from(config.output.format), config.output.pretty);
    let text = output
        .format_results(&index, &selection)
        .context("Failed to serialize results")?;
    println!("{}", text.trim_end());

    Ok(all_parsed)
}

/// Read one response file. I/O failures abort the run; parse failures are reported per file.
async fn parse_file(
    index: &mut ResultIndex,
    path: &Path,
) -> Result<std::result::Result<(), ParseError>> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(index.parse_bytes(&raw))
}

fn init_logging(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
