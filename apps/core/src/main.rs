// Featurescope CLI entry point
// Reads a feature list from a file or stdin and prints it grouped.

use anyhow::Context;
use clap::Parser;
use featurescope_core::config::{Config, LogFormat, OutputFormat};
use featurescope_core::text_extract::read_source;
use featurescope_core::FeatureCategorizer;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "featurescope_core=info,featurescope=info";

/// Group a free-text feature list by category, priority and complexity
#[derive(Debug, Parser)]
#[command(name = "featurescope", version, about)]
struct Cli {
    /// Feature list (txt, md, csv, json, pdf, docx). Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Output format, overrides FEATURESCOPE_OUTPUT
    #[arg(long, short)]
    format: Option<OutputFormat>,
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let source = cli
        .file
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());
    info!("Reading feature list from {}", source);

    let text = read_source(cli.file.as_deref(), config.max_input_bytes)
        .with_context(|| format!("failed to read feature list from {}", source))?;

    let report = FeatureCategorizer::new().categorize(&text);

    match cli.format.unwrap_or(config.output) {
        OutputFormat::Json => {
            println!("{}", report.to_json_pretty()?);
        }
        OutputFormat::Text => print!("{}", report.render_text()),
    }

    Ok(())
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env();
    init_logging(
        config
            .as_ref()
            .map(|c| c.log_format)
            .unwrap_or_default(),
    );

    let result = config
        .context("invalid configuration")
        .and_then(|config| run(cli, config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
