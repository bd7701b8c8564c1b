use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use spotstat::{Compression, NegativeIntervalPolicy, Spotstat, SpotstatError};
use tracing_subscriber::EnvFilter;

/// Summarize how often prices change in a timestamp-indexed price dataset.
#[derive(Debug, Parser)]
#[command(name = "spotstat", version, about)]
struct Cli {
    /// Dataset file: CSV with the timestamp in the first column.
    path: PathBuf,

    /// Compression of the file; inferred from the extension when omitted.
    #[arg(long, value_enum)]
    compression: Option<CompressionArg>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Handling of out-of-order timestamps.
    #[arg(long, value_enum, default_value_t = PolicyArg::PassThrough)]
    negative_intervals: PolicyArg,

    /// Keep series that never changed price.
    #[arg(long)]
    keep_empty: bool,

    /// Explicit chrono format for the timestamp column, e.g. "%d/%m/%Y %H:%M".
    #[arg(long)]
    timestamp_format: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Gzip,
    Zip,
}

impl From<CompressionArg> for Compression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => Self::None,
            CompressionArg::Gzip => Self::Gzip,
            CompressionArg::Zip => Self::Zip,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    PassThrough,
    Warn,
    Reject,
}

impl From<PolicyArg> for NegativeIntervalPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::PassThrough => Self::PassThrough,
            PolicyArg::Warn => Self::Warn,
            PolicyArg::Reject => Self::Reject,
        }
    }
}

fn run(cli: Cli) -> Result<String, SpotstatError> {
    let mut builder = Spotstat::builder()
        .negative_intervals(cli.negative_intervals.into())
        .drop_empty_columns(!cli.keep_empty);
    if let Some(c) = cli.compression {
        builder = builder.compression(c.into());
    }
    if let Some(fmt) = cli.timestamp_format {
        builder = builder.timestamp_format(fmt);
    }
    let summary = builder.build()?.analyze_file(&cli.path)?;

    match cli.format {
        OutputFormat::Text => Ok(summary.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&summary)
            .map_err(|e| SpotstatError::Data(e.to_string())),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(out) => {
            println!("{}", out.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
