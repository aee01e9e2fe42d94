//! refcite - Entry Point
//!
//! Reads the reference table and writes citation files.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use refcite::config::{Config, defaults};
use refcite::pipeline::{self, Mode};

#[derive(Parser, Debug)]
#[command(name = "refcite")]
#[command(about = "Write citation files from a reference spreadsheet")]
#[command(version)]
struct Cli {
    /// CSV file of references
    #[arg(long, short, default_value = defaults::INPUT_PATH, env = "REFCITE_INPUT")]
    input: PathBuf,

    /// Directory for output files (created if missing)
    #[arg(long, short, default_value = defaults::OUTPUT_DIR, env = "REFCITE_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Which outputs to produce
    #[arg(long, value_enum, default_value_t = Mode::Datasets)]
    mode: Mode,

    /// Citation style requested from doi.org
    #[arg(long, default_value = defaults::STYLE, env = "REFCITE_STYLE")]
    style: String,

    /// Locale requested from doi.org
    #[arg(long, default_value = defaults::LOCALE, env = "REFCITE_LOCALE")]
    locale: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = defaults::REQUEST_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Continue with empty results or skipped rows instead of failing on a missing column
    #[arg(long)]
    lenient_columns: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::new(&self.input, &self.output_dir)
            .with_style(&self.style)
            .with_locale(&self.locale);
        config.request_timeout = Duration::from_secs(self.timeout_secs);
        config.strict_columns = !self.lenient_columns;
        config
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = cli.config();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        input = %config.input_path.display(),
        output_dir = %config.output_dir.display(),
        mode = ?cli.mode,
        "Starting refcite"
    );

    let summary = pipeline::run(&config, cli.mode)
        .await
        .with_context(|| format!("processing {}", config.input_path.display()))?;

    println!("{summary}");
    Ok(())
}
