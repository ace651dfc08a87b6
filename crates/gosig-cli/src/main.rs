use anyhow::Context;
use clap::Parser;
use gosig_config::GosigConfig;

mod cli;
mod output;
mod pipeline;

fn main() {
    match run() {
        Ok(summary) if summary.is_clean() => {}
        Ok(summary) => {
            eprintln!(
                "gosig: {} error(s); {} file(s) processed",
                summary.failures, summary.files
            );
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("gosig error: {error:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<pipeline::Summary> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = GosigConfig::load_with_overrides(&cli.overrides())
        .context("failed to load gosig configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let summary = pipeline::run_paths(
        &cli.paths,
        &config,
        &cwd,
        cli.format,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    tracing::debug!(
        files = summary.files,
        signatures = summary.signatures,
        failures = summary.failures,
        "run finished"
    );
    Ok(summary)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GOSIG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
