//! adminscope CLI entrypoint
//! Parses command-line arguments, runs the analysis and writes the report.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use adminscope_core::{analyze, Config};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adminscope")]
#[command(
    author,
    version,
    about = "Report the administrator endpoints of an OpenAPI document",
    long_about = "Report the administrator endpoints of an OpenAPI document.\n\n\
                  With no arguments, reads storage/api-docs/api-docs.json and writes \
                  admin_endpoints_analysis.json in the working directory. Every flag \
                  is optional and only overrides those fixed defaults."
)]
struct Cli {
    /// YAML configuration file with `input_path` and `output_path`
    #[arg(long)]
    config: Option<PathBuf>,
    /// OpenAPI document to analyze (default: storage/api-docs/api-docs.json)
    #[arg(long)]
    input: Option<String>,
    /// Where to write the JSON report (default: admin_endpoints_analysis.json)
    #[arg(long)]
    output: Option<String>,
    /// Do not print the summary
    #[arg(short, long)]
    quiet: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };
    let config = config.with_overrides(cli.input, cli.output);
    config.validate()?;
    tracing::debug!(?config, "resolved configuration");

    if !cli.quiet {
        println!("Loading OpenAPI document from: {}", config.input_path);
    }
    let (ctx, report) = analyze(&config)
        .await
        .with_context(|| format!("Failed to analyze {}", config.input_path))?;

    if !cli.quiet {
        match (ctx.title(), ctx.version()) {
            (Some(title), Some(version)) => println!("API: {} ({})", title, version),
            (Some(title), None) => println!("API: {}", title),
            _ => {}
        }
        println!();
        print!("{}", report.render_summary());
    }

    report
        .write_to(&config.output_path)
        .await
        .with_context(|| format!("Failed to write report to {}", config.output_path))?;
    tracing::info!(total = report.total_endpoints, "report written");

    if !cli.quiet {
        println!();
        println!("Report written to: {}", config.output_path);
    }
    Ok(())
}
