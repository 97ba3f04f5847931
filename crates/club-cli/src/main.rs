use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod error;
mod pipeline;
#[cfg(test)]
mod test_support;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("clubstats error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;
    let client = club_api::ClubClient::new(&config.api, cli.token.as_deref())
        .context("failed to initialize API client")?;

    let options = pipeline::RunOptions::new(&config, cli.club_id.clone(), cli.quiet);
    let summary = pipeline::run(&client, &options).await?;
    tracing::info!(
        club_id = %summary.club_id,
        exported = summary.exported,
        output = %summary.output.display(),
        "export complete"
    );
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CLUBSTATS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
