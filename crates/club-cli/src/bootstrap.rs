use anyhow::Context;
use club_config::ClubConfig;

use crate::cli::Cli;

/// Load `.env`, config files and environment, apply CLI overrides, then
/// validate the merged result once.
pub fn load_config(cli: &Cli) -> anyhow::Result<ClubConfig> {
    let config = ClubConfig::extract_with_dotenv().context("failed to load configuration")?;
    apply_overrides(config, cli)
}

fn apply_overrides(mut config: ClubConfig, cli: &Cli) -> anyhow::Result<ClubConfig> {
    if let Some(output) = &cli.output {
        config.export.output.clone_from(output);
    }
    if let Some(throttle_ms) = cli.throttle_ms {
        config.export.throttle_ms = throttle_ms;
    }
    if let Some(base_url) = &cli.base_url {
        config.api.base_url.clone_from(base_url);
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}
