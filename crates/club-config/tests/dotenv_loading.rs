//! `.env` values flow through the full provider chain of `load_with_dotenv`.
//!
//! `dotenvy` writes into the process environment, which `figment::Jail` does
//! not restore, so this file holds a single test and runs as its own binary.

use club_config::{ClubConfig, TOKEN_ENV_VAR};
use figment::Jail;

#[test]
fn dotenv_file_fills_credential_without_overriding_real_env() {
    if std::env::var_os(TOKEN_ENV_VAR).is_some() {
        eprintln!("SKIP: {TOKEN_ENV_VAR} already set in the environment");
        return;
    }

    Jail::expect_with(|jail| {
        jail.set_env("CLUBSTATS_API__BASE_URL", "http://127.0.0.1:9000/api");
        jail.create_file(
            ".env",
            "NCFA_TOKEN=from-dotenv\n\
             CLUBSTATS_API__BASE_URL=http://ignored.example/api\n",
        )?;

        let config = ClubConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.api.ncfa_token, "from-dotenv");
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api");
        Ok(())
    });
}
