//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

pub fn load_config() -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 8080)?
        // Load from folio.toml if it exists
        .add_source(::config::File::with_name("folio").required(false))
        // Override with environment variables (FOLIO_PORT, etc.)
        .add_source(
            ::config::Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
