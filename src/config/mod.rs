//! Application configuration management

use std::env;

use anyhow::{Context, Result};

use crate::store::SeedConfig;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host (for generating URLs)
    pub host: Option<String>,

    /// Server port
    pub port: u16,

    /// Catalog seed parameters
    pub seed: SeedConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = SeedConfig::default();

        Ok(Self {
            host: env::var("HOST").ok(),

            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .context("Invalid PORT")?,

            seed: SeedConfig {
                authors: env::var("SEED_AUTHORS")
                    .ok()
                    .map(|v| v.parse().context("Invalid SEED_AUTHORS"))
                    .transpose()?
                    .unwrap_or(defaults.authors),

                publishers: env::var("SEED_PUBLISHERS")
                    .ok()
                    .map(|v| v.parse().context("Invalid SEED_PUBLISHERS"))
                    .transpose()?
                    .unwrap_or(defaults.publishers),

                books: env::var("SEED_BOOKS")
                    .ok()
                    .map(|v| v.parse().context("Invalid SEED_BOOKS"))
                    .transpose()?
                    .unwrap_or(defaults.books),

                rng_seed: env::var("SEED_RNG")
                    .ok()
                    .map(|v| v.parse().context("Invalid SEED_RNG"))
                    .transpose()?,
            },
        })
    }
}
