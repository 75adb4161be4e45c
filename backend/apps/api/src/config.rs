//! Process Configuration
//!
//! Read once from the environment at startup. Missing required values are
//! fatal and stop the process before it binds a port.

use anyhow::{Context, bail};
use auth::AuthConfig;
use std::env;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub auth: AuthConfig,
    pub port: u16,
    /// CORS allow-list
    pub frontend_origins: Vec<String>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let secret = lookup("JWT_SECRET").context("JWT_SECRET must be set")?;
        if secret.is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        let mut auth = AuthConfig::new(secret);
        if let Some(pepper) = lookup("PASSWORD_PEPPER").filter(|p| !p.is_empty()) {
            auth = auth.with_pepper(pepper);
        }

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            database_url,
            auth,
            port,
            frontend_origins,
        })
    }
}
