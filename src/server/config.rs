use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Number of demo students to seed on startup, if any.
    pub seed_students: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address: SocketAddr = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let seed_students = lookup("SEED_STUDENTS")
            .map(|value| {
                value
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        name: "SEED_STUDENTS".to_string(),
                        reason: e.to_string(),
                    })
            })
            .transpose()?;

        Ok(Self {
            database_url,
            bind_address,
            seed_students,
        })
    }
}
