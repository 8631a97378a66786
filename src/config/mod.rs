//! Application configuration management

use std::env;

use anyhow::{Context, Result};

/// Deployment environment, from APP_ENV.
///
/// Demo-data seeding is only ever considered in development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        matches!(self, Environment::Development)
    }

    fn from_env() -> Self {
        match env::var("APP_ENV").ok().as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// MongoDB connection string
    pub mongodb_uri: String,

    /// MongoDB database name
    pub mongodb_database: String,

    /// Deployment environment
    pub environment: Environment,

    /// Seed the demo catalog at startup (development only, empty collection only)
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .context("Invalid PORT")?,

            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),

            mongodb_database: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "bookstore".to_string()),

            environment: Environment::from_env(),

            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}
