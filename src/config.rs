//! Connection-string resolution for the examples and their tests.
//!
//! In CI (`CI=true`) the connection string comes from the `CONNECTION_URI`
//! environment variable. Otherwise it is read from the
//! `MONGODB_CONNECTION_URI` key of a local `.env` file (or the process
//! environment), falling back to a local deployment.

use std::env;

const DEFAULT_URI: &str = "mongodb://localhost:27017";

/// Resolved example configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub connection_uri: String,
}

/// Resolves the connection string for the current environment.
pub fn load() -> Config {
    if env::var("CI").as_deref() == Ok("true") {
        let connection_uri = env::var("CONNECTION_URI").unwrap_or_else(|_| {
            tracing::warn!("CI is set but CONNECTION_URI is not; using {}", DEFAULT_URI);
            DEFAULT_URI.to_string()
        });
        return Config { connection_uri };
    }

    // Populates the process environment from a `.env` file, if one exists.
    dotenvy::dotenv().ok();
    let connection_uri =
        env::var("MONGODB_CONNECTION_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());
    tracing::debug!(uri = %connection_uri, "resolved connection string");
    Config { connection_uri }
}
