//! Configuration management for the Recify web front-end.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files, and bundles them into a single [`Config`]
//! object that is constructed once at startup and passed explicitly to the
//! server and the Spotify client. Nothing reads the process environment
//! after startup.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (endpoint URLs, bind address)

use std::env;

/// Default Spotify token endpoint for the client-credentials grant.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Default Spotify Web API base URL.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default address the HTTP server binds to.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Runtime configuration for the application.
///
/// Holds the Spotify API credentials, the session-signing key, the outbound
/// endpoint URLs and the server bind address. The endpoint URLs are part of
/// the configuration (rather than constants) so tests can point the client
/// at a local mock server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client ID.
    pub client_id: String,
    /// Spotify application client secret.
    pub client_secret: String,
    /// Key used to sign session data in rendered pages.
    pub secret_key: String,
    /// Token endpoint for the client-credentials grant.
    pub token_url: String,
    /// Base URL of the Spotify Web API.
    pub api_url: String,
    /// Address and port the HTTP server binds to.
    pub server_address: String,
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are not an error; in that case configuration comes from
/// the process environment alone.
pub fn load_env() {
    dotenv::dotenv().ok();
}

impl Config {
    /// Builds a [`Config`] from the process environment.
    ///
    /// The two credentials and the session key are required; endpoint URLs
    /// and the bind address fall back to the application defaults.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the first missing required variable:
    /// `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` or `SECRET_KEY`.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            client_id: require("SPOTIFY_CLIENT_ID")?,
            client_secret: require("SPOTIFY_CLIENT_SECRET")?,
            secret_key: require("SECRET_KEY")?,
            token_url: env::var("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            server_address: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string()),
        })
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}
