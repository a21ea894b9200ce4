//! Recify Web Front-End Library
//!
//! This library implements a minimal web front-end that forwards user-entered
//! search queries to the Spotify Web API and renders the matching tracks. It
//! includes modules for the HTTP server surface, the outbound Spotify client,
//! configuration management, and HTML rendering.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the inbound web surface
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy for the search flow
//! - `server` - HTTP server setup and routing
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Query assembly helpers
//! - `view` - HTML page rendering

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod view;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// such as missing configuration at startup.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues that don't require program termination, such as
/// rate-limit waits during catalog requests.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
