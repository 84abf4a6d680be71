//! AWA to Spotify Playlist Porter Library
//!
//! This library provides the building blocks for porting a playlist hosted on
//! AWA over to Spotify: scraping the source page, resolving each track against
//! the Spotify catalog search, and creating or extending a Spotify playlist.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for scraping and Spotify API access
//! - `scrape` - AWA playlist page fetching and extraction
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod cli;
pub mod config;
pub mod error;
pub mod scrape;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program
/// with status 1. Only for unrecoverable errors.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark. Used for
/// recoverable issues the user should notice, like a track that could not
/// be resolved.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a diagnostic message when the `DEBUG` environment variable is set
/// to any non-empty value. Used for intermediate HTTP payloads and extracted
/// fields.
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if $crate::config::is_debug() {
      use colored::Colorize;
      println!("[{}] {}", "d".dimmed(), std::format_args!($($arg)*));
    }
  })
}
