//! CLI module for primer
//!
//! Each subcommand runs one snippet:
//! - `hello`: print Hello World
//! - `greet`: print a welcome message
//! - `sums`: print integer and float map sums
//! - `reverse`: print text reversed by character
//! - `serve`: run the album API

pub mod serve;
pub mod snippets;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Primer - small runnable snippets
#[derive(Parser)]
#[command(name = "primer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print "Hello, World!"
    Hello,

    /// Print a welcome message for NAME
    Greet {
        /// Name to greet
        name: String,
    },

    /// Sum integer and float map values with and without generics
    Sums,

    /// Reverse TEXT character by character
    Reverse {
        /// Text to reverse
        text: String,
    },

    /// Run the album API server
    Serve,
}

/// Load `.env` and configuration, then install logging
pub fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    config
}
