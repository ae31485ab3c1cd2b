//! CLI command definitions and dispatch for the `folio` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod chat;
pub mod check;
pub mod context;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Serve a portfolio site with a grounded AI chat assistant.
#[derive(Parser)]
#[command(name = "folio", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to folio.toml (overrides $FOLIO_CONFIG and the default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter derived from `-v` / `--quiet`.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,folio=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (page, assets and JSON API).
    Serve {
        /// Port to listen on (default from config).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (default from config).
        #[arg(long)]
        host: Option<String>,
    },

    /// Ask the assistant a single question.
    Ask {
        /// The question, as typed by a visitor.
        question: String,
    },

    /// Chat with the assistant in the terminal.
    Chat,

    /// Print the system instruction sent with every question.
    Context,

    /// Validate config and content, and report whether the API key is set.
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve_with_overrides() {
        let cli = Cli::try_parse_from(["folio", "serve", "--port", "8080", "--host", "0.0.0.0"]).unwrap();
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn parse_ask_with_global_flags() {
        let cli = Cli::try_parse_from(["folio", "ask", "Where are you based?", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Ask { ref question } if question == "Where are you based?"));
    }

    #[test]
    fn log_filter_follows_verbosity() {
        let quiet = Cli::try_parse_from(["folio", "check", "--quiet"]).unwrap();
        assert_eq!(quiet.log_filter(), "error");
        let verbose = Cli::try_parse_from(["folio", "check", "-v"]).unwrap();
        assert_eq!(verbose.log_filter(), "info,folio=debug");
    }

    #[test]
    fn config_flag_is_a_path() {
        let cli = Cli::try_parse_from(["folio", "--config", "/etc/folio.toml", "context"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/folio.toml")));
    }
}
