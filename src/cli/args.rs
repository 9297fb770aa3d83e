//! CLI argument definitions using clap
//!
//! Commands:
//! - doorbase serve [--port <port>] [--db <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// doorbase - a small self-hostable CRUD service for door records
#[derive(Parser, Debug)]
#[command(name = "doorbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides DOORBASE_PORT; default 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Path of the JSON file holding the records (overrides DOORBASE_DB)
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_parses_flags() {
        let cli = Cli::try_parse_from(["doorbase", "serve", "--port", "9000", "--db", "x.json"])
            .unwrap();
        match cli.command {
            Command::Serve { port, db } => {
                assert_eq!(port, Some(9000));
                assert_eq!(db, Some(PathBuf::from("x.json")));
            }
        }
    }

    #[test]
    fn test_serve_flags_are_optional() {
        let cli = Cli::try_parse_from(["doorbase", "serve"]).unwrap();
        match cli.command {
            Command::Serve { port, db } => {
                assert_eq!(port, None);
                assert_eq!(db, None);
            }
        }
    }
}
