use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::{DEFAULT_BIND, DEFAULT_DATABASE};

#[derive(Parser, Debug)]
#[command(name = "noteful")]
#[command(version, about = "REST API for folders and notes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Ignored when RUST_LOG is set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database file and its tables, then exit
    Init {
        /// SQLite database file
        #[arg(long, env = "NOTEFUL_DATABASE", default_value = DEFAULT_DATABASE)]
        database: PathBuf,
    },

    /// Serve the folders and notes API
    Serve {
        /// Address to listen on
        #[arg(long, env = "NOTEFUL_BIND", default_value = DEFAULT_BIND)]
        bind: SocketAddr,

        /// SQLite database file (":memory:" for a throwaway store)
        #[arg(long, env = "NOTEFUL_DATABASE", default_value = DEFAULT_DATABASE)]
        database: PathBuf,

        /// Origin allowed to call the API from a browser (any origin if unset)
        #[arg(long, env = "NOTEFUL_CORS_ORIGIN")]
        cors_origin: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["noteful", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { bind, .. } => assert_eq!(bind.to_string(), DEFAULT_BIND),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "noteful",
            "-v",
            "serve",
            "--bind",
            "0.0.0.0:9090",
            "--database",
            "/tmp/notes.db",
            "--cors-origin",
            "http://localhost:3000",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Serve {
                bind,
                database,
                cors_origin,
            } => {
                assert_eq!(bind.port(), 9090);
                assert_eq!(database, PathBuf::from("/tmp/notes.db"));
                assert_eq!(cors_origin.as_deref(), Some("http://localhost:3000"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
