use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cfgate")]
#[command(about = "Configuration store with secret redaction", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration document to serve (default from cfgate.toml)
    #[arg(long, global = true, env = "CFGATE_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP config server
    Serve {
        #[arg(long)]
        port: Option<u16>,

        #[arg(long)]
        host: Option<String>,

        /// Reject every write request
        #[arg(long)]
        read_only: bool,
    },

    /// Print the configuration with secrets masked
    Show {
        /// Only print this section
        section: Option<String>,
    },

    /// Write a default configuration document
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["cfgate", "serve", "--port", "9000", "--read-only"]);
        match cli.command {
            Commands::Serve {
                port,
                host,
                read_only,
            } => {
                assert_eq!(port, Some(9000));
                assert!(host.is_none());
                assert!(read_only);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_show_with_global_store() {
        let cli = Cli::parse_from(["cfgate", "show", "providers", "--store", "/tmp/c.json"]);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/c.json")));
        assert!(matches!(
            cli.command,
            Commands::Show { section: Some(ref s) } if s == "providers"
        ));
    }
}
