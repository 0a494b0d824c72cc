//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gembot")]
#[command(about = "Gemini-backed Telegram study assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Also serve the health endpoint in this process.
        #[arg(long)]
        health: bool,
    },
    /// Serve the health endpoint and keep `gembot run` alive as a child process.
    Serve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_flags() {
        let cli = Cli::parse_from(["gembot", "run", "--token", "abc", "--health"]);
        assert_eq!(
            cli.command,
            Commands::Run {
                token: Some("abc".to_string()),
                health: true
            }
        );
    }

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::parse_from(["gembot", "run"]);
        assert_eq!(
            cli.command,
            Commands::Run {
                token: None,
                health: false
            }
        );
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["gembot", "serve"]);
        assert_eq!(cli.command, Commands::Serve);
    }
}
