//! CLI argument parsing

use clap::{Parser, Subcommand};

/// Voice-guided deep narrative analysis session
#[derive(Debug, Parser)]
#[command(name = "dna", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Run without audio hardware (silent capture adapter)
    #[arg(long)]
    pub silent: bool,

    /// Directory the final report is written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Milliseconds between turns, before the next prompt plays
    #[arg(long, value_name = "MS")]
    pub settle_delay_ms: Option<u64>,

    /// Skip writing the report file at the end of the session
    #[arg(long)]
    pub no_export: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the prompt catalog
    Prompts,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_session_flags() {
        let cli = Cli::parse_from([
            "dna",
            "--silent",
            "--output-dir",
            "/tmp/reports",
            "--settle-delay-ms",
            "250",
        ]);
        assert!(cli.silent);
        assert_eq!(cli.output_dir.as_deref(), Some("/tmp/reports"));
        assert_eq!(cli.settle_delay_ms, Some(250));
        assert!(!cli.no_export);
    }

    #[test]
    fn parses_prompts_subcommand() {
        let cli = Cli::parse_from(["dna", "prompts"]);
        assert!(matches!(cli.command, Some(Commands::Prompts)));
    }

    #[test]
    fn parses_config_subcommand() {
        let cli = Cli::parse_from(["dna", "config", "path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Path
            })
        ));
    }
}
