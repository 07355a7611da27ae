//! Command-line interface definition.

use std::path::PathBuf;

use br_common::OutputFormat;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Bayesian reasoning over a discrete hypothesis space.
#[derive(Parser, Debug)]
#[command(name = "br-core", version, about)]
pub struct Cli {
    /// Output format for reports
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List configuration files in a directory, with the index `run --index` expects
    List {
        /// Directory to scan
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Compute marginals, posteriors and joint posteriors for a configuration
    Run(RunArgs),
    /// Check a configuration file and report warnings
    Validate {
        /// Configuration file (YAML or JSON)
        config: PathBuf,
    },
    /// Print the embedded example configuration
    Example,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file (YAML or JSON)
    #[arg(conflicts_with_all = ["index", "example"])]
    pub config: Option<PathBuf>,

    /// Directory searched when selecting by --index
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Use the N-th file listed by `list --dir`
    #[arg(long, conflicts_with = "example")]
    pub index: Option<usize>,

    /// Use the embedded example configuration
    #[arg(long)]
    pub example: bool,

    /// Fact indices for a joint posterior, e.g. "0 2" (repeatable)
    #[arg(long = "facts", value_name = "INDICES")]
    pub facts: Vec<String>,

    /// Decimal digits kept in joint posteriors
    #[arg(long, default_value_t = 5)]
    pub precision: u32,

    /// Prompt for fact selections on stdin until an empty line
    #[arg(long)]
    pub interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_facts() {
        let cli = Cli::try_parse_from([
            "br-core", "run", "--example", "--facts", "0 1", "--facts", "2", "--precision", "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert!(args.example);
                assert_eq!(args.facts, vec!["0 1", "2"]);
                assert_eq!(args.precision, 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn path_conflicts_with_index() {
        assert!(Cli::try_parse_from(["br-core", "run", "a.yaml", "--index", "0"]).is_err());
    }

    #[test]
    fn global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["br-core", "example", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
