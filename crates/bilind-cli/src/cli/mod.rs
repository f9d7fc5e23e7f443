use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `bilind` binary.
#[derive(Debug, Parser)]
#[command(
    name = "bilind",
    version,
    about = "Bilind - per-wall quantity take-off from room totals"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file, layered over the discovered ones
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "bilind",
            "--format",
            "table",
            "--verbose",
            "breakdown",
            "villa.json",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        let Commands::Breakdown(args) = cli.command else {
            panic!("expected breakdown");
        };
        assert_eq!(args.project.to_str(), Some("villa.json"));
        assert_eq!(args.room, None);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bilind",
            "books",
            "villa.json",
            "--room",
            "Hall",
            "--format",
            "raw",
            "--quiet",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        let Commands::Books(args) = cli.command else {
            panic!("expected books");
        };
        assert_eq!(args.room.as_deref(), Some("Hall"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["bilind", "--format", "xml", "schema"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn allocate_takes_value_lists() {
        let cli = Cli::try_parse_from([
            "bilind", "allocate", "--total", "10", "--weights", "0", "0", "--caps", "5", "1,5e1",
        ])
        .expect("cli should parse");

        let Commands::Allocate(args) = cli.command else {
            panic!("expected allocate");
        };
        assert_eq!(args.total, "10");
        assert_eq!(args.weights, vec!["0", "0"]);
        assert_eq!(args.caps, vec!["5", "1,5e1"]);
    }

    #[test]
    fn allocate_requires_caps() {
        let parsed = Cli::try_parse_from(["bilind", "allocate", "--total", "10"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["bilind", "--config", "/tmp/bilind.toml", "schema"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(
            flags.config.as_deref().and_then(|p| p.to_str()),
            Some("/tmp/bilind.toml")
        );
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
