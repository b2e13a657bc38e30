//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zipdir")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Package a directory into a ZIP archive
    Create(CreateArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Output archive file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Directory to package
    #[arg(value_name = "SOURCE_DIR")]
    pub source: PathBuf,

    /// Only archive files directly inside SOURCE_DIR
    #[arg(long)]
    pub no_recursive: bool,

    /// Create missing parent directories of OUTPUT
    #[arg(short = 'p', long)]
    pub parents: bool,

    /// Overwrite output file if exists
    #[arg(short = 'f', long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_defaults() {
        let cli = Cli::try_parse_from(["zipdir", "create", "out.zip", "src"]).unwrap();
        let Commands::Create(args) = cli.command else {
            panic!("expected create command");
        };
        assert_eq!(args.output, PathBuf::from("out.zip"));
        assert_eq!(args.source, PathBuf::from("src"));
        assert!(!args.no_recursive);
        assert!(!args.parents);
        assert!(!args.force);
    }

    #[test]
    fn test_parse_create_flags() {
        let cli = Cli::try_parse_from([
            "zipdir",
            "--json",
            "create",
            "--no-recursive",
            "-p",
            "-f",
            "out.zip",
            "src",
        ])
        .unwrap();
        assert!(cli.json);
        let Commands::Create(args) = cli.command else {
            panic!("expected create command");
        };
        assert!(args.no_recursive);
        assert!(args.parents);
        assert!(args.force);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["zipdir", "-v", "-q", "create", "out.zip", "src"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_requires_source() {
        let result = Cli::try_parse_from(["zipdir", "create", "out.zip"]);
        assert!(result.is_err());
    }
}
