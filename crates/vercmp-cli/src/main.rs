mod check_update;
mod compare;
mod config;
mod require;
mod sort;
mod validate;

use config::VercmpConfig;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "vercmp")]
#[command(version, about = "Validate and compare Semantic Versioning 2.0.0 versions")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Config file (defaults to the nearest vercmp.toml above the working directory)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check version strings against the SemVer grammar
    Validate(validate::ValidateArgs),

    /// Compare two versions by precedence
    Compare(compare::CompareArgs),

    /// Print versions in precedence order
    Sort(sort::SortArgs),

    /// Report whether a remote version is newer than the running one
    CheckUpdate(check_update::CheckUpdateArgs),

    /// Fail when a version is below the required minimum
    Require(require::RequireArgs),
}

fn init_logger(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(path: Option<&Path>) -> Result<Option<VercmpConfig>> {
    match path {
        Some(path) => VercmpConfig::load_file(path).map(Some),
        None => VercmpConfig::load_from_cwd(),
    }
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose, args.quiet);

    match args.command {
        Commands::Validate(validate_args) => validate::execute(validate_args),
        Commands::Compare(compare_args) => compare::execute(compare_args),
        Commands::Sort(sort_args) => sort::execute(sort_args),
        Commands::CheckUpdate(check_args) => {
            let config = load_config(args.config.as_deref())?;
            check_update::execute(check_args, config.as_ref())
        }
        Commands::Require(require_args) => {
            let config = load_config(args.config.as_deref())?;
            require::execute(require_args, config.as_ref())
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_compare_with_operator() {
        let args = Args::try_parse_from(["vercmp", "compare", "1.0.0", "2.0.0", "--op", "<="]).unwrap();
        match args.command {
            Commands::Compare(c) => assert_eq!(c.op, Some(vercmp_semver::Operator::LessThanOrEqual)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_operator() {
        assert!(Args::try_parse_from(["vercmp", "compare", "1.0.0", "2.0.0", "--op", "~"]).is_err());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["vercmp", "sort", "-r", "1.0.0", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Commands::Sort(ref s) if s.reverse));
    }
}
