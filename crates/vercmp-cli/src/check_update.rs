//! Check-update command - decide whether a remote version supersedes the running one.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use vercmp_semver::{check_update, UpdateStatus};

use crate::config::VercmpConfig;

#[derive(Args, Debug)]
pub struct CheckUpdateArgs {
    /// Version published remotely
    #[arg(value_name = "REMOTE")]
    pub remote: String,

    /// Running version (defaults to update.current in vercmp.toml, then to this binary's version)
    #[arg(long, value_name = "VERSION")]
    pub current: Option<String>,
}

pub fn execute(args: CheckUpdateArgs, config: Option<&VercmpConfig>) -> Result<i32> {
    let current = resolve_current(args.current.as_deref(), config);
    log::debug!("Checking {} against running version {}", args.remote, current);

    let status = check_update(&current, &args.remote)
        .with_context(|| format!("Cannot check for updates against \"{}\"", args.remote))?;

    match status {
        UpdateStatus::Available(remote) => {
            println!("{} {}", style("update available:").green().bold(), remote);
        }
        UpdateStatus::UpToDate => {
            println!("no update");
        }
    }

    Ok(0)
}

/// Pick the running version: CLI flag, then config, then the package version
fn resolve_current(flag: Option<&str>, config: Option<&VercmpConfig>) -> String {
    flag.map(str::to_string)
        .or_else(|| config.and_then(|c| c.update.current.clone()))
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
}
