//! Validate command - check version strings against the SemVer grammar.

use anyhow::Result;
use clap::Args;
use console::style;
use vercmp_semver::VersionParser;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Version strings to validate
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,
}

pub fn execute(args: ValidateArgs) -> Result<i32> {
    let mut invalid = 0;

    for version in &args.versions {
        if VersionParser::is_valid(version) {
            println!("{} {}", style("valid").green(), version);
        } else {
            invalid += 1;
            println!("{} {}", style("invalid").red().bold(), version);
        }
    }

    log::debug!("{} of {} versions invalid", invalid, args.versions.len());
    Ok(if invalid == 0 { 0 } else { 1 })
}
