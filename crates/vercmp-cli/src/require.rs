//! Require command - fail when a version is below a declared minimum.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use console::style;
use vercmp_semver::{Comparator, Version};

use crate::config::VercmpConfig;

#[derive(Args, Debug)]
pub struct RequireArgs {
    /// Version to check
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Lowest acceptable version (defaults to require.minimum in vercmp.toml)
    #[arg(long, value_name = "VERSION")]
    pub minimum: Option<String>,
}

pub fn execute(args: RequireArgs, config: Option<&VercmpConfig>) -> Result<i32> {
    let minimum = args
        .minimum
        .as_deref()
        .or_else(|| config.and_then(|c| c.require.minimum.as_deref()))
        .ok_or_else(|| anyhow!("No minimum version given; pass --minimum or set require.minimum in vercmp.toml"))?;

    let minimum = Version::parse(minimum).context("Failed to parse minimum version")?;
    let version = Version::parse(&args.version).context("Failed to parse version")?;

    if meets_minimum(&version, &minimum) {
        println!("{} {} (minimum {})", style("ok").green(), version, minimum);
        Ok(0)
    } else {
        eprintln!(
            "{} {} is below the required minimum {}",
            style("Error:").red().bold(),
            version,
            minimum
        );
        Ok(1)
    }
}

fn meets_minimum(version: &Version, minimum: &Version) -> bool {
    Comparator::greater_than_or_equal_to(version, minimum)
}
