//! Sort command - print versions in precedence order.

use anyhow::Result;
use clap::Args;
use vercmp_semver::{Comparator, Version};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Sort from highest to lowest precedence
    #[arg(short, long)]
    pub reverse: bool,

    /// Versions to sort
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,
}

pub fn execute(args: SortArgs) -> Result<i32> {
    for version in sorted(&args) {
        println!("{}", version);
    }
    Ok(0)
}

fn sorted(args: &SortArgs) -> Vec<String> {
    let mut parsed: Vec<Version> = args
        .versions
        .iter()
        .filter_map(|v| match Version::parse(v) {
            Ok(version) => Some(version),
            Err(e) => {
                log::warn!("Skipping invalid input: {}", e);
                None
            }
        })
        .collect();

    // Stable sort keeps input order among equal-precedence versions
    parsed.sort_by(|a, b| {
        let cmp = Comparator::compare(a, b);
        if args.reverse {
            cmp.reverse()
        } else {
            cmp
        }
    });

    parsed.into_iter().map(|v| v.raw().to_string()).collect()
}
