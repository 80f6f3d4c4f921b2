//! Compare command - print the precedence relation between two versions.

use anyhow::{Context, Result};
use clap::Args;
use std::cmp::Ordering;
use vercmp_semver::{Comparator, Operator, Version};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "VERSION1")]
    pub version1: String,

    /// Right-hand version
    #[arg(value_name = "VERSION2")]
    pub version2: String,

    #[arg(long, value_name = "OP", help = op_help())]
    pub op: Option<Operator>,
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    let v1 = Version::parse(&args.version1).context("Failed to parse VERSION1")?;
    let v2 = Version::parse(&args.version2).context("Failed to parse VERSION2")?;

    match args.op {
        Some(op) => {
            let holds = Comparator::satisfies_operator(&v1, op, &v2);
            log::debug!("{} {} {} is {}", v1, op, v2, holds);
            println!("{}", holds);
            Ok(if holds { 0 } else { 1 })
        }
        None => {
            println!("{}", ordering_symbol(Comparator::compare(&v1, &v2)));
            Ok(0)
        }
    }
}

fn op_help() -> String {
    format!(
        "Evaluate `VERSION1 OP VERSION2` instead of printing the relation ({})",
        Operator::supported_operators().join(", ")
    )
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
