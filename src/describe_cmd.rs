//! Describe and indices commands: inspect groupings and the index table.

use anyhow::Result;

use ecattrs_indices::known_indices;

use crate::cli::DescribeArgs;
use crate::convert;

/// Print the mode phrase for a grouping.
pub fn run(args: DescribeArgs) -> Result<()> {
    let grouping = convert::build_grouping(&args.grouping)?;
    println!("{}", grouping.describe_mode()?);
    Ok(())
}

/// Print every known index identifier with its group.
pub fn list_indices() -> Result<()> {
    for (index, group) in known_indices() {
        println!("{index:<8} {group}");
    }
    Ok(())
}
