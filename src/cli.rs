use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

/// Metadata attributes for ECA climate-index output files.
#[derive(Parser)]
#[command(
    name = "ecattrs",
    version,
    about = "Metadata attributes for ECA climate-index output files"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Write global and variable attributes for one index.
    Annotate(AnnotateArgs),
    /// Print the mode phrase for a temporal grouping.
    Describe(DescribeArgs),
    /// List known index identifiers and their groups.
    Indices,
}

/// How the `--grouping` value should be read.
#[derive(clap::Args, Debug, Clone)]
pub struct GroupingArgs {
    /// Grouping: a period code (`DJF`), `month:6,7,8`, `season:12,1,2`,
    /// `season:D+JF`, or with `--structured` a token list (`year,month`).
    #[arg(short, long)]
    pub grouping: String,

    /// Read `--grouping` as a token list; unknown shapes are described literally.
    #[arg(long)]
    pub structured: bool,

    /// Mode phrase to use verbatim (token lists only).
    #[arg(long, requires = "structured")]
    pub mode_hint: Option<String>,
}

/// Arguments for the `annotate` subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct AnnotateArgs {
    /// Path to TOML configuration file. `ecattrs.toml` is used if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Index identifier, e.g. `SU`.
    #[arg(short, long)]
    pub index: String,

    #[command(flatten)]
    pub grouping: GroupingArgs,

    /// First day of the calculation period (YYYY-MM-DD).
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of the calculation period (YYYY-MM-DD).
    #[arg(long)]
    pub end: NaiveDate,

    /// User-defined threshold in degrees Celsius (SU, CSU and TR only).
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Override the institution from config.
    #[arg(long)]
    pub institution: Option<String>,

    /// Existing attribute document (JSON); its history is appended to.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output JSON path. Printed to stdout if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Timestamp for the history entry (YYYY-MM-DDTHH:MM:SS). Defaults to local time.
    #[arg(long)]
    pub now: Option<NaiveDateTime>,
}

/// Arguments for the `describe` subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub grouping: GroupingArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe_grouping(args: &[&str]) -> GroupingArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Describe(d) => d.grouping,
            _ => panic!("expected describe"),
        }
    }

    #[test]
    fn grouping_flags_default_from_clap() {
        let g = describe_grouping(&["ecattrs", "describe", "--grouping", "DJF"]);
        assert_eq!(g.grouping, "DJF");
        assert!(!g.structured);
        assert_eq!(g.mode_hint, None);
    }

    #[test]
    fn grouping_is_required() {
        assert!(Cli::try_parse_from(["ecattrs", "describe"]).is_err());
    }

    #[test]
    fn mode_hint_requires_structured() {
        let res = Cli::try_parse_from([
            "ecattrs",
            "describe",
            "--grouping",
            "year",
            "--mode-hint",
            "annual",
        ]);
        assert!(res.is_err());
        let g = describe_grouping(&[
            "ecattrs",
            "describe",
            "--grouping",
            "year",
            "--structured",
            "--mode-hint",
            "annual",
        ]);
        assert_eq!(g.mode_hint.as_deref(), Some("annual"));
    }
}
