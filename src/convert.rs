//! Conversions from CLI arguments to library types.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use ecattrs_grouping::{CalcGrouping, DateRange, DescribeMode, GroupingSpec};

use crate::cli::GroupingArgs;

/// Builds the grouping selected by `--grouping` / `--structured`.
///
/// Token lists never fail to parse. Period specs fail here only for a bad
/// tag or month; an unknown period code fails later, when described.
pub fn build_grouping(args: &GroupingArgs) -> Result<Box<dyn DescribeMode>> {
    if args.structured {
        let mut grouping: CalcGrouping = args.grouping.parse()?;
        if let Some(hint) = &args.mode_hint {
            grouping = grouping.with_mode_hint(hint.as_str());
        }
        return Ok(Box::new(grouping));
    }
    let spec: GroupingSpec = args
        .grouping
        .parse()
        .with_context(|| format!("invalid grouping: {:?}", args.grouping))?;
    Ok(Box::new(spec))
}

/// Builds the calculation period.
pub fn build_range(start: NaiveDate, end: NaiveDate) -> Result<DateRange> {
    DateRange::new(start, end).context("invalid --start/--end")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(grouping: &str, structured: bool, mode_hint: Option<&str>) -> GroupingArgs {
        GroupingArgs {
            grouping: grouping.to_string(),
            structured,
            mode_hint: mode_hint.map(str::to_string),
        }
    }

    #[test]
    fn period_code() {
        let grouping = build_grouping(&args("SON", false, None)).unwrap();
        assert_eq!(grouping.describe_mode().unwrap(), "autumn time series");
    }

    #[test]
    fn unknown_code_parses_but_fails_to_describe() {
        let grouping = build_grouping(&args("XYZ", false, None)).unwrap();
        assert!(grouping.describe_mode().is_err());
    }

    #[test]
    fn bad_month_fails_to_parse() {
        let err = build_grouping(&args("month:13", false, None)).err().unwrap();
        assert!(format!("{err:#}").contains("invalid month: 13"));
    }

    #[test]
    fn structured_tokens() {
        let grouping = build_grouping(&args("month,year", true, None)).unwrap();
        assert_eq!(grouping.describe_mode().unwrap(), "monthly time series");
    }

    #[test]
    fn structured_with_hint() {
        let grouping = build_grouping(&args("year", true, Some("winter season"))).unwrap();
        assert_eq!(grouping.describe_mode().unwrap(), "winter season");
    }

    #[test]
    fn reversed_range() {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        assert!(build_range(start, end).is_err());
        assert!(build_range(end, start).is_ok());
    }
}
