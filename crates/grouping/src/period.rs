//! Calendar-period codes and tagged month/season groupings.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::GroupingError;

/// Fixed calendar-period codes and their mode phrases.
const PERIOD_MODES: &[(&str, &str)] = &[
    ("year", "annual time series"),
    ("month", "monthly time series"),
    ("DJF", "winter time series"),
    ("MAM", "spring time series"),
    ("JJA", "summer time series"),
    ("SON", "autumn time series"),
    ("ONDJFM", "winter half-year time series"),
    ("AMJJAS", "summer half-year time series"),
];

/// The season part of a `season` grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeasonDescriptor {
    /// Explicit list of month numbers, rendered as a list: `[12, 1, 2]`.
    Months(Vec<u8>),
    /// Two name fragments joined together, e.g. `D` + `JF` -> `DJF`.
    ///
    /// Seasons spanning a year boundary are written this way.
    Split {
        /// Fragment taken from the first year.
        prefix: String,
        /// Fragment taken from the following year.
        suffix: String,
    },
}

impl SeasonDescriptor {
    /// Creates a split season from its two name fragments.
    pub fn split(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::Split {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl fmt::Display for SeasonDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Months(months) => write!(f, "[{}]", join_months_with(months, ", ")),
            Self::Split { prefix, suffix } => write!(f, "{prefix}{suffix}"),
        }
    }
}

/// A grouping given as a short calendar-period code or a tagged pair.
///
/// Unlike [`CalcGrouping`](crate::CalcGrouping), this representation has a
/// closed vocabulary: [`describe`](Self::describe) rejects unknown codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupingSpec {
    /// One of `year`, `month`, `DJF`, `MAM`, `JJA`, `SON`, `ONDJFM`, `AMJJAS`.
    ///
    /// Any other string is representable but fails to describe.
    Code(String),
    /// Monthly series restricted to the listed months.
    Months(Vec<u8>),
    /// Seasonal series for a custom season.
    Season(SeasonDescriptor),
}

impl GroupingSpec {
    /// Creates a [`GroupingSpec::Code`].
    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }

    /// Describes the aggregation mode.
    ///
    /// # Errors
    ///
    /// Returns [`GroupingError::Unsupported`] if a [`GroupingSpec::Code`] is
    /// not in the fixed period table.
    pub fn describe(&self) -> Result<String, GroupingError> {
        match self {
            Self::Code(code) => {
                let mode = PERIOD_MODES
                    .iter()
                    .find(|(c, _)| c == code)
                    .map(|(_, mode)| (*mode).to_string());
                match mode {
                    Some(mode) => Ok(mode),
                    None => {
                        debug!(code = %code, "unsupported period code");
                        Err(GroupingError::Unsupported { spec: code.clone() })
                    }
                }
            }
            Self::Months(months) => Ok(format!(
                "monthly time series (months: [{}])",
                join_months_with(months, ", ")
            )),
            Self::Season(season) => Ok(format!("seasonal time series (season: {season})")),
        }
    }
}

/// Renders the textual form accepted by [`FromStr`].
impl fmt::Display for GroupingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Months(months) => write!(f, "month:{}", join_months(months)),
            Self::Season(SeasonDescriptor::Months(months)) => {
                write!(f, "season:{}", join_months(months))
            }
            Self::Season(SeasonDescriptor::Split { prefix, suffix }) => {
                write!(f, "season:{prefix}+{suffix}")
            }
        }
    }
}

/// Parses `CODE`, `month:M,M,..`, `season:M,M,..` or `season:PREFIX+SUFFIX`.
///
/// Codes are not checked here; an unknown code parses and then fails in
/// [`GroupingSpec::describe`].
impl FromStr for GroupingSpec {
    type Err = GroupingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((tag, value)) = s.split_once(':') else {
            return Ok(Self::Code(s.to_string()));
        };
        match tag.trim() {
            "month" => Ok(Self::Months(parse_months(value, s)?)),
            "season" => match value.split_once('+') {
                Some((prefix, suffix)) => {
                    let (prefix, suffix) = (prefix.trim(), suffix.trim());
                    if prefix.is_empty() || suffix.is_empty() {
                        return Err(GroupingError::Unsupported {
                            spec: s.to_string(),
                        });
                    }
                    Ok(Self::Season(SeasonDescriptor::split(prefix, suffix)))
                }
                None => Ok(Self::Season(SeasonDescriptor::Months(parse_months(
                    value, s,
                )?))),
            },
            _ => Err(GroupingError::Unsupported {
                spec: s.to_string(),
            }),
        }
    }
}

/// An empty list is unsupported: its single blank item does not parse.
fn parse_months(value: &str, spec: &str) -> Result<Vec<u8>, GroupingError> {
    let unsupported = || GroupingError::Unsupported {
        spec: spec.to_string(),
    };
    value
        .split(',')
        .map(str::trim)
        .map(|item| {
            let month: i64 = item.parse().map_err(|_| unsupported())?;
            u8::try_from(month)
                .ok()
                .filter(|m| (1..=12).contains(m))
                .ok_or(GroupingError::InvalidMonth { month })
        })
        .collect()
}

fn join_months(months: &[u8]) -> String {
    join_months_with(months, ",")
}

fn join_months_with(months: &[u8], sep: &str) -> String {
    months
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_period_codes() {
        let expected = [
            ("year", "annual time series"),
            ("month", "monthly time series"),
            ("DJF", "winter time series"),
            ("MAM", "spring time series"),
            ("JJA", "summer time series"),
            ("SON", "autumn time series"),
            ("ONDJFM", "winter half-year time series"),
            ("AMJJAS", "summer half-year time series"),
        ];
        for (code, mode) in expected {
            assert_eq!(
                GroupingSpec::code(code).describe().unwrap(),
                mode,
                "code {code}"
            );
        }
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(GroupingSpec::code("djf").describe().is_err());
        assert!(GroupingSpec::code("Year").describe().is_err());
    }

    #[test]
    fn unknown_code_is_declared_error() {
        assert_eq!(
            GroupingSpec::code("XYZ").describe().unwrap_err(),
            GroupingError::Unsupported {
                spec: "XYZ".to_string()
            }
        );
    }

    #[test]
    fn months_pair() {
        let spec = GroupingSpec::Months(vec![6, 7, 8]);
        assert_eq!(
            spec.describe().unwrap(),
            "monthly time series (months: [6, 7, 8])"
        );
    }

    #[test]
    fn season_month_list() {
        let spec = GroupingSpec::Season(SeasonDescriptor::Months(vec![12, 1, 2]));
        assert_eq!(
            spec.describe().unwrap(),
            "seasonal time series (season: [12, 1, 2])"
        );
    }

    #[test]
    fn season_split_concatenates() {
        let spec = GroupingSpec::Season(SeasonDescriptor::split("D", "JF"));
        assert_eq!(
            spec.describe().unwrap(),
            "seasonal time series (season: DJF)"
        );
    }

    #[test]
    fn parse_code() {
        assert_eq!(
            "DJF".parse::<GroupingSpec>().unwrap(),
            GroupingSpec::code("DJF")
        );
    }

    #[test]
    fn parse_unknown_code_defers_error() {
        let spec: GroupingSpec = "XYZ".parse().unwrap();
        assert!(spec.describe().is_err());
    }

    #[test]
    fn parse_month_tag() {
        assert_eq!(
            "month:6, 7,8".parse::<GroupingSpec>().unwrap(),
            GroupingSpec::Months(vec![6, 7, 8])
        );
    }

    #[test]
    fn parse_season_list() {
        assert_eq!(
            "season:12,1,2".parse::<GroupingSpec>().unwrap(),
            GroupingSpec::Season(SeasonDescriptor::Months(vec![12, 1, 2]))
        );
    }

    #[test]
    fn parse_season_split() {
        assert_eq!(
            "season:D+JF".parse::<GroupingSpec>().unwrap(),
            GroupingSpec::Season(SeasonDescriptor::split("D", "JF"))
        );
    }

    #[test]
    fn parse_season_split_rejects_empty_fragment() {
        for text in ["season:+", "season:D+", "season:+JF", "season: D + "] {
            assert_eq!(
                text.parse::<GroupingSpec>().unwrap_err(),
                GroupingError::Unsupported {
                    spec: text.trim().to_string()
                },
                "spec {text:?}"
            );
        }
    }

    #[test]
    fn parse_empty_month_list() {
        for text in ["month:", "season:"] {
            assert_eq!(
                text.parse::<GroupingSpec>().unwrap_err(),
                GroupingError::Unsupported {
                    spec: text.to_string()
                }
            );
        }
    }

    #[test]
    fn parse_unknown_tag() {
        assert_eq!(
            "week:1,2".parse::<GroupingSpec>().unwrap_err(),
            GroupingError::Unsupported {
                spec: "week:1,2".to_string()
            }
        );
    }

    #[test]
    fn parse_month_out_of_range() {
        assert_eq!(
            "month:0,13".parse::<GroupingSpec>().unwrap_err(),
            GroupingError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            "season:11,12,13".parse::<GroupingSpec>().unwrap_err(),
            GroupingError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn parse_non_numeric_month() {
        assert!(matches!(
            "month:jun".parse::<GroupingSpec>(),
            Err(GroupingError::Unsupported { .. })
        ));
    }

    #[test]
    fn display_matches_parse_form() {
        for text in ["SON", "month:6,7,8", "season:12,1,2", "season:D+JF"] {
            let spec: GroupingSpec = text.parse().unwrap();
            assert_eq!(spec.to_string(), text);
        }
    }
}
