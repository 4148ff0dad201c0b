//! Token-list groupings, optionally carrying a declared mode hint.

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// One element of a grouping token list: a period name or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupingToken {
    /// A period unit such as `year`, `month` or `day`.
    Name(String),
    /// A bare number, e.g. a month index.
    Number(i64),
}

impl GroupingToken {
    /// Returns `true` if this token is the period name `name`.
    pub fn is_name(&self, name: &str) -> bool {
        matches!(self, Self::Name(n) if n == name)
    }
}

impl fmt::Display for GroupingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "'{name}'"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for GroupingToken {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for GroupingToken {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<i64> for GroupingToken {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// A grouping expressed as period tokens, e.g. `['year', 'month']`.
///
/// Seasonal grouping objects built elsewhere can attach a mode hint, which
/// then takes precedence over any token comparison.
///
/// # Example
///
/// ```
/// use ecattrs_grouping::CalcGrouping;
///
/// let annual = CalcGrouping::from_names(["year"]);
/// assert_eq!(annual.describe(), "annual");
///
/// let hinted = CalcGrouping::from_names(["year"]).with_mode_hint("winter season");
/// assert_eq!(hinted.describe(), "winter season");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalcGrouping {
    tokens: Vec<GroupingToken>,
    mode_hint: Option<String>,
}

impl CalcGrouping {
    /// Creates a grouping from a token list, without a mode hint.
    pub fn new(tokens: Vec<GroupingToken>) -> Self {
        Self {
            tokens,
            mode_hint: None,
        }
    }

    /// Creates a grouping made only of period names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            names
                .into_iter()
                .map(|n| GroupingToken::Name(n.into()))
                .collect(),
        )
    }

    /// Attaches a mode hint, used verbatim by [`describe`](Self::describe).
    pub fn with_mode_hint(mut self, hint: impl Into<String>) -> Self {
        self.mode_hint = Some(hint.into());
        self
    }

    /// Returns the token list.
    pub fn tokens(&self) -> &[GroupingToken] {
        &self.tokens
    }

    /// Returns the mode hint, if one was attached.
    pub fn mode_hint(&self) -> Option<&str> {
        self.mode_hint.as_deref()
    }

    /// Describes the aggregation mode.
    ///
    /// Resolution order:
    /// 1. the mode hint, if present;
    /// 2. token set `{year, month}` in any order -> `monthly time series`;
    /// 3. exactly `[year]` -> `annual`, exactly `[month]` -> `monthly climatology`;
    /// 4. the literal token list, e.g. `['year', 'month', 'day']`.
    pub fn describe(&self) -> String {
        if let Some(hint) = &self.mode_hint {
            debug!(hint = %hint, "using declared mode hint");
            return hint.clone();
        }
        if self.token_set_is(&["year", "month"]) {
            return "monthly time series".to_string();
        }
        if self.tokens_are(&["year"]) {
            return "annual".to_string();
        }
        if self.tokens_are(&["month"]) {
            return "monthly climatology".to_string();
        }
        debug!(grouping = %self, "no known token pattern, describing literally");
        self.to_string()
    }

    /// Set comparison: duplicates and order are ignored.
    fn token_set_is(&self, names: &[&str]) -> bool {
        let present: HashSet<&GroupingToken> = self.tokens.iter().collect();
        present.len() == names.len()
            && names
                .iter()
                .all(|n| present.iter().any(|token| token.is_name(n)))
    }

    /// Sequence comparison: order and length must match exactly.
    fn tokens_are(&self, names: &[&str]) -> bool {
        self.tokens.len() == names.len()
            && self.tokens.iter().zip(names).all(|(t, n)| t.is_name(n))
    }
}

impl fmt::Display for CalcGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{token}")?;
        }
        write!(f, "]")
    }
}

/// Parses comma-separated tokens, e.g. `"year,month"` or `"month, 6"`.
///
/// Integers become [`GroupingToken::Number`]; empty items are skipped.
impl FromStr for CalcGrouping {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| match item.parse::<i64>() {
                Ok(n) => GroupingToken::Number(n),
                Err(_) => GroupingToken::Name(item.to_string()),
            })
            .collect();
        Ok(Self::new(tokens))
    }
}
