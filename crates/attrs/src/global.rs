//! Global attributes: `title`, `history`, `references`, `institution`,
//! `comment`.
//!
//! These are the minimum set of global attributes recommended by the CF
//! conventions.

use chrono::NaiveDateTime;
use ecattrs_grouping::{DateRange, DescribeMode, GroupingError, compact_date};
use ecattrs_indices::{format_comment, format_title};
use tracing::debug;

use crate::error::AttrError;
use crate::sink::AttributeSink;

/// Text of the `references` attribute.
pub const REFERENCES: &str =
    "ATBD of the ECA indices calculation (http://eca.knmi.nl/documents/atbd.pdf)";

/// Timestamp layout at the start of each history entry.
const HISTORY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator placed between an existing history and a new entry.
const HISTORY_SEPARATOR: &str = " \n";

/// Formats the `references` attribute.
pub fn format_references() -> &'static str {
    REFERENCES
}

/// Formats the `institution` attribute. The caller's text is used as is.
pub fn format_institution(text: &str) -> &str {
    text
}

/// Formats one history entry:
/// `2012-10-02 15:30:20 Calculation of SU indice (winter time series) from 1960-1-1 to 1990-12-31.`
///
/// # Errors
///
/// Propagates the grouping's [`GroupingError`].
pub fn history_entry<G: DescribeMode + ?Sized>(
    index: &str,
    grouping: &G,
    range: DateRange,
    now: NaiveDateTime,
) -> Result<String, GroupingError> {
    let mode = grouping.describe_mode()?;
    Ok(format!(
        "{} Calculation of {index} indice ({mode}) from {} to {}.",
        now.format(HISTORY_TIME_FORMAT),
        compact_date(range.start()),
        compact_date(range.end()),
    ))
}

/// Formats the `history` attribute: the new entry appended to `existing`.
///
/// With no existing history the entry stands alone. Otherwise the result
/// is `"{existing} \n{entry}"`, even when `existing` is empty.
///
/// # Errors
///
/// Propagates the grouping's [`GroupingError`].
pub fn format_history<G: DescribeMode + ?Sized>(
    index: &str,
    grouping: &G,
    range: DateRange,
    existing: Option<&str>,
    now: NaiveDateTime,
) -> Result<String, GroupingError> {
    let entry = history_entry(index, grouping, range, now)?;
    Ok(match existing {
        Some(previous) => format!("{previous}{HISTORY_SEPARATOR}{entry}"),
        None => entry,
    })
}

/// Writes the `title` attribute.
///
/// # Errors
///
/// Returns [`AttrError::Index`] for an unclassifiable index; nothing is
/// written in that case.
#[tracing::instrument(skip(sink))]
pub fn write_title<S: AttributeSink + ?Sized>(sink: &mut S, index: &str) -> Result<(), AttrError> {
    let title = format_title(index)?;
    sink.set_attribute("title", &title)
}

/// Appends an entry to the `history` attribute.
///
/// # Errors
///
/// Returns [`AttrError::Grouping`] if the grouping cannot be described;
/// the existing history is left untouched in that case.
#[tracing::instrument(skip(sink, grouping))]
pub fn write_history<S, G>(
    sink: &mut S,
    index: &str,
    grouping: &G,
    range: DateRange,
    now: NaiveDateTime,
) -> Result<(), AttrError>
where
    S: AttributeSink + ?Sized,
    G: DescribeMode + ?Sized,
{
    let existing = sink.attribute("history");
    let history = format_history(index, grouping, range, existing.as_deref(), now)?;
    sink.set_attribute("history", &history)
}

/// Writes the `references` attribute.
pub fn write_references<S: AttributeSink + ?Sized>(sink: &mut S) -> Result<(), AttrError> {
    sink.set_attribute("references", format_references())
}

/// Writes the `institution` attribute.
pub fn write_institution<S: AttributeSink + ?Sized>(
    sink: &mut S,
    institution: &str,
) -> Result<(), AttrError> {
    sink.set_attribute("institution", format_institution(institution))
}

/// Writes the `comment` attribute.
pub fn write_comment<S: AttributeSink + ?Sized>(sink: &mut S, index: &str) -> Result<(), AttrError> {
    sink.set_attribute("comment", format_comment(index))
}

/// All global attributes of one index output file.
///
/// Everything is formatted before the first write, so a failing index or
/// grouping leaves the sink unchanged.
#[derive(Debug, Clone)]
pub struct GlobalAttrs<'a, G: ?Sized> {
    index: &'a str,
    grouping: &'a G,
    range: DateRange,
    now: NaiveDateTime,
    institution: &'a str,
    append_history: bool,
}

impl<'a, G: DescribeMode + ?Sized> GlobalAttrs<'a, G> {
    /// Creates the request. `institution` defaults to an empty string.
    pub fn new(index: &'a str, grouping: &'a G, range: DateRange, now: NaiveDateTime) -> Self {
        Self {
            index,
            grouping,
            range,
            now,
            institution: "",
            append_history: true,
        }
    }

    /// Sets the `institution` text.
    pub fn with_institution(mut self, institution: &'a str) -> Self {
        self.institution = institution;
        self
    }

    /// Whether the new history entry is appended to the sink's existing
    /// `history`. When `false` the entry replaces it. Defaults to `true`.
    pub fn with_append_history(mut self, append: bool) -> Self {
        self.append_history = append;
        self
    }

    /// Writes `title`, `history`, `references`, `institution` and `comment`.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::Index`] or [`AttrError::Grouping`] before any
    /// write, or the sink's own error.
    #[tracing::instrument(skip_all, fields(index = self.index))]
    pub fn write_all<S: AttributeSink + ?Sized>(&self, sink: &mut S) -> Result<(), AttrError> {
        let title = format_title(self.index)?;
        let existing = if self.append_history {
            sink.attribute("history")
        } else {
            None
        };
        let history = format_history(
            self.index,
            self.grouping,
            self.range,
            existing.as_deref(),
            self.now,
        )?;
        debug!(appended = existing.is_some(), "formatted history");

        sink.set_attribute("title", &title)?;
        sink.set_attribute("history", &history)?;
        write_references(sink)?;
        write_institution(sink, self.institution)?;
        write_comment(sink, self.index)
    }
}
