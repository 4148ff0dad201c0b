//! Classification of index identifiers into semantic groups.

use std::fmt;

use tracing::debug;

use crate::error::IndexError;

/// Semantic group of an ECA index, used in the `title` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryGroup {
    /// Mean, maximum and minimum temperature and their ranges.
    Temperature,
    /// Warm extremes: summer days, tropical nights, warm spells.
    Heat,
    /// Cold extremes: frost and ice days, cold spells, growing season.
    Cold,
    /// Consecutive dry days.
    Drought,
    /// Precipitation totals, intensity and wet-day counts.
    Rain,
    /// Snow depth.
    Snow,
    /// Joint temperature and precipitation conditions.
    Compound,
}

impl CategoryGroup {
    /// All groups, in table order.
    pub const ALL: [CategoryGroup; 7] = [
        CategoryGroup::Temperature,
        CategoryGroup::Heat,
        CategoryGroup::Cold,
        CategoryGroup::Drought,
        CategoryGroup::Rain,
        CategoryGroup::Snow,
        CategoryGroup::Compound,
    ];

    /// Lowercase name as it appears in titles.
    pub fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Heat => "heat",
            Self::Cold => "cold",
            Self::Drought => "drought",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Compound => "compound",
        }
    }

    /// Index identifiers belonging to this group.
    pub fn members(self) -> &'static [&'static str] {
        match self {
            Self::Temperature => &["TG", "TX", "TN", "DTR", "ETR", "vDTR"],
            Self::Heat => &[
                "SU", "TR", "CSU", "TXx", "TNx", "TG90p", "TX90p", "TN90p", "WSDI",
            ],
            Self::Cold => &[
                "GD4", "GSL", "FD", "CFD", "HD17", "ID", "TXn", "TNn", "TG10p", "TX10p", "TN10p",
                "CSDI",
            ],
            Self::Drought => &["CDD"],
            Self::Rain => &[
                "PRCPTOT", "RR1", "SDII", "CWD", "R10mm", "R20mm", "RX1day", "RX5day", "R75p",
                "R95p", "R99p", "R75pTOT", "R95pTOT", "R99pTOT",
            ],
            Self::Snow => &["SD", "SD1", "SD5cm", "SD50cm"],
            Self::Compound => &["CD", "CW", "WD", "WW"],
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the group an index identifier belongs to.
///
/// Matching is exact and case-sensitive (`TXx` and `TXn` are different
/// indices).
///
/// # Errors
///
/// Returns [`IndexError::UnknownIndex`] if the identifier is in no group.
/// No default group is assumed.
pub fn classify(index: &str) -> Result<CategoryGroup, IndexError> {
    let group = CategoryGroup::ALL
        .into_iter()
        .find(|group| group.members().iter().any(|&member| member == index));
    match group {
        Some(group) => Ok(group),
        None => {
            debug!(index, "identifier not in any category table");
            Err(IndexError::UnknownIndex {
                name: index.to_string(),
            })
        }
    }
}

/// Formats the `title` global attribute, e.g. `ECA heat indice SU`.
///
/// # Errors
///
/// Returns [`IndexError::UnknownIndex`] if the identifier cannot be
/// classified.
pub fn format_title(index: &str) -> Result<String, IndexError> {
    let group = classify(index)?;
    Ok(format!("ECA {group} indice {index}"))
}

/// Every known identifier paired with its group, in table order.
pub fn known_indices() -> impl Iterator<Item = (&'static str, CategoryGroup)> {
    CategoryGroup::ALL
        .into_iter()
        .flat_map(|group| group.members().iter().map(move |&index| (index, group)))
}
