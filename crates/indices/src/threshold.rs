//! Attribute tables for indices computed against a user-defined threshold.

use std::fmt;
use std::str::FromStr;

use crate::error::IndexError;

/// Attributes of the threshold coordinate variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdAttrs {
    /// Value of the `long_name` attribute.
    pub long_name: &'static str,
    /// Value of the CF `standard_name` attribute.
    pub standard_name: &'static str,
    /// Value of the `units` attribute.
    pub units: &'static str,
}

/// Attributes of the index variable itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableAttrs {
    /// Value of the `long_name` attribute, embedding the threshold.
    pub long_name: String,
    /// Value of the `units` attribute.
    pub units: &'static str,
}

/// Index families that accept a custom temperature threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThresholdIndex {
    /// Summer days.
    Su,
    /// Consecutive summer days.
    Csu,
    /// Tropical nights.
    Tr,
}

impl ThresholdIndex {
    /// Index identifier, e.g. `SU`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Su => "SU",
            Self::Csu => "CSU",
            Self::Tr => "TR",
        }
    }

    /// Attributes of the threshold variable. Identical for every family.
    pub fn threshold_attrs(self) -> ThresholdAttrs {
        ThresholdAttrs {
            long_name: "Threshold temperature in degrees Celsius",
            standard_name: "air_temperature",
            units: "degrees Celsius",
        }
    }

    /// Attributes of the index variable for the given threshold.
    ///
    /// The SU and CSU sentences end in `degrees)` with no opening
    /// parenthesis. Existing files carry that text, keep it byte for byte.
    pub fn variable_attrs(self, threshold: f64) -> VariableAttrs {
        let long_name = match self {
            Self::Su => format!(
                "Number of days with daily maximum temperature > {threshold} degrees)"
            ),
            Self::Csu => format!(
                "Maximum number of consecutive days with daily maximum temperature > {threshold} degrees)"
            ),
            Self::Tr => format!(
                "Number of days with daily minimum temperature > {threshold} degrees"
            ),
        };
        VariableAttrs {
            long_name,
            units: "days",
        }
    }
}

impl fmt::Display for ThresholdIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThresholdIndex {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SU" => Ok(Self::Su),
            "CSU" => Ok(Self::Csu),
            "TR" => Ok(Self::Tr),
            other => Err(IndexError::NoThreshold {
                name: other.to_string(),
            }),
        }
    }
}
