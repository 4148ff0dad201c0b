//! Common interface over both grouping representations.

use crate::error::GroupingError;
use crate::period::GroupingSpec;
use crate::structured::CalcGrouping;

/// Anything that can describe its temporal aggregation mode.
///
/// History writers are generic over this trait so the caller decides, by
/// the type it passes, which fallback policy applies.
pub trait DescribeMode {
    /// Returns the mode phrase placed inside the history entry parentheses.
    ///
    /// # Errors
    ///
    /// Implementations with a closed vocabulary return
    /// [`GroupingError::Unsupported`] for values outside it.
    fn describe_mode(&self) -> Result<String, GroupingError>;
}

impl DescribeMode for CalcGrouping {
    fn describe_mode(&self) -> Result<String, GroupingError> {
        Ok(self.describe())
    }
}

impl DescribeMode for GroupingSpec {
    fn describe_mode(&self) -> Result<String, GroupingError> {
        self.describe()
    }
}

impl<T: DescribeMode + ?Sized> DescribeMode for &T {
    fn describe_mode(&self) -> Result<String, GroupingError> {
        (**self).describe_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_of(grouping: &dyn DescribeMode) -> Result<String, GroupingError> {
        grouping.describe_mode()
    }

    #[test]
    fn calc_grouping_never_fails() {
        let calc = CalcGrouping::from_names(["day"]);
        assert_eq!(mode_of(&calc).unwrap(), "['day']");
    }

    #[test]
    fn grouping_spec_propagates_error() {
        let spec = GroupingSpec::code("XYZ");
        assert_eq!(
            mode_of(&spec).unwrap_err(),
            GroupingError::Unsupported {
                spec: "XYZ".to_string()
            }
        );
    }

    #[test]
    fn reference_forwards() {
        fn by_value<G: DescribeMode>(grouping: G) -> String {
            grouping.describe_mode().unwrap()
        }
        let spec = GroupingSpec::code("JJA");
        assert_eq!(by_value(&spec), "summer time series");
    }
}
