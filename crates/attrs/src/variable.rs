//! Per-variable attributes for threshold-bearing indices.

use ecattrs_indices::ThresholdIndex;

use crate::error::AttrError;
use crate::sink::AttributeSink;

/// Writes `long_name`, `standard_name` and `units` on the threshold variable.
pub fn write_threshold_attrs<S: AttributeSink + ?Sized>(
    sink: &mut S,
    kind: ThresholdIndex,
) -> Result<(), AttrError> {
    let attrs = kind.threshold_attrs();
    sink.set_attribute("long_name", attrs.long_name)?;
    sink.set_attribute("standard_name", attrs.standard_name)?;
    sink.set_attribute("units", attrs.units)
}

/// Writes `long_name` and `units` on the index variable.
#[tracing::instrument(skip(sink))]
pub fn write_variable_attrs<S: AttributeSink + ?Sized>(
    sink: &mut S,
    kind: ThresholdIndex,
    threshold: f64,
) -> Result<(), AttrError> {
    let attrs = kind.variable_attrs(threshold);
    sink.set_attribute("long_name", &attrs.long_name)?;
    sink.set_attribute("units", attrs.units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::AttributeMap;

    #[test]
    fn threshold_variable() {
        let mut attrs = AttributeMap::new();
        write_threshold_attrs(&mut attrs, ThresholdIndex::Tr).unwrap();
        assert_eq!(
            attrs.get("long_name"),
            Some("Threshold temperature in degrees Celsius")
        );
        assert_eq!(attrs.get("standard_name"), Some("air_temperature"));
        assert_eq!(attrs.get("units"), Some("degrees Celsius"));
    }

    #[test]
    fn index_variable() {
        let mut attrs = AttributeMap::new();
        write_variable_attrs(&mut attrs, ThresholdIndex::Su, 25.0).unwrap();
        assert_eq!(
            attrs.get("long_name"),
            Some("Number of days with daily maximum temperature > 25 degrees)")
        );
        assert_eq!(attrs.get("units"), Some("days"));
        assert_eq!(attrs.get("standard_name"), None);
    }
}
