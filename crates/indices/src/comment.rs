//! Per-index `comment` attribute text.

/// Comment attached to the growing season length index.
pub const GSL_COMMENT: &str = "This indice is defined only for the northern hemisphere";

/// Formats the `comment` global attribute for an index.
///
/// Indices without a note get a single space, never an empty string.
pub fn format_comment(index: &str) -> &'static str {
    match index {
        "GSL" => GSL_COMMENT,
        _ => " ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gsl_has_hemisphere_note() {
        assert_eq!(
            format_comment("GSL"),
            "This indice is defined only for the northern hemisphere"
        );
    }

    #[test]
    fn other_indices_get_single_space() {
        for index in ["SU", "CDD", "TG", "unknown", ""] {
            assert_eq!(format_comment(index), " ", "index {index}");
        }
    }
}
