//! Assembly of the specification line and the description sentence.
//!
//! # Layout
//!
//! | Output        | Template |
//! |---------------|----------|
//! | suffix text   | `suffixes` + ` C3` when the clearance flag is set |
//! | specification | `type \| subtype \| number-or-N/A \| seal \| suffix text` |
//! | description   | `type (subtype) code <number> seal suffix-text - make` |
//!
//! Field values are trimmed before use. Empty trailing segments of the
//! specification line are dropped together with their separator, so the
//! line never ends in `" |"`. The description skips empty parts and joins
//! the rest with single spaces; the `code` clause only appears when a number
//! was entered and the `- make` clause only when a make was entered.
//!
//! # Example
//!
//! ```
//! use bearing_core::SpecificationRequest;
//! use bearing_core::generator::generate;
//!
//! let request = SpecificationRequest {
//!     bearing_type: "Cylindrical Roller Bearing".to_string(),
//!     sub_type: "NU Series".to_string(),
//!     number: "NU210".to_string(),
//!     seal: "ZZ".to_string(),
//!     has_c3: true,
//!     ..Default::default()
//! };
//!
//! let output = generate(&request);
//!
//! assert_eq!(
//!     output.specification,
//!     "Cylindrical Roller Bearing | NU Series | NU210 | ZZ | C3"
//! );
//! assert_eq!(
//!     output.description,
//!     "Cylindrical Roller Bearing (NU Series) code NU210 ZZ C3"
//! );
//! ```

use crate::models::{GeneratedOutput, SpecificationRequest};

/// Separator between specification segments.
pub const SEGMENT_SEPARATOR: &str = " | ";

/// Placeholder for an empty bearing number in the specification line.
pub const MISSING_NUMBER: &str = "N/A";

/// Clearance-class token appended when the C3 flag is set.
pub const C3_TOKEN: &str = "C3";

/// Produces both output strings for `request`.
///
/// Pure: the result depends on nothing but the request.
pub fn generate(request: &SpecificationRequest) -> GeneratedOutput {
    let suffix_text = suffix_text(&request.suffixes, request.has_c3);

    GeneratedOutput {
        specification: specification_line(request, &suffix_text),
        description: description_line(request, &suffix_text),
    }
}

/// Returns the user's suffixes with ` C3` appended when `has_c3` is set.
///
/// ```
/// use bearing_core::generator::suffix_text;
///
/// assert_eq!(suffix_text("TN9 P6", true), "TN9 P6 C3");
/// assert_eq!(suffix_text("", true), "C3");
/// assert_eq!(suffix_text("", false), "");
/// ```
pub fn suffix_text(
    suffixes: &str,
    has_c3: bool,
) -> String {
    let mut text = suffixes.trim().to_string();
    if has_c3 {
        text.push(' ');
        text.push_str(C3_TOKEN);
    }
    text.trim().to_string()
}

/// Builds the `" | "`-separated specification line.
pub fn specification_line(
    request: &SpecificationRequest,
    suffix_text: &str,
) -> String {
    let number = request.number.trim();
    let mut segments = vec![
        request.bearing_type.trim(),
        request.sub_type.trim(),
        if number.is_empty() { MISSING_NUMBER } else { number },
        request.seal.trim(),
        suffix_text.trim(),
    ];

    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    segments.join(SEGMENT_SEPARATOR).trim().to_string()
}

/// Builds the descriptive sentence.
pub fn description_line(
    request: &SpecificationRequest,
    suffix_text: &str,
) -> String {
    let sub_type = request.sub_type.trim();
    let number = request.number.trim();
    let make = request.make.trim();

    let parts = [
        request.bearing_type.trim().to_string(),
        if sub_type.is_empty() {
            String::new()
        } else {
            format!("({sub_type})")
        },
        if number.is_empty() {
            String::new()
        } else {
            format!("code {number}")
        },
        request.seal.trim().to_string(),
        suffix_text.trim().to_string(),
        if make.is_empty() {
            String::new()
        } else {
            format!("- {make}")
        },
    ];

    parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn request() -> SpecificationRequest {
        SpecificationRequest::default()
    }

    fn separator_count(s: &str) -> usize {
        s.matches(SEGMENT_SEPARATOR).count()
    }

    // =========================================================================
    // worked examples
    // =========================================================================

    #[test]
    fn cylindrical_roller_with_c3_and_no_suffixes() {
        let req = SpecificationRequest {
            bearing_type: "Cylindrical Roller Bearing".to_string(),
            sub_type: "NU Series".to_string(),
            number: "NU210".to_string(),
            seal: "ZZ".to_string(),
            has_c3: true,
            ..request()
        };

        let output = generate(&req);

        assert_eq!(
            output.specification,
            "Cylindrical Roller Bearing | NU Series | NU210 | ZZ | C3"
        );
        assert_eq!(
            output.description,
            "Cylindrical Roller Bearing (NU Series) code NU210 ZZ C3"
        );
    }

    #[test]
    fn all_defaults_drop_trailing_separator() {
        let output = generate(&request());

        assert_eq!(
            output.specification,
            "Deep Groove Ball Bearing | 6000 Series | N/A | OPEN (Default)"
        );
        assert_eq!(
            output.description,
            "Deep Groove Ball Bearing (6000 Series) OPEN (Default)"
        );
    }

    #[test]
    fn full_request_with_make() {
        let req = SpecificationRequest {
            number: "6205".to_string(),
            seal: "2RS".to_string(),
            suffixes: "TN9 P6".to_string(),
            has_c3: true,
            make: "Front Wheel Hub".to_string(),
            ..request()
        };

        let output = generate(&req);

        assert_eq!(
            output.specification,
            "Deep Groove Ball Bearing | 6000 Series | 6205 | 2RS | TN9 P6 C3"
        );
        assert_eq!(
            output.description,
            "Deep Groove Ball Bearing (6000 Series) code 6205 2RS TN9 P6 C3 - Front Wheel Hub"
        );
    }

    // =========================================================================
    // suffix text
    // =========================================================================

    #[test]
    fn suffix_text_without_c3_is_verbatim() {
        assert_eq!(suffix_text("TN9, P6", false), "TN9, P6");
    }

    #[test]
    fn suffix_text_trims_surrounding_whitespace() {
        assert_eq!(suffix_text("  P6  ", true), "P6 C3");
    }

    #[test]
    fn suffix_segment_ends_with_c3_regardless_of_suffixes() {
        for suffixes in ["", "P6", "TN9 P6"] {
            let req = SpecificationRequest {
                suffixes: suffixes.to_string(),
                has_c3: true,
                ..request()
            };

            let output = generate(&req);
            let last = output.specification.rsplit(SEGMENT_SEPARATOR).next().unwrap();

            assert!(last.ends_with("C3"), "suffix segment was {last:?}");
        }
    }

    // =========================================================================
    // specification line
    // =========================================================================

    #[test]
    fn non_empty_suffix_yields_five_segments() {
        let req = SpecificationRequest {
            suffixes: "P6".to_string(),
            ..request()
        };

        let output = generate(&req);

        assert_eq!(separator_count(&output.specification), 4);
    }

    #[test]
    fn empty_suffix_yields_four_segments() {
        let output = generate(&request());

        assert_eq!(separator_count(&output.specification), 3);
        assert!(!output.specification.ends_with('|'));
    }

    #[test]
    fn empty_number_renders_na_as_third_segment() {
        let req = SpecificationRequest {
            has_c3: true,
            ..request()
        };

        let output = generate(&req);
        let segments: Vec<_> = output.specification.split(SEGMENT_SEPARATOR).collect();

        assert_eq!(segments[2], "N/A");
    }

    #[test]
    fn whitespace_only_number_counts_as_empty() {
        let req = SpecificationRequest {
            number: "   ".to_string(),
            ..request()
        };

        let output = generate(&req);

        assert!(output.specification.contains("| N/A |"));
        assert!(!output.description.contains("code "));
    }

    // =========================================================================
    // description line
    // =========================================================================

    #[test]
    fn description_omits_code_clause_without_number() {
        let req = SpecificationRequest {
            suffixes: "P6".to_string(),
            make: "SKF".to_string(),
            ..request()
        };

        let output = generate(&req);

        assert!(!output.description.contains("code "));
        assert!(!output.description.contains("N/A"));
    }

    #[test]
    fn description_ends_with_make_only_when_present() {
        let with_make = SpecificationRequest {
            make: "Toyota".to_string(),
            ..request()
        };

        assert!(generate(&with_make).description.ends_with("- Toyota"));
        assert!(!generate(&request()).description.contains("- "));
    }

    #[test]
    fn description_has_no_double_spaces() {
        let req = SpecificationRequest {
            make: "SKF".to_string(),
            ..request()
        };

        let output = generate(&req);

        assert!(!output.description.contains("  "));
        assert_eq!(
            output.description,
            "Deep Groove Ball Bearing (6000 Series) OPEN (Default) - SKF"
        );
    }

    #[test]
    fn generate_is_deterministic() {
        let req = SpecificationRequest {
            number: "NU210".to_string(),
            make: "SKF".to_string(),
            ..request()
        };

        assert_eq!(generate(&req), generate(&req.clone()));
    }
}
