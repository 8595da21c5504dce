//! Reconstructing cuboids from text
//!
//! The parser is deliberately loose. It looks for:
//! - the leftmost unit token anywhere in the input ("mm", "cm" or "m", longer
//!   tokens preferred at the same position), and
//! - the first three unsigned decimal numbers, read left to right as the
//!   A, B and C magnitudes in that unit.
//!
//! Anything else in the input is ignored, so every layout produced by
//! [`Cuboid::format`] parses back, but so do strings that merely contain a
//! unit-like substring (`"commit 1 2 3"` is read as millimeters).

use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;
use tracing::trace;

use crate::core_types::{Cuboid, UnitOfMeasure};
use crate::error::{CuboidError, FormatError};

lazy_static! {
    /// Unit token; alternatives are tried longest-first at each position
    static ref UNIT_PATTERN: Regex = Regex::new(r"mm|cm|m").unwrap();

    /// Unsigned integer or decimal, ASCII digits and `.` only
    static ref NUMBER_PATTERN: Regex = Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap();
}

fn detect_unit(text: &str) -> Result<UnitOfMeasure, FormatError> {
    let token = UNIT_PATTERN.find(text).ok_or(FormatError::MissingUnit)?;
    token.as_str().parse()
}

fn extract_magnitudes(text: &str) -> Result<[f64; 3], FormatError> {
    let tokens: Vec<&str> = NUMBER_PATTERN
        .find_iter(text)
        .take(3)
        .map(|token| token.as_str())
        .collect();
    if tokens.len() < 3 {
        return Err(FormatError::MissingEdges {
            found: tokens.len(),
        });
    }

    // A NUMBER_PATTERN match always parses as f64 (overlong digit runs
    // saturate to infinity); the error arm covers callers that relax the
    // pattern.
    let mut magnitudes = [0.0; 3];
    for (slot, token) in magnitudes.iter_mut().zip(&tokens) {
        *slot = token
            .parse::<f64>()
            .map_err(|_| FormatError::InvalidNumber((*token).to_string()))?;
    }
    Ok(magnitudes)
}

impl Cuboid {
    /// Parse text such as `"2.500 m × 9.321 m × 0.100 m"`.
    ///
    /// # Errors
    /// - [`CuboidError::Format`] when no unit token or fewer than three
    ///   numbers are present
    /// - [`CuboidError::OutOfRange`] when the parsed edges violate the bounds
    pub fn parse(text: &str) -> Result<Cuboid, CuboidError> {
        let unit = detect_unit(text)?;
        let [a, b, c] = extract_magnitudes(text)?;
        trace!(unit = %unit, a, b, c, "parsed cuboid text");
        Cuboid::with_unit(a, b, c, unit)
    }
}

impl FromStr for Cuboid {
    type Err = CuboidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cuboid::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meter_layout() {
        let parsed = Cuboid::parse("2.500 m × 9.321 m × 0.100 m").unwrap();
        assert_eq!(parsed.unit(), UnitOfMeasure::Meter);
        assert_eq!(parsed.to_array(), [2.5, 9.321, 0.1]);
        assert_eq!(parsed, Cuboid::from_meters(2.5, 9.321, 0.1).unwrap());
    }

    #[test]
    fn test_parse_centimeter_and_millimeter_layouts() {
        let cm: Cuboid = "250.0 cm × 932.1 cm × 10.0 cm".parse().unwrap();
        assert_eq!(cm.unit(), UnitOfMeasure::Centimeter);
        assert_eq!(cm.raw(), [250.0, 932.1, 10.0]);

        let mm: Cuboid = "2500 mm × 9321 mm × 100 mm".parse().unwrap();
        assert_eq!(mm.unit(), UnitOfMeasure::Millimeter);
        assert_eq!(mm.to_array(), [2.5, 9.321, 0.1]);
    }

    #[test]
    fn test_missing_unit() {
        assert_eq!(
            Cuboid::parse("1 × 2 × 3"),
            Err(CuboidError::Format(FormatError::MissingUnit))
        );
        assert_eq!(
            Cuboid::parse(""),
            Err(CuboidError::Format(FormatError::MissingUnit))
        );
    }

    #[test]
    fn test_missing_edges() {
        assert_eq!(
            Cuboid::parse("1.5 m × 2 m"),
            Err(CuboidError::Format(FormatError::MissingEdges { found: 2 }))
        );
        assert_eq!(
            Cuboid::parse("m"),
            Err(CuboidError::Format(FormatError::MissingEdges { found: 0 }))
        );
    }

    #[test]
    fn test_out_of_range_propagates() {
        assert!(matches!(
            Cuboid::parse("10.000 m × 1.000 m × 1.000 m"),
            Err(CuboidError::OutOfRange { edge: 0, .. })
        ));
        assert!(matches!(
            Cuboid::parse("0 mm × 1 mm × 1 mm"),
            Err(CuboidError::OutOfRange { edge: 0, .. })
        ));
    }

    #[test]
    fn test_overlong_numbers_hit_the_bound_check() {
        let huge = "9".repeat(400);
        let text = format!("{huge} m × 1 m × 1 m");
        assert_eq!(
            Cuboid::parse(&text),
            Err(CuboidError::OutOfRange {
                edge: 0,
                meters: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_extra_numbers_ignored() {
        let parsed = Cuboid::parse("1 m × 2 m × 3 m × 4 m").unwrap();
        assert_eq!(parsed.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_signs_are_not_part_of_numbers() {
        let parsed = Cuboid::parse("-1 m × -2 m × -3 m").unwrap();
        assert_eq!(parsed.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_unit_detection_is_a_loose_substring_match() {
        // Leftmost token wins, wherever it sits
        let parsed = Cuboid::parse("m 1 2 3 cm").unwrap();
        assert_eq!(parsed.unit(), UnitOfMeasure::Meter);

        let parsed = Cuboid::parse("size: 1, 2, 3 (in mm)").unwrap();
        assert_eq!(parsed.unit(), UnitOfMeasure::Millimeter);

        // "mm" inside an unrelated word still counts as a unit
        let parsed = Cuboid::parse("commit 1 2 3").unwrap();
        assert_eq!(parsed.unit(), UnitOfMeasure::Millimeter);
        assert_eq!(parsed.to_array(), [0.001, 0.002, 0.003]);

        // Mixed units: only the first token is honoured
        let parsed = Cuboid::parse("1 m × 2 cm × 3 mm").unwrap();
        assert_eq!(parsed.unit(), UnitOfMeasure::Meter);
        assert_eq!(parsed.to_array(), [1.0, 2.0, 3.0]);
    }
}
