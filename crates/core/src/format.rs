//! Textual rendering of cuboids
//!
//! Three layouts are supported, one per unit:
//!
//! | Specifier | Output                              |
//! |-----------|-------------------------------------|
//! | `m`       | `2.500 m × 9.321 m × 0.100 m`       |
//! | `cm`      | `250.0 cm × 932.1 cm × 10.0 cm`     |
//! | `mm`      | `2500 mm × 9321 mm × 100 mm`        |
//!
//! `Display` uses the meter layout.

use std::fmt;
use std::str::FromStr;

use crate::core_types::{Cuboid, UnitOfMeasure};
use crate::error::{CuboidError, FormatError};

/// Separator placed between the three edge terms
pub const EDGE_SEPARATOR: &str = " × ";

/// Output layout for [`Cuboid::format_as`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CuboidFormat {
    #[default]
    Meters,
    Centimeters,
    Millimeters,
}

impl CuboidFormat {
    /// Unit the edges are expressed in
    pub const fn unit(self) -> UnitOfMeasure {
        match self {
            CuboidFormat::Meters => UnitOfMeasure::Meter,
            CuboidFormat::Centimeters => UnitOfMeasure::Centimeter,
            CuboidFormat::Millimeters => UnitOfMeasure::Millimeter,
        }
    }

    /// Decimal places per edge
    pub const fn precision(self) -> usize {
        match self {
            CuboidFormat::Meters => 3,
            CuboidFormat::Centimeters => 1,
            CuboidFormat::Millimeters => 0,
        }
    }

    /// Resolve an optional specifier, `None` meaning the default layout.
    ///
    /// # Errors
    /// [`FormatError::UnknownSpecifier`] for anything but "m", "cm" or "mm".
    pub fn from_specifier(specifier: Option<&str>) -> Result<Self, FormatError> {
        specifier.map_or(Ok(CuboidFormat::Meters), str::parse)
    }

    fn render(self, cuboid: &Cuboid) -> String {
        let unit = self.unit();
        let precision = self.precision();
        cuboid
            .iter()
            .map(|edge| format!("{:.*} {}", precision, unit.convert_meters(edge), unit))
            .collect::<Vec<_>>()
            .join(EDGE_SEPARATOR)
    }
}

impl FromStr for CuboidFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(CuboidFormat::Meters),
            "cm" => Ok(CuboidFormat::Centimeters),
            "mm" => Ok(CuboidFormat::Millimeters),
            other => Err(FormatError::UnknownSpecifier(other.to_string())),
        }
    }
}

impl fmt::Display for CuboidFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit().symbol())
    }
}

impl Cuboid {
    /// Render with a textual specifier ("m", "cm", "mm", or `None` for "m").
    ///
    /// # Errors
    /// [`CuboidError::Format`] for an unknown specifier.
    pub fn format(&self, specifier: Option<&str>) -> Result<String, CuboidError> {
        let layout = CuboidFormat::from_specifier(specifier)?;
        Ok(self.format_as(layout))
    }

    /// Render with a typed layout
    pub fn format_as(&self, layout: CuboidFormat) -> String {
        layout.render(self)
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_as(CuboidFormat::Meters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Cuboid {
        Cuboid::from_meters(2.5, 9.321, 0.1).unwrap()
    }

    #[test]
    fn test_meter_layout() {
        let cuboid = sample();
        assert_eq!(cuboid.to_string(), "2.500 m × 9.321 m × 0.100 m");
        assert_eq!(cuboid.format(None).unwrap(), cuboid.to_string());
        assert_eq!(cuboid.format(Some("m")).unwrap(), cuboid.to_string());
    }

    #[test]
    fn test_centimeter_layout() {
        assert_eq!(
            sample().format(Some("cm")).unwrap(),
            "250.0 cm × 932.1 cm × 10.0 cm"
        );
    }

    #[test]
    fn test_millimeter_layout() {
        assert_eq!(
            sample().format(Some("mm")).unwrap(),
            "2500 mm × 9321 mm × 100 mm"
        );
    }

    #[test]
    fn test_layout_uses_truncated_edges() {
        let cuboid = Cuboid::with_unit(1234.9, 10.0, 99.99, UnitOfMeasure::Millimeter).unwrap();
        assert_eq!(cuboid.to_string(), "1.234 m × 0.010 m × 0.099 m");
    }

    #[test]
    fn test_unknown_specifier() {
        assert_eq!(
            sample().format(Some("km")),
            Err(CuboidError::Format(FormatError::UnknownSpecifier(
                "km".to_string()
            )))
        );
        assert!(sample().format(Some("")).is_err());
        assert!(sample().format(Some("M")).is_err());
    }

    #[test]
    fn test_specifier_round_trip() {
        for layout in [
            CuboidFormat::Meters,
            CuboidFormat::Centimeters,
            CuboidFormat::Millimeters,
        ] {
            assert_eq!(layout.to_string().parse::<CuboidFormat>(), Ok(layout));
        }
    }

    #[test]
    fn test_display_padding() {
        let cuboid = Cuboid::default();
        let padded = format!("[{:>30}]", cuboid);
        assert_eq!(padded, "[   0.100 m × 0.100 m × 0.100 m]");
    }

    #[test]
    fn test_formatting_is_repeatable() {
        let cuboid = sample();
        let first = cuboid.format(Some("cm")).unwrap();
        let second = cuboid.format(Some("cm")).unwrap();
        assert_eq!(first, second);
    }
}
