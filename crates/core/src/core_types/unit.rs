//! Units of measure for cuboid edges
//!
//! Edges may be supplied in meters, centimeters or millimeters. Every unit
//! carries a linear scale factor relative to meters, which is the canonical
//! unit all derived properties are computed in.
//!
//! # Usage
//! ```
//! use cuboid_core::UnitOfMeasure;
//!
//! assert_eq!(UnitOfMeasure::Centimeter.to_meters(150.0), 1.5);
//! assert_eq!(UnitOfMeasure::Millimeter.symbol(), "mm");
//! assert_eq!("cm".parse::<UnitOfMeasure>(), Ok(UnitOfMeasure::Centimeter));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Edge length, in meters, used when a magnitude is omitted
pub const DEFAULT_EDGE_METERS: f64 = 0.1;

/// Exclusive upper bound for a canonical edge, in meters
pub const MAX_EDGE_METERS: f64 = 10.0;

// ============================================================================
// UNIT OF MEASURE
// ============================================================================

/// Unit an edge magnitude is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitOfMeasure {
    #[default]
    Meter,
    Centimeter,
    Millimeter,
}

impl UnitOfMeasure {
    /// All supported units
    pub const ALL: [UnitOfMeasure; 3] = [
        UnitOfMeasure::Meter,
        UnitOfMeasure::Centimeter,
        UnitOfMeasure::Millimeter,
    ];

    /// How many units make up one meter
    #[inline]
    #[must_use]
    pub const fn per_meter(self) -> f64 {
        match self {
            UnitOfMeasure::Meter => 1.0,
            UnitOfMeasure::Centimeter => 100.0,
            UnitOfMeasure::Millimeter => 1000.0,
        }
    }

    /// Linear scale factor relative to meters (1, 1/100, 1/1000)
    #[inline]
    #[must_use]
    pub fn scale(self) -> f64 {
        1.0 / self.per_meter()
    }

    /// Convert a magnitude in this unit to meters
    ///
    /// Divides by [`per_meter`](Self::per_meter) rather than multiplying by
    /// [`scale`](Self::scale) so that `150 cm` is exactly `1.5 m`.
    #[inline]
    #[must_use]
    pub fn to_meters(self, magnitude: f64) -> f64 {
        magnitude / self.per_meter()
    }

    /// Convert a length in meters to this unit
    #[inline]
    #[must_use]
    pub fn convert_meters(self, meters: f64) -> f64 {
        meters * self.per_meter()
    }

    /// Magnitude in this unit that equals [`DEFAULT_EDGE_METERS`]
    #[inline]
    #[must_use]
    pub const fn default_edge(self) -> f64 {
        match self {
            UnitOfMeasure::Meter => 0.1,
            UnitOfMeasure::Centimeter => 10.0,
            UnitOfMeasure::Millimeter => 100.0,
        }
    }

    /// Textual token ("m", "cm", "mm")
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            UnitOfMeasure::Meter => "m",
            UnitOfMeasure::Centimeter => "cm",
            UnitOfMeasure::Millimeter => "mm",
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitOfMeasure {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "m" => Ok(UnitOfMeasure::Meter),
            "cm" => Ok(UnitOfMeasure::Centimeter),
            "mm" => Ok(UnitOfMeasure::Millimeter),
            other => Err(FormatError::UnknownUnit(other.to_string())),
        }
    }
}
