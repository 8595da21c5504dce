//! Cuboid Core Library
//!
//! An immutable rectangular-box value type with unit-aware construction.
//! Edges are supplied in meters, centimeters or millimeters and are always
//! exposed in meters, truncated to millimeter precision.
//!
//! ## Features
//!
//! - Validated construction: every edge lies strictly between 0 m and 10 m
//! - Derived volume and surface area with fixed rounding
//! - Text layouts in m / cm / mm that parse back into equal cuboids
//! - Hash-based equality and a volume-first sorting order
//! - Serde support behind the default `serde` feature
//!
//! ```
//! use cuboid_core::{Cuboid, UnitOfMeasure};
//!
//! let cuboid = Cuboid::with_unit(250.0, 932.1, 10.0, UnitOfMeasure::Centimeter)?;
//! assert_eq!(cuboid.to_string(), "2.500 m × 9.321 m × 0.100 m");
//! assert_eq!(cuboid.to_string().parse::<Cuboid>()?, cuboid);
//! # Ok::<(), cuboid_core::CuboidError>(())
//! ```

// Core types and utilities
pub mod core_types;

pub mod error;
pub mod format;
pub mod ordering;
mod parse;

// Re-export core types
pub use core_types::{Cuboid, Edges, UnitOfMeasure};
pub use core_types::{DEFAULT_EDGE_METERS, MAX_EDGE_METERS};

pub use error::{CuboidError, FormatError};
pub use format::CuboidFormat;
pub use ordering::{compare_cuboids, sort_cuboids};
