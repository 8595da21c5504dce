//! Vector type alias for the fixed-order canonical edge list.

use nalgebra::Vector3;

/// Canonical edges `[A, B, C]` in meters.
///
/// This is a simple alias for `nalgebra::Vector3<f64>`, captured once when a
/// [`Cuboid`](crate::Cuboid) is constructed and used for indexed and
/// sequential edge access.
pub type Edges = Vector3<f64>;
