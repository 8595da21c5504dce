//! The immutable cuboid value type
//!
//! A [`Cuboid`] stores three raw edge magnitudes together with the unit they
//! were supplied in. Everything else is derived on demand in meters:
//! - Canonical edges A, B, C are truncated (not rounded) to millimeters
//! - Volume is rounded to 9 decimal places
//! - Surface area is rounded to 6 decimal places
//!
//! Every constructor funnels through [`Cuboid::new`], so a `Cuboid` whose
//! edges lie outside the open interval (0 m, 10 m) can never exist.
//!
//! # Equality
//! Two cuboids compare equal when their [`hash_code`](Cuboid::hash_code)s
//! match, i.e. when the integer meter parts of their edges sum to the same
//! value. This is NOT structural equality: a 1 x 1 x 1 m box equals a
//! 1.5 x 1.5 x 1.5 m box. Compare [`to_array`](Cuboid::to_array) when the
//! geometry itself matters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::Add;
use tracing::debug;

use super::edges::Edges;
use super::unit::{UnitOfMeasure, DEFAULT_EDGE_METERS, MAX_EDGE_METERS};
use crate::error::CuboidError;

// ============================================================================
// ROUNDING HELPERS
// ============================================================================

/// Truncate toward zero to 3 decimal places (1.2349 -> 1.234)
#[inline]
fn truncate_millis(meters: f64) -> f64 {
    (meters * 1000.0).trunc() / 1000.0
}

/// Round half away from zero to `places` decimal places
#[inline]
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

// ============================================================================
// CUBOID
// ============================================================================

/// Rectangular box with edges in (0 m, 10 m)
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CuboidRepr", into = "CuboidRepr")
)]
pub struct Cuboid {
    raw: [f64; 3],
    unit: UnitOfMeasure,
    edges: Edges,
}

impl Cuboid {
    /// Create a cuboid, defaulting omitted edges to 0.1 m in `unit`.
    ///
    /// Omitted magnitudes become 0.1 (m), 10 (cm) or 100 (mm), so
    /// `Cuboid::new(None, None, None, unit)` is a 0.1 m cube for every unit.
    ///
    /// # Errors
    /// [`CuboidError::OutOfRange`] if any edge, converted to meters, is not
    /// strictly between 0 and 10. The check runs on the converted value
    /// before truncation.
    ///
    /// NaN is rejected as well. A plain `v <= 0 || v >= 10` comparison would
    /// let NaN through and produce a cuboid with NaN edges; here NaN counts
    /// as outside the interval.
    pub fn new(
        a: Option<f64>,
        b: Option<f64>,
        c: Option<f64>,
        unit: UnitOfMeasure,
    ) -> Result<Self, CuboidError> {
        let fallback = unit.default_edge();
        let raw = [
            a.unwrap_or(fallback),
            b.unwrap_or(fallback),
            c.unwrap_or(fallback),
        ];

        for (edge, &magnitude) in raw.iter().enumerate() {
            let meters = unit.to_meters(magnitude);
            if meters.is_nan() || meters <= 0.0 || meters >= MAX_EDGE_METERS {
                debug!(edge, meters, unit = %unit, "rejected cuboid edge");
                return Err(CuboidError::OutOfRange { edge, meters });
            }
        }

        Ok(Self::from_validated(raw, unit))
    }

    /// Create a cuboid with all three edges given in `unit`.
    ///
    /// # Errors
    /// [`CuboidError::OutOfRange`] as for [`Cuboid::new`].
    pub fn with_unit(a: f64, b: f64, c: f64, unit: UnitOfMeasure) -> Result<Self, CuboidError> {
        Self::new(Some(a), Some(b), Some(c), unit)
    }

    /// Create a cuboid from edges in meters.
    ///
    /// # Errors
    /// [`CuboidError::OutOfRange`] as for [`Cuboid::new`].
    pub fn from_meters(a: f64, b: f64, c: f64) -> Result<Self, CuboidError> {
        Self::with_unit(a, b, c, UnitOfMeasure::Meter)
    }

    /// Create a cuboid from whole millimeters.
    ///
    /// # Errors
    /// [`CuboidError::OutOfRange`] for edges outside (0 mm, 10000 mm).
    pub fn from_millimeter_triple((a, b, c): (i32, i32, i32)) -> Result<Self, CuboidError> {
        Self::with_unit(
            f64::from(a),
            f64::from(b),
            f64::from(c),
            UnitOfMeasure::Millimeter,
        )
    }

    /// Caller must have checked the bounds.
    fn from_validated(raw: [f64; 3], unit: UnitOfMeasure) -> Self {
        let canonical = raw.map(|magnitude| truncate_millis(unit.to_meters(magnitude)));
        Cuboid {
            raw,
            unit,
            edges: Edges::from(canonical),
        }
    }

    // ------------------------------------------------------------------------
    // Canonical accessors
    // ------------------------------------------------------------------------

    #[inline]
    fn canonical(&self, index: usize) -> f64 {
        truncate_millis(self.unit.to_meters(self.raw[index]))
    }

    /// First edge in meters, truncated to 3 decimals
    #[inline]
    pub fn a(&self) -> f64 {
        self.canonical(0)
    }

    /// Second edge in meters, truncated to 3 decimals
    #[inline]
    pub fn b(&self) -> f64 {
        self.canonical(1)
    }

    /// Third edge in meters, truncated to 3 decimals
    #[inline]
    pub fn c(&self) -> f64 {
        self.canonical(2)
    }

    /// Unit the cuboid was constructed in
    #[inline]
    pub fn unit(&self) -> UnitOfMeasure {
        self.unit
    }

    /// Edge magnitudes exactly as supplied, in [`unit`](Self::unit)
    #[inline]
    pub fn raw(&self) -> [f64; 3] {
        self.raw
    }

    // ------------------------------------------------------------------------
    // Derived properties
    // ------------------------------------------------------------------------

    /// Volume in cubic meters, rounded to 9 decimal places
    pub fn volume(&self) -> f64 {
        round_to(self.a() * self.b() * self.c(), 9)
    }

    /// Surface area in square meters, rounded to 6 decimal places
    pub fn surface_area(&self) -> f64 {
        let (a, b, c) = (self.a(), self.b(), self.c());
        round_to(2.0 * a * b + 2.0 * a * c + 2.0 * b * c, 6)
    }

    /// Sum of the canonical edges, the last ordering tie-breaker
    pub fn edge_sum(&self) -> f64 {
        self.a() + self.b() + self.c()
    }

    // ------------------------------------------------------------------------
    // Indexed / sequential access
    // ------------------------------------------------------------------------

    /// Edge at `index` (0 = A, 1 = B, 2 = C).
    ///
    /// # Errors
    /// [`CuboidError::IndexOutOfRange`] for any other index.
    pub fn edge(&self, index: usize) -> Result<f64, CuboidError> {
        self.edges
            .get(index)
            .copied()
            .ok_or(CuboidError::IndexOutOfRange { index })
    }

    /// Canonical edges in order A, B, C.
    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        [self.edges.x, self.edges.y, self.edges.z].into_iter()
    }

    // ------------------------------------------------------------------------
    // Conversions
    // ------------------------------------------------------------------------

    /// `[A, B, C]` in meters
    pub fn to_array(&self) -> [f64; 3] {
        [self.a(), self.b(), self.c()]
    }

    /// The edge list captured at construction
    pub fn to_vector(&self) -> Edges {
        self.edges
    }

    // ------------------------------------------------------------------------
    // Equality
    // ------------------------------------------------------------------------

    /// Sum of the integer (truncated) meter parts of A, B and C.
    ///
    /// This value alone decides equality; see the module docs.
    pub fn hash_code(&self) -> i32 {
        self.iter().map(|edge| edge.trunc() as i32).sum()
    }

    /// Hash-based equality, identical to `==`.
    pub fn equals(&self, other: &Cuboid) -> bool {
        self.hash_code() == other.hash_code()
    }

    // ------------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------------

    /// Smallest box holding both side by side along A.
    ///
    /// The result, in meters, has A = sum of both A edges, B = max of the B
    /// edges and C = max of the C edges.
    ///
    /// # Errors
    /// [`CuboidError::OutOfRange`] if the summed A edge reaches 10 m.
    pub fn combine(&self, other: &Cuboid) -> Result<Cuboid, CuboidError> {
        Cuboid::from_meters(
            self.a() + other.a(),
            self.b().max(other.b()),
            self.c().max(other.c()),
        )
    }

    /// Cube with (approximately) the same volume.
    ///
    /// # Errors
    /// [`CuboidError::OutOfRange`] when the volume is zero, which happens
    /// only for edges shorter than a millimeter.
    pub fn compress(&self) -> Result<Cuboid, CuboidError> {
        let side = self.volume().cbrt();
        Cuboid::from_meters(side, side, side)
    }
}

impl Default for Cuboid {
    /// A 0.1 m cube
    fn default() -> Self {
        Self::from_validated([DEFAULT_EDGE_METERS; 3], UnitOfMeasure::Meter)
    }
}

impl PartialEq for Cuboid {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Cuboid {}

impl Hash for Cuboid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state);
    }
}

impl Add for Cuboid {
    type Output = Result<Cuboid, CuboidError>;

    fn add(self, rhs: Cuboid) -> Self::Output {
        self.combine(&rhs)
    }
}

impl Add for &Cuboid {
    type Output = Result<Cuboid, CuboidError>;

    fn add(self, rhs: &Cuboid) -> Self::Output {
        self.combine(rhs)
    }
}

impl TryFrom<(i32, i32, i32)> for Cuboid {
    type Error = CuboidError;

    fn try_from(millimeters: (i32, i32, i32)) -> Result<Self, Self::Error> {
        Cuboid::from_millimeter_triple(millimeters)
    }
}

impl From<&Cuboid> for [f64; 3] {
    fn from(cuboid: &Cuboid) -> [f64; 3] {
        cuboid.to_array()
    }
}

impl IntoIterator for &Cuboid {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Cuboid {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// SERDE REPRESENTATION
// ============================================================================

/// Wire form: raw magnitudes plus unit, re-validated on the way in
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct CuboidRepr {
    a: f64,
    b: f64,
    c: f64,
    #[serde(default)]
    unit: UnitOfMeasure,
}

#[cfg(feature = "serde")]
impl TryFrom<CuboidRepr> for Cuboid {
    type Error = CuboidError;

    fn try_from(repr: CuboidRepr) -> Result<Self, Self::Error> {
        Cuboid::with_unit(repr.a, repr.b, repr.c, repr.unit)
    }
}

#[cfg(feature = "serde")]
impl From<Cuboid> for CuboidRepr {
    fn from(cuboid: Cuboid) -> Self {
        let [a, b, c] = cuboid.raw;
        CuboidRepr {
            a,
            b,
            c,
            unit: cuboid.unit,
        }
    }
}
