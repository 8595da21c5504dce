//! Sorting order for collections of cuboids
//!
//! Cuboids are ordered by volume, then surface area, then the sum of their
//! edges, all ascending. This order is independent of (and inconsistent
//! with) the hash-based `==`, which is why `Cuboid` does not implement
//! `Ord`; use [`compare_cuboids`] with `sort_by` instead.

use std::cmp::Ordering;

use crate::core_types::Cuboid;

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Volume, then surface area, then edge sum, ascending
pub fn compare_cuboids(left: &Cuboid, right: &Cuboid) -> Ordering {
    f64_total_cmp(left.volume(), right.volume())
        .then_with(|| f64_total_cmp(left.surface_area(), right.surface_area()))
        .then_with(|| f64_total_cmp(left.edge_sum(), right.edge_sum()))
}

/// Stable ascending sort with [`compare_cuboids`]
pub fn sort_cuboids(cuboids: &mut [Cuboid]) {
    cuboids.sort_by(compare_cuboids);
}
