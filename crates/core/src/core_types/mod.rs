//! Core types and utilities

pub mod cuboid;
pub mod edges;
pub mod unit;

pub use cuboid::Cuboid;
pub use edges::Edges;
pub use unit::*;
