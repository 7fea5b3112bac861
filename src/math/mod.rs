//! Math primitives.

pub mod vector2d;

pub use vector2d::Vector2d;
