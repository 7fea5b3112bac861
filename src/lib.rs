//! Two-dimensional vector arithmetic.
//!
//! This crate provides [`Vector2d`], an immutable `f64` pair with the usual
//! algebraic and geometric operations. Nothing here allocates, fails, or
//! panics: degenerate inputs produce `inf`/`NaN` exactly as IEEE-754 does.
//!
//! # Quick Start
//!
//! ```
//! use vector2d::prelude::*;
//!
//! let a = Vector2d::new(3.0, 4.0);
//! let b = Vector2d::new(1.0, 2.0);
//!
//! assert_eq!(a.add(b), Vector2d::new(4.0, 6.0));
//! assert_eq!(a.dot(b), 11.0);
//! assert_eq!(a.magnitude(), 5.0);
//! assert_eq!(a.to_string(), "Vector2d{X: 3, Y: 4}");
//! ```

pub mod math;

pub use math::vector2d::Vector2d;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use vector2d::prelude::*;
/// ```
pub mod prelude {
    pub use crate::math::vector2d::Vector2d;
}
