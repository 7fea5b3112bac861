//! Two-dimensional `f64` vector.
//!
//! Every operation returns a new value and leaves its receiver untouched.
//! Degenerate inputs (zero divisors, the zero vector) are never checked:
//! the result is whatever IEEE-754 arithmetic produces, usually `inf` or `NaN`.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2d {
    pub x: f64,
    pub y: f64,
}

impl Vector2d {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0);
    pub const DOWN: Self = Self::new(0.0, -1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Returns `self - other`.
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    pub fn add_scalar(self, scalar: f64) -> Self {
        Self::new(self.x + scalar, self.y + scalar)
    }

    /// Subtracts `scalar` from each component: `(x - s, y - s)`.
    pub fn sub_scalar(self, scalar: f64) -> Self {
        Self::new(self.x - scalar, self.y - scalar)
    }

    /// Subtracts each component from `scalar`: `(s - x, s - y)`.
    ///
    /// Not the same as [`Vector2d::sub_scalar`]; operand order is reversed.
    pub fn sub_scalar_reversed(self, scalar: f64) -> Self {
        Self::new(scalar - self.x, scalar - self.y)
    }

    /// Component-wise division. Dividing by zero yields `±inf` or `NaN`.
    pub fn divide(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the vector scaled to length 1.
    ///
    /// The zero vector has no direction; its unit vector is `(NaN, NaN)`.
    pub fn unit(self) -> Self {
        self.divide(self.magnitude())
    }

    /// Rotates counter-clockwise by `angle` radians.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
        )
    }

    /// Angle from the positive x axis in radians, in `(-PI, PI]`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    // Plain comparisons rather than f64::max/min: a NaN `y` is returned as-is.
    pub fn max_component(self) -> f64 {
        if self.x > self.y { self.x } else { self.y }
    }

    pub fn min_component(self) -> f64 {
        if self.x < self.y { self.x } else { self.y }
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Projects `self` onto `onto`.
    ///
    /// Projecting onto the zero vector divides by zero and gives `NaN` components.
    pub fn project(self, onto: Self) -> Self {
        onto.scale(self.dot(onto) / onto.dot(onto))
    }

    /// Text form, e.g. `Vector2d{X: 3, Y: 4}`.
    pub fn repr(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Vector2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2d{{X: {}, Y: {}}}", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2d> for (f64, f64) {
    fn from(v: Vector2d) -> Self {
        (v.x, v.y)
    }
}

/// Component-wise addition of two vectors.
impl Add<Vector2d> for Vector2d {
    type Output = Vector2d;

    fn add(self, rhs: Vector2d) -> Self::Output {
        Vector2d::add(self, rhs)
    }
}

/// Adds a scalar to both components.
impl Add<f64> for Vector2d {
    type Output = Vector2d;

    fn add(self, rhs: f64) -> Self::Output {
        self.add_scalar(rhs)
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vector2d> for Vector2d {
    type Output = Vector2d;

    fn sub(self, rhs: Vector2d) -> Self::Output {
        self.subtract(rhs)
    }
}

/// Subtracts a scalar from both components.
impl Sub<f64> for Vector2d {
    type Output = Vector2d;

    fn sub(self, rhs: f64) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

/// `s - v`, component-wise.
impl Sub<Vector2d> for f64 {
    type Output = Vector2d;

    fn sub(self, rhs: Vector2d) -> Self::Output {
        rhs.sub_scalar_reversed(self)
    }
}

/// Scalar multiplication of a vector.
impl Mul<f64> for Vector2d {
    type Output = Vector2d;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vector2d> for f64 {
    type Output = Vector2d;

    fn mul(self, rhs: Vector2d) -> Self::Output {
        rhs.scale(self)
    }
}

/// Scalar division of a vector.
impl Div<f64> for Vector2d {
    type Output = Vector2d;

    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}

/// Negation of a vector.
impl Neg for Vector2d {
    type Output = Vector2d;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl AbsDiffEq for Vector2d {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2d {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vector2d {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}
