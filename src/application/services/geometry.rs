//! Closed-form geometry used by the math endpoints.

use std::f64::consts::PI;

/// Circumference of a circle with the given radius: `2πr`.
pub fn circumference(radius: f64) -> f64 {
    radius * 2.0 * PI
}

/// Radius of a circle with the given circumference: `c / 2π`.
pub fn radius(circumference: f64) -> f64 {
    circumference / (2.0 * PI)
}

/// Area of a triangle: `base * height / 2`.
pub fn triangle_area(base: f64, height: f64) -> f64 {
    base * height / 2.0
}
