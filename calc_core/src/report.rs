//! # Result Formatting
//!
//! Turns a [`ShapeResult`] into the labelled lines shown to the user.
//!
//! ```rust
//! use calc_core::report::{surface_area_line, volume_line};
//! use calc_core::shapes::{evaluate, ShapeKind};
//!
//! let result = evaluate(ShapeKind::Cube, &[2.0]).unwrap();
//! assert_eq!(surface_area_line(ShapeKind::Cube, &result), "Surface Area of the cube is: 24.00");
//! assert_eq!(volume_line(ShapeKind::Cube, &result), "Volume of the cube is: 8.00");
//! ```

use crate::shapes::{ShapeKind, ShapeResult};

/// Decimal places shown for every computed value
pub const DISPLAY_PRECISION: usize = 2;

/// Format a value with [`DISPLAY_PRECISION`] fixed decimals.
pub fn format_measure(value: f64) -> String {
    format!("{:.*}", DISPLAY_PRECISION, value)
}

pub fn surface_area_line(kind: ShapeKind, result: &ShapeResult) -> String {
    format!("Surface Area of the {} is: {}", kind.name(), format_measure(result.surface_area))
}

pub fn volume_line(kind: ShapeKind, result: &ShapeResult) -> String {
    format!("Volume of the {} is: {}", kind.name(), format_measure(result.volume))
}
