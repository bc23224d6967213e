//! # calc_core - 3D Shape Calculation Engine
//!
//! `calc_core` computes surface area and volume for six elementary solids:
//! cube, cuboid, cone, sphere, square pyramid and cylinder.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take dimensions and return results
//! - **No I/O**: Prompting and printing belong to the caller
//! - **Structured Errors**: Parse failures carry the field and offending text
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::shapes::{evaluate, ShapeKind};
//! use calc_core::report::format_measure;
//!
//! let result = evaluate(ShapeKind::Sphere, &[3.0]).unwrap();
//! assert_eq!(format_measure(result.surface_area), "113.10");
//! ```
//!
//! ## Modules
//!
//! - [`equations`] - Closed-form formulas for each solid
//! - [`shapes`] - Shape kinds, their dimensions, and evaluation
//! - [`report`] - Fixed-precision result lines
//! - [`errors`] - Structured error types

pub mod equations;
pub mod errors;
pub mod report;
pub mod shapes;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use shapes::{evaluate, parse_dimension, DimensionSpec, Dimensions, MenuChoice, ShapeKind, ShapeResult};
