//! # Geometry Equations
//!
//! All closed-form formulas used by the calculator live here, so each one
//! can be checked against a reference in isolation.
//!
//! ## Modules
//!
//! - [`solids`] - Surface area and volume of elementary solids
//!
//! ## Conventions
//!
//! - All lengths share one (unspecified) unit; areas and volumes come out
//!   in its square and cube.
//! - π is [`std::f64::consts::PI`].

pub mod solids;

// Re-export commonly used items
pub use solids::{
    cone_slant_height,
    cone_surface_area,
    cone_volume,
    cube_surface_area,
    cube_volume,
    cuboid_surface_area,
    cuboid_volume,
    cylinder_surface_area,
    cylinder_volume,
    sphere_surface_area,
    sphere_volume,
    square_pyramid_base_area,
    square_pyramid_lateral_area,
    square_pyramid_slant_height,
    square_pyramid_surface_area,
    square_pyramid_volume,
};
