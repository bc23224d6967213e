//! # Solid Shape Formulas
//!
//! Closed-form surface area and volume of the elementary solids.
//!
//! ## Notation
//!
//! - `s` = Side length of a cube
//! - `l`, `w`, `h` = Length, width, height of a rectangular box
//! - `r` = Radius of a circular base (or of a sphere)
//! - `b` = Side length of a square base
//! - `ℓ` = Slant height (apex to base edge along the lateral surface)
//!
//! None of these functions validate their arguments. Zero or negative
//! dimensions are evaluated as written and may yield negative volumes.

use std::f64::consts::PI;

// =============================================================================
// CUBE
// =============================================================================

/// Surface area of a cube: six square faces.
///
/// # Formula
/// SA = 6s²
///
/// # Example
/// ```rust
/// use calc_core::equations::solids::cube_surface_area;
///
/// assert_eq!(cube_surface_area(3.0), 54.0);
/// ```
#[inline]
pub fn cube_surface_area(s: f64) -> f64 {
    6.0 * s.powi(2)
}

/// Volume of a cube: V = s³
#[inline]
pub fn cube_volume(s: f64) -> f64 {
    s.powi(3)
}

// =============================================================================
// CUBOID (rectangular box)
// =============================================================================

/// Surface area of a rectangular box
///
/// ```text
///        ┌─────────┐
///       /         /│
///      ┌─────────┐ │ h
///      │         │ ┘
///      │         │/ w
///      └─────────┘
///           l
/// ```
///
/// # Formula
/// SA = 2(lw + lh + wh)
///
/// # Example
/// ```rust
/// use calc_core::equations::solids::cuboid_surface_area;
///
/// let sa = cuboid_surface_area(2.0, 3.0, 4.0);
/// assert!((sa - 52.0).abs() < 1e-9);
/// ```
#[inline]
pub fn cuboid_surface_area(l: f64, w: f64, h: f64) -> f64 {
    2.0 * (l * w + l * h + w * h)
}

/// Volume of a rectangular box: V = lwh
#[inline]
pub fn cuboid_volume(l: f64, w: f64, h: f64) -> f64 {
    l * w * h
}

// =============================================================================
// CONE (right circular)
// =============================================================================

/// Slant height of a right circular cone
///
/// # Formula
/// ℓ = √(r² + h²)
///
/// Computed with [`f64::hypot`], which always returns the non-negative root.
///
/// # Example
/// ```rust
/// use calc_core::equations::solids::cone_slant_height;
///
/// // 3-4-5 triangle
/// assert!((cone_slant_height(3.0, 4.0) - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn cone_slant_height(r: f64, h: f64) -> f64 {
    r.hypot(h)
}

/// Total surface area of a cone (base disc plus lateral surface)
///
/// # Formula
/// SA = πr(r + ℓ), where ℓ = √(r² + h²)
///
/// # Example
/// ```rust
/// use calc_core::equations::solids::cone_surface_area;
///
/// // r = 3, h = 4 -> ℓ = 5 -> SA = 24π
/// let sa = cone_surface_area(3.0, 4.0);
/// assert!((sa - 24.0 * std::f64::consts::PI).abs() < 1e-9);
/// ```
#[inline]
pub fn cone_surface_area(r: f64, h: f64) -> f64 {
    PI * r * (r + cone_slant_height(r, h))
}

/// Volume of a cone
///
/// # Formula
/// V = (1/3)πr²h
#[inline]
pub fn cone_volume(r: f64, h: f64) -> f64 {
    PI * r.powi(2) * h / 3.0
}

// =============================================================================
// SPHERE
// =============================================================================

/// Surface area of a sphere: SA = 4πr²
#[inline]
pub fn sphere_surface_area(r: f64) -> f64 {
    4.0 * PI * r.powi(2)
}

/// Volume of a sphere: V = (4/3)πr³
#[inline]
pub fn sphere_volume(r: f64) -> f64 {
    4.0 / 3.0 * PI * r.powi(3)
}

// =============================================================================
// SQUARE PYRAMID (right, square base)
// =============================================================================

/// Slant height of a square pyramid, measured to the midpoint of a base edge
///
/// ```text
///          /\
///         /│ \
///        / │h \  ℓ
///       /  │   \
///      /───┴────\
///        b/2
/// ```
///
/// # Formula
/// ℓ = √(h² + (b/2)²)
#[inline]
pub fn square_pyramid_slant_height(b: f64, h: f64) -> f64 {
    h.hypot(b / 2.0)
}

/// Area of the square base: b²
#[inline]
pub fn square_pyramid_base_area(b: f64) -> f64 {
    b.powi(2)
}

/// Lateral area: four triangular faces of base `b` and height `ℓ`
///
/// # Formula
/// A_lateral = 4 × (b·ℓ/2) = 2bℓ
#[inline]
pub fn square_pyramid_lateral_area(b: f64, h: f64) -> f64 {
    2.0 * b * square_pyramid_slant_height(b, h)
}

/// Total surface area of a square pyramid
///
/// # Formula
/// SA = b² + 2b·√(h² + (b/2)²)
///
/// # Example
/// ```rust
/// use calc_core::equations::solids::square_pyramid_surface_area;
///
/// // b = 6, h = 4 -> ℓ = 5 -> SA = 36 + 60
/// let sa = square_pyramid_surface_area(6.0, 4.0);
/// assert!((sa - 96.0).abs() < 1e-9);
/// ```
#[inline]
pub fn square_pyramid_surface_area(b: f64, h: f64) -> f64 {
    square_pyramid_base_area(b) + square_pyramid_lateral_area(b, h)
}

/// Volume of a square pyramid: V = (1/3)b²h
#[inline]
pub fn square_pyramid_volume(b: f64, h: f64) -> f64 {
    square_pyramid_base_area(b) * h / 3.0
}

// =============================================================================
// CYLINDER (right circular)
// =============================================================================

/// Total surface area of a closed cylinder (two discs plus the side)
///
/// # Formula
/// SA = 2πr(r + h)
#[inline]
pub fn cylinder_surface_area(r: f64, h: f64) -> f64 {
    2.0 * PI * r * (r + h)
}

/// Volume of a cylinder: V = πr²h
#[inline]
pub fn cylinder_volume(r: f64, h: f64) -> f64 {
    PI * r.powi(2) * h
}
