//! # Shapes
//!
//! The solid shapes the calculator knows about, the dimensions each one
//! needs, and the dispatch from a shape to its formulas.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::shapes::{evaluate, Dimensions, ShapeKind};
//!
//! let dims = Dimensions::new(ShapeKind::Cube, vec![2.0]).unwrap();
//! let result = dims.evaluate().unwrap();
//! assert_eq!(result.surface_area, 24.0);
//! assert_eq!(result.volume, 8.0);
//!
//! // Same thing without building a Dimensions first
//! assert_eq!(evaluate(ShapeKind::Cube, &[2.0]).unwrap(), result);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::solids;
use crate::errors::{CalcError, CalcResult};

/// An elementary solid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cube,
    Cuboid,
    Cone,
    Sphere,
    SquarePyramid,
    Cylinder,
}

/// One named input a shape needs, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionSpec {
    /// Machine name (e.g., "radius")
    pub field: &'static str,
    /// Short human name used in error hints (e.g., "side length")
    pub label: &'static str,
    /// Full description used in prompts (e.g., "radius of the cone's base")
    pub description: &'static str,
}

impl DimensionSpec {
    const fn new(field: &'static str, label: &'static str, description: &'static str) -> Self {
        DimensionSpec { field, label, description }
    }
}

const CUBE_DIMS: [DimensionSpec; 1] = [DimensionSpec::new("side", "side length", "side length of the cube")];

const CUBOID_DIMS: [DimensionSpec; 3] = [
    DimensionSpec::new("length", "length", "length of the cuboid"),
    DimensionSpec::new("width", "width", "width of the cuboid"),
    DimensionSpec::new("height", "height", "height of the cuboid"),
];

const CONE_DIMS: [DimensionSpec; 2] = [
    DimensionSpec::new("radius", "radius", "radius of the cone's base"),
    DimensionSpec::new("height", "height", "height of the cone"),
];

const SPHERE_DIMS: [DimensionSpec; 1] = [DimensionSpec::new("radius", "radius", "radius of the sphere")];

const SQUARE_PYRAMID_DIMS: [DimensionSpec; 2] = [
    DimensionSpec::new("base_side", "base side length", "base side length of the square pyramid"),
    DimensionSpec::new("height", "height", "height of the square pyramid"),
];

const CYLINDER_DIMS: [DimensionSpec; 2] = [
    DimensionSpec::new("radius", "radius", "radius of the cylinder's base"),
    DimensionSpec::new("height", "height", "height of the cylinder"),
];

impl ShapeKind {
    /// All shapes in menu order
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Cube,
        ShapeKind::Cuboid,
        ShapeKind::Cone,
        ShapeKind::Sphere,
        ShapeKind::SquarePyramid,
        ShapeKind::Cylinder,
    ];

    /// Menu key ("1".."6")
    pub fn menu_key(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "1",
            ShapeKind::Cuboid => "2",
            ShapeKind::Cone => "3",
            ShapeKind::Sphere => "4",
            ShapeKind::SquarePyramid => "5",
            ShapeKind::Cylinder => "6",
        }
    }

    /// Title-case name shown in the menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Cuboid => "Cuboid",
            ShapeKind::Cone => "Cone",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::SquarePyramid => "Square Pyramid",
            ShapeKind::Cylinder => "Cylinder",
        }
    }

    /// Lower-case name used in result lines
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Cuboid => "cuboid",
            ShapeKind::Cone => "cone",
            ShapeKind::Sphere => "sphere",
            ShapeKind::SquarePyramid => "square pyramid",
            ShapeKind::Cylinder => "cylinder",
        }
    }

    /// Required dimensions, in the order they are asked for.
    pub fn dimensions(&self) -> &'static [DimensionSpec] {
        match self {
            ShapeKind::Cube => &CUBE_DIMS,
            ShapeKind::Cuboid => &CUBOID_DIMS,
            ShapeKind::Cone => &CONE_DIMS,
            ShapeKind::Sphere => &SPHERE_DIMS,
            ShapeKind::SquarePyramid => &SQUARE_PYRAMID_DIMS,
            ShapeKind::Cylinder => &CYLINDER_DIMS,
        }
    }

    /// Number of dimensions this shape needs
    pub fn arity(&self) -> usize {
        self.dimensions().len()
    }

    /// Message shown when one of this shape's dimensions fails to parse.
    ///
    /// Single-input shapes name the input; the others ask for "numbers".
    pub fn invalid_input_message(&self) -> String {
        match self.dimensions() {
            [only] => format!("Error: Invalid input. Please enter a number for the {}.", only.label),
            _ => "Error: Invalid input. Please enter numbers for the dimensions.".to_string(),
        }
    }
}

/// A top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "choice", content = "shape", rename_all = "snake_case")]
pub enum MenuChoice {
    Shape(ShapeKind),
    Exit,
}

impl MenuChoice {
    /// Menu key for the exit entry
    pub const EXIT_KEY: &'static str = "7";

    /// Every menu entry in display order
    pub fn all() -> impl Iterator<Item = MenuChoice> {
        ShapeKind::ALL
            .into_iter()
            .map(MenuChoice::Shape)
            .chain(std::iter::once(MenuChoice::Exit))
    }

    /// Match a raw selection against the menu keys.
    ///
    /// The comparison is exact: `" 1"` or `"1.0"` are not selections.
    pub fn parse(selection: &str) -> Option<MenuChoice> {
        MenuChoice::all().find(|choice| choice.menu_key() == selection)
    }

    pub fn menu_key(&self) -> &'static str {
        match self {
            MenuChoice::Shape(kind) => kind.menu_key(),
            MenuChoice::Exit => Self::EXIT_KEY,
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            MenuChoice::Shape(kind) => kind.menu_label(),
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Ordered dimension values for one shape.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "cone", "values": [3.0, 4.0] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    kind: ShapeKind,
    values: Vec<f64>,
}

impl Dimensions {
    /// Pair values with a shape, checking the count matches.
    pub fn new(kind: ShapeKind, values: Vec<f64>) -> CalcResult<Self> {
        if values.len() != kind.arity() {
            return Err(CalcError::dimension_count(kind.name(), kind.arity(), values.len()));
        }
        Ok(Dimensions { kind, values })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Look up a value by its field name
    pub fn get(&self, field: &str) -> Option<f64> {
        self.iter().find(|(spec, _)| spec.field == field).map(|(_, value)| value)
    }

    /// Iterate over (spec, value) pairs in prompt order
    pub fn iter(&self) -> impl Iterator<Item = (&'static DimensionSpec, f64)> + '_ {
        self.kind.dimensions().iter().zip(self.values.iter().copied())
    }

    pub fn evaluate(&self) -> CalcResult<ShapeResult> {
        evaluate(self.kind, &self.values)
    }
}

/// Surface area and volume of one solid.
///
/// ## JSON Example
///
/// ```json
/// { "surface_area": 24.0, "volume": 8.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeResult {
    pub surface_area: f64,
    pub volume: f64,
}

impl ShapeResult {
    pub fn new(surface_area: f64, volume: f64) -> Self {
        ShapeResult { surface_area, volume }
    }
}

/// Evaluate a shape's formulas.
///
/// # Arguments
///
/// * `kind` - Which solid
/// * `values` - Dimensions in [`ShapeKind::dimensions`] order
///
/// # Returns
///
/// * `Ok(ShapeResult)` - Surface area and volume
/// * `Err(CalcError::DimensionCount)` - If `values` has the wrong length
///
/// Values are never range-checked.
pub fn evaluate(kind: ShapeKind, values: &[f64]) -> CalcResult<ShapeResult> {
    let result = match (kind, values) {
        (ShapeKind::Cube, &[s]) => ShapeResult::new(solids::cube_surface_area(s), solids::cube_volume(s)),
        (ShapeKind::Cuboid, &[l, w, h]) => {
            ShapeResult::new(solids::cuboid_surface_area(l, w, h), solids::cuboid_volume(l, w, h))
        }
        (ShapeKind::Cone, &[r, h]) => ShapeResult::new(solids::cone_surface_area(r, h), solids::cone_volume(r, h)),
        (ShapeKind::Sphere, &[r]) => ShapeResult::new(solids::sphere_surface_area(r), solids::sphere_volume(r)),
        (ShapeKind::SquarePyramid, &[b, h]) => ShapeResult::new(
            solids::square_pyramid_surface_area(b, h),
            solids::square_pyramid_volume(b, h),
        ),
        (ShapeKind::Cylinder, &[r, h]) => {
            ShapeResult::new(solids::cylinder_surface_area(r, h), solids::cylinder_volume(r, h))
        }
        _ => return Err(CalcError::dimension_count(kind.name(), kind.arity(), values.len())),
    };
    Ok(result)
}

/// Parse one line of user text as a dimension.
///
/// Surrounding whitespace is ignored. Anything else `f64` refuses to parse
/// is an [`CalcError::InvalidInput`].
pub fn parse_dimension(field: &str, text: &str) -> CalcResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|e| CalcError::invalid_input(field, text, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_menu_keys_are_sequential() {
        let keys: Vec<&str> = MenuChoice::all().map(|c| c.menu_key()).collect();
        assert_eq!(keys, vec!["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Shape(ShapeKind::Cube)));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Shape(ShapeKind::SquarePyramid)));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse("1.0"), None);
        assert_eq!(MenuChoice::parse("cube"), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(ShapeKind::Cube.arity(), 1);
        assert_eq!(ShapeKind::Sphere.arity(), 1);
        assert_eq!(ShapeKind::Cone.arity(), 2);
        assert_eq!(ShapeKind::SquarePyramid.arity(), 2);
        assert_eq!(ShapeKind::Cylinder.arity(), 2);
        assert_eq!(ShapeKind::Cuboid.arity(), 3);
    }

    #[test]
    fn test_dimension_order() {
        let fields: Vec<&str> = ShapeKind::Cuboid.dimensions().iter().map(|d| d.field).collect();
        assert_eq!(fields, vec!["length", "width", "height"]);

        let fields: Vec<&str> = ShapeKind::SquarePyramid.dimensions().iter().map(|d| d.field).collect();
        assert_eq!(fields, vec!["base_side", "height"]);
    }

    #[test]
    fn test_invalid_input_messages() {
        assert_eq!(
            ShapeKind::Cube.invalid_input_message(),
            "Error: Invalid input. Please enter a number for the side length."
        );
        assert_eq!(
            ShapeKind::Sphere.invalid_input_message(),
            "Error: Invalid input. Please enter a number for the radius."
        );
        for kind in [ShapeKind::Cuboid, ShapeKind::Cone, ShapeKind::SquarePyramid, ShapeKind::Cylinder] {
            assert_eq!(
                kind.invalid_input_message(),
                "Error: Invalid input. Please enter numbers for the dimensions."
            );
        }
    }

    #[test]
    fn test_evaluate_cube() {
        let result = evaluate(ShapeKind::Cube, &[2.0]).unwrap();
        assert_eq!(result, ShapeResult::new(24.0, 8.0));
    }

    #[test]
    fn test_evaluate_each_shape() {
        let cases = [
            (ShapeKind::Cuboid, vec![2.0, 3.0, 4.0], 52.0, 24.0),
            (ShapeKind::Cone, vec![3.0, 4.0], 24.0 * PI, 12.0 * PI),
            (ShapeKind::Sphere, vec![3.0], 36.0 * PI, 36.0 * PI),
            (ShapeKind::SquarePyramid, vec![6.0, 4.0], 96.0, 48.0),
            (ShapeKind::Cylinder, vec![2.0, 5.0], 28.0 * PI, 20.0 * PI),
        ];
        for (kind, values, sa, v) in cases {
            let result = evaluate(kind, &values).unwrap();
            assert!((result.surface_area - sa).abs() < EPSILON, "{:?} SA = {}", kind, result.surface_area);
            assert!((result.volume - v).abs() < EPSILON, "{:?} V = {}", kind, result.volume);
        }
    }

    #[test]
    fn test_evaluate_wrong_arity() {
        let err = evaluate(ShapeKind::Cone, &[1.0]).unwrap_err();
        assert_eq!(err, CalcError::dimension_count("cone", 2, 1));
        assert!(Dimensions::new(ShapeKind::Cuboid, vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_dimensions_lookup() {
        let dims = Dimensions::new(ShapeKind::Cylinder, vec![1.5, 4.0]).unwrap();
        assert_eq!(dims.kind(), ShapeKind::Cylinder);
        assert_eq!(dims.get("radius"), Some(1.5));
        assert_eq!(dims.get("height"), Some(4.0));
        assert_eq!(dims.get("width"), None);
        assert_eq!(dims.values(), &[1.5, 4.0]);
    }

    #[test]
    fn test_zero_and_negative_dimensions_evaluate() {
        let result = evaluate(ShapeKind::Cube, &[0.0]).unwrap();
        assert_eq!(result, ShapeResult::new(0.0, 0.0));

        let result = evaluate(ShapeKind::Cube, &[-2.0]).unwrap();
        assert_eq!(result.surface_area, 24.0);
        assert_eq!(result.volume, -8.0);
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("side", "2").unwrap(), 2.0);
        assert_eq!(parse_dimension("side", "  3.5 ").unwrap(), 3.5);
        assert_eq!(parse_dimension("side", "-1e2").unwrap(), -100.0);

        let err = parse_dimension("length", "abc").unwrap_err();
        assert!(err.is_recoverable());
        match err {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "length");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(parse_dimension("radius", "").is_err());
    }

    #[test]
    fn test_serialization() {
        let dims = Dimensions::new(ShapeKind::SquarePyramid, vec![6.0, 4.0]).unwrap();
        let json = serde_json::to_string(&dims).unwrap();
        assert_eq!(json, r#"{"kind":"square_pyramid","values":[6.0,4.0]}"#);
        let roundtrip: Dimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(dims, roundtrip);

        let choice = serde_json::to_string(&MenuChoice::Exit).unwrap();
        assert_eq!(choice, r#"{"choice":"exit"}"#);
    }
}
