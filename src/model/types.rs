//! Size, material and tire records

use std::fmt;
use std::str::FromStr;

use crate::error::MaterialParseError;

/// Material a tire is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "python", pyo3::pyclass(eq, eq_int))]
#[repr(C)]
pub enum Material {
    Plastic = 0,
    Rubber = 1,
    SyntheticRubber = 2,
    Polyurethane = 3,
    Foam = 4,
}

impl Material {
    /// Every material, in declaration order
    pub const ALL: [Material; 5] = [
        Material::Plastic,
        Material::Rubber,
        Material::SyntheticRubber,
        Material::Polyurethane,
        Material::Foam,
    ];

    /// Stable display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Plastic => "Plastic",
            Material::Rubber => "Rubber",
            Material::SyntheticRubber => "SyntheticRubber",
            Material::Polyurethane => "Polyurethane",
            Material::Foam => "Foam",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = MaterialParseError;

    /// Parse a material name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Material::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MaterialParseError(s.to_string()))
    }
}

/// Width and height of a tire
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        debug_assert!(
            width.is_finite() && width >= 0.0,
            "width must be finite and non-negative, got {width}"
        );
        debug_assert!(
            height.is_finite() && height >= 0.0,
            "height must be finite and non-negative, got {height}"
        );
        Self { width, height }
    }

    /// Height as a percentage of width
    pub fn aspect_ratio(&self) -> f64 {
        wheel_size_aspect(self.height, self.width)
    }
}

/// A single tire
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Tire {
    pub material: Material,
    pub pressure: f64,
    pub size: Size,
}

impl Tire {
    pub fn new(material: Material, pressure: f64, size: Size) -> Self {
        debug_assert!(
            pressure.is_finite() && pressure >= 0.0,
            "pressure must be finite and non-negative, got {pressure}"
        );
        Self {
            material,
            pressure,
            size,
        }
    }
}

/// Compute the aspect ratio of a wheel as `height / width * 100`.
///
/// A zero width yields `0.0` rather than infinity.
pub fn wheel_size_aspect(height: f64, width: f64) -> f64 {
    if width == 0.0 {
        return 0.0;
    }
    (height / width) * 100.0
}
