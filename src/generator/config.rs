//! Bounds used when sampling tire values

use crate::error::ConfigError;
use crate::model::Material;

/// Default tire pressure bounds
pub const DEFAULT_PRESSURE: ValueRange = ValueRange::new(30.0, 60.0);
/// Default tire width bounds
pub const DEFAULT_WIDTH: ValueRange = ValueRange::new(5.0, 10.0);
/// Default tire height bounds
pub const DEFAULT_HEIGHT: ValueRange = ValueRange::new(10.0, 20.0);

/// Half-open sampling range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range. An empty range contains only `min`.
    pub fn contains(&self, value: f64) -> bool {
        if self.min == self.max {
            return value == self.min;
        }
        value >= self.min && value < self.max
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        for value in [self.min, self.max] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.min < 0.0 {
            return Err(ConfigError::Negative {
                field,
                min: self.min,
            });
        }
        if self.min > self.max {
            return Err(ConfigError::Inverted {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Settings for a [`TireGenerator`](super::TireGenerator)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    pub pressure: ValueRange,
    pub width: ValueRange,
    pub height: ValueRange,
    /// Materials to pick from, uniformly
    pub materials: Vec<Material>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pressure: DEFAULT_PRESSURE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            materials: Material::ALL.to_vec(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_pressure(mut self, min: f64, max: f64) -> Self {
        self.pressure = ValueRange::new(min, max);
        self
    }

    pub fn with_width(mut self, min: f64, max: f64) -> Self {
        self.width = ValueRange::new(min, max);
        self
    }

    pub fn with_height(mut self, min: f64, max: f64) -> Self {
        self.height = ValueRange::new(min, max);
        self
    }

    pub fn with_materials(mut self, materials: impl Into<Vec<Material>>) -> Self {
        self.materials = materials.into();
        self
    }

    /// Check that every range is finite, non-negative and ordered, and that
    /// at least one material is available.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pressure.validate("pressure")?;
        self.width.validate("width")?;
        self.height.validate("height")?;
        if self.materials.is_empty() {
            return Err(ConfigError::NoMaterials);
        }
        Ok(())
    }
}
