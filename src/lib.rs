//! tire-kit: tire value model and wheel formatting helpers
//!
//! The crate models a tire (`Tire`, `Size`, `Material`), generates tires with
//! plausible random values, and renders sequences of wheel identifiers for
//! display. The same surface is exported over a C ABI and, with the `python`
//! feature, as a Python extension module.
//!
//! # Example
//!
//! ```
//! use tire_kit::GeneratorConfig;
//! use tire_kit::Material;
//! use tire_kit::RngSource;
//! use tire_kit::TireGenerator;
//!
//! let config = GeneratorConfig::default().with_materials([Material::Rubber]);
//! let mut generator = TireGenerator::new(config, RngSource::seeded(7)).unwrap();
//!
//! let tire = generator.generate();
//! assert_eq!(tire.material, Material::Rubber);
//! assert!(tire.pressure >= 30.0 && tire.pressure < 60.0);
//!
//! assert_eq!(
//!     tire_kit::format_wheel_identifier(&[77, 42, 69]),
//!     "Wheel identifier: [77, 42, 69]"
//! );
//! ```

pub mod error;
pub mod ffi;
pub mod format;
pub mod generator;
pub mod model;

#[cfg(feature = "python")]
mod python;

use tracing::debug;

pub use error::ConfigError;
pub use error::MaterialParseError;
pub use format::WheelLayout;
pub use format::format_size_of_wheels;
pub use format::format_wheel_identifier;
pub use generator::GeneratorConfig;
pub use generator::RandomSource;
pub use generator::RngSource;
pub use generator::SequenceSource;
pub use generator::TireGenerator;
pub use generator::ValueRange;
pub use generator::create_random_tire;
pub use generator::create_random_tires;
pub use model::Material;
pub use model::Size;
pub use model::Tire;
pub use model::wheel_size_aspect;

/// Call with nothing to return, for checking that callers across a binding
/// boundary can invoke and discard a unit result.
pub fn func_with_no_return() {
    debug!("func_with_no_return called, no return value");
}
