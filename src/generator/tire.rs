//! Tire generator

use rand::rngs::ThreadRng;
use rayon::prelude::*;
use tracing::debug;
use tracing::trace;

use super::config::GeneratorConfig;
use super::source::RandomSource;
use super::source::RngSource;
use crate::error::ConfigError;
use crate::model::Size;
use crate::model::Tire;

/// Produces tires with values drawn from a [`RandomSource`] within the
/// bounds of a validated [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct TireGenerator<S> {
    config: GeneratorConfig,
    source: S,
}

impl<S: RandomSource> TireGenerator<S> {
    /// Create a generator, rejecting configs that could yield invalid tires
    pub fn new(config: GeneratorConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            pressure = ?config.pressure,
            width = ?config.width,
            height = ?config.height,
            materials = config.materials.len(),
            "Tire generator configured"
        );
        Ok(Self { config, source })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the next tire
    pub fn generate(&mut self) -> Tire {
        let config = &self.config;
        let material = config.materials[self.source.next_index(config.materials.len())];
        let pressure = self
            .source
            .next_in_range(config.pressure.min, config.pressure.max);
        let width = self.source.next_in_range(config.width.min, config.width.max);
        let height = self
            .source
            .next_in_range(config.height.min, config.height.max);

        let tire = Tire::new(material, pressure, Size::new(width, height));
        trace!(
            material = %tire.material,
            pressure = tire.pressure,
            width = tire.size.width,
            height = tire.size.height,
            "Generated tire"
        );
        tire
    }
}

impl TireGenerator<RngSource<ThreadRng>> {
    /// Generator using the default config and the calling thread's RNG
    pub fn thread_default() -> Self {
        // The default config always validates.
        Self {
            config: GeneratorConfig::default(),
            source: RngSource::thread(),
        }
    }
}

/// Create a tire with random pressure, material and size
pub fn create_random_tire() -> Tire {
    TireGenerator::thread_default().generate()
}

/// Create `count` random tires, spread across the rayon thread pool
pub fn create_random_tires(count: usize) -> Vec<Tire> {
    (0..count)
        .into_par_iter()
        .map_init(TireGenerator::thread_default, |generator, _| {
            generator.generate()
        })
        .collect()
}
