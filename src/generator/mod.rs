//! Random tire generation

mod config;
mod source;
mod tire;

pub use config::DEFAULT_HEIGHT;
pub use config::DEFAULT_PRESSURE;
pub use config::DEFAULT_WIDTH;
pub use config::GeneratorConfig;
pub use config::ValueRange;
pub use source::RandomSource;
pub use source::RngSource;
pub use source::SequenceSource;
pub use tire::TireGenerator;
pub use tire::create_random_tire;
pub use tire::create_random_tires;
