//! Tire value types

mod types;

pub use types::Material;
pub use types::Size;
pub use types::Tire;
pub use types::wheel_size_aspect;
