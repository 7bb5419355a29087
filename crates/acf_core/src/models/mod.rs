//! Shared data models.

mod enums;

pub use enums::CorrelationMethod;
