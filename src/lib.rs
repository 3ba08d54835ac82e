//! Vitals Toolkit Library
//!
//! Small health calculators: hydration needs, body temperature analysis and
//! respiratory classification.

pub mod build_info;
pub mod error;
pub mod hydration;
pub mod respiratory;
pub mod temperature;

pub use error::{HealthError, HealthResult};
