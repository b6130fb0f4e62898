//! Deterministic match statistics: expected corners with a suggested line, and
//! goal-threshold probabilities, both derived from per-team historical numbers.

pub mod analysis;
pub mod corners;
pub mod goals;
pub mod loader;
pub mod model;
pub mod numeric;
pub mod policy;
