//! Single artificial cell driven by three fixed-weight networks.
//!
//! The implementation lives in `protocell_data` (plain data) and
//! `protocell_core` (step protocol, division, fitness). This crate gathers
//! both under [`model`].

pub mod model;

pub use model::cell::Cell;
pub use model::fitness::calculate_fitness;
pub use model::state::{CellError, EnvironmentReading, StepResult};
