//! Core data structures for the protocell simulation.
//!
//! Everything in this crate is plain data: the environment reading a cell is
//! stepped against, the scalar cell state, the per-tick snapshot, and the
//! fixed weight tables of the three cell networks. The logic that drives
//! them lives in `protocell_core`.

pub mod data;
pub mod error;

pub use data::cell::{Action, ActionVector, CellState, Identity, StepResult, ACTION_COUNT};
pub use data::environment::EnvironmentReading;
pub use data::network::{Activation, Approximator, DenseLayer, NetworkKind};
pub use error::{CellError, Result};
