//! # Protocell Core
//!
//! The step protocol for a single artificial cell driven by three small
//! fixed-weight networks.
//!
//! This crate contains:
//! - Dense feed-forward approximators (metabolism, homeostasis, action)
//! - The cell state machine: stepping, the division gate, division
//! - Fitness scoring
//! - Configuration and structured logging
//!
//! ## Example
//!
//! ```
//! use protocell_core::cell::Cell;
//! use protocell_core::fitness::calculate_fitness;
//! use protocell_data::EnvironmentReading;
//!
//! let mut cell = Cell::new();
//! let reading = EnvironmentReading::standard(0.3, [0.5, 0.2]).unwrap();
//!
//! let result = cell.simulate_step(&reading).unwrap();
//! assert_eq!(result.age, 1.0);
//! assert!((result.actions.sum() - 1.0).abs() < 1e-5);
//!
//! let _fitness = calculate_fitness(&result);
//! if cell.should_divide() {
//!     let _daughter = cell.divide();
//! }
//! ```

/// Fixed-weight feed-forward networks
pub mod brain;
/// The cell state machine
pub mod cell;
/// Configuration management for cell parameters
pub mod config;
/// Fitness scoring
pub mod fitness;
/// Metrics collection and structured logging
pub mod metrics;

pub use brain::{ApproximatorLogic, NetworkShape};
pub use cell::{Cell, CellNetworks};
pub use fitness::{calculate_fitness, Vitals};
pub use metrics::{init_logging, Metrics};
pub use protocell_data::{CellError, EnvironmentReading, StepResult};
