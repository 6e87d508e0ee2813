//! Scalar fitness of a cell snapshot.

use crate::cell::Cell;
use crate::config::FITNESS_SCALE;
use protocell_data::{CellState, StepResult};

/// Anything carrying the two quantities fitness is computed from.
pub trait Vitals {
    fn survival_time(&self) -> f32;
    fn energy_level(&self) -> f32;
}

impl Vitals for StepResult {
    fn survival_time(&self) -> f32 {
        self.survival_time
    }

    fn energy_level(&self) -> f32 {
        self.energy_level
    }
}

impl Vitals for CellState {
    fn survival_time(&self) -> f32 {
        self.survival_time
    }

    fn energy_level(&self) -> f32 {
        self.energy_level
    }
}

impl Vitals for Cell {
    fn survival_time(&self) -> f32 {
        self.state().survival_time
    }

    fn energy_level(&self) -> f32 {
        self.state().energy_level
    }
}

/// `survival_time * energy_level / 100`.
#[must_use]
pub fn calculate_fitness<V: Vitals + ?Sized>(snapshot: &V) -> f32 {
    calculate_fitness_with(snapshot, FITNESS_SCALE)
}

#[must_use]
pub fn calculate_fitness_with<V: Vitals + ?Sized>(snapshot: &V, scale: f32) -> f32 {
    (snapshot.survival_time() * snapshot.energy_level()) / scale
}
