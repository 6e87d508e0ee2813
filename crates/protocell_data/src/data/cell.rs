use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of actions the action network chooses between.
pub const ACTION_COUNT: usize = 4;

/// Behaviours a cell expresses intent over, in action-network output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Explore the environment.
    Movement,
    /// Take up nutrients.
    Uptake,
    /// Expel waste.
    Excretion,
    /// Split into two cells.
    Division,
}

impl Action {
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::Movement,
        Action::Uptake,
        Action::Excretion,
        Action::Division,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Action::Movement => "Movement",
            Action::Uptake => "Uptake",
            Action::Excretion => "Excretion",
            Action::Division => "Division",
        }
    }
}

/// Probability distribution over [`Action::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionVector(pub [f32; ACTION_COUNT]);

impl ActionVector {
    #[must_use]
    pub fn new(probabilities: [f32; ACTION_COUNT]) -> Self {
        Self(probabilities)
    }

    #[must_use]
    pub fn probability(&self, action: Action) -> f32 {
        self.0[action.index()]
    }

    /// Most likely action. Ties go to the earliest action.
    #[must_use]
    pub fn dominant(&self) -> Action {
        let mut best = 0;
        for i in 1..ACTION_COUNT {
            if self.0[i] > self.0[best] {
                best = i;
            }
        }
        Action::ALL[best]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, f32)> + '_ {
        Action::ALL.iter().map(move |&a| (a, self.0[a.index()]))
    }

    #[must_use]
    pub fn sum(&self) -> f32 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn as_array(&self) -> &[f32; ACTION_COUNT] {
        &self.0
    }
}

/// Scalar internal state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellState {
    /// Stored energy, clamped to `[0, 1]`.
    pub energy_level: f32,
    /// Ticks since birth or last division.
    pub age: f32,
    /// Ticks since birth; division does not reset it.
    pub survival_time: f32,
    /// Number of divisions between this cell and its founding ancestor.
    pub generation: u32,
    /// Daughters this cell has produced.
    pub divisions: u32,
}

impl Default for CellState {
    fn default() -> Self {
        Self {
            energy_level: 1.0,
            age: 0.0,
            survival_time: 0.0,
            generation: 0,
            divisions: 0,
        }
    }
}

/// Unique identification of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
}

/// Immutable snapshot returned from every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub actions: ActionVector,
    pub energy_level: f32,
    pub age: f32,
    pub survival_time: f32,
}
