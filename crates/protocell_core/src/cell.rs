//! The artificial cell state machine.
//!
//! Each tick chains three networks: metabolism turns the environment and
//! current energy into an energy delta, homeostasis turns the updated
//! internal state into three response signals, and the action network turns
//! all of that into a distribution over [`protocell_data::Action`].

use crate::brain::{ApproximatorLogic, NetworkShape, HOMEOSTASIS_OUTPUTS, METABOLISM_OUTPUTS};
use crate::config::{AppConfig, EnvironmentConfig};
use protocell_data::{
    ActionVector, Approximator, CellError, CellState, EnvironmentReading, Identity, NetworkKind,
    Result, StepResult, ACTION_COUNT,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use uuid::Uuid;

/// The three networks a cell owns. Never shared between cells.
#[derive(Debug, Clone, PartialEq)]
pub struct CellNetworks {
    pub metabolism: Approximator,
    pub homeostasis: Approximator,
    pub action: Approximator,
}

impl CellNetworks {
    pub fn new_random_with_rng<R: Rng>(env: &EnvironmentConfig, rng: &mut R) -> Self {
        let build = |kind: NetworkKind, rng: &mut R| {
            Approximator::new_random_with_rng(kind, &NetworkShape::for_kind(kind, env), rng)
        };
        Self {
            metabolism: build(NetworkKind::Metabolism, rng),
            homeostasis: build(NetworkKind::Homeostasis, rng),
            action: build(NetworkKind::Action, rng),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    identity: Identity,
    state: CellState,
    networks: CellNetworks,
    config: Arc<AppConfig>,
    /// Source for daughter networks in [`Cell::divide`].
    rng: ChaCha8Rng,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Fresh cell with the reference parameters: full energy, age zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Arc::new(AppConfig::default()))
    }

    /// Fresh cell under `config`. Deterministic when `config.seed` is set.
    #[must_use]
    pub fn with_config(config: Arc<AppConfig>) -> Self {
        match config.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                Self::new_with_rng(config, &mut rng)
            }
            None => {
                let mut rng = ChaCha8Rng::from_entropy();
                Self::new_with_rng(config, &mut rng)
            }
        }
    }

    /// Draws the networks and the cell's own division rng from `rng`.
    ///
    /// Ids are always random v4 uuids, so two cells from the same seed
    /// behave identically but are still told apart.
    pub fn new_with_rng<R: Rng>(config: Arc<AppConfig>, rng: &mut R) -> Self {
        let networks = CellNetworks::new_random_with_rng(&config.environment, rng);
        let own_rng = ChaCha8Rng::seed_from_u64(rng.gen());
        Self {
            identity: Identity {
                id: Uuid::new_v4(),
                parent_id: None,
            },
            state: CellState::default(),
            networks,
            config,
            rng: own_rng,
        }
    }

    /// Replaces the scalar state of a cell that has not been handed out yet.
    #[must_use]
    pub fn with_state(mut self, state: CellState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.identity.id
    }

    #[must_use]
    pub fn parent_id(&self) -> Option<Uuid> {
        self.identity.parent_id
    }

    #[must_use]
    pub fn state(&self) -> &CellState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn networks(&self) -> &CellNetworks {
        &self.networks
    }

    pub fn networks_mut(&mut self) -> &mut CellNetworks {
        &mut self.networks
    }

    /// Advances the cell by one tick.
    ///
    /// Every intermediate value is computed before anything is written back,
    /// so an error leaves the state exactly as it was.
    pub fn simulate_step(&mut self, reading: &EnvironmentReading) -> Result<StepResult> {
        self.check_channels(reading)?;
        let state = self.state;

        let mut metabolism_input = Vec::with_capacity(self.networks.metabolism.input_width());
        metabolism_input.extend_from_slice(&reading.nutrients);
        metabolism_input.push(reading.temperature);
        metabolism_input.extend_from_slice(&reading.chemicals);
        metabolism_input.push(state.energy_level);
        let metabolism_output = self.networks.metabolism.evaluate(&metabolism_input)?;
        let energy_delta =
            expect_width(NetworkKind::Metabolism, &metabolism_output, METABOLISM_OUTPUTS)?[0];

        let energy_level =
            (state.energy_level + energy_delta - self.config.metabolism.rate).clamp(0.0, 1.0);

        let mut homeostasis_input = Vec::with_capacity(self.networks.homeostasis.input_width());
        homeostasis_input.push(energy_level);
        homeostasis_input.push(reading.temperature);
        homeostasis_input.extend_from_slice(&reading.chemicals);
        homeostasis_input.push(state.age);
        homeostasis_input.push(state.survival_time);
        let response = self.networks.homeostasis.evaluate(&homeostasis_input)?;
        let response = expect_width(NetworkKind::Homeostasis, &response, HOMEOSTASIS_OUTPUTS)?;

        let mut action_input = Vec::with_capacity(self.networks.action.input_width());
        action_input.push(energy_level);
        action_input.push(state.age);
        action_input.extend_from_slice(response);
        action_input.push(energy_delta);
        action_input.push(state.survival_time);
        let actions = self.networks.action.evaluate(&action_input)?;
        let actions: [f32; ACTION_COUNT] = actions.as_slice().try_into().map_err(|_| {
            CellError::shape_mismatch(NetworkKind::Action, ACTION_COUNT, actions.len())
        })?;

        self.state.energy_level = energy_level;
        self.state.age += 1.0;
        self.state.survival_time += 1.0;

        tracing::trace!(
            cell = %self.identity.id,
            energy = self.state.energy_level,
            energy_delta = energy_delta,
            age = self.state.age,
            "Cell step"
        );

        Ok(StepResult {
            actions: ActionVector::new(actions),
            energy_level: self.state.energy_level,
            age: self.state.age,
            survival_time: self.state.survival_time,
        })
    }

    /// Rejects a reading whose channel counts differ from the configured
    /// layout. Reported against metabolism, the first network to read them.
    fn check_channels(&self, reading: &EnvironmentReading) -> Result<()> {
        let env = &self.config.environment;
        let nutrients = reading.nutrients.len();
        let chemicals = reading.chemicals.len();
        if nutrients != env.nutrient_channels || chemicals != env.chemical_channels {
            tracing::debug!(
                nutrients,
                chemicals,
                expected_nutrients = env.nutrient_channels,
                expected_chemicals = env.chemical_channels,
                "Reading does not match environment layout"
            );
            let actual = if nutrients != env.nutrient_channels {
                nutrients + env.chemical_channels + 2
            } else {
                env.nutrient_channels + chemicals + 2
            };
            return Err(CellError::shape_mismatch(
                NetworkKind::Metabolism,
                env.metabolism_inputs(),
                actual,
            ));
        }
        Ok(())
    }

    /// Whether both energy and age are strictly above the division gate.
    #[must_use]
    pub fn should_divide(&self) -> bool {
        let gate = &self.config.division;
        self.state.energy_level > gate.energy_threshold && self.state.age > gate.maturity_age
    }

    /// Splits off a daughter cell with freshly initialised networks.
    ///
    /// Does not consult [`Cell::should_divide`]; callers gate on it. Energy is
    /// split evenly with the daughter. The parent's age restarts at zero but
    /// its survival time carries on. The daughter's networks come from this
    /// cell's own rng, so seeded lineages replay exactly.
    pub fn divide(&mut self) -> Cell {
        let mut rng = self.rng.clone();
        let daughter = self.divide_with_rng(&mut rng);
        self.rng = rng;
        daughter
    }

    pub fn divide_with_rng<R: Rng>(&mut self, rng: &mut R) -> Cell {
        let half = self.state.energy_level / 2.0;

        let mut daughter = Cell::new_with_rng(Arc::clone(&self.config), rng);
        daughter.identity.parent_id = Some(self.identity.id);
        daughter.state.energy_level = half;
        daughter.state.generation = self.state.generation + 1;

        self.state.energy_level = half;
        self.state.age = 0.0;
        self.state.divisions += 1;

        tracing::debug!(
            parent = %self.identity.id,
            daughter = %daughter.identity.id,
            energy = half,
            generation = daughter.state.generation,
            "Cell divided"
        );

        daughter
    }

    /// Fitness under this cell's configured scale.
    #[must_use]
    pub fn fitness(&self) -> f32 {
        crate::fitness::calculate_fitness_with(&self.state, self.config.fitness.scale)
    }
}

fn expect_width(network: NetworkKind, values: &[f32], width: usize) -> Result<&[f32]> {
    if values.len() == width {
        Ok(values)
    } else {
        Err(CellError::shape_mismatch(network, width, values.len()))
    }
}
