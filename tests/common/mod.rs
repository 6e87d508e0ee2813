use protocell_lib::model::cell::Cell;
use protocell_lib::model::config::AppConfig;
use protocell_lib::model::state::{CellState, EnvironmentReading};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

#[allow(dead_code)]
pub struct CellBuilder {
    config: AppConfig,
    state: CellState,
    seed: u64,
}

#[allow(dead_code)]
impl CellBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            state: CellState::default(),
            seed: 42,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_energy(mut self, energy: f32) -> Self {
        self.state.energy_level = energy;
        self
    }

    pub fn with_age(mut self, age: f32) -> Self {
        self.state.age = age;
        self.state.survival_time = self.state.survival_time.max(age);
        self
    }

    pub fn build(self) -> Cell {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        Cell::new_with_rng(Arc::new(self.config), &mut rng).with_state(self.state)
    }
}

#[allow(dead_code)]
pub fn reading() -> EnvironmentReading {
    EnvironmentReading::standard(0.3, [0.5, 0.2]).expect("valid reading")
}
