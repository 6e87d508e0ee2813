//! Metrics collection for cell runs.
//!
//! Provides structured logging and counters for whoever drives the cells.
//! Nothing in the step protocol depends on it.

use crate::fitness::calculate_fitness;
use protocell_data::{CellError, StepResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Steps between periodic info-level summaries.
const LOG_INTERVAL: u64 = 1000;

pub struct Metrics {
    step_count: AtomicU64,
    division_count: AtomicU64,
    rejection_count: AtomicU64,
    last_fitness: AtomicU32,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_count: AtomicU64::new(0),
            division_count: AtomicU64::new(0),
            rejection_count: AtomicU64::new(0),
            last_fitness: AtomicU32::new(0.0f32.to_bits()),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed step.
    pub fn record_step(&self, result: &StepResult) {
        let step = self.step_count.fetch_add(1, Ordering::Relaxed) + 1;
        let fitness = calculate_fitness(result);
        self.last_fitness.store(fitness.to_bits(), Ordering::Relaxed);

        if step % LOG_INTERVAL == 0 {
            tracing::info!(
                step = step,
                energy = result.energy_level,
                age = result.age,
                fitness = fitness,
                action = result.actions.dominant().label(),
                "Cell progress"
            );
        }
    }

    pub fn record_division(&self) {
        self.division_count.fetch_add(1, Ordering::Relaxed);
        self.increment_counter("division");
    }

    /// Records a step the cell refused.
    pub fn record_rejection(&self, error: &CellError) {
        self.rejection_count.fetch_add(1, Ordering::Relaxed);
        self.increment_counter(error.kind());
        tracing::warn!(error = %error, "Step rejected");
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn division_count(&self) -> u64 {
        self.division_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn rejection_count(&self) -> u64 {
        self.rejection_count.load(Ordering::Relaxed)
    }

    /// Fitness of the most recently recorded step.
    #[must_use]
    pub fn last_fitness(&self) -> f32 {
        f32::from_bits(self.last_fitness.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging. Honours `RUST_LOG`, default `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
