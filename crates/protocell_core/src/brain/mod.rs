pub mod forward;
pub mod topology;

use crate::config::EnvironmentConfig;
pub use protocell_data::{Activation, Approximator, DenseLayer, NetworkKind};
use protocell_data::{Result, ACTION_COUNT};
use rand::Rng;

pub use topology::{create_approximator_random_with_rng, dense_layer_random_with_rng};

/// Trait defining the core logic for the fixed-weight cell networks.
pub trait ApproximatorLogic {
    fn new_random(kind: NetworkKind, shape: &NetworkShape) -> Self;
    fn new_random_with_rng<R: Rng>(kind: NetworkKind, shape: &NetworkShape, rng: &mut R) -> Self;

    /// Assembles a network from explicit layers, checking that they chain.
    fn from_layers(kind: NetworkKind, layers: Vec<DenseLayer>) -> Result<Self>
    where
        Self: Sized;

    /// Runs the network on `input`, which must be exactly `input_width()` long.
    fn evaluate(&self, input: &[f32]) -> Result<Vec<f32>>;

    fn parameter_count(&self) -> usize;
}

pub const METABOLISM_HIDDEN: [usize; 2] = [16, 8];
pub const HOMEOSTASIS_HIDDEN: [usize; 2] = [32, 16];
pub const ACTION_HIDDEN: [usize; 2] = [32, 16];

pub const METABOLISM_OUTPUTS: usize = 1;
pub const HOMEOSTASIS_OUTPUTS: usize = 3;

pub const ACTION_INPUT_LABELS: [&str; 7] = [
    "Energy",
    "Age",
    "Resp0",
    "Resp1",
    "Resp2",
    "EnergyDelta",
    "Survival",
];

pub const ACTION_INPUTS: usize = ACTION_INPUT_LABELS.len();
pub const ACTION_OUTPUTS: usize = ACTION_COUNT;

/// Layer widths and output nonlinearity of one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkShape {
    pub inputs: usize,
    pub hidden: [usize; 2],
    pub outputs: usize,
    pub output_activation: Activation,
}

impl NetworkShape {
    /// Shape of `kind` for a deployment with the given environment channels.
    #[must_use]
    pub fn for_kind(kind: NetworkKind, env: &EnvironmentConfig) -> Self {
        match kind {
            NetworkKind::Metabolism => Self {
                inputs: env.metabolism_inputs(),
                hidden: METABOLISM_HIDDEN,
                outputs: METABOLISM_OUTPUTS,
                output_activation: Activation::Sigmoid,
            },
            NetworkKind::Homeostasis => Self {
                inputs: env.homeostasis_inputs(),
                hidden: HOMEOSTASIS_HIDDEN,
                outputs: HOMEOSTASIS_OUTPUTS,
                output_activation: Activation::Sigmoid,
            },
            NetworkKind::Action => Self {
                inputs: ACTION_INPUTS,
                hidden: ACTION_HIDDEN,
                outputs: ACTION_OUTPUTS,
                output_activation: Activation::Softmax,
            },
        }
    }
}

impl ApproximatorLogic for Approximator {
    fn new_random(kind: NetworkKind, shape: &NetworkShape) -> Self {
        let mut rng = rand::thread_rng();
        Self::new_random_with_rng(kind, shape, &mut rng)
    }

    fn new_random_with_rng<R: Rng>(kind: NetworkKind, shape: &NetworkShape, rng: &mut R) -> Self {
        topology::create_approximator_random_with_rng(kind, shape, rng)
    }

    fn from_layers(kind: NetworkKind, layers: Vec<DenseLayer>) -> Result<Self> {
        topology::check_layers(kind, &layers)?;
        Ok(Self { kind, layers })
    }

    fn evaluate(&self, input: &[f32]) -> Result<Vec<f32>> {
        forward::evaluate(self, input)
    }

    fn parameter_count(&self) -> usize {
        self.layers
            .iter()
            .map(|l| l.weights.len() + l.bias.len())
            .sum()
    }
}
