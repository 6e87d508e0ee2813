use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the three cell networks an approximator plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkKind {
    /// Environment + energy -> energy production rate.
    Metabolism,
    /// Internal state + environment -> homeostatic responses.
    Homeostasis,
    /// Internal state + responses -> action distribution.
    Action,
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NetworkKind::Metabolism => "metabolism",
            NetworkKind::Homeostasis => "homeostasis",
            NetworkKind::Action => "action",
        };
        f.write_str(name)
    }
}

/// Nonlinearity applied to a layer's pre-activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Relu,
    Sigmoid,
    /// Applied across the whole layer, not per unit.
    Softmax,
}

/// Fully connected layer.
///
/// `weights` is row-major by input: the weight from input `j` to unit `i`
/// lives at `j * outputs + i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    pub inputs: usize,
    pub outputs: usize,
    pub weights: Vec<f32>,
    pub bias: Vec<f32>,
    pub activation: Activation,
}

/// A fixed-weight feed-forward network owned by one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approximator {
    pub kind: NetworkKind,
    pub layers: Vec<DenseLayer>,
}

impl Approximator {
    #[must_use]
    pub fn input_width(&self) -> usize {
        self.layers.first().map_or(0, |l| l.inputs)
    }

    #[must_use]
    pub fn output_width(&self) -> usize {
        self.layers.last().map_or(0, |l| l.outputs)
    }
}
