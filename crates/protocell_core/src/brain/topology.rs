use super::NetworkShape;
use protocell_data::{Activation, Approximator, CellError, DenseLayer, NetworkKind, Result};
use rand::Rng;

/// Builds input -> hidden(relu) -> hidden(relu) -> output for `shape`.
pub fn create_approximator_random_with_rng<R: Rng>(
    kind: NetworkKind,
    shape: &NetworkShape,
    rng: &mut R,
) -> Approximator {
    let widths = [shape.inputs, shape.hidden[0], shape.hidden[1], shape.outputs];
    let activations = [Activation::Relu, Activation::Relu, shape.output_activation];

    let layers = widths
        .windows(2)
        .zip(activations)
        .map(|(w, activation)| dense_layer_random_with_rng(w[0], w[1], activation, rng))
        .collect();

    Approximator { kind, layers }
}

/// Glorot-uniform weights, zero biases.
pub fn dense_layer_random_with_rng<R: Rng>(
    inputs: usize,
    outputs: usize,
    activation: Activation,
    rng: &mut R,
) -> DenseLayer {
    let limit = (6.0 / (inputs + outputs).max(1) as f32).sqrt();
    let weights = (0..inputs * outputs)
        .map(|_| rng.gen_range(-limit..limit))
        .collect();

    DenseLayer {
        inputs,
        outputs,
        weights,
        bias: vec![0.0; outputs],
        activation,
    }
}

pub fn check_layers(kind: NetworkKind, layers: &[DenseLayer]) -> Result<()> {
    if layers.is_empty() {
        return Err(CellError::shape_mismatch(kind, 1, 0));
    }

    for layer in layers {
        let expected = layer.inputs * layer.outputs;
        if layer.weights.len() != expected {
            return Err(CellError::shape_mismatch(kind, expected, layer.weights.len()));
        }
        if layer.bias.len() != layer.outputs {
            return Err(CellError::shape_mismatch(
                kind,
                layer.outputs,
                layer.bias.len(),
            ));
        }
    }

    for pair in layers.windows(2) {
        if pair[0].outputs != pair[1].inputs {
            return Err(CellError::shape_mismatch(
                kind,
                pair[0].outputs,
                pair[1].inputs,
            ));
        }
    }
    Ok(())
}
