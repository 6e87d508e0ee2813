use super::topology::check_layers;
use protocell_data::{Activation, Approximator, CellError, DenseLayer, Result};

/// Runs `net` on `input`.
///
/// Layers are public and may have been edited since construction, so their
/// shapes are checked here before any weight is read.
pub fn evaluate(net: &Approximator, input: &[f32]) -> Result<Vec<f32>> {
    check_layers(net.kind, &net.layers)?;
    let expected = net.input_width();
    if input.len() != expected {
        return Err(CellError::shape_mismatch(net.kind, expected, input.len()));
    }

    let mut values = input.to_vec();
    for layer in &net.layers {
        values = layer_forward(layer, &values);
    }
    Ok(values)
}

fn layer_forward(layer: &DenseLayer, inputs: &[f32]) -> Vec<f32> {
    let mut output = layer.bias.clone();
    for (i, o) in output.iter_mut().enumerate() {
        for (j, &x) in inputs.iter().enumerate() {
            *o += x * layer.weights[j * layer.outputs + i];
        }
    }

    match layer.activation {
        Activation::Relu => output.iter_mut().for_each(|o| *o = relu(*o)),
        Activation::Sigmoid => output.iter_mut().for_each(|o| *o = sigmoid(*o)),
        Activation::Softmax => softmax(&mut output),
    }
    output
}

#[inline]
pub fn relu(x: f32) -> f32 {
    x.max(0.0)
}

#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// In-place softmax. Subtracts the max first so large logits don't overflow.
pub fn softmax(values: &mut [f32]) {
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mut sum = 0.0;
    for v in values.iter_mut() {
        *v = (*v - max).exp();
        sum += *v;
    }
    for v in values.iter_mut() {
        *v /= sum;
    }
}
