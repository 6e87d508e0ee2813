use crate::error::{CellError, Result};
use serde::{Deserialize, Serialize};

/// One tick's worth of external conditions a cell is stepped against.
///
/// Channel counts are fixed per deployment and must match the widths the
/// cell's networks were built for. Fields are public; [`EnvironmentReading::new`]
/// is the validating constructor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnvironmentReading {
    /// Nutrient availability per channel.
    pub nutrients: Vec<f32>,
    /// Ambient temperature.
    pub temperature: f32,
    /// Chemical gradient per channel.
    pub chemicals: Vec<f32>,
}

impl EnvironmentReading {
    /// Builds a reading, rejecting negative or non-finite values.
    pub fn new(nutrients: Vec<f32>, temperature: f32, chemicals: Vec<f32>) -> Result<Self> {
        check_value("temperature", temperature)?;
        for &n in &nutrients {
            check_value("nutrients", n)?;
        }
        for &c in &chemicals {
            check_value("chemicals", c)?;
        }
        Ok(Self {
            nutrients,
            temperature,
            chemicals,
        })
    }

    /// Reading in the default layout: no nutrient channel, two chemical channels.
    pub fn standard(temperature: f32, chemicals: [f32; 2]) -> Result<Self> {
        Self::new(Vec::new(), temperature, chemicals.to_vec())
    }
}

fn check_value(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CellError::invalid_range(field, value))
    }
}
