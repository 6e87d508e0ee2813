mod common;

use common::{reading, CellBuilder};
use protocell_lib::model::cell::Cell;
use protocell_lib::model::metrics::Metrics;
use protocell_lib::model::state::{CellError, CellState, EnvironmentReading, NetworkKind};

#[test]
fn test_fresh_cell_defaults() {
    let cell = Cell::new();
    assert_eq!(*cell.state(), CellState::default());
    assert_eq!(cell.state().energy_level, 1.0);
    assert_eq!(cell.networks().metabolism.input_width(), 4);
    assert_eq!(cell.networks().homeostasis.input_width(), 6);
    assert_eq!(cell.networks().action.input_width(), 7);
    assert_eq!(cell.networks().action.output_width(), 4);
}

#[test]
fn test_default_layout_steps() -> anyhow::Result<()> {
    let mut cell = CellBuilder::new().build();
    let env = EnvironmentReading::new(Vec::new(), 0.3, vec![0.5, 0.2])?;
    assert_eq!(env, reading());

    let result = cell.simulate_step(&env)?;
    assert_eq!(result.age, 1.0);
    assert!((0.0..=1.0).contains(&result.energy_level));
    assert!((result.actions.sum() - 1.0).abs() < 1e-5);
    Ok(())
}

#[test]
fn test_clocks_count_steps_exactly() -> anyhow::Result<()> {
    let mut cell = CellBuilder::new().build();
    let env = reading();
    for n in 1..=250 {
        let result = cell.simulate_step(&env)?;
        assert_eq!(result.age, n as f32);
        assert_eq!(result.survival_time, n as f32);
    }
    Ok(())
}

#[test]
fn test_long_run_invariants() -> anyhow::Result<()> {
    let mut cell = CellBuilder::new().with_seed(11).build();
    for tick in 0..500u32 {
        let t = (tick % 40) as f32;
        let env = EnvironmentReading::standard(t, [0.1 * (tick % 7) as f32, 0.05 * (tick % 5) as f32])?;
        let result = cell.simulate_step(&env)?;

        assert!((0.0..=1.0).contains(&result.energy_level));
        assert!(result.actions.as_array().iter().all(|&p| p >= 0.0));
        assert!((result.actions.sum() - 1.0).abs() < 1e-5);
    }
    Ok(())
}

#[test]
fn test_result_is_a_snapshot() -> anyhow::Result<()> {
    let mut cell = CellBuilder::new().build();
    let first = cell.simulate_step(&reading())?;
    let second = cell.simulate_step(&reading())?;
    assert_eq!(first.age, 1.0);
    assert_eq!(second.age, 2.0);
    Ok(())
}

#[test]
fn test_malformed_readings_do_not_mutate() -> anyhow::Result<()> {
    let mut cell = CellBuilder::new().build();
    cell.simulate_step(&reading())?;
    let before = *cell.state();

    let cases = [
        EnvironmentReading::new(vec![], 0.3, vec![0.2])?,
        EnvironmentReading::new(vec![0.1, 0.2], 0.3, vec![0.2])?,
        EnvironmentReading::new(vec![0.1], 0.3, vec![])?,
        EnvironmentReading::new(vec![0.1], 0.3, vec![0.2])?,
    ];
    for bad in &cases {
        let err = cell.simulate_step(bad).unwrap_err();
        assert!(matches!(err, CellError::ShapeMismatch { .. }), "{err}");
        assert_eq!(*cell.state(), before);
    }

    let after = cell.simulate_step(&reading())?;
    assert_eq!(after.age, 2.0);
    Ok(())
}

#[test]
fn test_shape_error_names_network() {
    let mut cell = CellBuilder::new().build();
    let bad = EnvironmentReading {
        nutrients: vec![0.1, 0.2, 0.3],
        temperature: 0.3,
        chemicals: vec![0.2],
    };
    let err = cell.simulate_step(&bad).unwrap_err();
    assert_eq!(
        err,
        CellError::ShapeMismatch {
            network: NetworkKind::Metabolism,
            expected: 4,
            actual: 7
        }
    );
}

#[test]
fn test_invalid_readings_rejected_at_construction() {
    assert!(matches!(
        EnvironmentReading::new(vec![-0.5], 0.3, vec![0.2]),
        Err(CellError::InvalidRange { .. })
    ));
    assert!(matches!(
        EnvironmentReading::standard(f32::NAN, [0.5, 0.2]),
        Err(CellError::InvalidRange {
            field: "temperature",
            ..
        })
    ));
}

#[test]
fn test_wider_environment_deployment() -> anyhow::Result<()> {
    let mut cell = CellBuilder::new()
        .with_config(|c| {
            c.environment.nutrient_channels = 3;
            c.environment.chemical_channels = 2;
        })
        .build();
    assert_eq!(cell.networks().metabolism.input_width(), 7);
    assert_eq!(cell.networks().homeostasis.input_width(), 6);

    let env = EnvironmentReading::new(vec![0.1, 0.2, 0.3], 0.4, vec![0.5, 0.6])?;
    let result = cell.simulate_step(&env)?;
    assert_eq!(result.age, 1.0);

    assert!(cell.simulate_step(&reading()).is_err());
    Ok(())
}

#[test]
fn test_metrics_follow_a_run() -> anyhow::Result<()> {
    let metrics = Metrics::new();
    let mut cell = CellBuilder::new().build();
    for _ in 0..10 {
        let result = cell.simulate_step(&reading())?;
        metrics.record_step(&result);
    }
    let bad = EnvironmentReading::new(vec![], 0.3, vec![])?;
    if let Err(e) = cell.simulate_step(&bad) {
        metrics.record_rejection(&e);
    }
    assert_eq!(metrics.step_count(), 10);
    assert_eq!(metrics.rejection_count(), 1);
    assert_eq!(metrics.last_fitness(), cell.fitness());
    Ok(())
}
