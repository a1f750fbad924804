//! Tests for the multi-restart inverter.

use super::*;
use crate::inversion::config::{GeneratorConfig, InversionConfig};
use crate::inversion::generator::Generator;
use crate::inversion::measurement::MeasurementOperator;
use crate::inversion::observer::RecordingObserver;
use crate::Error;
use ndarray::{array, Array1};
use proptest::prelude::*;

/// Small inverter to keep restarts fast
fn small_inverter(restarts: usize, parallel: bool, seed: u64) -> Inverter {
    let config = GeneratorConfig {
        latent_dim: 2,
        hidden_dim: 3,
        output_dim: 4,
    };
    Inverter::new(
        Generator::with_seed(config, 42),
        MeasurementOperator::leading(2, 4).unwrap(),
        InversionConfig {
            step_size: 0.01,
            iterations: 50,
            restarts,
            seed: Some(seed),
            parallel,
        },
    )
    .unwrap()
}

#[test]
fn test_best_is_minimum_of_all_restarts() {
    let inverter = small_inverter(5, false, 7);
    let rec = inverter.reconstruct(&array![0.3, 0.6]).unwrap();

    assert_eq!(rec.runs.len(), 5);
    let min = rec
        .runs
        .iter()
        .map(|r| *r.costs.last().unwrap())
        .fold(f64::INFINITY, f64::min);
    assert_eq!(rec.final_cost(), min);
    for run in &rec.runs {
        assert!(rec.final_cost() <= run.final_cost());
        assert_eq!(run.costs.len(), 50);
    }
}

#[test]
fn test_best_is_first_minimum() {
    let inverter = small_inverter(6, false, 13);
    let rec = inverter.reconstruct(&array![0.5, 0.5]).unwrap();
    let best_cost = rec.final_cost();
    let first = rec
        .runs
        .iter()
        .position(|r| r.final_cost() == best_cost)
        .unwrap();
    assert_eq!(rec.best, first);
}

#[test]
fn test_output_is_forward_of_best_latent() {
    let inverter = small_inverter(3, false, 1);
    let rec = inverter.reconstruct(&array![0.2, 0.9]).unwrap();
    let expected = inverter.generator().forward(rec.latent()).unwrap().output;
    assert_eq!(rec.output, expected);
    assert_eq!(rec.output.len(), 4);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let a = small_inverter(4, false, 99).reconstruct(&array![0.4, 0.1]).unwrap();
    let b = small_inverter(4, false, 99).reconstruct(&array![0.4, 0.1]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_parallel_matches_sequential() {
    let target = array![0.7, 0.2];
    let sequential = small_inverter(6, false, 5).reconstruct(&target).unwrap();
    let parallel = small_inverter(6, true, 5).reconstruct(&target).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_observer_sees_every_restart_in_order() {
    let inverter = small_inverter(4, true, 3);
    let mut observer = RecordingObserver::default();
    let images = vec![array![0.1, 0.2, 0.3, 0.4], array![0.9, 0.8, 0.7, 0.6]];

    let recs = inverter.reconstruct_all(&images, &mut observer).unwrap();

    assert_eq!(recs.len(), 2);
    assert_eq!(observer.images, vec![0, 1]);
    assert_eq!(observer.restarts.len(), 8);
    for (i, ctx) in observer.restarts.iter().enumerate() {
        assert_eq!(ctx.image, i / 4);
        assert_eq!(ctx.restart, i % 4);
        assert_eq!(ctx.restarts, 4);
        assert!(ctx.best_cost <= ctx.final_cost);
    }
    assert_eq!(observer.best, vec![recs[0].final_cost(), recs[1].final_cost()]);
    assert_eq!(observer.restarts[3].best_cost, recs[0].final_cost());
}

#[test]
fn test_reconstruct_all_attributes_errors() {
    let inverter = small_inverter(2, false, 3);
    let images = vec![array![0.1, 0.2, 0.3, 0.4], array![0.1, 0.2, 0.3]];
    let err = inverter
        .reconstruct_all(&images, &mut RecordingObserver::default())
        .unwrap_err();
    match err {
        Error::ImageFailed { image, source } => {
            assert_eq!(image, 1);
            assert!(matches!(*source, Error::ShapeMismatch { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_reconstruct_rejects_wrong_target_length() {
    let inverter = small_inverter(2, false, 3);
    let err = inverter.reconstruct(&array![0.1, 0.2, 0.3]).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_new_rejects_operator_width() {
    let config = GeneratorConfig {
        latent_dim: 2,
        hidden_dim: 3,
        output_dim: 4,
    };
    let err = Inverter::new(
        Generator::with_seed(config, 0),
        MeasurementOperator::leading(2, 5).unwrap(),
        InversionConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = GeneratorConfig {
        latent_dim: 2,
        hidden_dim: 3,
        output_dim: 4,
    };
    let err = Inverter::new(
        Generator::with_seed(config, 0),
        MeasurementOperator::leading(2, 4).unwrap(),
        InversionConfig {
            restarts: 0,
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn test_observe_projects_image() {
    let inverter = small_inverter(1, false, 0);
    let observed = inverter.observe(&Array1::from(vec![1.0, 2.0, 3.0, 4.0])).unwrap();
    assert_eq!(observed.to_vec(), vec![1.0, 2.0]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_best_never_worse_than_any_restart(seed in 0u64..1000, restarts in 1usize..6) {
        let inverter = small_inverter(restarts, false, seed);
        let rec = inverter.reconstruct(&array![0.35, 0.65]).unwrap();
        prop_assert_eq!(rec.runs.len(), restarts);
        for cost in rec.restart_costs() {
            prop_assert!(rec.final_cost() <= cost);
        }
    }
}
