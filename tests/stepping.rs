use rke::{Error, Rke, Settings};

mod common;
use common::{AlwaysFails, Trig};

#[test]
fn settings_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.min_step, 1e-6);
    assert_eq!(settings.max_step, 1e6);
    assert_eq!(settings.h0, 1.0);
    assert_eq!(settings.error_slope, 1e-7);
    assert_eq!(settings.error_bias, 1e-8);

    let solver = Rke::new(2, Trig);
    assert_eq!(solver.dimension(), 2);
    assert_eq!(solver.step, 1.0);
    assert_eq!(solver.accepted_steps(), 0);
    assert_eq!(solver.rejected_steps(), 0);
}

#[test]
fn noop_solve_changes_nothing() {
    let mut solver = Rke::new(2, Trig);
    let mut x = 0.3;
    let mut y = [0.5, -0.25];

    solver.solve(&mut x, &mut y, 0.3).unwrap();
    assert_eq!(x, 0.3);
    assert_eq!(y, [0.5, -0.25]);
    assert_eq!(solver.accepted_steps(), 0);
    assert_eq!(solver.rejected_steps(), 0);
}

#[test]
fn solve_lands_within_half_minimum_step() {
    let mut solver = Rke::new(2, Trig);
    let mut x = 0.0;
    let mut y = [1.0, 0.0];

    solver.solve(&mut x, &mut y, 1.5).unwrap();
    assert!((1.5 - x).abs() <= 0.5 * solver.min_step);
}

#[test]
fn counters_monotonic_and_step_bounded() {
    let mut solver = Rke::new(2, Trig);
    let mut x = 0.0;
    let mut y = [1.0, 0.0];

    let mut naccpt = 0;
    let mut nrejct = 0;
    for i in 1..=20 {
        let xend = 0.7 * i as f64;
        solver.solve(&mut x, &mut y, xend).unwrap();
        assert!(solver.accepted_steps() >= naccpt);
        assert!(solver.rejected_steps() >= nrejct);
        naccpt = solver.accepted_steps();
        nrejct = solver.rejected_steps();
        assert!(solver.step >= solver.min_step);
        assert!(solver.step <= solver.max_step);
    }
    assert!(naccpt > 0);
}

#[test]
fn derivative_failure_propagates_without_commit() {
    let mut solver = Rke::new(2, AlwaysFails);
    let mut x = 1.0;
    let mut y = [2.0, 3.0];

    let err = solver.solve(&mut x, &mut y, 4.0).unwrap_err();
    assert_eq!(err, Error::DerivativeFailed(1.0));
    assert_eq!(x, 1.0);
    assert_eq!(y, [2.0, 3.0]);
    assert_eq!(solver.accepted_steps(), 0);
    assert_eq!(solver.rejected_steps(), 0);
}

#[test]
fn zero_tolerance_fails_to_converge() {
    let settings = Settings::builder()
        .error_slope(0.0)
        .error_bias(0.0)
        .build();
    let mut solver = Rke::with_settings(2, Trig, settings);
    let mut x = 0.0;
    let mut y = [1.0, 0.0];

    let err = solver.solve(&mut x, &mut y, 1.0).unwrap_err();
    assert!(matches!(err, Error::ConvergenceFailed { .. }));

    // Nothing committed; step size halved all the way down to the floor.
    assert_eq!(x, 0.0);
    assert_eq!(y, [1.0, 0.0]);
    assert!(solver.rejected_steps() > 0);
    assert_eq!(solver.accepted_steps(), 0);
    assert_eq!(solver.step, solver.min_step);
}

#[test]
fn tolerances_tunable_between_calls() {
    let mut solver = Rke::new(2, Trig);
    let mut x = 0.0;
    let mut y = [1.0, 0.0];

    solver.solve(&mut x, &mut y, 1.0).unwrap();
    let loose = solver.accepted_steps();

    // Tighter tolerances on the same handle force smaller steps.
    solver.error_slope = 1e-11;
    solver.error_bias = 1e-12;
    solver.solve(&mut x, &mut y, 2.0).unwrap();
    assert!(solver.accepted_steps() - loose > loose);
    assert!(solver.step >= solver.min_step && solver.step <= solver.max_step);
}
