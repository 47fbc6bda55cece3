use scalar_roots::root_finding::regula_falsi::{regula_falsi, FalsePositionCfg, FalsePositionError};
use scalar_roots::root_finding::errors::RootFindingError;
use scalar_roots::root_finding::report::{RootFindingReport, Stencil, TerminationReason};

type TestResult = Result<(), FalsePositionError>;

fn f(x: f64) -> f64 { x * x - 3.0 * x + 2.0 }

fn bounds(res: &RootFindingReport) -> (f64, f64) {
    match res.stencil {
        Stencil::Bracket { bounds } => (bounds[0], bounds[1]),
        _ => panic!("expected Bracket stencil"),
    }
}


#[test]
fn converges_to_two_on_one_and_a_half_three() -> TestResult {
    let res = regula_falsi(f, 1.5, 3.0, FalsePositionCfg::new())?
        .expect("converges without a cap");

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 2.0).abs() < 1e-9);
    assert!(res.residual.abs() < 1e-10);
    assert!(res.iterations >= 1);
    assert_eq!(res.algorithm_name, "false_position");

    let (a, b) = bounds(&res);
    assert!(f(a) * f(b) < 0.0);
    Ok(())
}

#[test]
fn linear_converges_in_one_step() -> TestResult {
    let g   = |x: f64| 2.0 * x - 6.0;
    let res = regula_falsi(g, 0.0, 10.0, FalsePositionCfg::new())?
        .expect("linear root is hit by the first chord");

    assert_eq!(res.iterations, 1);
    assert!((res.root - 3.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn residual_tolerance_controls_stop() -> TestResult {
    let loose = regula_falsi(f, 1.5, 3.0, FalsePositionCfg::new().set_tolerance(1e-3)?)?
        .expect("loose tolerance converges");
    let tight = regula_falsi(f, 1.5, 3.0, FalsePositionCfg::new().set_tolerance(1e-12)?)?
        .expect("tight tolerance converges");

    assert!(loose.residual.abs() < 1e-3);
    assert!(tight.residual.abs() < 1e-12);
    assert!(loose.iterations < tight.iterations);
    Ok(())
}

#[test]
fn cap_exhaustion_returns_no_estimate() -> TestResult {
    let cfg = FalsePositionCfg::new().set_max_iter(2);
    let res = regula_falsi(f, 1.5, 3.0, cfg)?;
    assert!(res.is_none());
    Ok(())
}

#[test]
fn zero_cap_returns_no_estimate_after_sign_check() -> TestResult {
    let mut calls = 0;
    let counted = |x: f64| { calls += 1; f(x) };

    let res = regula_falsi(counted, 1.5, 3.0, FalsePositionCfg::new().set_max_iter(0))?;
    assert!(res.is_none());
    assert_eq!(calls, 2);
    Ok(())
}

#[test]
fn zero_cap_still_checks_sign_change() {
    let err = regula_falsi(f, 2.1, 3.0, FalsePositionCfg::new().set_max_iter(0)).unwrap_err();
    assert!(matches!(err, FalsePositionError::NoSignChange { .. }));
}

#[test]
fn cap_large_enough_still_converges() -> TestResult {
    let cfg = FalsePositionCfg::new().set_max_iter(500);
    let res = regula_falsi(f, 1.5, 3.0, cfg)?.expect("500 steps are plenty");
    assert!(res.iterations <= 500);
    Ok(())
}

#[test]
fn no_sign_change_before_any_iteration() {
    let mut calls = 0;
    let counted = |x: f64| { calls += 1; f(x) };

    let err = regula_falsi(counted, 2.1, 3.0, FalsePositionCfg::new()).unwrap_err();
    assert!(matches!(err, FalsePositionError::NoSignChange { a, b, .. } if a == 2.1 && b == 3.0));
    assert_eq!(calls, 2);
}

#[test]
fn restarting_at_root_converges_in_one_step() -> TestResult {
    let first = regula_falsi(f, 1.5, 3.0, FalsePositionCfg::new())?
        .expect("converges");
    let r = first.root;

    let again = regula_falsi(f, r - 1e-6, r + 1e-6, FalsePositionCfg::new())?
        .expect("converges");
    assert_eq!(again.iterations, 1);
    assert!((again.root - r).abs() < 1e-9);
    Ok(())
}

#[test]
fn non_finite_eval() {
    let g   = |x: f64| if x > 0.5 { f64::NAN } else { x - 1.0 };
    let err = regula_falsi(g, 0.0, 1.0, FalsePositionCfg::new()).unwrap_err();
    assert!(matches!(
        err,
        FalsePositionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, .. }) if x == 1.0
    ));
}
