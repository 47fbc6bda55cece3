//! tests for the bisection root finding algorithm
use scalar_roots::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use scalar_roots::root_finding::config::IterationCap;
use scalar_roots::root_finding::errors::{RootFindingError, ToleranceError};
use scalar_roots::root_finding::report::{Stencil, TerminationReason};

type TestResult = Result<(), BisectionError>;

fn f(x: f64) -> f64 { x * x - 3.0 * x + 2.0 }

#[test]
fn converges_to_one_on_zero_one_and_a_half() -> TestResult {
    let res = bisection(f, 0.0, 1.5, BisectionCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!(res.converged());
    assert!((res.root - 1.0).abs() < 1e-9);
    assert!(res.residual.abs() < 1e-9);
    assert!(res.iterations > 1);
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn reversed_bounds_converge() -> TestResult {
    let res = bisection(f, 1.5, 0.0, BisectionCfg::new())?;
    assert!((res.root - 1.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let g   = |x: f64| x * x - 2.0;
    let tol = 1e-12;

    let cfg = BisectionCfg::new()
        .set_tolerance(tol)?
        .set_max_iter(200);

    let res = bisection(g, 0.0, 3.0, cfg)?;
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-11);
    Ok(())
}

#[test]
fn exact_midpoint_root() -> TestResult {
    // first midpoint of [1.5, 2.5] is 2, an exact root
    let res = bisection(f, 1.5, 2.5, BisectionCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    assert_eq!(res.root, 2.0);
    assert_eq!(res.residual, 0.0);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn no_sign_change_before_any_iteration() {
    let mut calls = 0;
    let counted = |x: f64| { calls += 1; f(x) };

    let err = bisection(counted, 2.1, 3.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { a, b, .. } if a == 2.1 && b == 3.0));
    // only the two endpoint evaluations of the sign test
    assert_eq!(calls, 2);
}

#[test]
fn zero_at_endpoint_is_not_a_sign_change() {
    let err = bisection(f, 1.0, 1.5, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::NoSignChange { .. }));
}

#[test]
fn iteration_cap_returns_last_midpoint() -> TestResult {
    let cfg = BisectionCfg::new().set_max_iter(2);
    let res = bisection(f, 0.0, 1.5, cfg)?;

    // midpoints: 0.75, then 1.125 on [0.75, 1.5]
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert!(!res.converged());
    assert_eq!(res.iterations, 2);
    assert_eq!(res.root, 1.125);
    assert_eq!(res.stencil, Stencil::Bracket { bounds: [0.75, 1.5] });
    Ok(())
}

#[test]
fn cap_bounds_iterations() -> TestResult {
    for n in 1..=10 {
        let res = bisection(f, 0.0, 1.5, BisectionCfg::new().set_max_iter(n))?;
        assert!(res.iterations <= n);
    }
    Ok(())
}

#[test]
fn unbounded_runs_until_stagnation() -> TestResult {
    let cfg = BisectionCfg::new()
        .set_max_iter(3)
        .set_unbounded();
    assert_eq!(cfg.max_iter(), IterationCap::Unbounded);

    let res = bisection(f, 0.0, 1.5, cfg)?;
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!(res.iterations > 3);
    Ok(())
}

#[test]
fn restarting_inside_tolerance_converges_immediately() -> TestResult {
    // only a bracket already narrower than the tolerance stops at once
    let res = bisection(f, 1.0 - 1e-11, 1.0 + 1e-11, BisectionCfg::new())?;
    assert!(res.converged());
    assert!(res.iterations <= 2);
    assert!((res.root - 1.0).abs() < 1e-10);
    Ok(())
}

#[test]
fn restarting_on_wide_bracket_still_halves() -> TestResult {
    let first = bisection(f, 0.0, 1.5, BisectionCfg::new())?;
    let r     = first.root;

    // width 2e-6 needs ~15 halvings to get below 1e-10
    let again = bisection(f, r - 1e-6, r + 1e-6, BisectionCfg::new())?;
    assert!(again.converged());
    assert!(again.iterations >= 10);
    assert!((again.root - 1.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn zero_cap_reports_initial_bracket() -> TestResult {
    let res = bisection(f, 0.0, 1.5, BisectionCfg::new().set_max_iter(0))?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 2);
    assert_eq!(res.root, 0.0);
    assert_eq!(res.residual, f(0.0));
    assert_eq!(res.stencil, Stencil::bracket(0.0, 1.5));
    Ok(())
}

#[test]
fn non_finite_eval() {
    let g   = |x: f64| 1.0 / x;
    let err = bisection(g, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, .. }) if x == 0.0
    ));
}

#[test]
fn invalid_config() {
    let err = BisectionCfg::new().set_tolerance(0.0).unwrap_err();
    assert_eq!(err, ToleranceError::InvalidTolerance { got: 0.0 });

    assert!(BisectionCfg::new().set_tolerance(-1e-3).is_err());
    assert!(BisectionCfg::new().set_tolerance(f64::NAN).is_err());
    assert!(BisectionCfg::new().set_tolerance(f64::INFINITY).is_err());

    let cfg = BisectionCfg::new().set_max_iter(0);
    assert_eq!(cfg.max_iter(), IterationCap::Limited(0));
}

#[test]
fn defaults() {
    let cfg = BisectionCfg::default();
    assert_eq!(cfg.tolerance(), 1e-10);
    assert_eq!(cfg.max_iter(), IterationCap::Unbounded);
}
