//! Bisection method

use super::algorithms::{Algorithm, BracketFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{eval_checked, RootFindingError, ToleranceError};
use super::observer::{IterationEvent, IterationObserver, NoopObserver};
use super::report::{RootFindingReport, Stencil, TerminationReason};
use super::signs::sign_change;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);


#[derive(Debug, Error, PartialEq)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },
}


/// Bisection configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tolerance` (default `1e-10`) and
///   `max_iter` (default unbounded).
///
/// # Construction
/// - Use [`BisectionCfg::new`] then optional setters.
///
/// `tolerance` bounds the change between successive midpoints.
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(BisectionCfg);


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}


/// Finds a root of `func` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : one endpoint of the bracket
/// - `b`    : other endpoint; `f(a) * f(b) < 0` is required
/// - `cfg`  : [`BisectionCfg`] (tolerance, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`               : last midpoint
/// - `residual`           : `f(root)`
/// - `termination_reason` :
///     - [`TerminationReason::ExactRoot`]        : `f(midpoint) == 0.0`
///     - [`TerminationReason::ToleranceReached`] : successive midpoints closer than `tolerance`
///     - [`TerminationReason::IterationLimit`]   : cap exhausted, last midpoint returned.
///       A cap of `0` returns `a` with `iterations == 0` from the initial bracket.
/// - `stencil`            : bracket the final midpoint was taken from
///
/// # Errors
/// - [`BisectionError::NoSignChange`] : precondition failure, raised before any refinement
///
/// * Propagated via [`BisectionError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
pub fn bisection<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {
    bisection_observed(func, a, b, cfg, &mut NoopObserver)
}


/// [`bisection`], reporting every midpoint to `observer`.
pub fn bisection_observed<F, O>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg,
    observer: &mut O,
) -> Result<RootFindingReport, BisectionError>
where
    F: FnMut(f64) -> f64,
    O: IterationObserver + ?Sized,
{
    let algo_name = ALGORITHM.algorithm_name();
    let tol       = cfg.tolerance();
    let max_iter  = cfg.max_iter();

    let mut evals: usize = 0;

    let mut fa = eval_checked(&mut func, a, &mut evals)?;
    let fb     = eval_checked(&mut func, b, &mut evals)?;
    if !sign_change(fa, fb) {
        tracing::warn!(algorithm = algo_name, a, b, fa, fb, "no sign change");
        return Err(BisectionError::NoSignChange { a, b, fa, fb });
    }

    let mut prev_x: Option<f64> = None;
    let mut iter: usize = 0;
    let mut x  = a; // gets overwritten
    let mut fx = fa;
    let mut bounds = Stencil::bracket(a, b);

    while max_iter.allows(iter) {
        bounds = Stencil::bracket(a, b);
        x  = calculate_bisection(a, b);
        fx = eval_checked(&mut func, x, &mut evals)?;
        iter += 1;

        observer.observe(&IterationEvent {
            algorithm : algo_name,
            iteration : iter,
            stencil   : bounds,
            iterate   : x,
            residual  : fx,
        });

        if fx == 0.0 {
            tracing::debug!(algorithm = algo_name, iterations = iter, root = x, "exact root");
            return Ok(RootFindingReport {
                root               : x,
                residual           : fx,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ExactRoot,
                stencil            : bounds,
                algorithm_name     : algo_name,
            });
        }

        // shrink interval
        if sign_change(fa, fx) {
            b = x;
        } else {
            a  = x;
            fa = fx;
        }

        // stagnation between successive midpoints
        if prev_x.is_some_and(|p| (x - p).abs() < tol) {
            tracing::debug!(algorithm = algo_name, iterations = iter, root = x, "converged");
            return Ok(RootFindingReport {
                root               : x,
                residual           : fx,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : bounds,
                algorithm_name     : algo_name,
            });
        }

        prev_x = Some(x);
    }

    tracing::warn!(algorithm = algo_name, iterations = iter, cap = ?max_iter.limit(), root = x, "iteration limit reached");
    Ok(RootFindingReport {
        root               : x,
        residual           : fx,
        iterations         : iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        stencil            : bounds,
        algorithm_name     : algo_name,
    })
}
