//! Fixed-point iteration

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{eval_checked, RootFindingError, ToleranceError};
use super::observer::{IterationEvent, IterationObserver, NoopObserver};
use super::report::{RootFindingReport, Stencil, TerminationReason};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::FixedPoint);


#[derive(Debug, Error, PartialEq)]
pub enum FixedPointError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}


/// Fixed-point configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tolerance` (default `1e-10`) and
///   `max_iter` (default unbounded).
#[derive(Debug, Copy, Clone)]
pub struct FixedPointCfg {
    common: CommonCfg,
}
impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(FixedPointCfg);


/// Iterates `x_{n+1} = g(x_n)` from `x0` toward a fixed point of `g`.
///
/// Convergence requires `g` to be a contraction near the fixed point; this
/// is not checked. A cycling `g` only stops through the cap. A `g` that
/// diverges to NaN/inf fails with [`RootFindingError::NonFiniteEvaluation`]
/// even when a cap is set, as soon as a non-finite value is produced.
///
/// A cap of `0` performs no evaluation: `root == x0`, `residual == 0.0`.
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`               : last iterate `g(x_prev)`
/// - `residual`           : last step `root - x_prev`
/// - `termination_reason` : [`TerminationReason::ToleranceReached`] when
///   `|g(x) - x| < tolerance`, else [`TerminationReason::IterationLimit`]
/// - `stencil`            : `x_prev`
///
/// # Errors
/// * Propagated via [`FixedPointError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `g(x)` produced NaN/inf
pub fn fixed_point<G>(
    g: G,
    x0: f64,
    cfg: FixedPointCfg,
) -> Result<RootFindingReport, FixedPointError>
where G: FnMut(f64) -> f64 {
    fixed_point_observed(g, x0, cfg, &mut NoopObserver)
}


/// [`fixed_point`], reporting every iterate to `observer`.
pub fn fixed_point_observed<G, O>(
    mut g: G,
    mut x0: f64,
    cfg: FixedPointCfg,
    observer: &mut O,
) -> Result<RootFindingReport, FixedPointError>
where
    G: FnMut(f64) -> f64,
    O: IterationObserver + ?Sized,
{
    let algo_name = ALGORITHM.algorithm_name();
    let tol       = cfg.tolerance();
    let max_iter  = cfg.max_iter();

    let mut evals: usize = 0;
    let mut iter:  usize = 0;
    let mut x    = x0;
    let mut step = 0.0;
    let mut prev = x0;

    while max_iter.allows(iter) {
        prev = x0;
        x    = eval_checked(&mut g, x0, &mut evals)?;
        step = x - x0;
        iter += 1;

        observer.observe(&IterationEvent {
            algorithm : algo_name,
            iteration : iter,
            stencil   : Stencil::singleton(x0),
            iterate   : x,
            residual  : step,
        });

        if step.abs() < tol {
            tracing::debug!(algorithm = algo_name, iterations = iter, root = x, "converged");
            return Ok(RootFindingReport {
                root               : x,
                residual           : step,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : Stencil::singleton(x0),
                algorithm_name     : algo_name,
            });
        }

        x0 = x;
    }

    tracing::warn!(algorithm = algo_name, iterations = iter, cap = ?max_iter.limit(), root = x, "convergence not reached");
    Ok(RootFindingReport {
        root               : x,
        residual           : step,
        iterations         : iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        stencil            : Stencil::singleton(prev),
        algorithm_name     : algo_name,
    })
}
