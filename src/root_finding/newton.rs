//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{eval_checked, RootFindingError, ToleranceError};
use super::observer::{IterationEvent, IterationObserver, NoopObserver};
use super::report::{RootFindingReport, Stencil, TerminationReason};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);


#[derive(Debug, Error, PartialEq)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("vanishing derivative at x={x}: f'(x) == 0")]
    ZeroDerivative { x: f64 },
}


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tolerance` (default `1e-10`) and
///   `max_iter` (default unbounded).
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg);


/// Evaluates the user derivative; an exact zero is a computational failure.
#[inline]
fn eval_dfx_nonzero<G>(
    df: &mut G,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where G: FnMut(f64) -> f64 {
    let dfx = eval_checked(df, x, evals)?;
    if dfx == 0.0 {
        return Err(NewtonError::ZeroDerivative { x });
    }

    Ok(dfx)
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : analytic derivative of `func`
/// - `x0`    : initial guess
/// - `cfg`   : [`NewtonCfg`] (tolerance, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`               : last iterate `x = x0 - f(x0)/f'(x0)`
/// - `residual`           : `f(root)`
/// - `termination_reason` : [`TerminationReason::ToleranceReached`] on
///   `|x - x0| < tolerance`, else [`TerminationReason::IterationLimit`]
/// - `stencil`            : iterate the last step was taken from
///
/// # Errors
/// - [`NewtonError::ZeroDerivative`] : `f'(x0) == 0`
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` or `f'(x)` produced NaN/inf
///
/// # Notes
/// - Convergence is *local only*; poor guesses can diverge or cycle.
///   For guaranteed convergence, use a bracketed method (e.g. bisection).
/// - A cap of `0` returns `x0` and `f(x0)` without touching `f'`.
pub fn newton<F, G>(
    func: F,
    dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    newton_observed(func, dfunc, x0, cfg, &mut NoopObserver)
}


/// [`newton`], reporting every iterate to `observer`.
pub fn newton_observed<F, G, O>(
    mut f: F,
    mut df: G,
    mut x0: f64,
    cfg: NewtonCfg,
    observer: &mut O,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    O: IterationObserver + ?Sized,
{
    let algo_name = ALGORITHM.algorithm_name();
    let tol       = cfg.tolerance();
    let max_iter  = cfg.max_iter();

    let mut evals: usize = 0;
    let mut iter:  usize = 0;

    let mut fx0  = eval_checked(&mut f, x0, &mut evals)?;
    let mut x    = x0;
    let mut fx   = fx0;
    let mut prev = x0;

    while max_iter.allows(iter) {
        let dfx = eval_dfx_nonzero(&mut df, x0, &mut evals)?;
        prev = x0;
        x    = x0 - fx0 / dfx;
        fx   = eval_checked(&mut f, x, &mut evals)?;
        iter += 1;

        observer.observe(&IterationEvent {
            algorithm : algo_name,
            iteration : iter,
            stencil   : Stencil::singleton(x0),
            iterate   : x,
            residual  : fx,
        });

        if (x - x0).abs() < tol {
            tracing::debug!(algorithm = algo_name, iterations = iter, root = x, "converged");
            return Ok(RootFindingReport {
                root               : x,
                residual           : fx,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : Stencil::singleton(x0),
                algorithm_name     : algo_name,
            });
        }

        x0  = x;
        fx0 = fx;
    }

    tracing::warn!(algorithm = algo_name, iterations = iter, cap = ?max_iter.limit(), root = x, "convergence not reached");
    Ok(RootFindingReport {
        root               : x,
        residual           : fx,
        iterations         : iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        stencil            : Stencil::singleton(prev),
        algorithm_name     : algo_name,
    })
}
