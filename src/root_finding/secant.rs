//! Secant method

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{eval_checked, RootFindingError, ToleranceError};
use super::observer::{IterationEvent, IterationObserver, NoopObserver};
use super::report::{RootFindingReport, Stencil, TerminationReason};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


#[derive(Debug, Error, PartialEq)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("degenerate secant at x0={x0}, x1={x1}: f(x1) - f(x0) == 0 (fx0={fx0}, fx1={fx1})")]
    DegenerateSecantStep { x0: f64, x1: f64, fx0: f64, fx1: f64 },
}


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tolerance` (default `1e-10`) and
///   `max_iter` (default unbounded).
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`
///
/// # Returns
/// - `Ok(x)` with `x = x1 - fx1 * (x1 - x0) / (fx1 - fx0)`
/// - `Err(DegenerateSecantStep)` if `fx1 - fx0 == 0`
#[inline]
fn calculate_secant(x0: f64, fx0: f64, x1: f64, fx1: f64) -> Result<f64, SecantError> {
    let denom = fx1 - fx0;
    if denom == 0.0 {
        return Err(SecantError::DegenerateSecantStep { x0, x1, fx0, fx1 });
    }
    Ok(x1 - fx1 * (x1 - x0) / denom)
}


/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func`     : function whose root is sought
/// - `x0`, `x1` : initial guesses
/// - `cfg`      : [`SecantCfg`] (tolerance, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`               : last iterate
/// - `residual`           : `f(root)`
/// - `termination_reason` : [`TerminationReason::ToleranceReached`] on
///   `|x - x1| < tolerance`, else [`TerminationReason::IterationLimit`]
/// - `stencil`            : the pair `(x0, x1)` the last iterate came from
///
/// A cap of `0` returns `x1` and `f(x1)` with the window `(x0, x1)`.
///
/// # Errors
/// - [`SecantError::DegenerateSecantStep`] : `f(x1) - f(x0)` vanished
///   (e.g. equal guesses)
///
/// * Propagated via [`SecantError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
pub fn secant<F>(
    func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> Result<RootFindingReport, SecantError>
where F: FnMut(f64) -> f64 {
    secant_observed(func, x0, x1, cfg, &mut NoopObserver)
}


/// [`secant`], reporting every iterate to `observer`.
pub fn secant_observed<F, O>(
    mut f: F,
    mut x0: f64,
    mut x1: f64,
    cfg: SecantCfg,
    observer: &mut O,
) -> Result<RootFindingReport, SecantError>
where
    F: FnMut(f64) -> f64,
    O: IterationObserver + ?Sized,
{
    let algo_name = ALGORITHM.algorithm_name();
    let tol       = cfg.tolerance();
    let max_iter  = cfg.max_iter();

    let mut evals: usize = 0;
    let mut iter:  usize = 0;

    let mut fx0 = eval_checked(&mut f, x0, &mut evals)?;
    let mut fx1 = eval_checked(&mut f, x1, &mut evals)?;
    let mut x   = x1;
    let mut fx  = fx1;
    let mut parents = Stencil::doubleton(x0, x1);

    while max_iter.allows(iter) {
        parents = Stencil::doubleton(x0, x1);
        x  = calculate_secant(x0, fx0, x1, fx1)?;
        fx = eval_checked(&mut f, x, &mut evals)?;
        iter += 1;

        observer.observe(&IterationEvent {
            algorithm : algo_name,
            iteration : iter,
            stencil   : parents,
            iterate   : x,
            residual  : fx,
        });

        if (x - x1).abs() < tol {
            tracing::debug!(algorithm = algo_name, iterations = iter, root = x, "converged");
            return Ok(RootFindingReport {
                root               : x,
                residual           : fx,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : parents,
                algorithm_name     : algo_name,
            });
        }

        (x0, fx0) = (x1, fx1);
        (x1, fx1) = (x, fx);
    }

    tracing::warn!(algorithm = algo_name, iterations = iter, cap = ?max_iter.limit(), root = x, "maximum number of iterations reached");
    Ok(RootFindingReport {
        root               : x,
        residual           : fx,
        iterations         : iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        stencil            : parents,
        algorithm_name     : algo_name,
    })
}
