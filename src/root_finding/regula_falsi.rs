//! False position (regula falsi) method

use super::algorithms::{Algorithm, BracketFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{eval_checked, RootFindingError, ToleranceError};
use super::observer::{IterationEvent, IterationObserver, NoopObserver};
use super::report::{RootFindingReport, Stencil, TerminationReason};
use super::signs::sign_change;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::FalsePosition);


#[derive(Debug, Error, PartialEq)]
pub enum FalsePositionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("degenerate secant step on [{a}, {b}]: f(b) - f(a) == 0 (fa={fa}, fb={fb})")]
    DegenerateSecantStep { a: f64, b: f64, fa: f64, fb: f64 },
}


/// False position configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tolerance` (default `1e-10`) and
///   `max_iter` (default unbounded).
///
/// Unlike the other methods, `tolerance` bounds the residual `|f(c)|`,
/// not the step.
#[derive(Debug, Copy, Clone)]
pub struct FalsePositionCfg {
    common: CommonCfg,
}
impl FalsePositionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(FalsePositionCfg);


/// x-intercept of the chord through `(a, fa)` and `(b, fb)`.
///
/// # Returns
/// - `Ok(c)` with `c = (a*fb - b*fa) / (fb - fa)`
/// - `Err(DegenerateSecantStep)` if `fb - fa == 0`
#[inline]
fn chord_intercept(a: f64, b: f64, fa: f64, fb: f64) -> Result<f64, FalsePositionError> {
    let denom = fb - fa;
    if denom == 0.0 {
        return Err(FalsePositionError::DegenerateSecantStep { a, b, fa, fb });
    }
    Ok((a * fb - b * fa) / denom)
}


/// Finds a root of `func` using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`, `b` : bracket endpoints; `f(a) * f(b) < 0` is required
/// - `cfg`  : [`FalsePositionCfg`] (residual tolerance, optional `max_iter`)
///
/// # Returns
/// - `Ok(Some(report))` once `|f(c)| < tolerance`; `report.iterations >= 1`
/// - `Ok(None)` if the iteration cap runs out first. No estimate is returned
///   on this path. A cap of `0` yields `Ok(None)` right after the two
///   endpoint evaluations of the sign check.
///
/// # Errors
/// - [`FalsePositionError::NoSignChange`]         : precondition failure, raised before any refinement
/// - [`FalsePositionError::DegenerateSecantStep`] : `f(b) - f(a)` vanished
///
/// * Propagated via [`FalsePositionError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`]    : `f(x)` produced NaN/inf
pub fn regula_falsi<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: FalsePositionCfg,
) -> Result<Option<RootFindingReport>, FalsePositionError>
where F: FnMut(f64) -> f64 {
    regula_falsi_observed(func, a, b, cfg, &mut NoopObserver)
}


/// [`regula_falsi`], reporting every chord intercept to `observer`.
pub fn regula_falsi_observed<F, O>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: FalsePositionCfg,
    observer: &mut O,
) -> Result<Option<RootFindingReport>, FalsePositionError>
where
    F: FnMut(f64) -> f64,
    O: IterationObserver + ?Sized,
{
    let algo_name = ALGORITHM.algorithm_name();
    let tol       = cfg.tolerance();
    let max_iter  = cfg.max_iter();

    let mut evals: usize = 0;

    let mut fa = eval_checked(&mut func, a, &mut evals)?;
    let mut fb = eval_checked(&mut func, b, &mut evals)?;
    if !sign_change(fa, fb) {
        tracing::warn!(algorithm = algo_name, a, b, fa, fb, "no sign change");
        return Err(FalsePositionError::NoSignChange { a, b, fa, fb });
    }

    let mut iter: usize = 0;
    while max_iter.allows(iter) {
        let bounds = Stencil::bracket(a, b);
        let c  = chord_intercept(a, b, fa, fb)?;
        let fc = eval_checked(&mut func, c, &mut evals)?;
        iter += 1;

        observer.observe(&IterationEvent {
            algorithm : algo_name,
            iteration : iter,
            stencil   : bounds,
            iterate   : c,
            residual  : fc,
        });

        if fc.abs() < tol {
            tracing::debug!(algorithm = algo_name, iterations = iter, root = c, "converged");
            return Ok(Some(RootFindingReport {
                root               : c,
                residual           : fc,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : bounds,
                algorithm_name     : algo_name,
            }));
        }

        if sign_change(fc, fa) {
            b  = c;
            fb = fc;
        } else {
            a  = c;
            fa = fc;
        }
    }

    tracing::warn!(algorithm = algo_name, iterations = iter, cap = ?max_iter.limit(), "iteration limit reached");
    Ok(None)
}
