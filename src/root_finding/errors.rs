//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   └ non-finite function evaluation
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     └ invalid input tolerance
//!
//! Method-specific failures (no sign change, vanishing denominators) live
//! next to each solver and wrap these via `#[from]`.


use thiserror::Error;


/// Root-finding runtime errors.
///
/// └ Non-finite function evaluation
#[derive(Debug, Error, PartialEq)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}


/// Tolerance configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum ToleranceError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}


/// Evaluates a user callable with a finite-check, counting the call.
///
/// Shared by every solver; `f` may be the target function, its derivative,
/// or a fixed-point iteration function.
#[inline]
pub(crate) fn eval_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, RootFindingError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }

    Ok(fx)
}
