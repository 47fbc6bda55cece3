//! Sign utilities for root-finding algorithms.
//! - `sign_change`   : `true` if the product of two values is strictly negative
//! - `brackets_root` : `true` if `f` changes sign over `[a, b]`

/// Returns `true` if `fa * fb < 0`.
///
/// A zero at either endpoint, or equal signs, returns `false`.
#[inline]
pub(crate) fn sign_change(fa: f64, fb: f64) -> bool {
    fa * fb < 0.0
}


/// Returns `true` iff `f(a)` and `f(b)` have strictly opposite signs.
///
/// This is the precondition both bracketing methods check before refining.
pub fn brackets_root<F>(mut f: F, a: f64, b: f64) -> bool
where F: FnMut(f64) -> f64 {
    let fa = f(a);
    let fb = f(b);
    sign_change(fa, fb)
}
