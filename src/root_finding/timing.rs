//! Wall-clock timing around a solver call.
//!
//! Composed at the call site:
//!
//! ```
//! use scalar_roots::root_finding::timing::with_timing;
//! use scalar_roots::root_finding::bisection::{bisection, BisectionCfg};
//!
//! let f = |x: f64| x * x - 3.0 * x + 2.0;
//! let timed = with_timing("bisection", || bisection(f, 0.0, 1.5, BisectionCfg::new()));
//! let report = timed.value.unwrap();
//! assert!((report.root - 1.0).abs() < 1e-9);
//! ```

use std::time::{Duration, Instant};


/// Output of `op` together with how long it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<T> {
    pub value   : T,
    pub elapsed : Duration,
}


/// Runs `op` once, measuring wall-clock duration, and logs it at info level
/// under `label`. The value is returned untouched.
pub fn with_timing<T, F>(label: &str, op: F) -> Timed<T>
where F: FnOnce() -> T {
    let start   = Instant::now();
    let value   = op();
    let elapsed = start.elapsed();
    tracing::info!(label, elapsed_secs = elapsed.as_secs_f64(), "execution time");

    Timed { value, elapsed }
}
