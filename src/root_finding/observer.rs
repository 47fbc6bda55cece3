//! Per-iteration observation.
//!
//! Solvers hand each new iterate to an [`IterationObserver`] after computing
//! it. Observers only watch: they receive a shared borrow of the event and
//! have no way to feed anything back into the loop.

use super::report::Stencil;


/// State reported once per refinement step.
/// - `algorithm` : reporting method name
/// - `iteration` : 1-based step index
/// - `stencil`   : bounds or guess(es) the step started from
/// - `iterate`   : newly computed estimate
/// - `residual`  : `f(iterate)`; for fixed point, `iterate - x_prev`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationEvent {
    pub algorithm : &'static str,
    pub iteration : usize,
    pub stencil   : Stencil,
    pub iterate   : f64,
    pub residual  : f64,
}


pub trait IterationObserver {
    fn observe(&mut self, event: &IterationEvent);
}

impl<F> IterationObserver for F where F: FnMut(&IterationEvent) {
    fn observe(&mut self, event: &IterationEvent) {
        self(event)
    }
}


/// Discards every event; used by the plain solver entry points.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoopObserver;

impl IterationObserver for NoopObserver {
    #[inline]
    fn observe(&mut self, _event: &IterationEvent) {}
}


/// Forwards every event to `tracing` at debug level.
#[derive(Debug, Copy, Clone, Default)]
pub struct TracingObserver;

impl IterationObserver for TracingObserver {
    fn observe(&mut self, event: &IterationEvent) {
        tracing::debug!(
            algorithm = event.algorithm,
            iteration = event.iteration,
            stencil   = ?event.stencil.stencil(),
            iterate   = event.iterate,
            residual  = event.residual,
            "iteration"
        );
    }
}
