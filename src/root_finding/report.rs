//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

/// Reasons a root-finding algorithm may terminate.
/// - [`TerminationReason::ExactRoot`]
///     - bisection only; `f(x) == 0.0` at a midpoint
/// - [`TerminationReason::ToleranceReached`]
///     - stagnation `|x_n - x_{n-1}| < tol` (bisection, fixed point, newton, secant)
///     - residual `|f(c)| < tol` (false position)
/// - [`TerminationReason::IterationLimit`]
///     - cap exhausted; `root` is the last iterate, not a converged one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ExactRoot,
    ToleranceReached,
    IterationLimit,
}


/// Method-specific data returned by a solver.
/// Contains the last set of points used in the update formula.
/// - [`Stencil::Bracket`] : bracketing methods
///     - `bounds` of the interval the final estimate was taken from
/// - [`Stencil::Open`]    : open methods
///     - `x` = iterate(s) used to compute the root
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn bracket(a: f64, b: f64) -> Self {
        Stencil::Bracket { bounds: [a, b] }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x0: f64, x1: f64) -> Self {
        Stencil::Open { x: [x0, x1], len: 2 }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`               : best root estimate
/// - `residual`           : `f(root)`; for fixed point, the last step `g(x) - x`
/// - `iterations`         : refinement steps performed
/// - `evaluations`        : total calls of the user callables
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])
/// - `stencil`            : last set of points used in update formula
/// - `algorithm_name`     : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root               : f64,
    pub residual           : f64,
    pub iterations         : usize,
    pub evaluations        : usize,
    pub termination_reason : TerminationReason,
    pub stencil            : Stencil,
    pub algorithm_name     : &'static str,
}
impl RootFindingReport {
    /// `true` unless the iteration cap ran out first.
    pub fn converged(&self) -> bool {
        !matches!(self.termination_reason, TerminationReason::IterationLimit)
    }
}
