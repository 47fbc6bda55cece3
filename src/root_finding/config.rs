//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default tolerance and iteration cap,
//! used by all root-finding configs.
//!
//! [`CommonCfg`] — universal fields
//! ├ `tolerance` : stopping threshold (step size or residual, per method)
//! └ `max_iter`  : [`IterationCap`], unbounded by default
//!
//! [`CommonCfg::new`] initializes configuration with default values.
//! Per-method configs get their consuming setters from `impl_common_cfg!`.


pub const DEFAULT_TOLERANCE: f64 = 1e-10;


/// Upper bound on refinement steps.
///
/// [`IterationCap::Unbounded`] leaves the loop governed only by the
/// tolerance stopping rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum IterationCap {
    #[default]
    Unbounded,
    Limited(usize),
}
impl IterationCap {
    /// `true` if another refinement step is permitted after `done` steps.
    #[inline]
    pub fn allows(self, done: usize) -> bool {
        match self {
            IterationCap::Unbounded  => true,
            IterationCap::Limited(n) => done < n,
        }
    }

    pub fn limit(self) -> Option<usize> {
        match self {
            IterationCap::Unbounded  => None,
            IterationCap::Limited(n) => Some(n),
        }
    }
}


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    tolerance: f64,
    max_iter:  IterationCap,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tolerance : DEFAULT_TOLERANCE,
            max_iter  : IterationCap::Unbounded,
        }
    }

    // getters
    pub fn tolerance(&self) -> f64 { self.tolerance }
    pub fn max_iter(&self)  -> IterationCap { self.max_iter }

    // setters (internal)
    pub(crate) fn with_tolerance(&mut self, v: f64)          { self.tolerance = v; }
    pub(crate) fn with_max_iter (&mut self, v: IterationCap) { self.max_iter  = v; }
}
impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tolerance(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_tolerance(v);
                Ok(self)
            }
            /// Caps refinement at `v` steps. `0` is allowed: the solver
            /// performs no refinement and reports from its starting point.
            #[must_use]
            pub fn set_max_iter(mut self, v: usize) -> Self {
                self.common.with_max_iter(
                    $crate::root_finding::config::IterationCap::Limited(v)
                );
                self
            }
            #[must_use]
            pub fn set_unbounded(mut self) -> Self {
                self.common.with_max_iter(
                    $crate::root_finding::config::IterationCap::Unbounded
                );
                self
            }

            #[inline] #[must_use]
            pub fn tolerance(&self) -> f64 { self.common.tolerance() }
            #[inline] #[must_use]
            pub fn max_iter(&self) -> $crate::root_finding::config::IterationCap {
                self.common.max_iter()
            }
        }
        impl Default for $cfg {
            fn default() -> Self { Self::new() }
        }
    };
}
pub(crate) use impl_common_cfg;
