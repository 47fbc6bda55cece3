//! Scalar root-finding for a single real-valued function.
//!
//! Bracketing methods ([`root_finding::bisection`], [`root_finding::regula_falsi`])
//! narrow an interval with a sign change; open methods ([`root_finding::fixed_point`],
//! [`root_finding::newton`], [`root_finding::secant`]) iterate from initial guesses.

pub mod root_finding;
