// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod config;
pub mod signs;
pub mod observer;
pub mod timing;

// algorithms
pub mod bisection;
pub mod regula_falsi;
pub mod fixed_point;
pub mod newton;
pub mod secant;
