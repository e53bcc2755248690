//! Numerical utilities shared by the chain engine

/// Dense null-space extraction for eigenvector recovery
pub mod linalg;
/// Approximate floating-point comparisons
pub mod tolerance;
