use thiserror::Error;

/// Failures reported by the checked scalar entry points.
///
/// The plain functions never return this; they follow floating-point
/// convention and yield NaN/Inf instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScalarError {
    #[error("arccos did not converge after {max_iterations} iterations (last step: {residual}, estimate: {estimate})")]
    DidNotConverge {
        max_iterations: usize,
        residual: f32,
        estimate: f32,
    },
    #[error("arccos input {value} lies outside [-1, 1]")]
    Domain { value: f32 },
}
