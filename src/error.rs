//! Errors for the integration routine

use thiserror::Error;

use crate::Float;

/// Reasons a [`solve`](crate::Rke::solve) call can fail.
///
/// In both cases `x` and `y` are left at the values committed by the last
/// accepted step, possibly short of the aimed time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The user-supplied derivative routine reported failure. The trial step
    /// in progress was not committed.
    #[error("derivative evaluation failed at x = {0}")]
    DerivativeFailed(Float),
    /// The step size was reduced to `min_step` and the estimated error still
    /// exceeded the allowable error.
    #[error("no convergence at x = {x} with step size at minimum {min_step}")]
    ConvergenceFailed { x: Float, min_step: Float },
}
