//! User-supplied ODE system.

use crate::Float;

/// User-supplied ODE system.
///
/// Implement this trait for your problem to provide the right-hand side
/// function y' = f(x, y). The integrator repeatedly calls `ode` with an
/// abscissa `x` and state `y` and expects you to fill `dydx` with the
/// derivative values, returning `true` on success. Returning `false` aborts
/// the current `solve` call with [`Error::DerivativeFailed`](crate::Error).
///
/// The integrator evaluates trial points speculatively: `ode` may be called
/// at non-monotonic `x` values and at states that are later discarded when a
/// trial step is rejected. The implementation should therefore be free of
/// externally observable side effects.
///
/// # Example
///
/// ```ignore
/// struct Drag { coefficient: f64 }
/// impl ODE for Drag {
///     fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) -> bool {
///         dydx[0] = y[1];
///         dydx[1] = -self.coefficient * y[1] * y[1];
///         true
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, x: Float, y: &[Float], dydx: &mut [Float]) -> bool;
}
