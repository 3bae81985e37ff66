//! Shared problem definitions for the integration tests.
#![allow(dead_code)]

use rke::ODE;

/// y0' = -y1, y1' = y0, so starting from (1, 0) at x = 0 the solution is
/// (cos x, sin x).
pub struct Trig;

impl ODE for Trig {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) -> bool {
        dydx[0] = -y[1];
        dydx[1] = y[0];
        true
    }
}

/// Standard normal density; y0 accumulates the area under the curve.
pub struct NormalDensity;

impl ODE for NormalDensity {
    fn ode(&self, x: f64, _y: &[f64], dydx: &mut [f64]) -> bool {
        dydx[0] = (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt();
        true
    }
}

/// Box slowed by air friction: y0 is distance, y1 is speed.
pub struct Drag;

impl ODE for Drag {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) -> bool {
        dydx[0] = y[1];
        dydx[1] = -0.01 * y[1] * y[1];
        true
    }
}

/// Derivative routine that always reports failure.
pub struct AlwaysFails;

impl ODE for AlwaysFails {
    fn ode(&self, _x: f64, _y: &[f64], _dydx: &mut [f64]) -> bool {
        false
    }
}
