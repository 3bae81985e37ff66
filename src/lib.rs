//! Adaptive step size solver for initial value problems (IVPs) of ordinary
//! differential equations, using the Runge-Kutta-England technique: a
//! 4th-order Runge-Kutta step chained to England's embedded error estimate,
//! with automatic doubling/halving of the step size to keep the estimated
//! local error within per-component tolerances.
//!
//! # Example
//!
//! ```
//! use rke::{ODE, Rke};
//!
//! // y0' = -y1, y1' = y0, so (y0, y1) = (cos x, sin x).
//! struct Circle;
//!
//! impl ODE for Circle {
//!     fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) -> bool {
//!         dydx[0] = -y[1];
//!         dydx[1] = y[0];
//!         true
//!     }
//! }
//!
//! let mut solver = Rke::new(2, Circle);
//! let mut x = 0.0;
//! let mut y = [1.0, 0.0];
//! solver.solve(&mut x, &mut y, 1.5).unwrap();
//! assert!((y[0] - 1.5f64.cos()).abs() < 1e-5);
//! assert!((y[1] - 1.5f64.sin()).abs() < 1e-5);
//! ```

mod error;
mod ode;
mod settings;
mod solver;

pub use error::Error;
pub use ode::ODE;
pub use settings::Settings;
pub use solver::Rke;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f64 or f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
