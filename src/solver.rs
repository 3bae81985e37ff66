//! Adaptive Runge-Kutta-England integrator.

use crate::{Error, Float, ODE, Settings};

/// Adaptive step size integrator for a system of first order ordinary
/// differential equations `y' = f(x, y)`, using the Runge-Kutta-England
/// technique.
///
/// One instance holds the state of one integration problem: the dimension and
/// derivative routine fixed at construction, the tunable step bounds and
/// error tolerances, the current adaptive step size, and the accumulated step
/// counters. The instance persists across any number of [`solve`](Self::solve)
/// calls, so a trajectory can be advanced target by target while the step
/// size adapts continuously.
///
/// The public fields may be adjusted between `solve` calls; they must not be
/// touched while a call is in progress (enforced by `&mut self`).
#[derive(Debug, Clone)]
pub struct Rke<F: ODE> {
    /// Number of simultaneous equations.
    n: usize,
    /// Derivative routine.
    f: F,
    /// Minimum allowable step size magnitude.
    pub min_step: Float,
    /// Maximum allowable step size magnitude.
    pub max_step: Float,
    /// Current integration step size magnitude. Adapted by `solve` through
    /// doubling and halving, clamped to `[min_step, max_step]`.
    pub step: Float,
    /// Slope of the allowable error per time unit.
    pub error_slope: Float,
    /// Bias of the allowable error per time unit.
    pub error_bias: Float,
    /// Accumulated number of accepted steps.
    naccpt: usize,
    /// Accumulated number of rejected steps.
    nrejct: usize,
}

impl<F: ODE> Rke<F> {
    /// Create a solver for a system of `n` equations with default settings.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn new(n: usize, f: F) -> Self {
        Self::with_settings(n, f, Settings::default())
    }

    /// Create a solver for a system of `n` equations with the given settings.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn with_settings(n: usize, f: F, settings: Settings) -> Self {
        assert!(n > 0, "system must have at least one equation");
        Self {
            n,
            f,
            min_step: settings.min_step,
            max_step: settings.max_step,
            step: settings.h0,
            error_slope: settings.error_slope,
            error_bias: settings.error_bias,
            naccpt: 0,
            nrejct: 0,
        }
    }

    /// Number of simultaneous equations.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Accumulated number of accepted steps over the life of the solver.
    pub fn accepted_steps(&self) -> usize {
        self.naccpt
    }

    /// Accumulated number of rejected steps over the life of the solver.
    pub fn rejected_steps(&self) -> usize {
        self.nrejct
    }

    /// Consume the solver and return the derivative routine.
    pub fn into_inner(self) -> F {
        self.f
    }

    /// Advance `x` and `y` in place from their current values to `xend`.
    ///
    /// Steps are attempted at the current adaptive step size, truncated when
    /// the remaining interval is shorter. Each trial step is scored with
    /// England's embedded error estimate: within tolerance it is committed
    /// and the step size may double (capped at `max_step`); otherwise it is
    /// retried with the step size halved (floored at `min_step`). Integration
    /// ends once a minimum step can no longer bring `x` closer to `xend`, so
    /// on success `x` lands within half a `min_step` of the target. Backward
    /// integration (`xend < x`) works the same way with negative steps.
    ///
    /// On failure `x` and `y` keep the values committed by the last accepted
    /// step. See [`Error`] for the two failure kinds.
    ///
    /// # Panics
    ///
    /// Panics if `y.len()` differs from the dimension given at construction.
    pub fn solve(&mut self, x: &mut Float, y: &mut [Float], xend: Float) -> Result<(), Error> {
        let n = self.n;
        assert_eq!(y.len(), n, "state vector length must match dimension");

        // Work arrays scoped to this call. dp holds the derivative at the
        // start of the step, d the latest stage evaluation, yt the half-step
        // RK4 estimate, yw the trial states, k1..k7 the hh-scaled stages.
        let mut dp = vec![0.0; n];
        let mut d = vec![0.0; n];
        let mut yt = vec![0.0; n];
        let mut yw = vec![0.0; n];
        let mut k1 = vec![0.0; n];
        let mut k2 = vec![0.0; n];
        let mut k3 = vec![0.0; n];
        let mut k4 = vec![0.0; n];
        let mut k5 = vec![0.0; n];
        let mut k6 = vec![0.0; n];
        let mut k7 = vec![0.0; n];

        // Keep integrating as long as a minimum step could bring the system
        // closer to the aimed time, even if we overshoot it a little.
        while 2.0 * (xend - *x).abs() > self.min_step {
            // Initial step size and direction, truncated to land on xend.
            let mut h = xend - *x;
            if h > 0.0 {
                if h > self.step {
                    h = self.step;
                }
            } else if h < -self.step {
                h = -self.step;
            }

            // Derivatives at the start of the step, shared by every retry.
            if !self.f.ode(*x, y, &mut dp) {
                return Err(Error::DerivativeFailed(*x));
            }

            // Retry at this time point until the integration error is within
            // tolerances, adjusting the step size as we go.
            loop {
                let q = 0.25 * h;
                let hh = q + q;
                let th = hh + q;

                // Partial 4th order Runge-Kutta step over [x, x + hh], taken
                // far enough to chain into England's error estimate.
                for i in 0..n {
                    k1[i] = hh * dp[i];
                    yw[i] = y[i] + 0.5 * k1[i];
                }
                if !self.f.ode(*x + q, &yw, &mut d) {
                    return Err(Error::DerivativeFailed(*x + q));
                }

                for i in 0..n {
                    k2[i] = hh * d[i];
                    yw[i] = y[i] + 0.25 * (k1[i] + k2[i]);
                }
                if !self.f.ode(*x + q, &yw, &mut d) {
                    return Err(Error::DerivativeFailed(*x + q));
                }

                for i in 0..n {
                    k3[i] = hh * d[i];
                    yw[i] = y[i] + (-k2[i] + k3[i] + k3[i]);
                }
                if !self.f.ode(*x + hh, &yw, &mut d) {
                    return Err(Error::DerivativeFailed(*x + hh));
                }

                for i in 0..n {
                    k4[i] = hh * d[i];
                    yt[i] = y[i] + (k1[i] + 4.0 * k3[i] + k4[i]) / 6.0;
                }
                if !self.f.ode(*x + hh, &yt, &mut d) {
                    return Err(Error::DerivativeFailed(*x + hh));
                }

                for i in 0..n {
                    k5[i] = hh * d[i];
                    yw[i] = yt[i] + 0.5 * k5[i];
                }
                if !self.f.ode(*x + th, &yw, &mut d) {
                    return Err(Error::DerivativeFailed(*x + th));
                }

                for i in 0..n {
                    k6[i] = hh * d[i];
                    yw[i] = yt[i] + 0.25 * (k5[i] + k6[i]);
                }
                if !self.f.ode(*x + th, &yw, &mut d) {
                    return Err(Error::DerivativeFailed(*x + th));
                }

                for i in 0..n {
                    k7[i] = hh * d[i];
                    yw[i] = y[i]
                        + (-k1[i] - 96.0 * k2[i] + 92.0 * k3[i] - 121.0 * k4[i]
                            + 144.0 * k5[i]
                            + 6.0 * k6[i]
                            - 12.0 * k7[i])
                            / 6.0;
                }

                // England error analysis on the partial integration.
                if !self.f.ode(*x + h, &yw, &mut d) {
                    return Err(Error::DerivativeFailed(*x + h));
                }

                let mut within_tolerance = true;
                let mut all_errors_small = true;
                for i in 0..n {
                    let estimated_error = ((-k1[i] + 4.0 * k3[i] + 17.0 * k4[i] - 23.0 * k5[i]
                        + 4.0 * k7[i]
                        - hh * d[i])
                        / 90.0)
                        .abs();
                    let allowable_error =
                        h.abs() * (self.error_slope * yt[i].abs() + self.error_bias);
                    if estimated_error > allowable_error {
                        within_tolerance = false;
                        break;
                    } else if estimated_error > 0.02 * allowable_error {
                        all_errors_small = false;
                    }
                }

                if within_tolerance {
                    self.naccpt += 1;

                    // Complete the Runge-Kutta step and commit the values.
                    for i in 0..n {
                        yw[i] = yt[i] + (-k6[i] + k7[i] + k7[i]);
                    }
                    if !self.f.ode(*x + h, &yw, &mut d) {
                        return Err(Error::DerivativeFailed(*x + h));
                    }
                    *x += h;
                    for i in 0..n {
                        y[i] = yt[i] + (k5[i] + 4.0 * k7[i] + hh * d[i]) / 6.0;
                    }

                    // Increment the step size if desirable. A truncated step
                    // (|h| < step) says nothing about the full step size.
                    if all_errors_small && h.abs() == self.step {
                        if 2.0 * self.step > self.max_step {
                            self.step = self.max_step;
                        } else {
                            self.step *= 2.0;
                        }
                    }
                    break;
                }

                self.nrejct += 1;

                // Decrement the step size if possible, taking the direction
                // from the current relation of xend to x.
                if h.abs() > self.min_step {
                    if self.step < 2.0 * self.min_step {
                        self.step = self.min_step;
                    } else {
                        self.step *= 0.5;
                    }
                    h = if xend > *x { self.step } else { -self.step };
                } else {
                    return Err(Error::ConvergenceFailed {
                        x: *x,
                        min_step: self.min_step,
                    });
                }
            }
        }
        Ok(())
    }
}
