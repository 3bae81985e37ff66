//! Initial configuration for the solver

use bon::Builder;

use crate::Float;

/// Initial configuration for [`Rke`](crate::Rke).
///
/// All fields have defaults suitable for well-scaled problems; override the
/// ones you care about through the builder. After construction the same
/// quantities live as public fields on the solver and may be adjusted freely
/// between `solve` calls.
///
/// # Example
///
/// ```ignore
/// let settings = Settings::builder()
///     .error_slope(1e-9)
///     .error_bias(1e-10)
///     .build();
/// let mut solver = Rke::with_settings(2, problem, settings);
/// ```
#[derive(Builder, Clone, Debug)]
pub struct Settings {
    /// Minimum allowable step size magnitude.
    #[builder(default = 1e-6)]
    pub min_step: Float,
    /// Maximum allowable step size magnitude.
    #[builder(default = 1e6)]
    pub max_step: Float,
    /// Initial step size magnitude.
    #[builder(default = 1.0)]
    pub h0: Float,
    /// Slope of the allowable error per time unit: the per-component
    /// allowable error is `|h| * (error_slope * |y_k| + error_bias)`.
    #[builder(default = 1e-7)]
    pub error_slope: Float,
    /// Bias of the allowable error per time unit.
    #[builder(default = 1e-8)]
    pub error_bias: Float,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::builder().build()
    }
}
