//! Engine configuration, validation, and error types.

use std::error::Error;
use std::fmt;

/// Tuning constants for [`FlowEngine`](crate::FlowEngine).
///
/// The defaults reproduce the reference animation feel; all of them are
/// plain data so a host application can expose them in a debug panel.
/// [`validate()`](FlowConfig::validate) checks structural invariants at
/// engine construction.
#[derive(Clone, Debug)]
pub struct FlowConfig {
    /// Factor converting a branch current into marker velocity.
    /// Default: `0.01 / 0.03`.
    pub speed_scale: f64,
    /// Dead zone: a marker on a branch whose |current| is below this does
    /// not move, avoiding visual noise near zero current. Default: `1e-10`.
    pub min_current: f64,
    /// Clamp applied to a neighbor's current when deciding where a marker
    /// continues past a junction. The clamp is local to the decision and
    /// never mutates the branch. Default: `10.0`.
    pub fire_current: f64,
    /// Upper bound on per-tick marker displacement, in scene units.
    /// When current spikes would exceed it, the whole tick is slowed by a
    /// global scale factor instead. Default: `0.24` (roughly half the
    /// default marker spacing).
    pub max_step: f64,
    /// Number of spacing-relaxation rounds per tick. Default: `2`.
    pub num_equalize: usize,
    /// Relaxation speed when the correction moves a marker the same way
    /// the branch current pushes it. Default: `0.055`.
    pub correction_with_current: f64,
    /// Relaxation speed against the current's direction. Deliberately
    /// smaller so relaxation never visibly fights the flow. Default: `0.01`.
    pub correction_against_current: f64,
    /// Normalizes the correction speeds to a reference frame rate.
    /// Default: `1.0`.
    pub equalize_scale: f64,
    /// Capacity of the rolling window that smooths the reported
    /// percent-of-real-time figure. Default: `30`.
    pub smoothing_window: usize,
    /// Seed for the equalization shuffle. Two engines with equal seeds and
    /// equal inputs produce identical marker trajectories. Default: `0`.
    pub seed: u64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            speed_scale: 0.01 / 0.03,
            min_current: 1e-10,
            fire_current: 10.0,
            max_step: 0.24,
            num_equalize: 2,
            correction_with_current: 0.055,
            correction_against_current: 0.01,
            equalize_scale: 1.0,
            smoothing_window: 30,
            seed: 0,
        }
    }
}

impl FlowConfig {
    /// Check all structural invariants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `speed_scale`, `fire_current`, `max_step`, or `equalize_scale`
    ///   is NaN, infinite, zero, or negative
    /// - `min_current`, `correction_with_current`, or
    ///   `correction_against_current` is NaN, infinite, or negative
    /// - `num_equalize` is zero
    /// - `smoothing_window` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("speed_scale", self.speed_scale),
            ("fire_current", self.fire_current),
            ("max_step", self.max_step),
            ("equalize_scale", self.equalize_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveTuning { name, value });
            }
        }
        for (name, value) in [
            ("min_current", self.min_current),
            ("correction_with_current", self.correction_with_current),
            ("correction_against_current", self.correction_against_current),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeTuning { name, value });
            }
        }
        if self.num_equalize == 0 {
            return Err(ConfigError::ZeroEqualizeRounds);
        }
        if self.smoothing_window == 0 {
            return Err(ConfigError::ZeroSmoothingWindow);
        }
        Ok(())
    }
}

/// Errors detected during [`FlowConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A tuning constant that must be finite and positive is not.
    NonPositiveTuning {
        /// Which field was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A tuning constant that must be finite and non-negative is not.
    NegativeTuning {
        /// Which field was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `num_equalize` is zero; spacing would never relax.
    ZeroEqualizeRounds,
    /// `smoothing_window` is zero; the reported speed would be undefined.
    ZeroSmoothingWindow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTuning { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::NegativeTuning { name, value } => {
                write!(f, "{name} must be finite and non-negative, got {value}")
            }
            Self::ZeroEqualizeRounds => write!(f, "num_equalize must be at least 1"),
            Self::ZeroSmoothingWindow => write!(f, "smoothing_window must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
