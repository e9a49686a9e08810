//! Distribution descriptors for hyperparameter search spaces.
//!
//! A descriptor only records the shape of a search space. Sampling from it
//! is the job of a concrete [`ParamsTuner`](crate::tuner::ParamsTuner).
//!
//! # Example
//!
//! ```
//! use params_tuner::distribution::{Choice, Normal, Uniform};
//!
//! let boosting = Choice::new(["gbdt", "dart"]);
//! let lr = Uniform::new(1e-3, 1e-1).log_scale();
//! let leaves = Uniform::new(16.0, 256.0).step(16.0);
//! let l2 = Normal::new(0.0, 1.0);
//!
//! assert_eq!(boosting.options().len(), 2);
//! assert!(lr.log());
//! assert_eq!(leaves.q(), Some(16.0));
//! assert!(l2.q().is_none());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::param::ParamValue;

/// A discrete set of candidate values. Order is preserved as given.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Choice {
    options: Vec<ParamValue>,
}

impl Choice {
    /// Creates a choice over the given options.
    #[must_use]
    pub fn new<I, T>(options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ParamValue>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// The candidate values, in construction order.
    #[must_use]
    pub fn options(&self) -> &[ParamValue] {
        &self.options
    }

    /// Checks that there is at least one option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChoices`] if the option list is empty.
    pub fn validate(&self) -> Result<()> {
        if self.options.is_empty() {
            return Err(Error::EmptyChoices);
        }
        Ok(())
    }
}

/// A uniform range `[low, high]` with optional step and log-space sampling.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Uniform {
    low: f64,
    high: f64,
    q: Option<f64>,
    log: bool,
}

impl Uniform {
    /// Creates a uniform range. Bounds are not checked; see [`Uniform::validate`].
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            q: None,
            log: false,
        }
    }

    /// Sets a step size for discretized sampling.
    #[must_use]
    pub fn step(mut self, q: f64) -> Self {
        self.q = Some(q);
        self
    }

    /// Enables log-space sampling.
    #[must_use]
    pub fn log_scale(mut self) -> Self {
        self.log = true;
        self
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Step size, if the range is discretized.
    #[must_use]
    pub fn q(&self) -> Option<f64> {
        self.q
    }

    /// Whether the range is sampled in log space.
    #[must_use]
    pub fn log(&self) -> bool {
        self.log
    }

    /// Checks the range configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBounds`] if a bound is not finite or `low > high`.
    /// - [`Error::InvalidLogBounds`] if log scale is set and `low <= 0`.
    /// - [`Error::InvalidStep`] if the step is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low > self.high {
            return Err(Error::InvalidBounds {
                low: self.low,
                high: self.high,
            });
        }
        if self.log && self.low <= 0.0 {
            return Err(Error::InvalidLogBounds);
        }
        validate_step(self.q)
    }
}

/// A normal distribution, described with the same fields as [`Uniform`].
///
/// `low` and `high` are stored exactly as given and are not reinterpreted
/// as mean and standard deviation. Their meaning is left to the tuner that
/// consumes the descriptor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Normal {
    low: f64,
    high: f64,
    q: Option<f64>,
    log: bool,
}

impl Normal {
    /// Creates a normal descriptor.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            q: None,
            log: false,
        }
    }

    /// Sets a step size for discretized sampling.
    #[must_use]
    pub fn step(mut self, q: f64) -> Self {
        self.q = Some(q);
        self
    }

    /// Enables log-space sampling.
    #[must_use]
    pub fn log_scale(mut self) -> Self {
        self.log = true;
        self
    }

    /// First bound, stored as given.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Second bound, stored as given.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Step size, if discretized.
    #[must_use]
    pub fn q(&self) -> Option<f64> {
        self.q
    }

    /// Whether sampling happens in log space.
    #[must_use]
    pub fn log(&self) -> bool {
        self.log
    }

    /// Checks the step and log-scale settings. `low` and `high` are not
    /// ordered against each other.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLogBounds`] if log scale is set and `low` is not
    ///   positive (including NaN).
    /// - [`Error::InvalidStep`] if the step is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.log && (self.low.is_nan() || self.low <= 0.0) {
            return Err(Error::InvalidLogBounds);
        }
        validate_step(self.q)
    }
}

fn validate_step(q: Option<f64>) -> Result<()> {
    if let Some(q) = q
        && (q <= 0.0 || !q.is_finite())
    {
        return Err(Error::InvalidStep);
    }
    Ok(())
}

/// Enum wrapping all distribution descriptors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Distribution {
    /// A discrete choice.
    Choice(Choice),
    /// A uniform range.
    Uniform(Uniform),
    /// A normal descriptor.
    Normal(Normal),
}

impl Distribution {
    /// Validates the wrapped descriptor.
    ///
    /// # Errors
    ///
    /// Returns the error of the wrapped descriptor's `validate`.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Choice(d) => d.validate(),
            Self::Uniform(d) => d.validate(),
            Self::Normal(d) => d.validate(),
        }
    }
}

impl From<Choice> for Distribution {
    fn from(d: Choice) -> Self {
        Self::Choice(d)
    }
}

impl From<Uniform> for Distribution {
    fn from(d: Uniform) -> Self {
        Self::Uniform(d)
    }
}

impl From<Normal> for Distribution {
    fn from(d: Normal) -> Self {
        Self::Normal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn uniform_round_trips_arguments() {
        let d = Uniform::new(1.0, 10.0).step(2.0).log_scale();
        assert_eq!(d.low(), 1.0);
        assert_eq!(d.high(), 10.0);
        assert_eq!(d.q(), Some(2.0));
        assert!(d.log());
    }

    #[test]
    fn uniform_defaults() {
        let d = Uniform::new(0.0, 1.0);
        assert_eq!(d.q(), None);
        assert!(!d.log());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn normal_round_trips_arguments() {
        let d = Normal::new(-3.0, 5.0).step(0.5).log_scale();
        assert_eq!(d.low(), -3.0);
        assert_eq!(d.high(), 5.0);
        assert_eq!(d.q(), Some(0.5));
        assert!(d.log());
    }

    #[test]
    fn choice_preserves_order() {
        let d = Choice::new(["b", "a", "c"]);
        assert_eq!(
            d.options(),
            &[
                ParamValue::from("b"),
                ParamValue::from("a"),
                ParamValue::from("c")
            ]
        );
    }

    #[test]
    fn construction_does_not_validate() {
        let d = Uniform::new(10.0, 1.0).step(-1.0);
        assert_eq!(d.q(), Some(-1.0));
        assert!(d.validate().is_err());
    }

    #[test]
    fn uniform_validate_invalid_bounds() {
        assert!(matches!(
            Uniform::new(1.0, 0.0).validate(),
            Err(Error::InvalidBounds { .. })
        ));
        assert!(matches!(
            Uniform::new(f64::NAN, 1.0).validate(),
            Err(Error::InvalidBounds { .. })
        ));
    }

    #[test]
    fn uniform_validate_invalid_log() {
        assert!(matches!(
            Uniform::new(0.0, 1.0).log_scale().validate(),
            Err(Error::InvalidLogBounds)
        ));
    }

    #[test]
    fn uniform_validate_invalid_step() {
        assert!(matches!(
            Uniform::new(0.0, 1.0).step(0.0).validate(),
            Err(Error::InvalidStep)
        ));
        assert!(matches!(
            Uniform::new(0.0, 1.0).step(f64::NAN).validate(),
            Err(Error::InvalidStep)
        ));
    }

    #[test]
    fn uniform_validate_accepts_point_range() {
        assert!(Uniform::new(2.0, 2.0).validate().is_ok());
    }

    #[test]
    fn normal_does_not_order_bounds() {
        assert!(Normal::new(5.0, 1.0).validate().is_ok());
        assert!(matches!(
            Normal::new(-1.0, 1.0).log_scale().validate(),
            Err(Error::InvalidLogBounds)
        ));
        assert!(matches!(
            Normal::new(0.0, 1.0).step(-0.5).validate(),
            Err(Error::InvalidStep)
        ));
    }

    #[test]
    fn normal_log_scale_rejects_nan_low() {
        assert!(matches!(
            Normal::new(f64::NAN, 1.0).log_scale().validate(),
            Err(Error::InvalidLogBounds)
        ));
        assert!(Normal::new(f64::NAN, 1.0).validate().is_ok());
    }

    #[test]
    fn choice_validate_empty() {
        let d = Choice::new(Vec::<ParamValue>::new());
        assert!(matches!(d.validate(), Err(Error::EmptyChoices)));
    }

    #[test]
    fn distribution_wraps_and_validates() {
        let d: Distribution = Uniform::new(0.0, 1.0).into();
        assert_eq!(d, Distribution::Uniform(Uniform::new(0.0, 1.0)));
        assert!(d.validate().is_ok());

        let bad: Distribution = Choice::new(Vec::<i64>::new()).into();
        assert!(bad.validate().is_err());
    }
}
