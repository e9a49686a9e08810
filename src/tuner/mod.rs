//! Tuner traits and the built-in [`DefaultTuner`].
//!
//! A tuner searches an algorithm's hyperparameter space and records the
//! best configuration it found. Concrete strategies (grid, random,
//! Bayesian) implement [`ParamsTuner`] for the algorithms they support.
//!
//! # Implementing a custom tuner
//!
//! ```
//! use params_tuner::prelude::*;
//!
//! /// Takes the defaults and halves every float.
//! struct HalvingTuner {
//!     best: Option<Params>,
//! }
//!
//! impl Tuner for HalvingTuner {
//!     fn name(&self) -> &str {
//!         "HalvingTuner"
//!     }
//!
//!     fn best_params(&self) -> Result<&Params> {
//!         self.best.as_ref().ok_or_else(|| Error::NotFitted {
//!             tuner: self.name().to_string(),
//!         })
//!     }
//! }
//!
//! impl<A: TunableAlgorithm> ParamsTuner<A> for HalvingTuner {
//!     fn fit(&mut self, algorithm: &mut A, iterator: Option<&A::Iter>) -> Result<TuneOutcome<A>> {
//!         let mut params = algorithm.init_params_on_input(iterator)?;
//!         for value in params.values_mut() {
//!             if let ParamValue::Float(v) = value {
//!                 *v /= 2.0;
//!             }
//!         }
//!         self.best = Some(params);
//!         Ok(TuneOutcome::ParamsOnly)
//!     }
//! }
//! ```

mod default;

pub use default::DefaultTuner;

use crate::algorithm::TunableAlgorithm;
use crate::error::Result;
use crate::param::Params;

/// The algorithm-independent half of the tuner contract.
///
/// Split out of [`ParamsTuner`] so that the best parameters can be read
/// without naming the algorithm type the tuner was fitted with.
pub trait Tuner {
    /// Diagnostic label.
    fn name(&self) -> &str;

    /// Whether the search should run on a holdout split rather than on
    /// full cross-validation.
    ///
    /// Default: `false`.
    fn fit_on_holdout(&self) -> bool {
        false
    }

    /// Returns the best parameters found by the last successful `fit`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFitted`](crate::Error::NotFitted) if the tuner
    /// has not been fitted yet.
    fn best_params(&self) -> Result<&Params>;
}

/// Hyperparameter search over a [`TunableAlgorithm`].
///
/// Object safe, so pipelines can hold `Box<dyn ParamsTuner<A>>`. Calling
/// `fit` requires `&mut self`; a tuner instance is not meant to be fitted
/// from several threads at once.
pub trait ParamsTuner<A: TunableAlgorithm>: Tuner {
    /// Tunes the algorithm's hyperparameters.
    ///
    /// `iterator` is forwarded to the algorithm as given. On success the
    /// best parameters are replaced by the ones found in this call.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the algorithm or by the search itself.
    fn fit(&mut self, algorithm: &mut A, iterator: Option<&A::Iter>) -> Result<TuneOutcome<A>>;
}

/// The result of [`ParamsTuner::fit`].
pub enum TuneOutcome<A: TunableAlgorithm> {
    /// Only the parameters were chosen. Either the algorithm was already
    /// fitted, or the strategy leaves fitting to the caller.
    ParamsOnly,
    /// The fitted algorithm of the best trial with its predictions.
    Fitted {
        /// The best fitted algorithm instance.
        algorithm: A,
        /// Out-of-fold or holdout predictions of `algorithm`.
        predictions: A::Dataset,
    },
}

impl<A: TunableAlgorithm> TuneOutcome<A> {
    /// Returns `true` for [`TuneOutcome::ParamsOnly`].
    #[must_use]
    pub fn is_params_only(&self) -> bool {
        matches!(self, Self::ParamsOnly)
    }

    /// Returns the fitted algorithm and its predictions, if any.
    #[must_use]
    pub fn into_fitted(self) -> Option<(A, A::Dataset)> {
        match self {
            Self::ParamsOnly => None,
            Self::Fitted {
                algorithm,
                predictions,
            } => Some((algorithm, predictions)),
        }
    }
}

impl<A> core::fmt::Debug for TuneOutcome<A>
where
    A: TunableAlgorithm + core::fmt::Debug,
    A::Dataset: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ParamsOnly => f.write_str("ParamsOnly"),
            Self::Fitted {
                algorithm,
                predictions,
            } => f
                .debug_struct("Fitted")
                .field("algorithm", algorithm)
                .field("predictions", predictions)
                .finish(),
        }
    }
}
