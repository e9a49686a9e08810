//! The [`TunableAlgorithm`] trait describes what a tuner needs from a
//! trainable model.
//!
//! The dataset and cross-validation machinery live outside this crate. A
//! tuner only forwards the train/validation iterator to the algorithm and
//! hands back the algorithm's prediction container, so both are modelled
//! as associated types.

use crate::error::Result;
use crate::param::Params;
use crate::search_space::SearchSpace;

/// A trainable algorithm whose hyperparameters can be tuned.
///
/// # Example
///
/// ```
/// use params_tuner::{Params, ParamValue, Result, TunableAlgorithm};
///
/// struct Ridge;
///
/// impl TunableAlgorithm for Ridge {
///     type Iter = [(Vec<f64>, Vec<f64>)];
///     type Dataset = Vec<f64>;
///
///     fn init_params_on_input(&self, _iterator: Option<&Self::Iter>) -> Result<Params> {
///         Ok(Params::from([("alpha".to_string(), ParamValue::Float(1.0))]))
///     }
/// }
///
/// let params = Ridge.init_params_on_input(None).unwrap();
/// assert_eq!(params["alpha"], ParamValue::Float(1.0));
/// ```
pub trait TunableAlgorithm {
    /// Train/validation iterator over folds or a holdout split. Tuners
    /// never inspect it.
    type Iter: ?Sized;

    /// Container for out-of-fold or holdout predictions.
    type Dataset;

    /// Returns the default parameters for the given input.
    ///
    /// `iterator` is `None` when the algorithm already carries its training
    /// data or no iteration is needed.
    ///
    /// # Errors
    ///
    /// Implementations report their own failures, usually as
    /// [`Error::Algorithm`](crate::Error::Algorithm).
    fn init_params_on_input(&self, iterator: Option<&Self::Iter>) -> Result<Params>;

    /// Returns the space a searching tuner should explore.
    ///
    /// Defaults to an empty space, meaning only the defaults are known.
    fn search_space(&self, _iterator: Option<&Self::Iter>) -> SearchSpace {
        SearchSpace::new()
    }
}
