use super::{ParamsTuner, TuneOutcome, Tuner};
use crate::algorithm::TunableAlgorithm;
use crate::error::{Error, Result};
use crate::param::Params;

/// A tuner that performs no search and adopts the algorithm's defaults.
///
/// `fit` always returns [`TuneOutcome::ParamsOnly`]; fitting the model is
/// left to the caller.
///
/// # Example
///
/// ```
/// use params_tuner::prelude::*;
///
/// struct Booster;
///
/// impl TunableAlgorithm for Booster {
///     type Iter = ();
///     type Dataset = Vec<f64>;
///
///     fn init_params_on_input(&self, _iterator: Option<&()>) -> Result<Params> {
///         Ok(Params::from([
///             ("num_leaves".to_string(), ParamValue::Int(31)),
///             ("learning_rate".to_string(), ParamValue::Float(0.05)),
///         ]))
///     }
/// }
///
/// let mut tuner = DefaultTuner::new();
/// assert!(tuner.best_params().is_err());
///
/// let outcome = tuner.fit(&mut Booster, None).unwrap();
/// assert!(outcome.is_params_only());
/// assert_eq!(tuner.best_params().unwrap()["num_leaves"], ParamValue::Int(31));
/// ```
#[derive(Clone, Debug)]
pub struct DefaultTuner {
    name: String,
    fit_on_holdout: bool,
    best_params: Option<Params>,
}

impl DefaultTuner {
    /// Creates an unfitted tuner named `"DefaultTuner"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "DefaultTuner".to_string(),
            fit_on_holdout: false,
            best_params: None,
        }
    }

    /// Sets the diagnostic label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the holdout flag. It is recorded but does not change how this
    /// tuner fits.
    #[must_use]
    pub fn with_fit_on_holdout(mut self, fit_on_holdout: bool) -> Self {
        self.fit_on_holdout = fit_on_holdout;
        self
    }
}

impl Default for DefaultTuner {
    fn default() -> Self {
        Self::new()
    }
}

impl Tuner for DefaultTuner {
    fn name(&self) -> &str {
        &self.name
    }

    fn fit_on_holdout(&self) -> bool {
        self.fit_on_holdout
    }

    fn best_params(&self) -> Result<&Params> {
        self.best_params.as_ref().ok_or_else(|| Error::NotFitted {
            tuner: self.name.clone(),
        })
    }
}

impl<A: TunableAlgorithm> ParamsTuner<A> for DefaultTuner {
    fn fit(&mut self, algorithm: &mut A, iterator: Option<&A::Iter>) -> Result<TuneOutcome<A>> {
        trace_debug!(
            tuner = %self.name,
            has_iterator = iterator.is_some(),
            "adopting default parameters"
        );
        let params = algorithm.init_params_on_input(iterator)?;
        trace_info!(tuner = %self.name, n_params = params.len(), "default parameters adopted");
        self.best_params = Some(params);
        Ok(TuneOutcome::ParamsOnly)
    }
}
