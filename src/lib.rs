#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Hyperparameter tuning contract for automated machine-learning
//! pipelines: a [`ParamsTuner`] trait that search strategies implement, a
//! [`DefaultTuner`] that simply adopts an algorithm's defaults, and the
//! [`Choice`](distribution::Choice), [`Uniform`](distribution::Uniform) and
//! [`Normal`](distribution::Normal) descriptors used to describe search
//! spaces.
//!
//! # Getting Started
//!
//! ```
//! use params_tuner::prelude::*;
//!
//! struct Lgbm;
//!
//! impl TunableAlgorithm for Lgbm {
//!     type Iter = ();
//!     type Dataset = Vec<f64>;
//!
//!     fn init_params_on_input(&self, _iterator: Option<&()>) -> Result<Params> {
//!         Ok(Params::from([("num_leaves".to_string(), ParamValue::Int(31))]))
//!     }
//!
//!     fn search_space(&self, _iterator: Option<&()>) -> SearchSpace {
//!         SearchSpace::new()
//!             .with("num_leaves", Uniform::new(16.0, 255.0).step(1.0))
//!             .with("boosting", Choice::new(["gbdt", "dart"]))
//!     }
//! }
//!
//! let mut tuner = DefaultTuner::new();
//! let outcome = tuner.fit(&mut Lgbm, None).unwrap();
//!
//! assert!(outcome.is_params_only());
//! assert_eq!(tuner.best_params().unwrap().len(), 1);
//! assert!(Lgbm.search_space(None).validate().is_ok());
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`ParamsTuner`] | Search the space of a [`TunableAlgorithm`] and record the best parameters. |
//! | [`Tuner`] | Name, holdout flag and best parameters, independent of the algorithm type. |
//! | [`TuneOutcome`] | Either `ParamsOnly` or a `Fitted` best algorithm with its predictions. |
//! | [`DefaultTuner`] | No search: adopt [`TunableAlgorithm::init_params_on_input`]. |
//! | [`SearchSpace`] | Parameter names mapped to [`Distribution`](distribution::Distribution)s. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`ParamValue`], distributions and [`SearchSpace`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) when tuners fit | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod algorithm;
pub mod distribution;
mod error;
mod param;
mod search_space;
pub mod tuner;

pub use algorithm::TunableAlgorithm;
pub use error::{Error, Result};
pub use param::{ParamValue, Params};
pub use search_space::SearchSpace;
pub use tuner::{DefaultTuner, ParamsTuner, TuneOutcome, Tuner};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use params_tuner::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithm::TunableAlgorithm;
    pub use crate::distribution::{Choice, Distribution, Normal, Uniform};
    pub use crate::error::{Error, Result};
    pub use crate::param::{ParamValue, Params};
    pub use crate::search_space::SearchSpace;
    pub use crate::tuner::{DefaultTuner, ParamsTuner, TuneOutcome, Tuner};
}
