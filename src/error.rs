/// Errors returned by tuners, distributions and search spaces.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when best parameters are read before a successful `fit`.
    #[error("{tuner} should be fitted first")]
    NotFitted {
        /// The name of the tuner that was queried.
        tuner: String,
    },

    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when log scale is used with non-positive bounds.
    #[error("invalid log bounds: low must be positive for log scale")]
    InvalidLogBounds,

    /// Returned when step size is not positive.
    #[error("invalid step: step must be positive")]
    InvalidStep,

    /// Returned when choice options are empty.
    #[error("choice options cannot be empty")]
    EmptyChoices,

    /// Returned when a named search-space entry fails validation.
    #[error("invalid distribution for parameter '{name}'")]
    InvalidParameter {
        /// The name of the offending parameter.
        name: String,
        /// The validation failure.
        #[source]
        source: Box<Error>,
    },

    /// Returned when the tuned algorithm fails to produce parameters.
    #[error("algorithm error: {0}")]
    Algorithm(String),
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use core::error::Error as _;

    use super::*;

    #[test]
    fn not_fitted_message_names_tuner() {
        let err = Error::NotFitted {
            tuner: "DefaultTuner".to_string(),
        };
        assert_eq!(err.to_string(), "DefaultTuner should be fitted first");
    }

    #[test]
    fn invalid_parameter_exposes_source() {
        let err = Error::InvalidParameter {
            name: "lr".to_string(),
            source: Box::new(Error::InvalidStep),
        };
        assert_eq!(err.to_string(), "invalid distribution for parameter 'lr'");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "invalid step: step must be positive");
    }
}
