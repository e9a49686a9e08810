//! Named collection of distribution descriptors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::error::{Error, Result};

/// A search space: parameter names mapped to their distributions.
///
/// Entries keep their insertion order. Inserting an existing name replaces
/// its distribution in place.
///
/// # Example
///
/// ```
/// use params_tuner::SearchSpace;
/// use params_tuner::distribution::{Choice, Uniform};
///
/// let space = SearchSpace::new()
///     .with("learning_rate", Uniform::new(1e-3, 3e-1).log_scale())
///     .with("num_leaves", Uniform::new(16.0, 256.0).step(16.0))
///     .with("boosting", Choice::new(["gbdt", "dart"]));
///
/// assert_eq!(space.len(), 3);
/// assert!(space.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchSpace {
    entries: Vec<(String, Distribution)>,
}

impl SearchSpace {
    /// Creates an empty search space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter and returns the space.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, distribution: impl Into<Distribution>) -> Self {
        self.insert(name, distribution);
        self
    }

    /// Adds a parameter, returning the distribution it replaced, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        distribution: impl Into<Distribution>,
    ) -> Option<Distribution> {
        let name = name.into();
        let distribution = distribution.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Some(core::mem::replace(existing, distribution));
        }
        self.entries.push((name, distribution));
        None
    }

    /// Returns the distribution registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Distribution> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d)
    }

    /// Number of parameters in the space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameter has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// `(name, distribution)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Distribution)> {
        self.into_iter()
    }

    /// Validates every distribution, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first parameter whose
    /// distribution is invalid.
    pub fn validate(&self) -> Result<()> {
        for (name, distribution) in &self.entries {
            distribution
                .validate()
                .map_err(|source| Error::InvalidParameter {
                    name: name.clone(),
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }
}

fn entry_ref((name, distribution): &(String, Distribution)) -> (&str, &Distribution) {
    (name.as_str(), distribution)
}

impl<'a> IntoIterator for &'a SearchSpace {
    type Item = (&'a str, &'a Distribution);
    type IntoIter = core::iter::Map<
        core::slice::Iter<'a, (String, Distribution)>,
        fn(&'a (String, Distribution)) -> (&'a str, &'a Distribution),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(entry_ref as fn(&'a (String, Distribution)) -> (&'a str, &'a Distribution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::{Choice, Normal, Uniform};

    #[test]
    fn preserves_insertion_order() {
        let space = SearchSpace::new()
            .with("b", Uniform::new(0.0, 1.0))
            .with("a", Normal::new(0.0, 1.0))
            .with("c", Choice::new([1, 2, 3]));
        assert_eq!(space.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut space = SearchSpace::new()
            .with("x", Uniform::new(0.0, 1.0))
            .with("y", Uniform::new(0.0, 2.0));
        let old = space.insert("x", Uniform::new(5.0, 6.0));

        assert_eq!(old, Some(Uniform::new(0.0, 1.0).into()));
        assert_eq!(space.len(), 2);
        assert_eq!(space.names().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(space.get("x"), Some(&Uniform::new(5.0, 6.0).into()));
    }

    #[test]
    fn iterates_pairs() {
        let space = SearchSpace::new()
            .with("depth", Uniform::new(2.0, 8.0).step(1.0))
            .with("loss", Choice::new(["l1", "l2"]));
        let pairs: Vec<_> = space.iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "depth");
        assert_eq!(pairs[1].1, &Choice::new(["l1", "l2"]).into());

        let mut n = 0;
        for (_name, distribution) in &space {
            assert!(distribution.validate().is_ok());
            n += 1;
        }
        assert_eq!(n, 2);
    }

    #[test]
    fn get_missing() {
        let space = SearchSpace::new();
        assert!(space.is_empty());
        assert!(space.get("x").is_none());
    }

    #[test]
    fn validate_names_offending_parameter() {
        let space = SearchSpace::new()
            .with("ok", Uniform::new(0.0, 1.0))
            .with("bad", Uniform::new(0.0, 1.0).step(-1.0))
            .with("empty", Choice::new(Vec::<bool>::new()));

        match space.validate() {
            Err(Error::InvalidParameter { name, source }) => {
                assert_eq!(name, "bad");
                assert!(matches!(*source, Error::InvalidStep));
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}
