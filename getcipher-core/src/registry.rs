//! Algorithm registry — name → constructor.
//!
//! Every run selects exactly one algorithm by name. The registry hands
//! out a freshly initialised [`AlgorithmDescriptor`] each time, so two
//! runs never share parameter state.

use std::collections::BTreeMap;

use crate::algorithm::{Algorithm, AlgorithmDescriptor};
use crate::errors::CipherError;
use crate::phpass::Phpass;

type Constructor = fn() -> Box<dyn Algorithm>;

fn phpass() -> Box<dyn Algorithm> {
    Box::new(Phpass::new())
}

/// Registered algorithms, keyed by name (aliases included).
#[derive(Debug, Clone)]
pub struct Registry {
    entries: BTreeMap<&'static str, Constructor>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry with every built-in algorithm. `wordpress` is an alias
    /// for `phpass`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("phpass", phpass);
        registry.register("wordpress", phpass);
        registry
    }

    pub fn register(&mut self, name: &'static str, constructor: Constructor) {
        self.entries.insert(name, constructor);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Build and initialise the algorithm registered as `name`.
    ///
    /// # Errors
    /// `CipherError::UnknownAlgorithm` if nothing is registered under
    /// `name`, or whatever the algorithm's `init` reports.
    pub fn create(&self, name: &str) -> Result<AlgorithmDescriptor, CipherError> {
        let constructor = self
            .entries
            .get(name)
            .ok_or_else(|| CipherError::UnknownAlgorithm(name.to_string()))?;
        AlgorithmDescriptor::new(constructor())
    }
}
