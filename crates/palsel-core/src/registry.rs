//! Selector factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::selector::{ConcurrentSelector, SelectError, Selector, SequentialSelector};

/// Factory trait for creating selectors.
pub trait SelectorFactory: Send + Sync {
    /// Get or create a selector by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Selector>, SelectError>;

    /// List all available selector names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Selector>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_selector(name: &str) -> Result<Arc<dyn Selector>, SelectError> {
        match name {
            "seq" | "sequential" => Ok(Arc::new(SequentialSelector::new())),
            "par" | "concurrent" => Ok(Arc::new(ConcurrentSelector::new())),
            _ => Err(SelectError::Config(format!("unknown selector: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Selector>, SelectError> {
        if let Some(selector) = self.cache.read().get(name) {
            return Ok(Arc::clone(selector));
        }

        let selector = Self::create_selector(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&selector));
        Ok(selector)
    }

    fn available(&self) -> Vec<&str> {
        vec!["seq", "par"]
    }
}
