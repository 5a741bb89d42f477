//! Recording navigator for tests.

use std::sync::RwLock;

use crate::navigator::Navigator;

/// Navigator that remembers every requested path.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: RwLock<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths requested so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn visited(&self) -> Vec<String> {
        self.visited.read().unwrap().clone()
    }

    /// Most recent request, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.visited.read().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.visited.write().unwrap().push(path.to_owned());
    }
}
