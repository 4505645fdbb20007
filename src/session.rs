//! Rostering session.
//!
//! Holds the working catalog together with the fixed catalog captured when
//! the session starts. The fixed catalog is its own value, never shared with
//! the working one, and is not modified afterwards; backfill targets are
//! always computed against it.

use serde::Serialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::{ShiftCatalog, ShiftKey};

/// Working and fixed shift catalogs for one session.
///
/// # Example
///
/// ```
/// use shift_roster::Session;
///
/// let mut session = Session::default();
/// session.add_shift("12:00-14:00".parse().unwrap(), 1).unwrap();
/// assert_eq!(session.current().len(), 5);
/// assert_eq!(session.fixed().len(), 4);
///
/// // fixed shifts stay put
/// assert!(session.remove_shift(&"08:00-11:00".parse().unwrap()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    current: ShiftCatalog,
    fixed: ShiftCatalog,
}

impl Session {
    /// Starts a session; `initial` becomes both the working catalog and
    /// the fixed snapshot.
    pub fn new(initial: ShiftCatalog) -> Self {
        let fixed = initial.clone();
        Self {
            current: initial,
            fixed,
        }
    }

    /// The editable catalog used by primary allocation.
    pub fn current(&self) -> &ShiftCatalog {
        &self.current
    }

    /// The catalog captured at session start, used by backfill.
    pub fn fixed(&self) -> &ShiftCatalog {
        &self.fixed
    }

    /// Adds a shift to the working catalog.
    ///
    /// # Errors
    /// `DuplicateShift` if already present, `InvalidRequiredCount` if
    /// `required_count` is zero. Bounds are checked when the key is built.
    pub fn add_shift(&mut self, key: ShiftKey, required_count: u32) -> Result<(), ConfigError> {
        self.current.insert(key, required_count)?;
        debug!(shift = %key, required_count, "shift added");
        Ok(())
    }

    /// Removes a shift from the working catalog, returning its headcount.
    ///
    /// # Errors
    /// `FixedShift` for shifts captured at session start, `UnknownShift`
    /// if the shift is not in the working catalog.
    pub fn remove_shift(&mut self, key: &ShiftKey) -> Result<u32, ConfigError> {
        if self.fixed.contains(key) {
            return Err(ConfigError::FixedShift(*key));
        }
        let count = self
            .current
            .remove(key)
            .ok_or(ConfigError::UnknownShift(*key))?;
        debug!(shift = %key, "shift removed");
        Ok(count)
    }

    /// Whether a shift belongs to the fixed catalog.
    pub fn is_fixed(&self, key: &ShiftKey) -> bool {
        self.fixed.contains(key)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ShiftCatalog::standard())
    }
}
