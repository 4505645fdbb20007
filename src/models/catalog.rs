//! Shift catalog.
//!
//! An insertion-ordered set of shifts with their required headcounts.
//! Iteration follows insertion order; this is the "natural order" the
//! backfill phase walks.

use serde::Serialize;

use super::{ShiftDefinition, ShiftKey};
use crate::error::ConfigError;

const STANDARD_SHIFTS: [(ShiftKey, u32); 4] = [
    (ShiftKey::from_const(8 * 60, 11 * 60), 1),
    (ShiftKey::from_const(11 * 60, 16 * 60 + 30), 2),
    (ShiftKey::from_const(16 * 60 + 30, 18 * 60 + 30), 1),
    (ShiftKey::from_const(18 * 60 + 30, 22 * 60), 2),
];

/// Ordered mapping from shift to required headcount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShiftCatalog {
    shifts: Vec<ShiftDefinition>,
}

impl ShiftCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four-shift working day used when nothing else is configured.
    ///
    /// | Shift | Headcount |
    /// |-------|-----------|
    /// | 08:00-11:00 | 1 |
    /// | 11:00-16:30 | 2 |
    /// | 16:30-18:30 | 1 |
    /// | 18:30-22:00 | 2 |
    pub fn standard() -> Self {
        Self {
            shifts: STANDARD_SHIFTS
                .iter()
                .map(|&(key, count)| ShiftDefinition::new(key, count))
                .collect(),
        }
    }

    /// Builds a catalog from `(shift, headcount)` pairs, in order.
    pub fn from_entries<I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (ShiftKey, u32)>,
    {
        let mut catalog = Self::new();
        for (key, count) in entries {
            catalog.insert(key, count)?;
        }
        Ok(catalog)
    }

    /// Adds a shift at the end of the catalog.
    ///
    /// # Errors
    /// `DuplicateShift` if the interval is already present,
    /// `InvalidRequiredCount` if `required_count` is zero.
    pub fn insert(&mut self, key: ShiftKey, required_count: u32) -> Result<(), ConfigError> {
        if required_count < 1 {
            return Err(ConfigError::InvalidRequiredCount {
                shift: key,
                count: required_count,
            });
        }
        if self.contains(&key) {
            return Err(ConfigError::DuplicateShift(key));
        }
        self.shifts.push(ShiftDefinition::new(key, required_count));
        Ok(())
    }

    /// Removes a shift, returning its headcount if it was present.
    pub fn remove(&mut self, key: &ShiftKey) -> Option<u32> {
        let pos = self.shifts.iter().position(|s| &s.key == key)?;
        Some(self.shifts.remove(pos).required_count)
    }

    /// Whether the shift is in the catalog.
    pub fn contains(&self, key: &ShiftKey) -> bool {
        self.shifts.iter().any(|s| &s.key == key)
    }

    /// Required headcount for a shift.
    pub fn required(&self, key: &ShiftKey) -> Option<u32> {
        self.shifts
            .iter()
            .find(|s| &s.key == key)
            .map(|s| s.required_count)
    }

    /// Entries in natural (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &ShiftDefinition> {
        self.shifts.iter()
    }

    /// Shift keys in natural order.
    pub fn keys(&self) -> impl Iterator<Item = ShiftKey> + '_ {
        self.shifts.iter().map(|s| s.key)
    }

    /// Entries ordered longest first.
    ///
    /// The sort is stable, so equal-length shifts keep catalog order.
    pub fn by_descending_duration(&self) -> Vec<ShiftDefinition> {
        let mut sorted = self.shifts.clone();
        sorted.sort_by(|a, b| b.key.duration_minutes().cmp(&a.key.duration_minutes()));
        sorted
    }

    /// Shift keys ordered by start time.
    pub fn sorted_by_start(&self) -> Vec<ShiftKey> {
        let mut keys: Vec<ShiftKey> = self.keys().collect();
        keys.sort();
        keys
    }

    /// Number of shifts.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Whether the catalog has no shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

impl<'a> IntoIterator for &'a ShiftCatalog {
    type Item = &'a ShiftDefinition;
    type IntoIter = std::slice::Iter<'a, ShiftDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.shifts.iter()
    }
}
