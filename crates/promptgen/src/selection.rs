//! Per-category selection state.
//!
//! One slot per catalog category, kept in declaration order. An empty string
//! means "nothing chosen". Gating is deliberately not checked here: whether a
//! category may be chosen is a policy of the calling surface (see
//! [`Session::choose`](crate::session::Session::choose)).

use crate::catalog::Catalog;
use crate::error::SelectionError;

/// Mutable selection state for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    slots: Vec<(&'static str, String)>,
}

impl Selection {
    /// Empty selection with one slot per catalog category.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            slots: catalog
                .list_categories()
                .iter()
                .map(|c| (c.key, String::new()))
                .collect(),
        }
    }

    /// Set the chosen value for `key`. An empty `value` resets the slot.
    ///
    /// Unknown keys leave the state untouched.
    pub fn select(&mut self, key: &str, value: &str) -> Result<(), SelectionError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|(k, _)| *k == key)
            .ok_or_else(|| SelectionError::UnknownCategory(key.to_string()))?;
        if slot.1 != value {
            slot.1.clear();
            slot.1.push_str(value);
        }
        Ok(())
    }

    pub fn clear(&mut self, key: &str) -> Result<(), SelectionError> {
        self.select(key, "")
    }

    /// Current value for `key`, empty when unselected. `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Read-only snapshot of every slot in catalog order.
    pub fn get_all(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            entries: self.slots.clone(),
        }
    }
}

/// Point-in-time copy of a [`Selection`], ordered by catalog declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    entries: Vec<(&'static str, String)>,
}

impl SelectionSnapshot {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All `(key, value)` pairs, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Chosen values only, in catalog order.
    pub fn non_empty(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.non_empty().next().is_none()
    }
}
