//! Scoped identifiers.
//!
//! An entity may be known under several independent id systems at once
//! (a LIMS barcode, a notebook reference, an auto-assigned uuid). Each system
//! is a *scope*; scopes compare case-insensitively.

use crate::LinkByUid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Generates a fresh random identifier for auto-assigned uids.
#[must_use]
pub fn new_uid() -> String {
    Uuid::new_v4().to_string()
}

/// Mapping from scope to id.
///
/// Scopes keep the casing they were inserted with, but lookups and
/// replacement ignore case, so `"LIMS"` and `"lims"` name the same scope.
/// Iteration is in sorted scope order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uids(BTreeMap<String, String>);

impl Uids {
    /// Creates an empty uid map.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, scope: impl Into<String>, id: impl Into<String>) -> Self {
        self.insert(scope, id);
        self
    }

    /// Returns the id registered under `scope`, ignoring case.
    #[must_use]
    pub fn get(&self, scope: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(s, _)| s.eq_ignore_ascii_case(scope))
            .map(|(_, id)| id.as_str())
    }

    /// Returns true if an id exists for `scope`.
    #[must_use]
    pub fn contains_scope(&self, scope: &str) -> bool {
        self.get(scope).is_some()
    }

    /// Sets the id for `scope`, replacing any entry whose scope differs only
    /// in case. Returns the previous id.
    pub fn insert(&mut self, scope: impl Into<String>, id: impl Into<String>) -> Option<String> {
        let scope = scope.into();
        let previous = self.remove(&scope);
        self.0.insert(scope, id.into());
        previous
    }

    /// Removes the id for `scope`, ignoring case.
    pub fn remove(&mut self, scope: &str) -> Option<String> {
        let existing = self
            .0
            .keys()
            .find(|s| s.eq_ignore_ascii_case(scope))
            .cloned()?;
        self.0.remove(&existing)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(scope, id)` pairs in sorted scope order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(s, id)| (s.as_str(), id.as_str()))
    }

    /// Index keys for this entity: `(lower-cased scope, id)` pairs.
    pub fn index_keys(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.0.iter().map(|(s, id)| (s.to_lowercase(), id.clone()))
    }

    /// Returns true if the two maps share at least one (scope, id) pair.
    #[must_use]
    pub fn shares_uid_with(&self, other: &Uids) -> bool {
        self.iter().any(|(scope, id)| other.get(scope) == Some(id))
    }

    /// Picks the uid used when linking to this entity.
    ///
    /// `preferred` wins when present; otherwise the smallest scope is used so
    /// that repeated serialization links the same way.
    #[must_use]
    pub fn link(&self, preferred: Option<&str>) -> Option<LinkByUid> {
        if let Some(scope) = preferred
            && let Some((s, id)) = self.0.iter().find(|(s, _)| s.eq_ignore_ascii_case(scope))
        {
            return Some(LinkByUid::new(s.clone(), id.clone()));
        }
        self.0
            .iter()
            .next()
            .map(|(s, id)| LinkByUid::new(s.clone(), id.clone()))
    }

    /// Assigns a random id under `scope` if the map is empty.
    ///
    /// Returns true if an id was assigned.
    pub fn ensure(&mut self, scope: &str) -> bool {
        if !self.is_empty() {
            return false;
        }
        self.0.insert(scope.to_string(), new_uid());
        true
    }
}

impl<S: Into<String>, I: Into<String>> FromIterator<(S, I)> for Uids {
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self {
        let mut uids = Uids::new();
        for (scope, id) in iter {
            uids.insert(scope, id);
        }
        uids
    }
}
