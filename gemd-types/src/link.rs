use crate::Uids;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag carried by link tokens on the wire.
pub const LINK_TYPE_TAG: &str = "link_by_uid";

/// A reference to an entity by one of its uids.
///
/// Links are terminal: they never contain nested values. A link that could
/// not be resolved while decoding stays in the graph as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkByUid {
    pub scope: String,
    pub id: String,
}

impl LinkByUid {
    #[must_use]
    pub fn new(scope: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            id: id.into(),
        }
    }

    /// Index key: scope lower-cased, id verbatim.
    #[must_use]
    pub fn key(&self) -> (String, String) {
        (self.scope.to_lowercase(), self.id.clone())
    }

    /// Returns true if `uids` contains this link's (scope, id) pair.
    #[must_use]
    pub fn points_to(&self, uids: &Uids) -> bool {
        uids.get(&self.scope) == Some(self.id.as_str())
    }
}

impl fmt::Display for LinkByUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.scope, self.id)
    }
}
