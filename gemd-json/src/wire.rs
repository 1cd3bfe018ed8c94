use gemd_types::LinkByUid;
use std::collections::BTreeMap;

/// A value tree ready for encoding.
///
/// Unlike [`gemd_types::Value`], a wire tree holds no shared handles: every
/// record is either expanded into a [`Wire::Record`] or cut into a
/// [`Wire::Link`], so encoding is a plain structural walk.
#[derive(Debug, Clone, PartialEq)]
pub enum Wire {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Wire>),
    Map(BTreeMap<String, Wire>),
    Record {
        type_tag: String,
        fields: BTreeMap<String, Wire>,
    },
    Link(LinkByUid),
}

impl Wire {
    /// Type tag of a record, or the link tag for links.
    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        match self {
            Wire::Record { type_tag, .. } => Some(type_tag),
            Wire::Link(_) => Some(gemd_types::LINK_TYPE_TAG),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_link(&self) -> Option<&LinkByUid> {
        match self {
            Wire::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Counts the expanded records in this tree, this node included.
    #[must_use]
    pub fn record_count(&self) -> usize {
        match self {
            Wire::Record { fields, .. } => 1 + fields.values().map(Wire::record_count).sum::<usize>(),
            Wire::List(items) => items.iter().map(Wire::record_count).sum(),
            Wire::Map(map) => map.values().map(Wire::record_count).sum(),
            _ => 0,
        }
    }
}
