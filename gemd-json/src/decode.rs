//! JSON text → value tree, rebuilding records through the type registry.
//!
//! Conversion is bottom-up: a map's members (in sorted key order) and a
//! list's elements are converted before the map or list itself. By the time a
//! tagged map is dispatched, every record nested in it already exists, and in
//! an envelope `"context"` is fully indexed before `"object"` is touched.

use crate::encode::TYPE_FIELD;
use crate::registry::{Dispatch, TypeRegistry};
use crate::substitute::shape_of;
use gemd_types::{Error, Fields, LINK_TYPE_TAG, LinkByUid, Obj, Result, Value, take_field};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tracing::trace;

/// Entities decoded so far, keyed by `(lower-cased scope, id)`.
#[derive(Debug, Default)]
pub struct DecodeIndex {
    entries: HashMap<(String, String), Obj>,
}

impl DecodeIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the entity a link points to.
    #[must_use]
    pub fn get(&self, link: &LinkByUid) -> Option<&Obj> {
        self.entries.get(&link.key())
    }

    /// Number of indexed (scope, id) pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct indexed entities.
    pub fn entities(&self) -> Vec<Obj> {
        let mut seen = std::collections::HashSet::new();
        self.entries
            .values()
            .filter(|obj| seen.insert(obj.addr()))
            .cloned()
            .collect()
    }

    /// Indexes `obj` under each of its uids and returns the instance callers
    /// should use.
    ///
    /// If an entity is already indexed under one of those uids and has the
    /// same shape, that earlier instance is returned, so a record repeated in
    /// a document decodes to one object. A differently-shaped entity under the
    /// same uid is a [`Error::ConflictingUid`].
    pub fn insert(&mut self, obj: Obj) -> Result<Obj> {
        let Some(uids) = obj.uids() else {
            return Ok(obj);
        };

        let mut canonical: Option<Obj> = None;
        for key in uids.index_keys() {
            let Some(found) = self.entries.get(&key) else {
                continue;
            };
            if found.ptr_eq(&obj) || canonical.as_ref().is_some_and(|c| c.ptr_eq(found)) {
                continue;
            }
            if canonical.is_none() && same_shape(found, &obj) {
                canonical = Some(found.clone());
                continue;
            }
            return Err(Error::ConflictingUid {
                scope: key.0,
                id: key.1,
            });
        }

        let canonical = canonical.unwrap_or(obj);
        for key in uids.index_keys() {
            self.entries.insert(key, canonical.clone());
        }
        Ok(canonical)
    }
}

fn same_shape(a: &Obj, b: &Obj) -> bool {
    match (shape_of(a), shape_of(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Result of decoding one document.
#[derive(Debug)]
pub struct Decoded {
    pub value: Value,
    pub index: DecodeIndex,
    /// Links left unresolved, in the order they were met.
    pub dangling: Vec<LinkByUid>,
}

/// Decodes documents against a registry.
pub struct Decoder<'r> {
    registry: &'r TypeRegistry,
    resolve_links: bool,
}

impl<'r> Decoder<'r> {
    /// With `resolve_links`, a link whose target is already indexed decodes to
    /// that entity instead of the link.
    #[must_use]
    pub fn new(registry: &'r TypeRegistry, resolve_links: bool) -> Self {
        Self {
            registry,
            resolve_links,
        }
    }

    pub fn decode(&self, text: &str) -> Result<Decoded> {
        let json: JsonValue = serde_json::from_str(text)?;
        self.decode_json(json)
    }

    pub fn decode_json(&self, json: JsonValue) -> Result<Decoded> {
        let mut state = DecodeState::default();
        let value = self.convert(json, &mut state)?;
        Ok(Decoded {
            value,
            index: state.index,
            dangling: state.dangling,
        })
    }

    fn convert(&self, json: JsonValue, state: &mut DecodeState) -> Result<Value> {
        Ok(match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                // a u64 past i64::MAX would lose digits as a float
                None if n.is_u64() => return Err(Error::OutOfRange(n.to_string())),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(|item| self.convert(item, state))
                    .collect::<Result<_>>()?,
            ),
            JsonValue::Object(object) => {
                let mut fields = Fields::new();
                for (key, member) in object {
                    let member = self.convert(member, state)?;
                    fields.insert(key, member);
                }
                self.load_and_index(fields, state)?
            }
        })
    }

    /// Rebuilds a tagged map through the registry; untagged maps pass through.
    fn load_and_index(&self, mut fields: Fields, state: &mut DecodeState) -> Result<Value> {
        let Some(tag) = fields.remove(TYPE_FIELD) else {
            return Ok(Value::Map(fields));
        };
        let tag = match tag {
            Value::String(tag) => tag,
            other => {
                return Err(Error::UnknownType(format!(
                    "<non-string {} type tag>",
                    other.kind()
                )));
            }
        };

        match self.registry.resolve(&tag)? {
            Dispatch::Link => {
                let link = LinkByUid::new(
                    take_field::<String>(&mut fields, LINK_TYPE_TAG, "scope")?,
                    take_field::<String>(&mut fields, LINK_TYPE_TAG, "id")?,
                );
                if self.resolve_links
                    && let Some(target) = state.index.get(&link)
                {
                    trace!(link = %link, "Resolved link");
                    return Ok(Value::Object(target.clone()));
                }
                state.dangling.push(link.clone());
                Ok(Value::Link(link))
            }
            Dispatch::Record(build) => {
                let obj = build(fields)?;
                trace!(type_tag = %tag, entity = obj.is_entity(), "Decoded record");
                Ok(Value::Object(state.index.insert(obj)?))
            }
        }
    }
}

#[derive(Default)]
struct DecodeState {
    index: DecodeIndex,
    dangling: Vec<LinkByUid>,
}
