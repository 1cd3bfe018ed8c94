//! Link substitution: turning a live record graph into a [`Wire`] tree.
//!
//! [`substitute_links`] expands the value it is given but replaces every
//! entity nested inside it with a [`gemd_types::LinkByUid`]. [`expand`] does
//! no linking at all and inlines the whole graph.

use crate::Wire;
use gemd_types::{Error, Obj, Result, Value};
use std::collections::{BTreeMap, HashSet};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Nested entities become links; a nested entity without uid is an error.
    Link,
    /// Nested entities become links when they have a uid, else are inlined.
    LinkIfPossible,
    /// Everything is inlined.
    Expand,
}

struct Linker<'a> {
    mode: Mode,
    preferred_scope: Option<&'a str>,
    /// Records currently being expanded; meeting one again means a cycle.
    in_progress: HashSet<usize>,
}

impl<'a> Linker<'a> {
    fn new(mode: Mode, preferred_scope: Option<&'a str>) -> Self {
        Self {
            mode,
            preferred_scope,
            in_progress: HashSet::new(),
        }
    }

    fn convert(&mut self, value: &Value, outermost: bool) -> Result<Wire> {
        Ok(match value {
            Value::Null => Wire::Null,
            Value::Bool(b) => Wire::Bool(*b),
            Value::Integer(i) => Wire::Integer(*i),
            Value::Float(f) => Wire::Float(*f),
            Value::String(s) => Wire::String(s.clone()),
            Value::Link(link) => Wire::Link(link.clone()),
            Value::List(items) => Wire::List(
                items
                    .iter()
                    .map(|item| self.convert(item, false))
                    .collect::<Result<_>>()?,
            ),
            Value::Map(map) => Wire::Map(self.convert_map(map)?),
            Value::Object(obj) => {
                if !outermost && obj.is_entity() && self.mode != Mode::Expand {
                    match (obj.link(self.preferred_scope), self.mode) {
                        (Some(link), _) => return Ok(Wire::Link(link)),
                        (None, Mode::Link) => return Err(Error::MissingUid(obj.type_tag())),
                        (None, _) => {}
                    }
                }
                self.expand_record(obj)?
            }
        })
    }

    fn convert_map(&mut self, map: &gemd_types::Fields) -> Result<BTreeMap<String, Wire>> {
        map.iter()
            .map(|(k, v)| Ok((k.clone(), self.convert(v, false)?)))
            .collect()
    }

    fn expand_record(&mut self, obj: &Obj) -> Result<Wire> {
        let addr = obj.addr();
        if !self.in_progress.insert(addr) {
            return Err(Error::Encoding(format!(
                "cycle through '{}' cannot be serialized without links",
                obj.type_tag()
            )));
        }
        let fields = obj.fields();
        let converted = self.convert_map(&fields);
        self.in_progress.remove(&addr);
        Ok(Wire::Record {
            type_tag: obj.type_tag(),
            fields: converted?,
        })
    }
}

/// Copies `value` into a wire tree, linking every entity nested inside it.
///
/// The outermost value is never linked: an entity passed here is expanded in
/// full (a "thin" serialization of it), while the entities it references
/// appear only as links. Links use `preferred_scope` when the entity has it,
/// else the entity's smallest scope.
pub fn substitute_links(value: &Value, preferred_scope: Option<&str>) -> Result<Wire> {
    Linker::new(Mode::Link, preferred_scope).convert(value, true)
}

/// Like [`substitute_links`], but treats `value` itself as nested: a
/// top-level entity becomes a link too.
pub fn substitute_nested(value: &Value, preferred_scope: Option<&str>) -> Result<Wire> {
    Linker::new(Mode::Link, preferred_scope).convert(value, false)
}

/// Copies `value` into a wire tree with every record inlined.
///
/// Shared records are repeated at each use; a cycle is an
/// [`Error::Encoding`].
pub fn expand(value: &Value) -> Result<Wire> {
    Linker::new(Mode::Expand, None).convert(value, true)
}

/// Shape of a record for duplicate detection: its fields with nested entities
/// linked where possible. `None` if the shape cannot be computed.
pub(crate) fn shape_of(obj: &Obj) -> Option<Wire> {
    Linker::new(Mode::LinkIfPossible, None)
        .convert(&Value::Object(obj.clone()), true)
        .ok()
}
