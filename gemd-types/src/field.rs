//! Conversion between typed record fields and [`Value`]s.

use crate::{Error, LinkByUid, Obj, Result, Uids, Value};
use std::collections::BTreeMap;

/// A Rust type that can live in a record field.
///
/// `from_value` reports a short reason on mismatch; [`take_field`] turns it
/// into an [`Error::InvalidField`] naming the record and field.
pub trait FieldValue: Sized {
    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> std::result::Result<Self, String>;
}

/// Removes `name` from `fields` and converts it. A missing field reads as null.
pub fn take_field<T: FieldValue>(
    fields: &mut crate::Fields,
    type_tag: &str,
    name: &str,
) -> Result<T> {
    let value = fields.remove(name).unwrap_or_default();
    T::from_value(value).map_err(|reason| Error::InvalidField {
        type_tag: type_tag.to_string(),
        field: name.to_string(),
        reason,
    })
}

fn mismatch(expected: &str, found: &Value) -> String {
    format!("expected {expected}, found {}", found.kind())
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        Ok(value)
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch("a string", &other)),
        }
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch("a bool", &other)),
        }
    }
}

impl FieldValue for i64 {
    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Integer(i) => Ok(i),
            Value::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => Ok(f as i64),
            other => Err(mismatch("an integer", &other)),
        }
    }
}

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Integer(i) => Ok(i as f64),
            other => Err(mismatch("a number", &other)),
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(mismatch("a list", &other)),
        }
    }
}

/// Keyed numeric maps: compositions, categorical probabilities.
impl FieldValue for BTreeMap<String, f64> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), Value::Float(*v)))
                .collect(),
        )
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Null => Ok(BTreeMap::new()),
            Value::Map(map) => map
                .into_iter()
                .map(|(k, v)| f64::from_value(v).map(|f| (k, f)))
                .collect(),
            other => Err(mismatch("a map of numbers", &other)),
        }
    }
}

impl FieldValue for Uids {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(scope, id)| (scope.to_string(), Value::String(id.to_string())))
                .collect(),
        )
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Null => Ok(Uids::new()),
            Value::Map(map) => {
                let mut uids = Uids::new();
                for (scope, id) in map {
                    let id = match id {
                        Value::String(id) => id,
                        other => {
                            return Err(format!(
                                "uid for scope '{scope}': {}",
                                mismatch("a string", &other)
                            ));
                        }
                    };
                    // scopes are case-insensitive; two spellings would lose an id
                    if uids.contains_scope(&scope) {
                        return Err(format!("scope '{scope}' appears more than once"));
                    }
                    uids.insert(scope, id);
                }
                Ok(uids)
            }
            other => Err(mismatch("a map of uids", &other)),
        }
    }
}

/// Nested records (values, bounds, attributes) held by handle.
impl FieldValue for Obj {
    fn to_value(&self) -> Value {
        Value::Object(self.clone())
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Object(obj) => Ok(obj),
            other => Err(mismatch("a record", &other)),
        }
    }
}

/// A field that points at another entity.
///
/// After decoding, a reference is `Entity` when its target was found in the
/// document and `Link` when it dangles (forward reference in a cycle, or an
/// entity persisted elsewhere).
#[derive(Debug, Clone)]
pub enum Reference {
    Entity(Obj),
    Link(LinkByUid),
}

impl Reference {
    #[must_use]
    pub fn as_entity(&self) -> Option<&Obj> {
        match self {
            Reference::Entity(obj) => Some(obj),
            Reference::Link(_) => None,
        }
    }

    #[must_use]
    pub fn as_link(&self) -> Option<&LinkByUid> {
        match self {
            Reference::Link(link) => Some(link),
            Reference::Entity(_) => None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Reference::Entity(_))
    }

    /// Returns true if both sides denote the same entity: the same handle,
    /// or a link naming one of the entity's uids.
    #[must_use]
    pub fn refers_to(&self, target: &Obj) -> bool {
        match self {
            Reference::Entity(obj) => obj.ptr_eq(target),
            Reference::Link(link) => target.uids().is_some_and(|uids| link.points_to(&uids)),
        }
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Reference::Entity(a), Reference::Entity(b)) => a.ptr_eq(b),
            (Reference::Link(a), Reference::Link(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Obj> for Reference {
    fn from(obj: Obj) -> Self {
        Reference::Entity(obj)
    }
}

impl From<&Obj> for Reference {
    fn from(obj: &Obj) -> Self {
        Reference::Entity(obj.clone())
    }
}

impl From<LinkByUid> for Reference {
    fn from(link: LinkByUid) -> Self {
        Reference::Link(link)
    }
}

impl FieldValue for Reference {
    fn to_value(&self) -> Value {
        match self {
            Reference::Entity(obj) => Value::Object(obj.clone()),
            Reference::Link(link) => Value::Link(link.clone()),
        }
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Object(obj) if obj.is_entity() => Ok(Reference::Entity(obj)),
            Value::Object(obj) => Err(format!(
                "expected an entity or link, found non-entity record '{}'",
                obj.type_tag()
            )),
            Value::Link(link) => Ok(Reference::Link(link)),
            other => Err(mismatch("an entity or link", &other)),
        }
    }
}
