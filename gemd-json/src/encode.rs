//! Wire tree → JSON text.

use crate::Wire;
use gemd_types::{Error, LINK_TYPE_TAG, Result};
use serde_json::{Map, Number, Value as JsonValue};

/// Field injected into every tagged record and link.
pub const TYPE_FIELD: &str = "type";

/// Converts a wire tree to a JSON tree, injecting type tags.
pub fn to_json(wire: &Wire) -> Result<JsonValue> {
    Ok(match wire {
        Wire::Null => JsonValue::Null,
        Wire::Bool(b) => JsonValue::Bool(*b),
        Wire::Integer(i) => JsonValue::Number(Number::from(*i)),
        Wire::Float(f) => JsonValue::Number(
            Number::from_f64(*f)
                .ok_or_else(|| Error::Encoding(format!("non-finite number {f}")))?,
        ),
        Wire::String(s) => JsonValue::String(s.clone()),
        Wire::List(items) => {
            JsonValue::Array(items.iter().map(to_json).collect::<Result<_>>()?)
        }
        Wire::Map(map) => JsonValue::Object(to_json_map(map)?),
        Wire::Record { type_tag, fields } => {
            if fields.contains_key(TYPE_FIELD) {
                return Err(Error::Encoding(format!(
                    "'{type_tag}' declares a field named '{TYPE_FIELD}', which is reserved"
                )));
            }
            let mut object = to_json_map(fields)?;
            object.insert(TYPE_FIELD.to_string(), JsonValue::String(type_tag.clone()));
            JsonValue::Object(object)
        }
        Wire::Link(link) => {
            let mut object = match serde_json::to_value(link)? {
                JsonValue::Object(object) => object,
                other => {
                    return Err(Error::Encoding(format!("link encoded as {other}")));
                }
            };
            object.insert(
                TYPE_FIELD.to_string(),
                JsonValue::String(LINK_TYPE_TAG.to_string()),
            );
            JsonValue::Object(object)
        }
    })
}

fn to_json_map(map: &std::collections::BTreeMap<String, Wire>) -> Result<Map<String, JsonValue>> {
    map.iter()
        .map(|(k, v)| Ok((k.clone(), to_json(v)?)))
        .collect()
}

/// Encodes a wire tree as JSON text.
///
/// Object keys are emitted in sorted order, so equal trees always produce
/// identical bytes.
pub fn encode(wire: &Wire, pretty: bool) -> Result<String> {
    let json = to_json(wire)?;
    let text = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(text)
}
