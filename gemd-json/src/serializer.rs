//! Entry points: dumps / loads and friends.

use crate::config::GemdJsonConfig;
use crate::decode::{Decoded, Decoder};
use crate::encode::encode;
use crate::flatten::{flatten, set_uuids};
use crate::registry::TypeRegistry;
use crate::substitute::{expand, substitute_links, substitute_nested};
use crate::Wire;
use gemd_types::{Constructor, Error, Result, Value};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use tracing::debug;

/// Envelope key holding the root value.
pub const OBJECT_KEY: &str = "object";
/// Envelope key holding the flattened entities.
pub const CONTEXT_KEY: &str = "context";

/// JSON serializer for record graphs.
///
/// Owns its [`TypeRegistry`] and [`GemdJsonConfig`]; there is no global
/// state. Every call keeps its own visited set and decode index, so one
/// instance can serve any number of sequential calls.
#[derive(Debug, Clone)]
pub struct GemdJson {
    registry: TypeRegistry,
    config: GemdJsonConfig,
}

impl Default for GemdJson {
    fn default() -> Self {
        Self::new()
    }
}

impl GemdJson {
    /// Serializer for the built-in record set with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(TypeRegistry::with_builtins())
    }

    #[must_use]
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self {
            registry,
            config: GemdJsonConfig::default(),
        }
    }

    /// Replaces the configuration after validating it.
    pub fn with_config(mut self, config: GemdJsonConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &GemdJsonConfig {
        &self.config
    }

    /// Adds or overrides record types for later decodes.
    pub fn register_classes<I, S>(&mut self, classes: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, Constructor)>,
        S: Into<String>,
    {
        self.registry.register_classes(classes)
    }

    /// Serializes `obj` as an envelope: every entity it reaches goes into
    /// `"context"` once, and `"object"` holds `obj` with entities linked.
    ///
    /// Entities without uids are given one under the configured auto scope.
    pub fn dumps(&self, obj: &Value) -> Result<String> {
        let preferred = self.config.preferred_scope.as_deref();
        let envelope = Value::map([(OBJECT_KEY, obj.clone())]);
        let context = flatten(&envelope, &self.config.auto_scope)
            .into_iter()
            .map(|entity| substitute_links(&Value::Object(entity), preferred))
            .collect::<Result<Vec<_>>>()?;
        let object = substitute_nested(obj, preferred)?;

        debug!(context = context.len(), "Serializing envelope");
        let wire = Wire::Map(BTreeMap::from([
            (CONTEXT_KEY.to_string(), Wire::List(context)),
            (OBJECT_KEY.to_string(), object),
        ]));
        encode(&wire, self.config.pretty)
    }

    /// Writes [`GemdJson::dumps`] output to `writer`.
    pub fn dump(&self, obj: &Value, mut writer: impl Write) -> Result<()> {
        let text = self.dumps(obj)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Decodes an envelope and returns its `"object"`, with links re-hydrated
    /// into shared instances wherever their target was decoded first.
    ///
    /// Back-references of a cyclic graph stay as links.
    pub fn loads(&self, text: &str) -> Result<Value> {
        let decoded = self.decode(text, true)?;
        if !decoded.dangling.is_empty() {
            debug!(
                dangling = decoded.dangling.len(),
                "Envelope decoded with unresolved links"
            );
        }
        match decoded.value {
            Value::Map(mut envelope) => envelope
                .remove(OBJECT_KEY)
                .ok_or_else(|| Error::Envelope(format!("missing '{OBJECT_KEY}'"))),
            other => Err(Error::Envelope(format!("expected a map, found {}", other.kind()))),
        }
    }

    /// Reads a document from `reader` and decodes it with [`GemdJson::loads`].
    pub fn load(&self, mut reader: impl Read) -> Result<Value> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.loads(&text)
    }

    /// Deep copy through serialization: `loads(dumps(obj))`.
    ///
    /// The copy has the same shape and sharing pattern, with new instances.
    pub fn copy(&self, obj: &Value) -> Result<Value> {
        self.loads(&self.dumps(obj)?)
    }

    /// Serializes `obj` alone, with everything it references linked.
    ///
    /// Use when the referenced entities are persisted elsewhere. Missing uids
    /// are assigned first, on `obj` and on everything it reaches.
    pub fn thin_dumps(&self, obj: &Value) -> Result<String> {
        set_uuids(obj, &self.config.auto_scope);
        let wire = substitute_links(obj, self.config.preferred_scope.as_deref())?;
        encode(&wire, self.config.pretty)
    }

    /// Serializes `obj` as-is: no envelope, no linking, shared records repeated.
    pub fn raw_dumps(&self, obj: &Value) -> Result<String> {
        encode(&expand(obj)?, self.config.pretty)
    }

    /// Decodes a document as-is, without envelope or link resolution.
    pub fn raw_loads(&self, text: &str) -> Result<Value> {
        Ok(self.decode(text, false)?.value)
    }

    /// Decodes any document and returns the value together with the index of
    /// decoded entities and the links left dangling.
    pub fn decode(&self, text: &str, resolve_links: bool) -> Result<Decoded> {
        Decoder::new(&self.registry, resolve_links).decode(text)
    }
}
