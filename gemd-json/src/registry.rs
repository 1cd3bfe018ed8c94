//! Type registry: type tag → constructor.
//!
//! Built once from the built-in record set and optionally extended before
//! use. Extension needs `&mut self`; a registry shared across threads is
//! read-only, so callers that want to extend one must synchronize themselves.

use gemd_types::{Constructor, Error, FromFields, LINK_TYPE_TAG, Result, Serializable, constructor};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// What the decoder should do with a tagged map.
pub enum Dispatch<'a> {
    /// The reserved link tag: build a [`gemd_types::LinkByUid`].
    Link,
    /// A registered record type.
    Record(&'a Constructor),
}

#[derive(Clone, Default)]
pub struct TypeRegistry {
    constructors: HashMap<String, Constructor>,
}

impl TypeRegistry {
    /// Creates an empty registry. Only links decode until types are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in record type.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (tag, build) in gemd_model::builtin_constructors() {
            registry.constructors.insert(tag.to_string(), build);
        }
        registry
    }

    /// Inserts or overrides the constructor for `tag`.
    ///
    /// Already-decoded records are unaffected; only later decodes dispatch to
    /// the new constructor.
    pub fn register(&mut self, tag: impl Into<String>, build: Constructor) -> Result<()> {
        let tag = tag.into();
        validate_tag(&tag)?;
        if self.constructors.insert(tag.clone(), build).is_some() {
            debug!(type_tag = %tag, "Overriding registered type");
        }
        Ok(())
    }

    /// Registers a concrete record type under `tag`.
    pub fn register_type<T: Serializable + FromFields>(&mut self, tag: impl Into<String>) -> Result<()> {
        self.register(tag, constructor::<T>())
    }

    /// Registers many types at once. Every entry is validated before any is
    /// inserted, so a rejected batch leaves the registry untouched.
    pub fn register_classes<I, S>(&mut self, classes: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, Constructor)>,
        S: Into<String>,
    {
        let classes: Vec<(String, Constructor)> = classes
            .into_iter()
            .map(|(tag, build)| (tag.into(), build))
            .collect();
        let invalid: Vec<&str> = classes
            .iter()
            .filter(|(tag, _)| validate_tag(tag).is_err())
            .map(|(tag, _)| tag.as_str())
            .collect();
        if !invalid.is_empty() {
            return Err(Error::InvalidRegistration(format!(
                "rejected type tags: {invalid:?}"
            )));
        }
        for (tag, build) in classes {
            self.register(tag, build)?;
        }
        Ok(())
    }

    /// Looks up how to decode `tag`.
    pub fn resolve(&self, tag: &str) -> Result<Dispatch<'_>> {
        if let Some(build) = self.constructors.get(tag) {
            return Ok(Dispatch::Record(build));
        }
        if tag == LINK_TYPE_TAG {
            return Ok(Dispatch::Link);
        }
        Err(Error::UnknownType(tag.to_string()))
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Registered tags, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

fn validate_tag(tag: &str) -> Result<()> {
    if tag.trim().is_empty() {
        return Err(Error::InvalidRegistration(
            "type tag must not be empty".to_string(),
        ));
    }
    if tag == LINK_TYPE_TAG {
        return Err(Error::InvalidRegistration(format!(
            "'{LINK_TYPE_TAG}' is reserved for links"
        )));
    }
    Ok(())
}
