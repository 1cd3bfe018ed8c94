//! Attributes attached to specs and runs.

use gemd_types::{Obj, Reference};

/// Origin used when none was recorded.
pub const UNKNOWN_ORIGIN: &str = "unknown";

gemd_record! {
    /// A measured or specified characteristic of a material.
    pub struct Property = "property" {
        pub name: String,
        pub template: Option<Reference>,
        pub origin: String = UNKNOWN_ORIGIN,
        pub value: Option<Obj>,
        pub notes: Option<String>,
        pub file_links: Vec<Obj>,
    }
}

gemd_record! {
    /// An environmental condition during a process or measurement.
    pub struct Condition = "condition" {
        pub name: String,
        pub template: Option<Reference>,
        pub origin: String = UNKNOWN_ORIGIN,
        pub value: Option<Obj>,
        pub notes: Option<String>,
        pub file_links: Vec<Obj>,
    }
}

gemd_record! {
    /// A controllable setting of a process or measurement.
    pub struct Parameter = "parameter" {
        pub name: String,
        pub template: Option<Reference>,
        pub origin: String = UNKNOWN_ORIGIN,
        pub value: Option<Obj>,
        pub notes: Option<String>,
        pub file_links: Vec<Obj>,
    }
}

gemd_record! {
    /// A property together with the conditions it was specified under.
    pub struct PropertyAndConditions = "property_and_conditions" {
        pub property: Option<Obj>,
        pub conditions: Vec<Obj>,
    }
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<Obj>) -> Self {
        Self {
            name: name.into(),
            origin: UNKNOWN_ORIGIN.to_string(),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

impl Condition {
    pub fn new(name: impl Into<String>, value: impl Into<Obj>) -> Self {
        Self {
            name: name.into(),
            origin: UNKNOWN_ORIGIN.to_string(),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<Obj>) -> Self {
        Self {
            name: name.into(),
            origin: UNKNOWN_ORIGIN.to_string(),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}
