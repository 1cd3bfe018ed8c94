//! Templates: reusable definitions that specs and runs point at.
//!
//! Object templates list their attribute templates as `[template, bounds]`
//! pairs, where `template` is an attribute template entity (or a link to one)
//! and `bounds` optionally narrows the template's own bounds.

use gemd_types::{Obj, Value};

gemd_entity! {
    /// Template for materials, constraining their properties.
    pub struct MaterialTemplate = "material_template" {
        pub name: String,
        pub description: Option<String>,
        pub properties: Vec<Value>,
    }
}

gemd_entity! {
    /// Template for processes, constraining their conditions and parameters.
    pub struct ProcessTemplate = "process_template" {
        pub name: String,
        pub description: Option<String>,
        pub conditions: Vec<Value>,
        pub parameters: Vec<Value>,
        /// Labels ingredients of conforming processes may carry.
        pub allowed_labels: Option<Vec<String>>,
        /// Names ingredients of conforming processes may carry.
        pub allowed_names: Option<Vec<String>>,
    }
}

gemd_entity! {
    /// Template for measurements.
    pub struct MeasurementTemplate = "measurement_template" {
        pub name: String,
        pub description: Option<String>,
        pub properties: Vec<Value>,
        pub conditions: Vec<Value>,
        pub parameters: Vec<Value>,
    }
}

gemd_entity! {
    pub struct PropertyTemplate = "property_template" {
        pub name: String,
        pub description: Option<String>,
        pub bounds: Option<Obj>,
    }
}

gemd_entity! {
    pub struct ConditionTemplate = "condition_template" {
        pub name: String,
        pub description: Option<String>,
        pub bounds: Option<Obj>,
    }
}

gemd_entity! {
    pub struct ParameterTemplate = "parameter_template" {
        pub name: String,
        pub description: Option<String>,
        pub bounds: Option<Obj>,
    }
}

/// Builds one `[template, bounds]` entry for an object template.
///
/// `bounds` of `None` means "use the attribute template's own bounds".
pub fn attribute_template_entry(template: impl Into<Value>, bounds: Option<Obj>) -> Value {
    Value::List(vec![template.into(), bounds.into()])
}
