//! Specs and runs: the materials, processes, measurements and ingredients
//! that make up a material history.
//!
//! Runs record what actually happened, specs what was intended. Cross-entity
//! fields are [`Reference`]s, which hold either the live entity or a link to
//! it when the entity was not part of the decoded document.

use gemd_types::{Obj, Reference};

gemd_entity! {
    /// An intended material.
    pub struct MaterialSpec = "material_spec" {
        pub name: String,
        pub notes: Option<String>,
        /// The process spec that produces this material.
        pub process: Option<Reference>,
        pub template: Option<Reference>,
        /// `property_and_conditions` records.
        pub properties: Vec<Obj>,
        pub file_links: Vec<Obj>,
    }
}

gemd_entity! {
    /// An intended process.
    pub struct ProcessSpec = "process_spec" {
        pub name: String,
        pub notes: Option<String>,
        pub template: Option<Reference>,
        pub conditions: Vec<Obj>,
        pub parameters: Vec<Obj>,
        pub file_links: Vec<Obj>,
    }
}

gemd_entity! {
    /// An intended measurement.
    pub struct MeasurementSpec = "measurement_spec" {
        pub name: String,
        pub notes: Option<String>,
        pub template: Option<Reference>,
        pub conditions: Vec<Obj>,
        pub parameters: Vec<Obj>,
        pub file_links: Vec<Obj>,
    }
}

gemd_entity! {
    /// An intended use of a material spec as input to a process spec.
    pub struct IngredientSpec = "ingredient_spec" {
        pub name: String,
        pub labels: Vec<String>,
        pub notes: Option<String>,
        pub material: Option<Reference>,
        pub process: Option<Reference>,
        pub mass_fraction: Option<Obj>,
        pub volume_fraction: Option<Obj>,
        pub number_fraction: Option<Obj>,
        pub absolute_quantity: Option<Obj>,
        pub file_links: Vec<Obj>,
    }
}

gemd_entity! {
    /// A material as it was actually made.
    pub struct MaterialRun = "material_run" {
        pub name: String,
        pub notes: Option<String>,
        /// The process run that produced this material.
        pub process: Option<Reference>,
        pub sample_type: String = MaterialRun::UNKNOWN_SAMPLE_TYPE,
        pub spec: Option<Reference>,
        pub file_links: Vec<Obj>,
    }
}

gemd_entity! {
    /// A process as it was actually performed.
    pub struct ProcessRun = "process_run" {
        pub name: String,
        pub notes: Option<String>,
        pub spec: Option<Reference>,
        pub conditions: Vec<Obj>,
        pub parameters: Vec<Obj>,
        /// `performed_source` record.
        pub source: Option<Obj>,
        pub file_links: Vec<Obj>,
    }
}

gemd_entity! {
    /// A measurement performed on a material run.
    pub struct MeasurementRun = "measurement_run" {
        pub name: String,
        pub notes: Option<String>,
        pub spec: Option<Reference>,
        pub material: Option<Reference>,
        pub conditions: Vec<Obj>,
        pub properties: Vec<Obj>,
        pub parameters: Vec<Obj>,
        pub source: Option<Obj>,
        pub file_links: Vec<Obj>,
    }
}

gemd_entity! {
    /// A material run consumed by a process run.
    pub struct IngredientRun = "ingredient_run" {
        pub notes: Option<String>,
        pub material: Option<Reference>,
        pub process: Option<Reference>,
        pub spec: Option<Reference>,
        pub mass_fraction: Option<Obj>,
        pub volume_fraction: Option<Obj>,
        pub number_fraction: Option<Obj>,
        pub absolute_quantity: Option<Obj>,
        pub file_links: Vec<Obj>,
    }
}

impl MaterialRun {
    /// Sample type used when none was recorded.
    pub const UNKNOWN_SAMPLE_TYPE: &'static str = "unknown";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sample_type: Self::UNKNOWN_SAMPLE_TYPE.to_string(),
            ..Default::default()
        }
    }
}

impl ProcessRun {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
