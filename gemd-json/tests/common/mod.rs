//! Shared test helpers for serializer tests.

#![allow(dead_code)]

use gemd_json::{GemdJson, Obj, Reference, Uids, Value, constructor};
use gemd_model::{
    Condition, ConditionTemplate, IngredientRun, MaterialRun, MeasurementRun, NominalReal,
    ProcessRun, Property, PropertyTemplate, RealBounds,
};
use gemd_types::{FieldValue, Fields, FromFields, Serializable, take_field};
use std::any::Any;

/// Installs a test subscriber once; honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parses serializer output for structural assertions.
pub fn parse(text: &str) -> serde_json::Value {
    serde_json::from_str(text).expect("serializer output is valid JSON")
}

/// A minimal entity that can point anywhere, including back at itself.
#[derive(Debug, Default)]
pub struct Node {
    pub uids: Uids,
    pub name: String,
    pub next: Option<Reference>,
    pub peers: Vec<Reference>,
}

impl Node {
    pub const TYPE_TAG: &'static str = "node";

    pub fn obj(name: &str) -> Obj {
        Obj::new(Node {
            name: name.into(),
            ..Default::default()
        })
    }

    pub fn with_uid(name: &str, scope: &str, id: &str) -> Obj {
        Obj::new(Node {
            uids: Uids::new().with(scope, id),
            name: name.into(),
            ..Default::default()
        })
    }

    pub fn link(from: &Obj, to: &Obj) {
        from.downcast_mut::<Node>().unwrap().next = Some(Reference::from(to));
    }
}

impl Serializable for Node {
    fn type_tag(&self) -> &str {
        Self::TYPE_TAG
    }

    fn fields(&self) -> Fields {
        Fields::from([
            ("uids".to_string(), self.uids.to_value()),
            ("name".to_string(), self.name.to_value()),
            ("next".to_string(), self.next.to_value()),
            ("peers".to_string(), self.peers.to_value()),
        ])
    }

    fn uids(&self) -> Option<&Uids> {
        Some(&self.uids)
    }

    fn uids_mut(&mut self) -> Option<&mut Uids> {
        Some(&mut self.uids)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl FromFields for Node {
    fn from_fields(mut fields: Fields) -> gemd_types::Result<Self> {
        Ok(Self {
            uids: take_field(&mut fields, Self::TYPE_TAG, "uids")?,
            name: take_field(&mut fields, Self::TYPE_TAG, "name")?,
            next: take_field(&mut fields, Self::TYPE_TAG, "next")?,
            peers: take_field(&mut fields, Self::TYPE_TAG, "peers")?,
        })
    }
}

/// Built-in serializer that also knows [`Node`].
pub fn json_with_nodes() -> GemdJson {
    let mut json = GemdJson::new();
    json.register_classes([(Node::TYPE_TAG, constructor::<Node>())])
        .expect("node registers");
    json
}

/// A small material history, none of it carrying uids yet.
pub struct History {
    pub process: Obj,
    pub material: Obj,
    pub ingredient: Obj,
    pub measurement: Obj,
    pub property_template: Obj,
    pub condition_template: Obj,
}

pub fn material_history() -> History {
    let condition_template = Obj::new(ConditionTemplate {
        name: "temperature".into(),
        bounds: Some(RealBounds::new(0.0, 2000.0, "K").into()),
        ..Default::default()
    });
    let property_template = Obj::new(PropertyTemplate {
        name: "density".into(),
        bounds: Some(RealBounds::new(0.0, 30.0, "g/cm^3").into()),
        ..Default::default()
    });

    let process = Obj::new(ProcessRun {
        conditions: vec![
            Condition {
                template: Some(Reference::from(&condition_template)),
                ..Condition::new("temperature", NominalReal::new(1100.0, "K"))
            }
            .into(),
        ],
        ..ProcessRun::new("anneal")
    });
    let material = Obj::new(MaterialRun {
        process: Some(Reference::from(&process)),
        ..MaterialRun::new("steel bar")
    });
    let ingredient = Obj::new(IngredientRun {
        material: Some(Reference::from(&material)),
        ..Default::default()
    });
    let measurement = Obj::new(MeasurementRun {
        material: Some(Reference::from(&material)),
        properties: vec![
            Property {
                template: Some(Reference::from(&property_template)),
                ..Property::new("density", NominalReal::new(7.8, "g/cm^3"))
            }
            .into(),
        ],
        ..MeasurementRun {
            name: "density check".into(),
            ..Default::default()
        }
    });

    History {
        process,
        material,
        ingredient,
        measurement,
        property_template,
        condition_template,
    }
}

/// Reads a reference field off a decoded material run.
pub fn material_process(material: &Obj) -> Option<Reference> {
    material.downcast_ref::<MaterialRun>().unwrap().process.clone()
}

/// The object a decoded value holds, panicking otherwise.
pub fn object(value: &Value) -> &Obj {
    value.as_object().expect("value is a record")
}
