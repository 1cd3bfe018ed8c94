use gemd_model::*;
use gemd_types::{
    Error, FieldValue, Fields, FromFields, LinkByUid, Obj, Reference, Serializable, Uids, Value,
};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

// ── Built-in registry list ───────────────────────────────────────

#[test]
fn builtin_tags_are_unique() {
    let tags: Vec<&str> = builtin_constructors().iter().map(|(t, _)| *t).collect();
    let unique: HashSet<&str> = tags.iter().copied().collect();
    assert_eq!(tags.len(), unique.len());
    assert_eq!(tags.len(), 34);
}

#[test]
fn builtin_constructors_match_their_tags() {
    for (tag, build) in builtin_constructors() {
        let obj = build(minimal_fields(tag)).unwrap_or_else(|e| panic!("{tag}: {e}"));
        assert_eq!(obj.type_tag(), tag);
    }
}

/// Smallest field map each built-in accepts.
fn minimal_fields(tag: &str) -> Fields {
    let mut fields = Fields::new();
    let strings: &[&str] = match tag {
        "material_run" => &["name", "sample_type"],
        "property" | "condition" | "parameter" => &["name", "origin"],
        "real_bounds" => &["default_units"],
        "nominal_real" | "uniform_real" | "normal_real" => &["units"],
        "nominal_categorical" => &["category"],
        "empirical_formula" => &["formula"],
        "file_link" => &["filename", "url"],
        "ingredient_run" | "property_and_conditions" | "integer_bounds" | "categorical_bounds"
        | "composition_bounds" | "molecular_bounds" | "nominal_composition"
        | "discrete_categorical" | "performed_source" => &[],
        "nominal_integer" | "uniform_integer" => &[],
        _ => &["name"],
    };
    for name in strings {
        fields.insert((*name).to_string(), Value::from("x"));
    }
    let numbers: &[&str] = match tag {
        "real_bounds" | "uniform_real" | "integer_bounds" | "uniform_integer" => {
            &["lower_bound", "upper_bound"]
        }
        "nominal_real" | "nominal_integer" => &["nominal"],
        "normal_real" => &["mean", "std"],
        _ => &[],
    };
    for name in numbers {
        fields.insert((*name).to_string(), Value::Integer(1));
    }
    fields
}

// ── Entities ─────────────────────────────────────────────────────

#[test]
fn entities_expose_uids() {
    let run = MaterialRun::new("steel bar");
    assert!(run.uids().is_some());
    assert_eq!(run.type_tag(), "material_run");
    assert_eq!(run.sample_type, "unknown");

    let value = NominalReal::new(3.0, "kg");
    assert!(value.uids().is_none());
}

#[test]
fn entity_fields_include_uids_and_tags() {
    let run = MaterialRun {
        uids: Uids::new().with("lims", "M-1"),
        tags: vec!["alloy".into()],
        ..MaterialRun::new("bar")
    };
    let fields = run.fields();
    assert_eq!(fields.get("uids"), Some(&Value::map([("lims", "M-1")])));
    assert_eq!(fields.get("tags"), Some(&Value::list(["alloy"])));
    assert_eq!(fields.get("name"), Some(&Value::from("bar")));
    assert_eq!(fields.get("process"), Some(&Value::Null));
    assert_eq!(fields.get("file_links"), Some(&Value::List(vec![])));
}

#[test]
fn entity_rebuilds_from_its_fields() {
    let process = Obj::new(ProcessRun::new("anneal"));
    let run = MaterialRun {
        notes: Some("quenched".into()),
        process: Some(Reference::from(&process)),
        spec: Some(Reference::from(LinkByUid::new("lims", "S-1"))),
        ..MaterialRun::new("bar")
    };

    let rebuilt = MaterialRun::from_fields(run.fields()).unwrap();
    assert_eq!(rebuilt.name, "bar");
    assert_eq!(rebuilt.notes.as_deref(), Some("quenched"));
    assert!(rebuilt.process.unwrap().refers_to(&process));
    assert_eq!(
        rebuilt.spec.unwrap().as_link(),
        Some(&LinkByUid::new("lims", "S-1"))
    );
}

#[test]
fn unknown_fields_are_ignored() {
    let mut fields = ProcessRun::new("mix").fields();
    fields.insert("legacy_field".into(), Value::from(12));
    let rebuilt = ProcessRun::from_fields(fields).unwrap();
    assert_eq!(rebuilt.name, "mix");
}

#[test]
fn missing_name_is_rejected() {
    let err = ProcessSpec::from_fields(Fields::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidField { ref type_tag, ref field, .. }
            if type_tag == "process_spec" && field == "name"
    ));
}

#[test]
fn missing_sample_type_falls_back_to_unknown() {
    let mut fields = Fields::new();
    fields.insert("name".into(), Value::from("bar"));
    let run = MaterialRun::from_fields(fields).unwrap();
    assert_eq!(run.sample_type, MaterialRun::UNKNOWN_SAMPLE_TYPE);

    let mut fields = MaterialRun::new("bar").fields();
    fields.insert("sample_type".into(), Value::Null);
    let run = MaterialRun::from_fields(fields).unwrap();
    assert_eq!(run.sample_type, MaterialRun::UNKNOWN_SAMPLE_TYPE);
}

#[test]
fn recorded_sample_type_is_kept() {
    let run = MaterialRun {
        sample_type: "experimental".into(),
        ..MaterialRun::new("bar")
    };
    let rebuilt = MaterialRun::from_fields(run.fields()).unwrap();
    assert_eq!(rebuilt.sample_type, "experimental");
}

#[test]
fn mistyped_sample_type_is_still_rejected() {
    let mut fields = MaterialRun::new("bar").fields();
    fields.insert("sample_type".into(), Value::from(3));
    assert!(matches!(
        MaterialRun::from_fields(fields),
        Err(Error::InvalidField { ref field, .. }) if field == "sample_type"
    ));
}

#[test]
fn reference_to_non_entity_is_rejected() {
    let mut fields = MaterialRun::new("bar").fields();
    fields.insert(
        "process".into(),
        Value::Object(Obj::new(NominalReal::new(1.0, "kg"))),
    );
    assert!(MaterialRun::from_fields(fields).is_err());
}

// ── Records ──────────────────────────────────────────────────────

#[test]
fn attribute_holds_value_record() {
    let property = Property::new("density", NominalReal::new(7.8, "g/cm^3"));
    assert_eq!(property.origin, UNKNOWN_ORIGIN);
    let value = property.value.as_ref().unwrap();
    assert_eq!(value.downcast_ref::<NominalReal>().unwrap().nominal, 7.8);
}

#[test]
fn missing_origin_falls_back_to_unknown() {
    let mut fields = Fields::new();
    fields.insert("name".into(), Value::from("temperature"));
    let condition = Condition::from_fields(fields).unwrap();
    assert_eq!(condition.origin, UNKNOWN_ORIGIN);
    assert!(condition.value.is_none());
}

#[test]
fn composition_roundtrips_through_fields() {
    let composition = NominalComposition::new([("Fe", 0.98), ("C", 0.02)]);
    let rebuilt = NominalComposition::from_fields(composition.fields()).unwrap();
    assert_eq!(rebuilt.quantities, composition.quantities);
}

#[test]
fn molecular_bounds_has_no_fields() {
    assert!(MolecularBounds::default().fields().is_empty());
    assert!(MolecularBounds::from_fields(Fields::new()).is_ok());
}

#[test]
fn template_entries_pair_template_and_bounds() {
    let template = Obj::new(PropertyTemplate {
        name: "density".into(),
        bounds: Some(RealBounds::new(0.0, 30.0, "g/cm^3").into()),
        ..Default::default()
    });
    let entry = attribute_template_entry(&template, None);
    let items = entry.as_list().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Value::Object(template.clone()));
    assert!(items[1].is_null());
}

#[test]
fn integer_fields_accept_integral_floats() {
    let fields = Fields::from([("nominal".to_string(), Value::Float(5.0))]);
    assert_eq!(NominalInteger::from_fields(fields).unwrap().nominal, 5);
}

#[test]
fn optional_source_roundtrips() {
    let source = PerformedSource {
        performed_by: Some("lab tech".into()),
        performed_date: None,
    };
    let value = Obj::from(source).to_value();
    let obj = Obj::from_value(value).unwrap();
    let rebuilt = obj.downcast_ref::<PerformedSource>().unwrap();
    assert_eq!(rebuilt.performed_by.as_deref(), Some("lab tech"));
    assert_eq!(rebuilt.performed_date, None);
}
