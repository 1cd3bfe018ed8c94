//! Built-in GEMD records.
//!
//! Defines the record types that the JSON engine can rebuild out of the box:
//! - templates ([`MaterialTemplate`], [`PropertyTemplate`], ...)
//! - specs and runs ([`MaterialSpec`], [`ProcessRun`], [`IngredientRun`], ...)
//! - attributes ([`Property`], [`Condition`], [`Parameter`])
//! - bounds and values ([`RealBounds`], [`NominalReal`], ...)
//! - [`FileLink`] and [`PerformedSource`]
//!
//! Templates, specs and runs are entities (they carry `uids` and are linked
//! across the graph); everything else is serialized in place.
//!
//! These types only describe shapes. No bounds checking happens on
//! construction or decode.

#[macro_use]
mod macros;

mod attribute;
mod bounds;
mod object;
mod source;
mod template;
mod value;

pub use attribute::{Condition, Parameter, Property, PropertyAndConditions, UNKNOWN_ORIGIN};
pub use bounds::{CategoricalBounds, CompositionBounds, IntegerBounds, MolecularBounds, RealBounds};
pub use object::{
    IngredientRun, IngredientSpec, MaterialRun, MaterialSpec, MeasurementRun, MeasurementSpec,
    ProcessRun, ProcessSpec,
};
pub use source::{FileLink, PerformedSource};
pub use template::{
    ConditionTemplate, MaterialTemplate, MeasurementTemplate, ParameterTemplate, ProcessTemplate,
    PropertyTemplate, attribute_template_entry,
};
pub use value::{
    DiscreteCategorical, EmpiricalFormula, NominalCategorical, NominalComposition, NominalInteger,
    NominalReal, NormalReal, UniformInteger, UniformReal,
};

use gemd_types::{Constructor, constructor};

/// Type tag and constructor for every built-in record.
#[must_use]
pub fn builtin_constructors() -> Vec<(&'static str, Constructor)> {
    vec![
        (MaterialTemplate::TYPE_TAG, constructor::<MaterialTemplate>()),
        (MeasurementTemplate::TYPE_TAG, constructor::<MeasurementTemplate>()),
        (ProcessTemplate::TYPE_TAG, constructor::<ProcessTemplate>()),
        (MaterialSpec::TYPE_TAG, constructor::<MaterialSpec>()),
        (MeasurementSpec::TYPE_TAG, constructor::<MeasurementSpec>()),
        (ProcessSpec::TYPE_TAG, constructor::<ProcessSpec>()),
        (IngredientSpec::TYPE_TAG, constructor::<IngredientSpec>()),
        (ProcessRun::TYPE_TAG, constructor::<ProcessRun>()),
        (MaterialRun::TYPE_TAG, constructor::<MaterialRun>()),
        (MeasurementRun::TYPE_TAG, constructor::<MeasurementRun>()),
        (IngredientRun::TYPE_TAG, constructor::<IngredientRun>()),
        (Property::TYPE_TAG, constructor::<Property>()),
        (Condition::TYPE_TAG, constructor::<Condition>()),
        (Parameter::TYPE_TAG, constructor::<Parameter>()),
        (PropertyAndConditions::TYPE_TAG, constructor::<PropertyAndConditions>()),
        (PropertyTemplate::TYPE_TAG, constructor::<PropertyTemplate>()),
        (ConditionTemplate::TYPE_TAG, constructor::<ConditionTemplate>()),
        (ParameterTemplate::TYPE_TAG, constructor::<ParameterTemplate>()),
        (RealBounds::TYPE_TAG, constructor::<RealBounds>()),
        (IntegerBounds::TYPE_TAG, constructor::<IntegerBounds>()),
        (CategoricalBounds::TYPE_TAG, constructor::<CategoricalBounds>()),
        (CompositionBounds::TYPE_TAG, constructor::<CompositionBounds>()),
        (MolecularBounds::TYPE_TAG, constructor::<MolecularBounds>()),
        (NominalComposition::TYPE_TAG, constructor::<NominalComposition>()),
        (EmpiricalFormula::TYPE_TAG, constructor::<EmpiricalFormula>()),
        (NominalReal::TYPE_TAG, constructor::<NominalReal>()),
        (UniformReal::TYPE_TAG, constructor::<UniformReal>()),
        (NormalReal::TYPE_TAG, constructor::<NormalReal>()),
        (DiscreteCategorical::TYPE_TAG, constructor::<DiscreteCategorical>()),
        (NominalCategorical::TYPE_TAG, constructor::<NominalCategorical>()),
        (UniformInteger::TYPE_TAG, constructor::<UniformInteger>()),
        (NominalInteger::TYPE_TAG, constructor::<NominalInteger>()),
        (FileLink::TYPE_TAG, constructor::<FileLink>()),
        (PerformedSource::TYPE_TAG, constructor::<PerformedSource>()),
    ]
}
