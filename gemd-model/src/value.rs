//! Attribute values: nominal, distributional, categorical and compositional.

use std::collections::BTreeMap;

gemd_record! {
    pub struct NominalReal = "nominal_real" {
        pub nominal: f64,
        pub units: String,
    }
}

gemd_record! {
    pub struct UniformReal = "uniform_real" {
        pub lower_bound: f64,
        pub upper_bound: f64,
        pub units: String,
    }
}

gemd_record! {
    pub struct NormalReal = "normal_real" {
        pub mean: f64,
        pub std: f64,
        pub units: String,
    }
}

gemd_record! {
    pub struct NominalInteger = "nominal_integer" {
        pub nominal: i64,
    }
}

gemd_record! {
    pub struct UniformInteger = "uniform_integer" {
        pub lower_bound: i64,
        pub upper_bound: i64,
    }
}

gemd_record! {
    pub struct NominalCategorical = "nominal_categorical" {
        pub category: String,
    }
}

gemd_record! {
    /// Probability of each category.
    pub struct DiscreteCategorical = "discrete_categorical" {
        pub probabilities: BTreeMap<String, f64>,
    }
}

gemd_record! {
    /// Quantity of each component.
    pub struct NominalComposition = "nominal_composition" {
        pub quantities: BTreeMap<String, f64>,
    }
}

gemd_record! {
    pub struct EmpiricalFormula = "empirical_formula" {
        pub formula: String,
    }
}

impl NominalReal {
    pub fn new(nominal: f64, units: impl Into<String>) -> Self {
        Self {
            nominal,
            units: units.into(),
        }
    }
}

impl NormalReal {
    pub fn new(mean: f64, std: f64, units: impl Into<String>) -> Self {
        Self {
            mean,
            std,
            units: units.into(),
        }
    }
}

impl NominalInteger {
    pub fn new(nominal: i64) -> Self {
        Self { nominal }
    }
}

impl NominalCategorical {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl NominalComposition {
    pub fn new<S: Into<String>>(quantities: impl IntoIterator<Item = (S, f64)>) -> Self {
        Self {
            quantities: quantities.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
