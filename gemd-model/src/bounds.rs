//! Bounds on attribute values. Only the shapes are modeled here; checking
//! whether a value satisfies a bound is left to callers.

gemd_record! {
    pub struct RealBounds = "real_bounds" {
        pub lower_bound: f64,
        pub upper_bound: f64,
        pub default_units: String,
    }
}

gemd_record! {
    pub struct IntegerBounds = "integer_bounds" {
        pub lower_bound: i64,
        pub upper_bound: i64,
    }
}

gemd_record! {
    pub struct CategoricalBounds = "categorical_bounds" {
        pub categories: Vec<String>,
    }
}

gemd_record! {
    pub struct CompositionBounds = "composition_bounds" {
        pub components: Vec<String>,
    }
}

gemd_record! {
    /// Any molecular structure is allowed.
    pub struct MolecularBounds = "molecular_bounds" {}
}

impl RealBounds {
    pub fn new(lower_bound: f64, upper_bound: f64, default_units: impl Into<String>) -> Self {
        Self {
            lower_bound,
            upper_bound,
            default_units: default_units.into(),
        }
    }
}

impl IntegerBounds {
    pub fn new(lower_bound: i64, upper_bound: i64) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }
}

impl CategoricalBounds {
    pub fn new<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }
}
