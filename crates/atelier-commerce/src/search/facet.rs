//! Facets for the filter sidebar.

use crate::search::FilterDimension;
use serde::{Deserialize, Serialize};

/// A filter dimension with its offered values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Dimension this facet filters on.
    pub dimension: FilterDimension,
    /// Facet values, in sidebar order.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create an empty facet.
    pub fn new(dimension: FilterDimension) -> Self {
        Self {
            dimension,
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(
        &mut self,
        value: impl Into<String>,
        label: impl Into<String>,
        count: usize,
        selected: bool,
    ) {
        self.values.push(FacetValue {
            value: value.into(),
            label: label.into(),
            count,
            selected,
        });
    }

    /// Values currently selected.
    pub fn selected(&self) -> impl Iterator<Item = &FacetValue> {
        self.values.iter().filter(|v| v.selected)
    }

    /// Look up a value.
    pub fn value(&self, value: &str) -> Option<&FacetValue> {
        self.values.iter().find(|v| v.value == value)
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// Token matched against products.
    pub value: String,
    /// Display label (color names differ from their tokens).
    pub label: String,
    /// Products that would match if this value were selected, given the
    /// selections of the other dimensions.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}
