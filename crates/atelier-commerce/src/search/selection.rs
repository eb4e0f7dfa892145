//! Filter selection state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One filter dimension of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterDimension {
    Category,
    Color,
    Size,
}

impl FilterDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterDimension::Category => "category",
            FilterDimension::Color => "color",
            FilterDimension::Size => "size",
        }
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active values of one dimension.
///
/// Membership is all that matters for matching and equality. Values keep
/// the order they were selected in so active-filter badges render stably.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet(Vec<String>);

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl Eq for SelectionSet {}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the value if absent, remove it if present.
    ///
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|v| v == value) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(value.to_string());
            true
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    /// True when any of `values` is selected.
    pub fn contains_any<'a>(&self, values: impl IntoIterator<Item = &'a String>) -> bool {
        values.into_iter().any(|v| self.contains(v))
    }

    /// An empty set disables its dimension.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        for value in iter {
            let value = value.into();
            if !set.contains(&value) {
                set.0.push(value);
            }
        }
        set
    }
}

/// Current filter choices across all dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSelection {
    pub categories: SelectionSet,
    pub colors: SelectionSet,
    pub sizes: SelectionSet,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: FilterDimension) -> &SelectionSet {
        match dimension {
            FilterDimension::Category => &self.categories,
            FilterDimension::Color => &self.colors,
            FilterDimension::Size => &self.sizes,
        }
    }

    pub fn get_mut(&mut self, dimension: FilterDimension) -> &mut SelectionSet {
        match dimension {
            FilterDimension::Category => &mut self.categories,
            FilterDimension::Color => &mut self.colors,
            FilterDimension::Size => &mut self.sizes,
        }
    }

    /// Number of selected values across all dimensions.
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.colors.len() + self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.colors.clear();
        self.sizes.clear();
    }
}
