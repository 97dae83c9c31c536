use serde::{Deserialize, Serialize};
use std::fmt;

/// Artifact attribute a free-text filter applies to.
///
/// The toolbar does not emit this enum directly: it forwards the raw dropdown
/// selection (see [`FilterCriteria::field`]) and consumers interpret it with
/// [`FilterField::from_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterField {
    #[default]
    Everything,
    Name,
    Description,
    Labels,
}

impl FilterField {
    /// Dropdown order
    pub const ALL: [FilterField; 4] = [
        FilterField::Everything,
        FilterField::Name,
        FilterField::Description,
        FilterField::Labels,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Everything => "Everything",
            FilterField::Name => "Name",
            FilterField::Description => "Description",
            FilterField::Labels => "Labels",
        }
    }

    /// Interpret a dropdown selection. The empty sentinel (nothing selected
    /// yet) and unrecognized text both mean `Everything`.
    pub fn from_selection(selection: &str) -> Self {
        match selection {
            "Name" => FilterField::Name,
            "Description" => FilterField::Description,
            "Labels" => FilterField::Labels,
            _ => FilterField::Everything,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized filter + sort intent emitted by the toolbar.
///
/// `field` carries the dropdown selection verbatim, including the empty
/// string before any selection has been made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "type")]
    pub field: String,
    pub value: String,
    #[serde(rename = "sortAscending")]
    pub sort_ascending: bool,
}

impl FilterCriteria {
    pub fn new(field: impl Into<String>, value: impl Into<String>, sort_ascending: bool) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            sort_ascending,
        }
    }

    pub fn filter_field(&self) -> FilterField {
        FilterField::from_selection(&self.field)
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new("", "", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_means_everything() {
        assert_eq!(FilterField::from_selection(""), FilterField::Everything);
        assert_eq!(
            FilterField::from_selection("Everything"),
            FilterField::Everything
        );
        assert_eq!(FilterField::from_selection("Labels"), FilterField::Labels);
    }

    #[test]
    fn test_default_keeps_empty_sentinel() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.field, "");
        assert_eq!(criteria.filter_field(), FilterField::Everything);
        assert!(criteria.sort_ascending);
    }

    #[test]
    fn test_wire_shape() {
        let criteria = FilterCriteria::new("", "auth", true);
        insta::assert_json_snapshot!(criteria, @r#"
        {
          "type": "",
          "value": "auth",
          "sortAscending": true
        }
        "#);
    }
}
