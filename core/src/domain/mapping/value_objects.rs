use std::collections::BTreeSet;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    mapping::entities::{Address, Building, Room},
    provenance::entities::{Import, OsmElement, Survey},
};

/// The relation fields a caller asked to have resolved, as dotted paths
/// (`address`, `dataSource.osm`). Scalar columns are always returned; only
/// paths listed here trigger related-entity fetches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    paths: BTreeSet<String>,
}

impl Selection {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated include list, e.g. `address,dataSource.osm`.
    pub fn from_include(include: &str) -> Self {
        Self {
            paths: include
                .split(',')
                .map(str::trim)
                .filter(|path| !path.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Whether `path` itself or any nested path under it was requested.
    pub fn wants(&self, path: &str) -> bool {
        self.paths.iter().any(|requested| {
            requested == path
                || requested
                    .strip_prefix(path)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Failure of one resolved relation. Sibling fields keep resolving; the
/// error is reported next to the partial result instead of replacing it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// Resolved provenance of a building or room. Fields are present only when
/// requested and stored; a null `osm`/`survey` reference stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct DataSourceGraph {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm: Option<OsmElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survey: Option<Survey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildingGraph {
    #[serde(flatten)]
    pub building: Building,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSourceGraph>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomGraph {
    #[serde(flatten)]
    pub room: Room,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<Building>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSourceGraph>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_include_list_ignoring_blanks() {
        let selection = Selection::from_include("address, dataSource.osm ,,");
        assert!(selection.wants("address"));
        assert!(selection.wants("dataSource.osm"));
        assert!(!selection.wants("rooms"));
    }

    #[test]
    fn nested_path_implies_parent() {
        let selection = Selection::from_include("dataSource.osm");
        assert!(selection.wants("dataSource"));
        assert!(!selection.wants("dataSource.survey"));
    }

    #[test]
    fn parent_does_not_imply_sibling_prefix() {
        let selection = Selection::from_include("dataSourceExtra");
        assert!(!selection.wants("dataSource"));
    }

    #[test]
    fn empty_include_selects_nothing() {
        let selection = Selection::from_include("");
        assert!(selection.is_empty());
        assert!(!selection.wants("address"));
    }
}
