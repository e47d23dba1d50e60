use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Manual survey that produced mapping data.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Survey {
    #[serde(skip)]
    pub id: i32,
    pub uid: String,
    pub surveyor: String,
    pub external: bool,
}

/// Element imported from the OpenStreetMap dataset. The `osm_*` triple
/// identifies the element in the external system and is exposed under the
/// external names (`id`, `type`, `version`).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OsmElement {
    #[serde(skip)]
    pub id: i32,
    pub uid: String,
    #[serde(rename = "id")]
    pub osm_id: i64,
    #[serde(rename = "type")]
    pub osm_type: String,
    #[serde(rename = "version")]
    pub osm_version: i32,
}

/// One ingestion run.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Import {
    #[serde(skip)]
    pub id: i32,
    pub uid: String,
    pub date: DateTime<Utc>,
    pub script: String,
}

/// Lineage record attached to buildings and rooms. At most one of `osm` and
/// `survey` is set; `import` is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub id: i32,
    pub uid: String,
    pub osm: Option<i32>,
    pub survey: Option<i32>,
    pub import: i32,
}
