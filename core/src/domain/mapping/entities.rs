use serde::Serialize;
use utoipa::ToSchema;

/// Postal address of a building.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Address {
    #[serde(skip)]
    pub id: i32,
    pub uid: String,
    pub free: String,
    pub locality: String,
    pub region: String,
    pub postcode: String,
    pub country: String,
}

/// A mapped building. Geometry is the polygon outline in WKT. `address` and
/// `data_source` are internal references resolved on request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Building {
    #[serde(skip)]
    pub id: i32,
    pub uid: String,
    pub name: Option<String>,
    pub geometry: String,
    #[serde(skip)]
    pub address: i32,
    #[serde(skip)]
    pub data_source: i32,
}

/// A mapped room inside a building.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(skip)]
    pub id: i32,
    pub uid: String,
    pub name: Option<String>,
    pub geometry: String,
    pub level: i32,
    pub level_postfix: Option<String>,
    #[serde(rename = "ref")]
    pub ref_code: Option<String>,
    #[serde(skip)]
    pub building: i32,
    #[serde(skip)]
    pub data_source: i32,
}

/// Result row of a root geography query: the entity plus the computed
/// distance from the filter origin and, when the area filter was active,
/// the computed area.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Filtered<T> {
    #[serde(flatten)]
    pub item: T,
    pub distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}
