//! Row structs decoded from the store, and their mappings into domain
//! entities. The `area` column of the filtered rows is only present when the
//! area filter was active, hence the defaults.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::{
    mapping::entities::{Address, Building, Filtered, Room},
    provenance::entities::{DataSource, Import, OsmElement, Survey},
};

#[derive(Debug, FromRow)]
pub struct SurveyRow {
    pub id: i32,
    pub uid: String,
    pub surveyor: String,
    pub external: bool,
}

impl From<SurveyRow> for Survey {
    fn from(row: SurveyRow) -> Self {
        Self {
            id: row.id,
            uid: row.uid,
            surveyor: row.surveyor,
            external: row.external,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct OsmElementRow {
    pub id: i32,
    pub uid: String,
    pub osm_id: i64,
    pub osm_type: String,
    pub osm_version: i32,
}

impl From<OsmElementRow> for OsmElement {
    fn from(row: OsmElementRow) -> Self {
        Self {
            id: row.id,
            uid: row.uid,
            osm_id: row.osm_id,
            osm_type: row.osm_type,
            osm_version: row.osm_version,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ImportRow {
    pub id: i32,
    pub uid: String,
    pub date: DateTime<Utc>,
    pub script: String,
}

impl From<ImportRow> for Import {
    fn from(row: ImportRow) -> Self {
        Self {
            id: row.id,
            uid: row.uid,
            date: row.date,
            script: row.script,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct DataSourceRow {
    pub id: i32,
    pub uid: String,
    pub osm: Option<i32>,
    pub survey: Option<i32>,
    pub import: i32,
}

impl From<DataSourceRow> for DataSource {
    fn from(row: DataSourceRow) -> Self {
        Self {
            id: row.id,
            uid: row.uid,
            osm: row.osm,
            survey: row.survey,
            import: row.import,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct AddressRow {
    pub id: i32,
    pub uid: String,
    pub free: String,
    pub locality: String,
    pub region: String,
    pub postcode: String,
    pub country: String,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self {
            id: row.id,
            uid: row.uid,
            free: row.free,
            locality: row.locality,
            region: row.region,
            postcode: row.postcode,
            country: row.country,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct BuildingRow {
    pub id: i32,
    pub uid: String,
    pub name: Option<String>,
    pub geometry: String,
    pub address: i32,
    pub data_source: i32,
}

impl From<BuildingRow> for Building {
    fn from(row: BuildingRow) -> Self {
        Self {
            id: row.id,
            uid: row.uid,
            name: row.name,
            geometry: row.geometry,
            address: row.address,
            data_source: row.data_source,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct RoomRow {
    pub id: i32,
    pub uid: String,
    pub name: Option<String>,
    pub geometry: String,
    pub level: i32,
    pub level_postfix: Option<String>,
    #[sqlx(rename = "ref")]
    pub ref_code: Option<String>,
    pub building: i32,
    pub data_source: i32,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            id: row.id,
            uid: row.uid,
            name: row.name,
            geometry: row.geometry,
            level: row.level,
            level_postfix: row.level_postfix,
            ref_code: row.ref_code,
            building: row.building,
            data_source: row.data_source,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct FilteredBuildingRow {
    #[sqlx(flatten)]
    pub building: BuildingRow,
    pub distance: f64,
    #[sqlx(default)]
    pub area: Option<f64>,
}

impl From<FilteredBuildingRow> for Filtered<Building> {
    fn from(row: FilteredBuildingRow) -> Self {
        Self {
            item: row.building.into(),
            distance: row.distance,
            area: row.area,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct FilteredRoomRow {
    #[sqlx(flatten)]
    pub room: RoomRow,
    pub distance: f64,
    #[sqlx(default)]
    pub area: Option<f64>,
}

impl From<FilteredRoomRow> for Filtered<Room> {
    fn from(row: FilteredRoomRow) -> Self {
        Self {
            item: row.room.into(),
            distance: row.distance,
            area: row.area,
        }
    }
}
