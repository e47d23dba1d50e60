use sqlx::PgPool;
use tracing::debug;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        geography::value_objects::{GeographyFilter, RoomIntersectFilter, RoomSearchFilter},
        mapping::{
            entities::{Address, Building, Filtered, Room},
            ports::MapRepository,
        },
    },
    infrastructure::store::{
        descriptors,
        repositories::{fetch_by_id, fetch_by_uid, fetch_filtered},
        rows::{AddressRow, BuildingRow, FilteredBuildingRow, FilteredRoomRow, RoomRow},
        statements,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresMapRepository {
    pool: PgPool,
}

impl PostgresMapRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MapRepository for PostgresMapRepository {
    async fn building_by_uid(&self, uid: &str) -> Result<Building, CoreError> {
        fetch_by_uid::<BuildingRow>(&self.pool, &descriptors::BUILDING, uid)
            .await
            .map(Building::from)
    }

    async fn building_by_id(&self, id: i32) -> Result<Building, CoreError> {
        fetch_by_id::<BuildingRow>(&self.pool, &descriptors::BUILDING, id)
            .await
            .map(Building::from)
    }

    async fn room_by_uid(&self, uid: &str) -> Result<Room, CoreError> {
        fetch_by_uid::<RoomRow>(&self.pool, &descriptors::ROOM, uid)
            .await
            .map(Room::from)
    }

    async fn room_by_id(&self, id: i32) -> Result<Room, CoreError> {
        fetch_by_id::<RoomRow>(&self.pool, &descriptors::ROOM, id)
            .await
            .map(Room::from)
    }

    async fn address_by_id(&self, id: i32) -> Result<Address, CoreError> {
        fetch_by_id::<AddressRow>(&self.pool, &descriptors::ADDRESS, id)
            .await
            .map(Address::from)
    }

    async fn filtered_buildings(
        &self,
        filter: GeographyFilter,
    ) -> Result<Vec<Filtered<Building>>, CoreError> {
        let statement = statements::filtered_by_geography(&descriptors::BUILDING, &filter);
        let rows: Vec<FilteredBuildingRow> =
            fetch_filtered(&self.pool, &descriptors::BUILDING, &statement).await?;
        debug!(
            matched = rows.len(),
            "geography query over {}",
            descriptors::BUILDING.element_plural()
        );
        Ok(rows.into_iter().map(Filtered::from).collect())
    }

    async fn filtered_rooms(
        &self,
        filter: GeographyFilter,
    ) -> Result<Vec<Filtered<Room>>, CoreError> {
        let statement = statements::filtered_by_geography(&descriptors::ROOM, &filter);
        let rows: Vec<FilteredRoomRow> =
            fetch_filtered(&self.pool, &descriptors::ROOM, &statement).await?;
        debug!(
            matched = rows.len(),
            "geography query over {}",
            descriptors::ROOM.element_plural()
        );
        Ok(rows.into_iter().map(Filtered::from).collect())
    }

    async fn rooms_in_building(
        &self,
        building_id: i32,
        filter: RoomSearchFilter,
    ) -> Result<Vec<Room>, CoreError> {
        let statement = statements::rooms_in_building(&descriptors::ROOM, &filter, building_id);
        let rows: Vec<RoomRow> = fetch_filtered(&self.pool, &descriptors::ROOM, &statement).await?;
        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn intersecting_rooms(
        &self,
        room_id: i32,
        filter: RoomIntersectFilter,
    ) -> Result<Vec<Room>, CoreError> {
        let statement = statements::intersecting_rooms(&descriptors::ROOM, &filter, room_id);
        let rows: Vec<RoomRow> = fetch_filtered(&self.pool, &descriptors::ROOM, &statement).await?;
        Ok(rows.into_iter().map(Room::from).collect())
    }
}
