use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    geography::value_objects::{GeographyFilter, RoomIntersectFilter, RoomSearchFilter},
    mapping::entities::{Address, Building, Filtered, Room},
};

#[cfg_attr(test, mockall::automock)]
pub trait MapRepository: Send + Sync {
    fn building_by_uid(
        &self,
        uid: &str,
    ) -> impl Future<Output = Result<Building, CoreError>> + Send;

    fn building_by_id(&self, id: i32) -> impl Future<Output = Result<Building, CoreError>> + Send;

    fn room_by_uid(&self, uid: &str) -> impl Future<Output = Result<Room, CoreError>> + Send;

    fn room_by_id(&self, id: i32) -> impl Future<Output = Result<Room, CoreError>> + Send;

    fn address_by_id(&self, id: i32) -> impl Future<Output = Result<Address, CoreError>> + Send;

    fn filtered_buildings(
        &self,
        filter: GeographyFilter,
    ) -> impl Future<Output = Result<Vec<Filtered<Building>>, CoreError>> + Send;

    fn filtered_rooms(
        &self,
        filter: GeographyFilter,
    ) -> impl Future<Output = Result<Vec<Filtered<Room>>, CoreError>> + Send;

    fn rooms_in_building(
        &self,
        building_id: i32,
        filter: RoomSearchFilter,
    ) -> impl Future<Output = Result<Vec<Room>, CoreError>> + Send;

    fn intersecting_rooms(
        &self,
        room_id: i32,
        filter: RoomIntersectFilter,
    ) -> impl Future<Output = Result<Vec<Room>, CoreError>> + Send;
}
