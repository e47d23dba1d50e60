use axum::extract::{Path, Query, State};
use floorplan_core::domain::{
    geography::value_objects::RoomSearchFilter, mapping::entities::Room,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{uid}/rooms",
    tag = "building",
    summary = "List building rooms",
    description = "List the rooms of a building, optionally narrowed by level, level postfix \
                   and a case-insensitive substring over name and ref.",
    params(
        ("uid" = String, Path, description = "Building uid"),
        RoomSearchFilter,
    ),
    responses(
        (status = 200, body = Vec<Room>),
        (status = 404, description = "No building with this uid")
    )
)]
pub async fn list_building_rooms(
    Path(uid): Path<String>,
    Query(filter): Query<RoomSearchFilter>,
    State(state): State<AppState>,
) -> Result<Response<Vec<Room>>, ApiError> {
    let building = state
        .service
        .building_by_uid(&uid)
        .await
        .map_err(ApiError::from)?;
    let rooms = state
        .service
        .rooms_in_building(&building, filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(rooms))
}
