use axum::extract::{Path, Query, State};
use floorplan_core::domain::{
    geography::value_objects::IntersectFilterArgs, mapping::entities::Room,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{uid}/intersecting",
    tag = "room",
    summary = "List intersecting rooms",
    description = "List the rooms whose geometry intersects this room's geometry. The level \
                   and level-postfix dimensions each accept either an exact value or a \
                   same-as-source flag, not both.",
    params(
        ("uid" = String, Path, description = "Room uid"),
        IntersectFilterArgs,
    ),
    responses(
        (status = 200, body = Vec<Room>),
        (status = 400, description = "Conflicting filter arguments"),
        (status = 404, description = "No room with this uid")
    )
)]
pub async fn list_intersecting_rooms(
    Path(uid): Path<String>,
    Query(args): Query<IntersectFilterArgs>,
    State(state): State<AppState>,
) -> Result<Response<Vec<Room>>, ApiError> {
    let room = state.service.room_by_uid(&uid).await.map_err(ApiError::from)?;
    let rooms = state
        .service
        .intersecting_rooms(&room, args)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(rooms))
}
