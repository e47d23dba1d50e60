use axum::extract::{Path, Query, State};
use floorplan_core::domain::mapping::value_objects::{RoomGraph, Selection};

use crate::application::http::{
    query_params::IncludeQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{uid}",
    tag = "room",
    summary = "Get room",
    description = "Fetch one room by its public uid, resolving the relations named in `include`.",
    params(
        ("uid" = String, Path, description = "Room uid"),
        IncludeQuery,
    ),
    responses(
        (status = 200, body = RoomGraph),
        (status = 404, description = "No room with this uid")
    )
)]
pub async fn get_room(
    Path(uid): Path<String>,
    Query(query): Query<IncludeQuery>,
    State(state): State<AppState>,
) -> Result<Response<RoomGraph>, ApiError> {
    let selection = Selection::from_include(query.as_str());
    let room = state.service.room_by_uid(&uid).await.map_err(ApiError::from)?;
    let graph = state.service.room_graph(room, &selection).await;

    Ok(Response::OK(graph))
}
