use axum::extract::{Path, Query, State};
use floorplan_core::domain::mapping::value_objects::{BuildingGraph, Selection};

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
    tag = "building",
    summary = "Get building",
    description = "Fetch one building by its public uid, resolving the relations named in `include`.",
    params(
        ("uid" = String, Path, description = "Building uid"),
        IncludeQuery,
    ),
    responses(
        (status = 200, body = BuildingGraph),
        (status = 404, description = "No building with this uid")
    )
)]
pub async fn get_building(
    Path(uid): Path<String>,
    Query(query): Query<IncludeQuery>,
    State(state): State<AppState>,
) -> Result<Response<BuildingGraph>, ApiError> {
    let selection = Selection::from_include(query.as_str());
    let building = state
        .service
        .building_by_uid(&uid)
        .await
        .map_err(ApiError::from)?;
    let graph = state.service.building_graph(building, &selection).await;

    Ok(Response::OK(graph))
}
