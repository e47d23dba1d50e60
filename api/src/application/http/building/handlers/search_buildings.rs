use axum::{Json, extract::State};
use floorplan_core::domain::{
    geography::value_objects::GeographyFilterArgs,
    mapping::entities::{Building, Filtered},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/search",
    tag = "building",
    summary = "Search buildings by geography",
    description = "List buildings within a distance band of a point or place, optionally \
                   narrowed by area and sorted by distance or area. An empty result is a \
                   valid empty list.",
    request_body = GeographyFilterArgs,
    responses(
        (status = 200, body = Vec<Filtered<Building>>),
        (status = 400, description = "Invalid filter arguments"),
        (status = 502, description = "Geocoding failed and no fallback coordinates were given")
    )
)]
pub async fn search_buildings(
    State(state): State<AppState>,
    Json(args): Json<GeographyFilterArgs>,
) -> Result<Response<Vec<Filtered<Building>>>, ApiError> {
    let buildings = state
        .service
        .filtered_buildings(args)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(buildings))
}
