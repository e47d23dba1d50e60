use axum::extract::{Path, State};
use floorplan_core::domain::provenance::entities::OsmElement;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/osm-elements/{uid}",
    tag = "provenance",
    summary = "Get OSM element",
    params(
        ("uid" = String, Path, description = "OSM element uid"),
    ),
    responses(
        (status = 200, body = OsmElement),
        (status = 404, description = "No osm element with this uid")
    )
)]
pub async fn get_osm_element(
    Path(uid): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<OsmElement>, ApiError> {
    let element = state
        .service
        .osm_element_by_uid(&uid)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(element))
}
