use axum::extract::{Path, State};
use floorplan_core::domain::provenance::entities::Import;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/imports/{uid}",
    tag = "provenance",
    summary = "Get import",
    params(
        ("uid" = String, Path, description = "Import uid"),
    ),
    responses(
        (status = 200, body = Import),
        (status = 404, description = "No import with this uid")
    )
)]
pub async fn get_import(
    Path(uid): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Import>, ApiError> {
    let import = state
        .service
        .import_by_uid(&uid)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(import))
}
