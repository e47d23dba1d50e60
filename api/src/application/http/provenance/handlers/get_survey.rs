use axum::extract::{Path, State};
use floorplan_core::domain::provenance::entities::Survey;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/surveys/{uid}",
    tag = "provenance",
    summary = "Get survey",
    params(
        ("uid" = String, Path, description = "Survey uid"),
    ),
    responses(
        (status = 200, body = Survey),
        (status = 404, description = "No survey with this uid")
    )
)]
pub async fn get_survey(
    Path(uid): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Survey>, ApiError> {
    let survey = state
        .service
        .survey_by_uid(&uid)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(survey))
}
