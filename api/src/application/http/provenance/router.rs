use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    __path_get_import, __path_get_osm_element, __path_get_survey, get_import, get_osm_element,
    get_survey,
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_survey, get_import, get_osm_element))]
pub struct ProvenanceApiDoc;

pub fn provenance_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{root_path}/surveys/{{uid}}"), get(get_survey))
        .route(&format!("{root_path}/imports/{{uid}}"), get(get_import))
        .route(
            &format!("{root_path}/osm-elements/{{uid}}"),
            get(get_osm_element),
        )
}
