use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    __path_get_building, __path_list_building_rooms, __path_search_buildings, get_building,
    list_building_rooms, search_buildings,
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_building, list_building_rooms, search_buildings))]
pub struct BuildingApiDoc;

pub fn building_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(
            &format!("{root_path}/buildings/search"),
            post(search_buildings),
        )
        .route(&format!("{root_path}/buildings/{{uid}}"), get(get_building))
        .route(
            &format!("{root_path}/buildings/{{uid}}/rooms"),
            get(list_building_rooms),
        )
}
