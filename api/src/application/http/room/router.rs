use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    __path_get_room, __path_list_intersecting_rooms, __path_search_rooms, get_room,
    list_intersecting_rooms, search_rooms,
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_room, list_intersecting_rooms, search_rooms))]
pub struct RoomApiDoc;

pub fn room_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{root_path}/rooms/search"), post(search_rooms))
        .route(&format!("{root_path}/rooms/{{uid}}"), get(get_room))
        .route(
            &format!("{root_path}/rooms/{{uid}}/intersecting"),
            get(list_intersecting_rooms),
        )
}
