use utoipa::OpenApi;

use crate::application::http::{
    building::router::BuildingApiDoc, provenance::router::ProvenanceApiDoc,
    room::router::RoomApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Floorplan API"
    ),
    nest(
        (path = "/buildings", api = BuildingApiDoc),
        (path = "/rooms", api = RoomApiDoc),
        (path = "", api = ProvenanceApiDoc),
    )
)]
pub struct ApiDoc;
