use crate::{
    domain::{common::FloorplanConfig, mapping::services::MapQueryService},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        geocode::nominatim::NominatimGeocoder,
        store::repositories::{
            map_repository::PostgresMapRepository,
            provenance_repository::PostgresProvenanceRepository,
        },
    },
};

pub type FloorplanService =
    MapQueryService<PostgresMapRepository, PostgresProvenanceRepository, NominatimGeocoder>;

pub async fn create_service(config: FloorplanConfig) -> Result<FloorplanService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.connection_url(),
    })
    .await?;

    let geocoder = NominatimGeocoder::new(config.geocoder.base_url)?;

    Ok(MapQueryService::new(
        PostgresMapRepository::new(postgres.get_pool()),
        PostgresProvenanceRepository::new(postgres.get_pool()),
        geocoder,
    ))
}
