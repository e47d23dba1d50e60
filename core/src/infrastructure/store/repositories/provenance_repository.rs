use sqlx::PgPool;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        provenance::{
            entities::{DataSource, Import, OsmElement, Survey},
            ports::ProvenanceRepository,
        },
    },
    infrastructure::store::{
        descriptors,
        repositories::{fetch_by_id, fetch_by_uid},
        rows::{DataSourceRow, ImportRow, OsmElementRow, SurveyRow},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresProvenanceRepository {
    pool: PgPool,
}

impl PostgresProvenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProvenanceRepository for PostgresProvenanceRepository {
    async fn survey_by_uid(&self, uid: &str) -> Result<Survey, CoreError> {
        fetch_by_uid::<SurveyRow>(&self.pool, &descriptors::SURVEY, uid)
            .await
            .map(Survey::from)
    }

    async fn survey_by_id(&self, id: i32) -> Result<Survey, CoreError> {
        fetch_by_id::<SurveyRow>(&self.pool, &descriptors::SURVEY, id)
            .await
            .map(Survey::from)
    }

    async fn osm_element_by_uid(&self, uid: &str) -> Result<OsmElement, CoreError> {
        fetch_by_uid::<OsmElementRow>(&self.pool, &descriptors::OSM_ELEMENT, uid)
            .await
            .map(OsmElement::from)
    }

    async fn osm_element_by_id(&self, id: i32) -> Result<OsmElement, CoreError> {
        fetch_by_id::<OsmElementRow>(&self.pool, &descriptors::OSM_ELEMENT, id)
            .await
            .map(OsmElement::from)
    }

    async fn import_by_uid(&self, uid: &str) -> Result<Import, CoreError> {
        fetch_by_uid::<ImportRow>(&self.pool, &descriptors::IMPORT, uid)
            .await
            .map(Import::from)
    }

    async fn import_by_id(&self, id: i32) -> Result<Import, CoreError> {
        fetch_by_id::<ImportRow>(&self.pool, &descriptors::IMPORT, id)
            .await
            .map(Import::from)
    }

    async fn data_source_by_id(&self, id: i32) -> Result<DataSource, CoreError> {
        fetch_by_id::<DataSourceRow>(&self.pool, &descriptors::DATA_SOURCE, id)
            .await
            .map(DataSource::from)
    }
}
