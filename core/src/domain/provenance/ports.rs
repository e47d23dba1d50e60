use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    provenance::entities::{DataSource, Import, OsmElement, Survey},
};

#[cfg_attr(test, mockall::automock)]
pub trait ProvenanceRepository: Send + Sync {
    fn survey_by_uid(&self, uid: &str)
    -> impl Future<Output = Result<Survey, CoreError>> + Send;

    fn survey_by_id(&self, id: i32) -> impl Future<Output = Result<Survey, CoreError>> + Send;

    fn osm_element_by_uid(
        &self,
        uid: &str,
    ) -> impl Future<Output = Result<OsmElement, CoreError>> + Send;

    fn osm_element_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<OsmElement, CoreError>> + Send;

    fn import_by_uid(&self, uid: &str)
    -> impl Future<Output = Result<Import, CoreError>> + Send;

    fn import_by_id(&self, id: i32) -> impl Future<Output = Result<Import, CoreError>> + Send;

    fn data_source_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<DataSource, CoreError>> + Send;
}
