use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, geography::value_objects::Coordinates,
};

/// Resolves a free-text place name to coordinates. Single attempt per call;
/// fallback policy is the caller's concern.
#[cfg_attr(test, mockall::automock)]
pub trait Geocoder: Send + Sync {
    fn resolve(
        &self,
        place: &str,
    ) -> impl Future<Output = Result<Coordinates, CoreError>> + Send;
}
