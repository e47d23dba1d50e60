use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    geography::{ports::Geocoder, value_objects::Coordinates},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a Nominatim-compatible place-search API. One attempt per
/// lookup, bounded by a client-level timeout; fallback policy belongs to
/// the caller.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    lon: String,
    lat: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { base_url, client })
    }

    async fn search(&self, place: &str) -> Result<Vec<PlaceResult>, CoreError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|err| {
                tracing::error!(place, error = %err, "place search request failed");
                CoreError::Upstream(format!("place search request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(place, %status, "place search returned an error status");
            return Err(CoreError::Upstream(format!(
                "place search returned {status}"
            )));
        }

        response.json().await.map_err(|err| {
            tracing::error!(place, error = %err, "failed to parse place search response");
            CoreError::Upstream(format!("failed to parse place search response: {err}"))
        })
    }
}

impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, place: &str) -> Result<Coordinates, CoreError> {
        let places = self.search(place).await?;
        first_coordinates(places, place)
    }
}

fn first_coordinates(places: Vec<PlaceResult>, place: &str) -> Result<Coordinates, CoreError> {
    let Some(found) = places.into_iter().next() else {
        return Err(CoreError::Upstream(format!(
            "no places found for \"{place}\""
        )));
    };

    match (found.lon.parse::<f64>(), found.lat.parse::<f64>()) {
        (Ok(lon), Ok(lat)) => Ok(Coordinates { lon, lat }),
        _ => Err(CoreError::Upstream(format!(
            "place search returned non-numeric coordinates for \"{place}\""
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_list_is_an_upstream_error() {
        let err = first_coordinates(Vec::new(), "Atlantis").unwrap_err();
        assert!(matches!(err, CoreError::Upstream(_)));
        assert!(err.to_string().contains("no places found"));
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn takes_the_first_result_and_parses_its_coordinates() {
        let places: Vec<PlaceResult> = serde_json::from_str(
            r#"[
                {"place_id": 1, "lon": "13.3888599", "lat": "52.5170365"},
                {"place_id": 2, "lon": "0", "lat": "0"}
            ]"#,
        )
        .unwrap();

        let coordinates = first_coordinates(places, "Berlin").unwrap();
        assert_eq!(coordinates.lon, 13.3888599);
        assert_eq!(coordinates.lat, 52.5170365);
    }

    #[test]
    fn non_numeric_coordinates_are_an_upstream_error() {
        let places = vec![PlaceResult {
            lon: "not-a-number".to_string(),
            lat: "52.5".to_string(),
        }];

        let err = first_coordinates(places, "Berlin").unwrap_err();
        assert!(matches!(err, CoreError::Upstream(_)));
    }
}
