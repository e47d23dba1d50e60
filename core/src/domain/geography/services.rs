use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    geography::{
        ports::Geocoder,
        value_objects::{
            AreaBounds, DistanceFrom, GeographyFilter, GeographyFilterArgs, IntersectFilterArgs,
            LevelMatch, MAX_FILTER_DISTANCE, DEFAULT_FILTER_MAX, DEFAULT_FILTER_MIN,
            RoomIntersectFilter,
        },
    },
};

const MISSING_DISTANCE_SOURCE: &str =
    "must specify either <coordinates> or <place> on the distanceFrom filter";

/// Validates the root geography arguments and resolves the distance origin.
///
/// All independent violations are reported in one `Validation` error. The
/// geocoder is only consulted once the arguments are otherwise valid; when a
/// lookup fails but explicit coordinates were also supplied, the lookup error
/// is discarded (logged at WARN) and the explicit coordinates are used.
pub async fn parse_geography_filter<G: Geocoder>(
    geocoder: &G,
    args: GeographyFilterArgs,
) -> Result<GeographyFilter, CoreError> {
    let distance_from = args.distance_from.unwrap_or_default();
    let min = distance_from.min.unwrap_or(DEFAULT_FILTER_MIN);
    let max = distance_from.max.unwrap_or(DEFAULT_FILTER_MAX);

    let mut violations = Vec::new();
    if max > MAX_FILTER_DISTANCE {
        violations.push(format!(
            "<distanceFrom.max> ({max}) cannot be greater than {MAX_FILTER_DISTANCE}"
        ));
    }
    if distance_from.coordinates.is_none() && distance_from.place.is_none() {
        violations.push(MISSING_DISTANCE_SOURCE.to_string());
    }
    if !violations.is_empty() {
        return Err(CoreError::Validation(violations.join("; ")));
    }

    let coordinates = match (distance_from.place.as_deref(), distance_from.coordinates) {
        (Some(place), fallback) => match geocoder.resolve(place).await {
            Ok(coordinates) => coordinates,
            Err(err) => {
                let Some(coordinates) = fallback else {
                    return Err(CoreError::Upstream(format!(
                        "error geocoding <place> \"{place}\" for the distanceFrom filter \
                         without fallback <coordinates>: {err}"
                    )));
                };
                warn!(place, error = %err, "discarding geocode error, using fallback coordinates");
                coordinates
            }
        },
        (None, Some(coordinates)) => coordinates,
        (None, None) => return Err(CoreError::Validation(MISSING_DISTANCE_SOURCE.to_string())),
    };

    let area = args.area.map(|bounds| AreaBounds {
        min: bounds.min.unwrap_or(DEFAULT_FILTER_MIN),
        max: bounds.max.unwrap_or(DEFAULT_FILTER_MAX),
    });

    Ok(GeographyFilter {
        distance_from: DistanceFrom { coordinates, min, max },
        area,
        sort: args.sort,
    })
}

/// Validates the room-intersection arguments, rejecting an exact value and a
/// same-as flag on the same dimension.
pub fn parse_intersect_filter(args: IntersectFilterArgs) -> Result<RoomIntersectFilter, CoreError> {
    let mut violations = Vec::new();
    if args.level.is_some() && args.same_level.is_some() {
        violations.push("cannot filter on both <level> and <sameLevel> at the same time");
    }
    if args.level_postfix.is_some() && args.same_level_postfix.is_some() {
        violations
            .push("cannot filter on both <levelPostfix> and <sameLevelPostfix> at the same time");
    }
    if !violations.is_empty() {
        return Err(CoreError::Validation(violations.join("; ")));
    }

    let level = match (args.level, args.same_level) {
        (Some(level), _) => Some(LevelMatch::Exact(level)),
        (None, Some(same)) => Some(source_match(same)),
        (None, None) => None,
    };
    let level_postfix = match (args.level_postfix, args.same_level_postfix) {
        (Some(postfix), _) => Some(LevelMatch::Exact(postfix)),
        (None, Some(same)) => Some(source_match(same)),
        (None, None) => None,
    };

    Ok(RoomIntersectFilter { level, level_postfix })
}

fn source_match<T>(matching: bool) -> LevelMatch<T> {
    if matching {
        LevelMatch::SameAsSource
    } else {
        LevelMatch::DifferentFromSource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geography::{
        ports::MockGeocoder,
        value_objects::{Coordinates, DistanceFromArgs, SortChoice},
    };

    fn distance_args(
        coordinates: Option<Coordinates>,
        place: Option<&str>,
    ) -> GeographyFilterArgs {
        GeographyFilterArgs {
            distance_from: Some(DistanceFromArgs {
                coordinates,
                place: place.map(str::to_string),
                min: None,
                max: None,
            }),
            area: None,
            sort: None,
        }
    }

    #[tokio::test]
    async fn rejects_max_distance_above_ceiling_without_geocoding() {
        let geocoder = MockGeocoder::new();
        let mut args = distance_args(None, Some("Berlin"));
        if let Some(distance_from) = args.distance_from.as_mut() {
            distance_from.max = Some(2500.0);
        }

        let err = parse_geography_filter(&geocoder, args).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("2000"));
    }

    #[tokio::test]
    async fn rejects_missing_coordinates_and_place() {
        let geocoder = MockGeocoder::new();

        let err = parse_geography_filter(&geocoder, distance_args(None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("<coordinates>"));
    }

    #[tokio::test]
    async fn rejects_missing_distance_from_entirely() {
        let geocoder = MockGeocoder::new();

        let err = parse_geography_filter(&geocoder, GeographyFilterArgs::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn geocode_failure_falls_back_to_explicit_coordinates() {
        let mut geocoder = MockGeocoder::new();
        geocoder
            .expect_resolve()
            .returning(|_| Err(CoreError::Upstream("no places found".to_string())));

        let fallback = Coordinates { lon: 13.4, lat: 52.5 };
        let filter = parse_geography_filter(&geocoder, distance_args(Some(fallback), Some("???")))
            .await
            .unwrap();
        assert_eq!(filter.distance_from.coordinates, fallback);
    }

    #[tokio::test]
    async fn geocode_failure_without_fallback_is_an_upstream_error() {
        let mut geocoder = MockGeocoder::new();
        geocoder
            .expect_resolve()
            .returning(|_| Err(CoreError::Upstream("no places found".to_string())));

        let err = parse_geography_filter(&geocoder, distance_args(None, Some("???")))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Upstream(_)));
        assert!(err.to_string().contains("no places found"));
    }

    #[tokio::test]
    async fn geocoded_place_wins_over_explicit_coordinates() {
        let mut geocoder = MockGeocoder::new();
        geocoder
            .expect_resolve()
            .returning(|_| Ok(Coordinates { lon: 2.35, lat: 48.85 }));

        let explicit = Coordinates { lon: 0.0, lat: 0.0 };
        let filter = parse_geography_filter(&geocoder, distance_args(Some(explicit), Some("Paris")))
            .await
            .unwrap();
        assert_eq!(filter.distance_from.coordinates.lon, 2.35);
        assert_eq!(filter.distance_from.coordinates.lat, 48.85);
    }

    #[tokio::test]
    async fn applies_default_bounds_and_keeps_optional_filters() {
        let geocoder = MockGeocoder::new();
        let mut args = distance_args(Some(Coordinates { lon: 0.0, lat: 0.0 }), None);
        args.area = Some(Default::default());
        args.sort = Some(SortChoice::Distance);

        let filter = parse_geography_filter(&geocoder, args).await.unwrap();
        assert_eq!(filter.distance_from.min, 0.0);
        assert_eq!(filter.distance_from.max, 500.0);
        let area = filter.area.unwrap();
        assert_eq!(area.min, 0.0);
        assert_eq!(area.max, 500.0);
        assert_eq!(filter.sort, Some(SortChoice::Distance));
    }

    #[test]
    fn rejects_level_combined_with_same_level() {
        let err = parse_intersect_filter(IntersectFilterArgs {
            level: Some(2),
            same_level: Some(true),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("<sameLevel>"));
    }

    #[test]
    fn rejects_both_conflicting_pairs_with_one_error() {
        let err = parse_intersect_filter(IntersectFilterArgs {
            level: Some(2),
            same_level: Some(true),
            level_postfix: Some("mezzanine".to_string()),
            same_level_postfix: Some(false),
        })
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("<sameLevel>"));
        assert!(message.contains("<sameLevelPostfix>"));
    }

    #[test]
    fn maps_same_level_flags_to_source_comparisons() {
        let filter = parse_intersect_filter(IntersectFilterArgs {
            same_level: Some(true),
            same_level_postfix: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter.level, Some(LevelMatch::SameAsSource));
        assert_eq!(filter.level_postfix, Some(LevelMatch::DifferentFromSource));
    }

    #[test]
    fn maps_exact_values() {
        let filter = parse_intersect_filter(IntersectFilterArgs {
            level: Some(3),
            level_postfix: Some("m".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter.level, Some(LevelMatch::Exact(3)));
        assert_eq!(filter.level_postfix, Some(LevelMatch::Exact("m".to_string())));
    }
}
