use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Hard ceiling for `distanceFrom.max`, in the unit returned by the store's
/// distance function.
pub const MAX_FILTER_DISTANCE: f64 = 2000.0;

/// Default lower bound for distance and area filters.
pub const DEFAULT_FILTER_MIN: f64 = 0.0;
/// Default upper bound for distance and area filters.
pub const DEFAULT_FILTER_MAX: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

/// Validated distance filter. A `place` argument is consumed during parsing;
/// only coordinates survive into the filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceFrom {
    pub coordinates: Coordinates,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaBounds {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortChoice {
    Distance,
    Area,
}

/// Validated filter for the root geography queries over rooms or buildings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeographyFilter {
    pub distance_from: DistanceFrom,
    pub area: Option<AreaBounds>,
    pub sort: Option<SortChoice>,
}

/// One dimension of the room-intersection filter: either an exact value or
/// a comparison against the source room's own value. The exact / same-as
/// exclusivity of the raw arguments is encoded by this type.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelMatch<T> {
    Exact(T),
    SameAsSource,
    DifferentFromSource,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomIntersectFilter {
    pub level: Option<LevelMatch<i32>>,
    pub level_postfix: Option<LevelMatch<String>>,
}

/// Filter for listing a building's rooms. No cross-field constraints, so the
/// decoded arguments are the validated filter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearchFilter {
    /// Exact floor index.
    pub level: Option<i32>,
    /// Exact floor disambiguator, e.g. "mezzanine".
    pub level_postfix: Option<String>,
    /// Case-insensitive substring matched against name and ref.
    pub name: Option<String>,
}

/// Raw arguments of the root geography filter, as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeographyFilterArgs {
    pub distance_from: Option<DistanceFromArgs>,
    pub area: Option<AreaBoundsArgs>,
    pub sort: Option<SortChoice>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DistanceFromArgs {
    pub coordinates: Option<Coordinates>,
    pub place: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct AreaBoundsArgs {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Raw arguments of the room-intersection filter.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct IntersectFilterArgs {
    /// Exact floor index; conflicts with `sameLevel`.
    pub level: Option<i32>,
    /// Exact floor disambiguator; conflicts with `sameLevelPostfix`.
    pub level_postfix: Option<String>,
    /// Match (`true`) or exclude (`false`) the source room's floor.
    pub same_level: Option<bool>,
    /// Match or exclude the source room's floor disambiguator.
    pub same_level_postfix: Option<bool>,
}
