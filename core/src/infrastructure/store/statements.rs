//! Statement construction for the spatial store.
//!
//! Optional filter clauses are assembled as independent fragments whose
//! bound values are appended to one ordered list; placeholder numbers come
//! from the list length at the moment a value is bound. Table and column
//! names only ever come from the const descriptors — caller-supplied values
//! are always bound, never interpolated.

use crate::domain::geography::value_objects::{
    GeographyFilter, LevelMatch, RoomIntersectFilter, RoomSearchFilter, SortChoice,
};
use crate::infrastructure::store::descriptors::TableDescriptor;

/// One bound statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i32),
    Float(f64),
    Text(String),
}

/// Statement text plus its positional arguments, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Ordered bind list. `placeholder` appends a value and returns its `$n`
/// token, numbered from the current length, so text and argument slice stay
/// index-aligned for any subset of active filters.
#[derive(Debug, Default)]
struct ParamList {
    params: Vec<SqlParam>,
}

impl ParamList {
    fn placeholder(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        format!("${}", self.params.len())
    }
}

pub fn select_by_uid(descriptor: &TableDescriptor) -> String {
    format!(
        "SELECT {} FROM {} WHERE uid = $1",
        descriptor.columns, descriptor.table
    )
}

pub fn select_by_id(descriptor: &TableDescriptor) -> String {
    format!(
        "SELECT {} FROM {} WHERE id = $1",
        descriptor.columns, descriptor.table
    )
}

/// Geography-filtered select over rooms or buildings. Distance is always
/// computed and filtered on; the area column is only projected when the area
/// filter or an area sort needs it, so the outer query never references an
/// unselected column.
pub fn filtered_by_geography(
    descriptor: &TableDescriptor,
    filter: &GeographyFilter,
) -> SqlStatement {
    let mut params = ParamList::default();

    let lon = params.placeholder(SqlParam::Float(filter.distance_from.coordinates.lon));
    let lat = params.placeholder(SqlParam::Float(filter.distance_from.coordinates.lat));

    let needs_area = filter.area.is_some() || filter.sort == Some(SortChoice::Area);
    let area_column = if needs_area {
        ", ST_Area(geometry) AS area"
    } else {
        ""
    };

    let min = params.placeholder(SqlParam::Float(filter.distance_from.min));
    let max = params.placeholder(SqlParam::Float(filter.distance_from.max));
    let mut predicate = format!("distance BETWEEN {min} AND {max}");
    if let Some(area) = &filter.area {
        let area_min = params.placeholder(SqlParam::Float(area.min));
        let area_max = params.placeholder(SqlParam::Float(area.max));
        predicate.push_str(&format!(" AND area BETWEEN {area_min} AND {area_max}"));
    }

    let order = match filter.sort {
        Some(SortChoice::Distance) => " ORDER BY distance",
        Some(SortChoice::Area) => " ORDER BY area",
        None => "",
    };

    let sql = format!(
        "SELECT * FROM (SELECT {columns}, \
         ST_Distance(ST_MakePoint({lon}, {lat}), geometry) AS distance{area_column} \
         FROM {table}) AS scoped WHERE {predicate}{order}",
        columns = descriptor.columns,
        table = descriptor.table,
    );

    SqlStatement {
        sql,
        params: params.params,
    }
}

/// Rooms that spatially intersect one source room. The CTE pins the source
/// row so the same-as predicates can compare against the source's own level
/// and postfix instead of a bound value.
pub fn intersecting_rooms(
    descriptor: &TableDescriptor,
    filter: &RoomIntersectFilter,
    room_id: i32,
) -> SqlStatement {
    let mut params = ParamList::default();
    let id = params.placeholder(SqlParam::Int(room_id));

    let mut predicate = String::new();
    if let Some(level) = &filter.level {
        let comparison = match level {
            LevelMatch::Exact(value) => {
                format!("= {}", params.placeholder(SqlParam::Int(*value)))
            }
            LevelMatch::SameAsSource => "= (SELECT level FROM source)".to_string(),
            LevelMatch::DifferentFromSource => "<> (SELECT level FROM source)".to_string(),
        };
        predicate.push_str(&format!(" AND level {comparison}"));
    }
    if let Some(postfix) = &filter.level_postfix {
        let comparison = match postfix {
            LevelMatch::Exact(value) => {
                format!("= {}", params.placeholder(SqlParam::Text(value.clone())))
            }
            LevelMatch::SameAsSource => "= (SELECT level_postfix FROM source)".to_string(),
            LevelMatch::DifferentFromSource => "<> (SELECT level_postfix FROM source)".to_string(),
        };
        predicate.push_str(&format!(" AND level_postfix {comparison}"));
    }

    let sql = format!(
        "WITH source AS (SELECT geometry, level, level_postfix FROM {table} WHERE id = {id}) \
         SELECT {columns} FROM {table} AS candidate \
         WHERE id <> {id} AND ST_Intersects((SELECT geometry FROM source), candidate.geometry)\
         {predicate}",
        table = descriptor.table,
        columns = descriptor.columns,
    );

    SqlStatement {
        sql,
        params: params.params,
    }
}

/// Rooms of one building, optionally narrowed by level, postfix and a
/// case-insensitive substring over name and ref. The substring is bound once
/// and its placeholder reused for both columns.
pub fn rooms_in_building(
    descriptor: &TableDescriptor,
    filter: &RoomSearchFilter,
    building_id: i32,
) -> SqlStatement {
    let mut params = ParamList::default();
    let building = params.placeholder(SqlParam::Int(building_id));

    let mut predicate = format!("building = {building}");
    if let Some(level) = filter.level {
        let level = params.placeholder(SqlParam::Int(level));
        predicate.push_str(&format!(" AND level = {level}"));
    }
    if let Some(postfix) = &filter.level_postfix {
        let postfix = params.placeholder(SqlParam::Text(postfix.clone()));
        predicate.push_str(&format!(" AND level_postfix = {postfix}"));
    }
    if let Some(name) = &filter.name {
        let pattern = params.placeholder(SqlParam::Text(format!("%{name}%")));
        predicate.push_str(&format!(" AND (name ILIKE {pattern} OR ref ILIKE {pattern})"));
    }

    let sql = format!(
        "SELECT {} FROM {} WHERE {predicate}",
        descriptor.columns, descriptor.table
    );

    SqlStatement {
        sql,
        params: params.params,
    }
}
