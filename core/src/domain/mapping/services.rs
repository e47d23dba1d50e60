use crate::domain::{
    common::entities::app_errors::CoreError,
    geography::{
        ports::Geocoder,
        services::{parse_geography_filter, parse_intersect_filter},
        value_objects::{GeographyFilterArgs, IntersectFilterArgs, RoomSearchFilter},
    },
    mapping::{
        entities::{Building, Filtered, Room},
        ports::MapRepository,
        value_objects::{BuildingGraph, DataSourceGraph, FieldError, RoomGraph, Selection},
    },
    provenance::{
        entities::{Import, OsmElement, Survey},
        ports::ProvenanceRepository,
    },
};

/// Read-side query service over the spatial store. One instance is shared by
/// all requests; the only state is the repositories' connection pool.
#[derive(Debug, Clone)]
pub struct MapQueryService<M, P, G> {
    map: M,
    provenance: P,
    geocoder: G,
}

impl<M, P, G> MapQueryService<M, P, G>
where
    M: MapRepository,
    P: ProvenanceRepository,
    G: Geocoder,
{
    pub fn new(map: M, provenance: P, geocoder: G) -> Self {
        Self {
            map,
            provenance,
            geocoder,
        }
    }

    pub async fn building_by_uid(&self, uid: &str) -> Result<Building, CoreError> {
        self.map.building_by_uid(uid).await
    }

    pub async fn room_by_uid(&self, uid: &str) -> Result<Room, CoreError> {
        self.map.room_by_uid(uid).await
    }

    pub async fn survey_by_uid(&self, uid: &str) -> Result<Survey, CoreError> {
        self.provenance.survey_by_uid(uid).await
    }

    pub async fn import_by_uid(&self, uid: &str) -> Result<Import, CoreError> {
        self.provenance.import_by_uid(uid).await
    }

    pub async fn osm_element_by_uid(&self, uid: &str) -> Result<OsmElement, CoreError> {
        self.provenance.osm_element_by_uid(uid).await
    }

    /// Root geography query over buildings. Parsing resolves a `place`
    /// argument through the geocoder before any store access.
    pub async fn filtered_buildings(
        &self,
        args: GeographyFilterArgs,
    ) -> Result<Vec<Filtered<Building>>, CoreError> {
        let filter = parse_geography_filter(&self.geocoder, args).await?;
        self.map.filtered_buildings(filter).await
    }

    /// Root geography query over rooms.
    pub async fn filtered_rooms(
        &self,
        args: GeographyFilterArgs,
    ) -> Result<Vec<Filtered<Room>>, CoreError> {
        let filter = parse_geography_filter(&self.geocoder, args).await?;
        self.map.filtered_rooms(filter).await
    }

    pub async fn rooms_in_building(
        &self,
        building: &Building,
        filter: RoomSearchFilter,
    ) -> Result<Vec<Room>, CoreError> {
        self.map.rooms_in_building(building.id, filter).await
    }

    pub async fn intersecting_rooms(
        &self,
        room: &Room,
        args: IntersectFilterArgs,
    ) -> Result<Vec<Room>, CoreError> {
        let filter = parse_intersect_filter(args)?;
        self.map.intersecting_rooms(room.id, filter).await
    }

    /// Resolves the relations of a building that the selection asks for.
    /// Address and data source have no ordering dependency and are fetched
    /// concurrently; a failed field is reported in `field_errors` while its
    /// siblings still resolve.
    pub async fn building_graph(&self, building: Building, selection: &Selection) -> BuildingGraph {
        let (address, data_source) = tokio::join!(
            async {
                if selection.wants("address") {
                    Some(self.map.address_by_id(building.address).await)
                } else {
                    None
                }
            },
            async {
                if selection.wants("dataSource") {
                    Some(self.data_source_graph(building.data_source, selection).await)
                } else {
                    None
                }
            },
        );

        let mut field_errors = Vec::new();
        let address = collect_field(address, "address", &mut field_errors);
        let data_source = collect_graph(data_source, &mut field_errors);

        BuildingGraph {
            building,
            address,
            data_source,
            field_errors,
        }
    }

    /// Resolves the relations of a room that the selection asks for.
    pub async fn room_graph(&self, room: Room, selection: &Selection) -> RoomGraph {
        let (building, data_source) = tokio::join!(
            async {
                if selection.wants("building") {
                    Some(self.map.building_by_id(room.building).await)
                } else {
                    None
                }
            },
            async {
                if selection.wants("dataSource") {
                    Some(self.data_source_graph(room.data_source, selection).await)
                } else {
                    None
                }
            },
        );

        let mut field_errors = Vec::new();
        let building = collect_field(building, "building", &mut field_errors);
        let data_source = collect_graph(data_source, &mut field_errors);

        RoomGraph {
            room,
            building,
            data_source,
            field_errors,
        }
    }

    async fn data_source_graph(
        &self,
        id: i32,
        selection: &Selection,
    ) -> (Option<DataSourceGraph>, Vec<FieldError>) {
        let mut errors = Vec::new();
        let record = match self.provenance.data_source_by_id(id).await {
            Ok(record) => record,
            Err(err) => {
                errors.push(FieldError {
                    path: "dataSource".to_string(),
                    message: err.to_string(),
                });
                return (None, errors);
            }
        };

        let (osm, survey, import) = tokio::join!(
            async {
                match (selection.wants("dataSource.osm"), record.osm) {
                    (true, Some(osm_id)) => Some(self.provenance.osm_element_by_id(osm_id).await),
                    _ => None,
                }
            },
            async {
                match (selection.wants("dataSource.survey"), record.survey) {
                    (true, Some(survey_id)) => {
                        Some(self.provenance.survey_by_id(survey_id).await)
                    }
                    _ => None,
                }
            },
            async {
                if selection.wants("dataSource.import") {
                    Some(self.provenance.import_by_id(record.import).await)
                } else {
                    None
                }
            },
        );

        let graph = DataSourceGraph {
            osm: collect_field(osm, "dataSource.osm", &mut errors),
            survey: collect_field(survey, "dataSource.survey", &mut errors),
            import: collect_field(import, "dataSource.import", &mut errors),
        };
        (Some(graph), errors)
    }
}

/// Folds one field's outcome into the response tree: `None` means the field
/// was not requested (or the stored reference is null), a failure is
/// recorded against the field's path.
fn collect_field<T>(
    outcome: Option<Result<T, CoreError>>,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match outcome {
        Some(Ok(value)) => Some(value),
        Some(Err(err)) => {
            errors.push(FieldError {
                path: path.to_string(),
                message: err.to_string(),
            });
            None
        }
        None => None,
    }
}

fn collect_graph(
    outcome: Option<(Option<DataSourceGraph>, Vec<FieldError>)>,
    errors: &mut Vec<FieldError>,
) -> Option<DataSourceGraph> {
    match outcome {
        Some((graph, nested)) => {
            errors.extend(nested);
            graph
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        geography::ports::MockGeocoder,
        mapping::{entities::Address, ports::MockMapRepository},
        provenance::{entities::DataSource, ports::MockProvenanceRepository},
    };

    fn building() -> Building {
        Building {
            id: 7,
            uid: "bld-1".to_string(),
            name: Some("Main hall".to_string()),
            geometry: "POLYGON((0 0,0 1,1 1,1 0,0 0))".to_string(),
            address: 3,
            data_source: 5,
        }
    }

    fn room() -> Room {
        Room {
            id: 11,
            uid: "room-1".to_string(),
            name: Some("Lab".to_string()),
            geometry: "POLYGON((0 0,0 1,1 1,1 0,0 0))".to_string(),
            level: 2,
            level_postfix: None,
            ref_code: Some("A-201".to_string()),
            building: 7,
            data_source: 5,
        }
    }

    fn address() -> Address {
        Address {
            id: 3,
            uid: "addr-1".to_string(),
            free: "1 Example Street".to_string(),
            locality: "Springfield".to_string(),
            region: "State".to_string(),
            postcode: "12345".to_string(),
            country: "Nowhere".to_string(),
        }
    }

    fn data_source(osm: Option<i32>, survey: Option<i32>) -> DataSource {
        DataSource {
            id: 5,
            uid: "ds-1".to_string(),
            osm,
            survey,
            import: 9,
        }
    }

    fn service(
        map: MockMapRepository,
        provenance: MockProvenanceRepository,
    ) -> MapQueryService<MockMapRepository, MockProvenanceRepository, MockGeocoder> {
        MapQueryService::new(map, provenance, MockGeocoder::new())
    }

    #[tokio::test]
    async fn room_by_uid_miss_surfaces_not_found() {
        let mut map = MockMapRepository::new();
        map.expect_room_by_uid()
            .with(eq("does-not-exist"))
            .returning(|uid| {
                Err(CoreError::NotFound {
                    entity: "room",
                    uid: uid.to_string(),
                })
            });

        let err = service(map, MockProvenanceRepository::new())
            .room_by_uid("does-not-exist")
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("room"));
        assert!(message.contains("does-not-exist"));
    }

    #[tokio::test]
    async fn empty_selection_fetches_nothing() {
        // No expectations are configured, so any repository call would panic.
        let graph = service(MockMapRepository::new(), MockProvenanceRepository::new())
            .building_graph(building(), &Selection::default())
            .await;

        assert!(graph.address.is_none());
        assert!(graph.data_source.is_none());
        assert!(graph.field_errors.is_empty());
    }

    #[tokio::test]
    async fn resolves_only_requested_relations() {
        let mut map = MockMapRepository::new();
        map.expect_address_by_id()
            .with(eq(3))
            .returning(|_| Ok(address()));

        let graph = service(map, MockProvenanceRepository::new())
            .building_graph(building(), &Selection::from_include("address"))
            .await;

        assert_eq!(graph.address, Some(address()));
        assert!(graph.data_source.is_none());
        assert!(graph.field_errors.is_empty());
    }

    #[tokio::test]
    async fn failed_field_does_not_abort_siblings() {
        let mut map = MockMapRepository::new();
        map.expect_address_by_id().with(eq(3)).returning(|id| {
            Err(CoreError::Consistency {
                entity: "address",
                id,
            })
        });
        let mut provenance = MockProvenanceRepository::new();
        provenance
            .expect_data_source_by_id()
            .with(eq(5))
            .returning(|_| Ok(data_source(None, None)));

        let graph = service(map, provenance)
            .building_graph(building(), &Selection::from_include("address,dataSource"))
            .await;

        assert!(graph.address.is_none());
        assert!(graph.data_source.is_some());
        assert_eq!(graph.field_errors.len(), 1);
        assert_eq!(graph.field_errors[0].path, "address");
        assert!(graph.field_errors[0].message.contains("inconsistent"));
    }

    #[tokio::test]
    async fn null_provenance_reference_resolves_to_absent_value() {
        let mut provenance = MockProvenanceRepository::new();
        provenance
            .expect_data_source_by_id()
            .with(eq(5))
            .returning(|_| Ok(data_source(None, Some(2))));
        provenance.expect_survey_by_id().with(eq(2)).returning(|id| {
            Ok(Survey {
                id,
                uid: "srv-1".to_string(),
                surveyor: "surveyor".to_string(),
                external: false,
            })
        });

        let graph = service(MockMapRepository::new(), provenance)
            .room_graph(
                room(),
                &Selection::from_include("dataSource.osm,dataSource.survey"),
            )
            .await;

        let data_source = graph.data_source.unwrap();
        assert!(data_source.osm.is_none());
        assert!(data_source.survey.is_some());
        assert!(graph.field_errors.is_empty());
    }

    #[tokio::test]
    async fn nested_provenance_failure_is_scoped_to_its_path() {
        let mut provenance = MockProvenanceRepository::new();
        provenance
            .expect_data_source_by_id()
            .with(eq(5))
            .returning(|_| Ok(data_source(Some(4), None)));
        provenance
            .expect_osm_element_by_id()
            .with(eq(4))
            .returning(|id| {
                Err(CoreError::Consistency {
                    entity: "osm element",
                    id,
                })
            });
        provenance.expect_import_by_id().with(eq(9)).returning(|id| {
            Ok(Import {
                id,
                uid: "imp-1".to_string(),
                date: chrono::Utc::now(),
                script: "ingest.py".to_string(),
            })
        });

        let graph = service(MockMapRepository::new(), provenance)
            .room_graph(
                room(),
                &Selection::from_include("dataSource.osm,dataSource.import"),
            )
            .await;

        let data_source = graph.data_source.unwrap();
        assert!(data_source.osm.is_none());
        assert!(data_source.import.is_some());
        assert_eq!(graph.field_errors.len(), 1);
        assert_eq!(graph.field_errors[0].path, "dataSource.osm");
    }

    #[tokio::test]
    async fn filtered_rooms_with_no_matches_is_an_empty_list() {
        let mut map = MockMapRepository::new();
        map.expect_filtered_rooms().returning(|_| Ok(Vec::new()));

        let args = GeographyFilterArgs {
            distance_from: Some(crate::domain::geography::value_objects::DistanceFromArgs {
                coordinates: Some(crate::domain::geography::value_objects::Coordinates {
                    lon: 0.0,
                    lat: 0.0,
                }),
                place: None,
                min: Some(0.0),
                max: Some(500.0),
            }),
            area: None,
            sort: None,
        };

        let rooms = service(map, MockProvenanceRepository::new())
            .filtered_rooms(args)
            .await
            .unwrap();
        assert!(rooms.is_empty());
    }

    #[tokio::test]
    async fn conflicting_intersect_arguments_never_reach_the_store() {
        let err = service(MockMapRepository::new(), MockProvenanceRepository::new())
            .intersecting_rooms(
                &room(),
                IntersectFilterArgs {
                    level: Some(2),
                    same_level: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
