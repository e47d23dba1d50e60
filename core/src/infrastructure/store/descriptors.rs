/// Fixed metadata for one stored entity type. Statement builders receive a
/// descriptor explicitly; the values below are the only source of table and
/// column names that ever reach statement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDescriptor {
    pub table: &'static str,
    pub columns: &'static str,
    element: Option<&'static str>,
    element_plural: Option<&'static str>,
}

impl TableDescriptor {
    /// Display name of one element, for error messages.
    pub fn element(&self) -> &'static str {
        self.element.unwrap_or(self.table)
    }

    pub fn element_plural(&self) -> String {
        match self.element_plural {
            Some(plural) => plural.to_string(),
            None => format!("{}s", self.element()),
        }
    }
}

pub const SURVEY: TableDescriptor = TableDescriptor {
    table: "survey",
    columns: "id, uid, surveyor, external",
    element: None,
    element_plural: None,
};

pub const OSM_ELEMENT: TableDescriptor = TableDescriptor {
    table: "osm_element",
    columns: "id, uid, osm_id, osm_type, osm_version",
    element: Some("osm element"),
    element_plural: None,
};

pub const IMPORT: TableDescriptor = TableDescriptor {
    table: "import",
    columns: "id, uid, date, script",
    element: None,
    element_plural: None,
};

pub const DATA_SOURCE: TableDescriptor = TableDescriptor {
    table: "data_source",
    columns: "id, uid, osm, survey, import",
    element: Some("data source"),
    element_plural: None,
};

pub const ADDRESS: TableDescriptor = TableDescriptor {
    table: "address",
    columns: "id, uid, free, locality, region, postcode, country",
    element: None,
    element_plural: Some("addresses"),
};

pub const BUILDING: TableDescriptor = TableDescriptor {
    table: "building",
    columns: "id, uid, name, ST_AsText(geometry) AS geometry, address, data_source",
    element: None,
    element_plural: None,
};

pub const ROOM: TableDescriptor = TableDescriptor {
    table: "room",
    columns: "id, uid, name, ST_AsText(geometry) AS geometry, level, level_postfix, ref, building, data_source",
    element: None,
    element_plural: None,
};
