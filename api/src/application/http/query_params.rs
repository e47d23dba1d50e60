use serde::Deserialize;
use utoipa::IntoParams;

/// Relation-selection query parameter shared by the single-entity handlers.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct IncludeQuery {
    /// Comma-separated relation paths to resolve, e.g.
    /// `address,dataSource.osm`.
    pub include: Option<String>,
}

impl IncludeQuery {
    pub fn as_str(&self) -> &str {
        self.include.as_deref().unwrap_or_default()
    }
}
