use thiserror::Error;

/// Error taxonomy of the query core. `Validation` and `NotFound` are
/// caller-correctable; `Consistency` means a stored reference points at a
/// row that does not exist; `Upstream` is a failed geocode lookup with no
/// usable fallback; `Store` is any other driver failure.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("found no {entity} with uid \"{uid}\"")]
    NotFound { entity: &'static str, uid: String },

    #[error("found no {entity} with internal id {id}, stored references are inconsistent")]
    Consistency { entity: &'static str, id: i32 },

    #[error("{0}")]
    Upstream(String),

    #[error("store error: {0}")]
    Store(String),
}
