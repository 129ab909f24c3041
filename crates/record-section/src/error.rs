use record_section_geometry::ProjectError;

/// Result alias for record section operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from building a record section or reading line requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("projection failed: {0}")]
    Project(#[from] ProjectError),

    #[error("station {0:?} is already in the record section")]
    DuplicateStation(String),

    #[error("station {0:?} is not in the record section")]
    UnknownStation(String),

    #[error("failed to parse line requests: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
