use crate::catalog::ReferenceKind;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when reading reference data or build documents.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An id was looked up that the catalog does not contain (or the
    /// catalog has not finished loading).
    #[error("unknown {kind} reference: \"{id}\"")]
    UnknownCatalogReference {
        /// Which registry the id was looked up in.
        kind: ReferenceKind,
        /// The id that could not be resolved.
        id: String,
    },

    /// The catalog document is structurally valid JSON but breaks a
    /// registry rule (duplicate or empty ids).
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// An attribute name that is not one of the six known attributes.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A document could not be parsed as JSON.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}
