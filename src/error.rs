/// Errors returned by catalog lookups.
///
/// Both kinds point at an integration defect in the caller, never at a
/// transient condition, so nothing here is worth retrying.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Identifier is not registered in the catalog
    #[error("unknown endpoint: {id}")]
    UnknownEndpoint { id: String },
    /// Number of substitution values differs from the template's placeholder count
    #[error("endpoint {id} expects {expected} value(s), got {actual}")]
    ArityMismatch {
        id: String,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while building a catalog from template definitions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// Template text is malformed
    #[error("invalid template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },
    /// Same identifier registered twice
    #[error("duplicate endpoint: {id}")]
    DuplicateEndpoint { id: String },
    /// Declared placeholder count disagrees with the template text
    #[error("endpoint {id} declares {declared} placeholder(s) but its template has {actual}")]
    ArityDeclaration {
        id: String,
        declared: usize,
        actual: usize,
    },
}
