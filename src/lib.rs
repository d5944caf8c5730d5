//! Catalog of the core access-management API endpoints used by terminals.
//!
//! Each endpoint is a relative path template with positional `{n}`
//! placeholders. The catalog resolves identifiers to templates and fills the
//! placeholders in order; the caller prefixes the service base URL and performs
//! the request.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod routes;
pub mod template;

pub use catalog::EndpointCatalog;
pub use endpoint::{Endpoint, EndpointGroup, EndpointTemplate};
pub use error::{CatalogError, DefinitionError};
pub use template::PathTemplate;
