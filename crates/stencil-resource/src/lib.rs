#![warn(missing_docs)]

//! Template resource resolution for the Stencil templating engine
//!
//! Given a logical template name, locates the backing file across an ordered
//! set of search roots, tracks which root supplied which name, and answers
//! modification-time staleness queries so the engine can decide when a cached
//! compiled template must be re-parsed.
//!
//! Lookups are traversal-safe: names are syntactically sanitized before any
//! filesystem access, and a name that would escape the template namespace is
//! rejected for every root configuration. The root-less (absolute path) mode
//! deliberately trusts the caller with absolute names; see
//! [`roots::ABSOLUTE_ROOT`].
//!
//! All staleness checking is pull-based: callers poll [`ResourceLoader::is_stale`]
//! before reusing a cached compiled template. Nothing here watches or pushes.

pub mod error;
pub mod file_loader;
pub mod loader;
pub mod models;
pub mod provenance;
pub mod roots;
pub mod sanitize;

// Re-export public API
pub use error::{ResourceError, ResourceResult};
pub use file_loader::FileResourceLoader;
pub use loader::ResourceLoader;
pub use models::ResolvedResource;
pub use provenance::ProvenanceTable;
pub use roots::{RootSet, ABSOLUTE_ROOT};
