//! The capability contract shared by all resource loader kinds
//!
//! The engine's caching layer talks to loaders only through this trait, so a
//! file loader, and any future loader kind, are interchangeable to it. All
//! operations are synchronous and may block on I/O; callers bound overall
//! request latency externally if they need to.

use std::time::SystemTime;

use crate::error::ResourceResult;
use crate::models::ResolvedResource;

/// A source of template bytes with pull-based change detection
pub trait ResourceLoader: Send + Sync {
    /// Locate `name` and open a byte stream over its content
    ///
    /// Ownership of the stream, including closing it after the read,
    /// transfers to the caller on success.
    ///
    /// # Errors
    ///
    /// [`ResourceError::InvalidRequest`] for an empty name,
    /// [`ResourceError::Rejected`] for a traversal attempt, and
    /// [`ResourceError::NotFound`] when no source holds the name.
    ///
    /// [`ResourceError::InvalidRequest`]: crate::ResourceError::InvalidRequest
    /// [`ResourceError::Rejected`]: crate::ResourceError::Rejected
    /// [`ResourceError::NotFound`]: crate::ResourceError::NotFound
    fn resolve(&self, name: &str) -> ResourceResult<ResolvedResource>;

    /// Whether the source behind `name` must be treated as changed
    ///
    /// `known_modified` is the timestamp the caller captured from the
    /// [`ResolvedResource`] it compiled from. The verdict is computed fresh
    /// from current state on every call; any ambiguity resolves to `true`,
    /// since a spurious `true` costs one reparse while a spurious `false`
    /// would serve outdated content.
    fn is_stale(&self, name: &str, known_modified: SystemTime) -> bool;

    /// Current modification timestamp of the file that supplied `name`
    ///
    /// Re-derives the file recorded for `name` and returns its timestamp if
    /// it is still readable, `None` otherwise (including when `name` was
    /// never resolved).
    fn last_modified(&self, name: &str) -> Option<SystemTime>;
}
