//! Syntactic sanitization of requested template names
//!
//! Normalization is a pure string transform: it resolves `.` segments,
//! collapses repeated separators, and folds `..` against the segments
//! accumulated so far. A `..` that would climb above the name's own root is a
//! traversal attempt and is rejected. Nothing here touches the filesystem or
//! knows about the configured roots, so a name rejected here is rejected for
//! every root configuration.

use tracing::error;

use crate::error::{ResourceError, ResourceResult};

/// Normalize a template name, resolving `.` and `..` segments
///
/// Returns `None` when resolution would climb above the top of the name,
/// i.e. a `..` is left with nothing to consume. A leading `/` is preserved;
/// stripping it is the locator's concern when joining onto a root.
///
/// A name may legally normalize to the empty string (e.g. `a/..`); callers
/// decide what to do with that.
pub fn normalize(name: &str) -> Option<String> {
    let absolute = name.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in name.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        Some(format!("/{joined}"))
    } else {
        Some(joined)
    }
}

/// Sanitize a requested template name for use in a root search
///
/// # Errors
///
/// Returns [`ResourceError::InvalidRequest`] for an empty name and
/// [`ResourceError::Rejected`] when normalization detects a traversal attempt
/// or leaves nothing of the name. Rejections are logged at error severity
/// with the offending name before being surfaced.
pub fn sanitize(name: &str) -> ResourceResult<String> {
    if name.is_empty() {
        return Err(ResourceError::InvalidRequest);
    }

    match normalize(name) {
        Some(template) if !template.is_empty() && template != "/" => Ok(template),
        _ => {
            error!(
                "file resource loader: '{}' contains '..' and may be trying to access \
                 content outside of the template root, rejected",
                name
            );
            Err(ResourceError::rejected(name))
        }
    }
}
