//! File-backed resource loader
//!
//! Resolves template names against an ordered set of filesystem roots,
//! records which root supplied which name, and answers modification-time
//! staleness queries so the engine knows when to re-parse a cached template.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, trace};

use crate::error::{ResourceError, ResourceResult};
use crate::loader::ResourceLoader;
use crate::models::ResolvedResource;
use crate::provenance::ProvenanceTable;
use crate::roots::RootSet;
use crate::sanitize;

/// Resource loader over local-filesystem template roots
///
/// Roots are fixed at construction; the provenance table is the only mutable
/// state and is safe to share across request threads. The loader itself is
/// `Send + Sync` and all operations are synchronous.
pub struct FileResourceLoader {
    roots: RootSet,
    provenance: ProvenanceTable,
}

impl FileResourceLoader {
    /// Create a loader over the given roots
    pub fn new(roots: RootSet) -> Self {
        trace!("file resource loader: initialization starting");
        for root in roots.iter() {
            info!("file resource loader: adding template root '{}'", root);
        }
        trace!("file resource loader: initialization complete");

        Self {
            roots,
            provenance: ProvenanceTable::new(),
        }
    }

    /// Create a loader from ordered `(key, value)` configuration options
    ///
    /// Recognizes the `path` option as described on
    /// [`RootSet::from_options`]; absence of `path` yields absolute-path
    /// mode.
    pub fn from_options<'a>(options: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::new(RootSet::from_options(options))
    }

    /// The roots this loader searches, in priority order
    pub fn roots(&self) -> &RootSet {
        &self.roots
    }

    /// The file that the first-match search would pick for `template` today
    fn current_winner(&self, template: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| candidate_path(root, template))
            .find(|candidate| is_readable_file(candidate))
    }
}

impl ResourceLoader for FileResourceLoader {
    fn resolve(&self, name: &str) -> ResourceResult<ResolvedResource> {
        if name.is_empty() {
            return Err(ResourceError::InvalidRequest);
        }

        let template = sanitize::sanitize(name)?;

        for root in self.roots.iter() {
            let candidate = candidate_path(root, &template);
            match open_readable(&candidate) {
                Some((file, modified)) => {
                    // Remember the winning root so staleness checks can find
                    // the exact file this content came from.
                    self.provenance.record(name, root);
                    debug!(
                        "file resource loader: resolved '{}' from root '{}'",
                        template, root
                    );
                    return Ok(ResolvedResource::new(
                        name,
                        root,
                        candidate,
                        modified,
                        BufReader::new(file),
                    ));
                }
                None => {
                    trace!(
                        "file resource loader: '{}' not readable under root '{}'",
                        template, root
                    );
                }
            }
        }

        Err(ResourceError::not_found(template))
    }

    fn is_stale(&self, name: &str, known_modified: SystemTime) -> bool {
        // Anything ambiguous below reports stale: the cost is one redundant
        // reparse, never serving outdated content.
        let template = match sanitize::normalize(name) {
            Some(template) if !template.is_empty() => template,
            _ => return true,
        };

        let Some(current) = self.current_winner(&template) else {
            // No root holds the name any more; a reload attempt will fail
            // with a clean NotFound or pick up a new source.
            return true;
        };

        let recorded = match self.provenance.root_for(name) {
            Some(root) => candidate_path(&root, &template),
            // Never resolved here; judge the assumed current winner directly.
            None => current.clone(),
        };

        let stale = if current == recorded {
            match file_modified(&recorded) {
                Some(modified) => modified != known_modified,
                None => true,
            }
        } else {
            // A file in an earlier-priority root now shadows the one this
            // content was loaded from.
            true
        };

        debug!(
            "file resource loader: staleness of '{}' is {}",
            template, stale
        );
        stale
    }

    fn last_modified(&self, name: &str) -> Option<SystemTime> {
        let template = sanitize::normalize(name).filter(|template| !template.is_empty())?;
        let root = self.provenance.root_for(name)?;
        file_modified(&candidate_path(&root, &template))
    }
}

/// Build the candidate file for `template` under `root`
///
/// The empty root is the absolute-path sentinel: the template name is the
/// path. Otherwise a leading separator on the template is stripped before
/// joining, so a name accidentally spelled `/x.vm` does not silently become
/// absolute.
fn candidate_path(root: &str, template: &str) -> PathBuf {
    if root.is_empty() {
        PathBuf::from(template)
    } else {
        let relative = template.strip_prefix('/').unwrap_or(template);
        Path::new(root).join(relative)
    }
}

/// Open `path` if it is a readable regular file
///
/// Returns the open file and its modification timestamp. Any failure
/// (missing, permission, directory, open race) means "not readable here" and
/// the search moves on to the next root.
fn open_readable(path: &Path) -> Option<(File, SystemTime)> {
    let file = File::open(path).ok()?;
    let metadata = file.metadata().ok()?;
    if !metadata.is_file() {
        return None;
    }
    let modified = metadata.modified().unwrap_or(UNIX_EPOCH);
    Some((file, modified))
}

/// Whether `path` is currently a readable regular file
///
/// Probes by opening, the same check a subsequent resolve would make.
fn is_readable_file(path: &Path) -> bool {
    open_readable(path).is_some()
}

/// Modification timestamp of `path` if it is a readable regular file
fn file_modified(path: &Path) -> Option<SystemTime> {
    open_readable(path).map(|(_, modified)| modified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_joins_relative_names_onto_roots() {
        assert_eq!(
            candidate_path("/templates", "hello.vm"),
            PathBuf::from("/templates/hello.vm")
        );
        assert_eq!(
            candidate_path("/templates", "sub/page.vm"),
            PathBuf::from("/templates/sub/page.vm")
        );
    }

    #[test]
    fn candidate_strips_one_leading_separator() {
        assert_eq!(
            candidate_path("/templates", "/hello.vm"),
            PathBuf::from("/templates/hello.vm")
        );
    }

    #[test]
    fn empty_root_takes_the_name_as_absolute() {
        assert_eq!(
            candidate_path("", "/etc/passwd"),
            PathBuf::from("/etc/passwd")
        );
        assert_eq!(candidate_path("", "relative.vm"), PathBuf::from("relative.vm"));
    }
}
