//! Resource model returned to the parsing layer

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A successfully resolved template resource
///
/// Produced fresh on every successful lookup. Carries the byte stream over
/// the winning file; the stream is owned by the caller from the moment the
/// resource is returned and is closed when the resource (or the reader taken
/// out of it) is dropped. The loader retains nothing of it.
#[derive(Debug)]
pub struct ResolvedResource {
    name: String,
    root: String,
    path: PathBuf,
    last_modified: SystemTime,
    reader: BufReader<File>,
}

impl ResolvedResource {
    pub(crate) fn new(
        name: impl Into<String>,
        root: impl Into<String>,
        path: PathBuf,
        last_modified: SystemTime,
        reader: BufReader<File>,
    ) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            path,
            last_modified,
            reader,
        }
    }

    /// The template name as requested by the caller
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The search root that supplied this resource
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The file the resource was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Modification timestamp of the file at resolution time
    ///
    /// Callers keep this to ask the loader later whether the source has
    /// changed since it was compiled.
    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }

    /// Take ownership of the underlying byte stream
    pub fn into_reader(self) -> BufReader<File> {
        self.reader
    }
}

impl Read for ResolvedResource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}
