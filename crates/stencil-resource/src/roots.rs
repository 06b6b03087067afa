//! Ordered search roots and their configuration
//!
//! A root set is built once from configuration options and never changes for
//! the lifetime of the loader. Order is search priority: the first root with
//! a readable file wins.

/// Sentinel root meaning "treat template names as absolute paths"
pub const ABSOLUTE_ROOT: &str = "";

/// The configuration key whose values list search-root directories
const PATH_OPTION: &str = "path";

/// An ordered, immutable set of template search roots
///
/// Each root is a directory path string, or [`ABSOLUTE_ROOT`] for root-less
/// (absolute path) mode. Duplicates are permitted but wasteful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSet {
    roots: Vec<String>,
}

impl RootSet {
    /// Create a root set from an explicit list of root directories
    ///
    /// Entries are whitespace-trimmed; an empty list falls back to a single
    /// root-less entry, the same default as an absent `path` option.
    pub fn new(roots: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let roots: Vec<String> = roots
            .into_iter()
            .map(|root| root.into().trim().to_string())
            .collect();

        if roots.is_empty() {
            Self::absolute()
        } else {
            Self { roots }
        }
    }

    /// Create the root-less set: template names are absolute paths
    pub fn absolute() -> Self {
        Self {
            roots: vec![ABSOLUTE_ROOT.to_string()],
        }
    }

    /// Build a root set from ordered `(key, value)` configuration options
    ///
    /// Every `path` option contributes roots in the order given; within one
    /// option, comma-separated values expand in order. Values are trimmed and
    /// empty fragments skipped. When no `path` option is present at all, the
    /// result is the single root-less entry.
    pub fn from_options<'a>(options: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let roots: Vec<String> = options
            .into_iter()
            .filter(|(key, _)| *key == PATH_OPTION)
            .flat_map(|(_, value)| value.split(','))
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect();

        if roots.is_empty() {
            Self::absolute()
        } else {
            Self { roots }
        }
    }

    /// Iterate the roots in search priority order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roots.iter().map(String::as_str)
    }

    /// The roots in search priority order
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Number of configured roots
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether the set has no roots (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl Default for RootSet {
    fn default() -> Self {
        Self::absolute()
    }
}
