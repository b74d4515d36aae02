use std::ffi::OsString;
use std::iter;
use std::path::{self, Path, PathBuf};

use tracing::{debug, trace};

use crate::error::LookupError;
use crate::executable::is_executable;
use crate::path_list::PathList;

/// Knobs for [`Lookup`]. The default searches for the bare name only.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LookupOptions {
    extensions: Vec<String>,
    expand_tilde: bool,
}

impl LookupOptions {
    /// Suffixes tried, in order, after the bare name in every directory.
    /// A missing leading `.` is added, empty suffixes are ignored.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> LookupOptions
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(Into::into)
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        self
    }

    pub fn with_tilde_expansion(mut self, expand_tilde: bool) -> LookupOptions {
        self.expand_tilde = expand_tilde;
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

#[derive(Debug, Default, Clone)]
pub struct Lookup {
    opts: LookupOptions,
}

impl Lookup {
    pub fn new(opts: LookupOptions) -> Lookup {
        Lookup { opts }
    }

    /// First executable named `name` in `path`, as an absolute path.
    pub fn find(&self, name: &str, path: &str) -> Result<Option<PathBuf>, LookupError> {
        Ok(self.search(name, path, false)?.into_iter().next())
    }

    /// Every executable named `name` in `path`, in path order.
    ///
    /// Each directory contributes at most one match; a directory listed twice
    /// contributes twice.
    pub fn find_all(&self, name: &str, path: &str) -> Result<Vec<PathBuf>, LookupError> {
        self.search(name, path, true)
    }

    fn search(&self, name: &str, path: &str, all: bool) -> Result<Vec<PathBuf>, LookupError> {
        if name.is_empty() {
            return Err(LookupError::EmptyName);
        }

        let mut found = Vec::new();

        // `sh` semantics: a name with a slash is used as is
        if name.contains(path::is_separator) {
            debug!(name, "name contains a path separator, not searching path");
            if let Some(candidate) = self.probe(Path::new(name)) {
                found.push(absolutize(candidate)?);
            }
            return Ok(found);
        }

        let dirs = PathList::parse(path, self.opts.expand_tilde);
        for dir in &dirs {
            if !dir.is_dir() {
                debug!(dir = %dir.display(), "skipping path entry, not a directory");
                continue;
            }
            if let Some(candidate) = self.probe(&dir.join(name)) {
                found.push(absolutize(candidate)?);
                if !all {
                    break;
                }
            }
        }

        Ok(found)
    }

    /// Tries `base` and then `base` with each extension.
    fn probe(&self, base: &Path) -> Option<PathBuf> {
        let with_extensions = self.opts.extensions.iter().map(|ext| {
            let mut candidate = OsString::from(base.as_os_str());
            candidate.push(ext);
            PathBuf::from(candidate)
        });

        iter::once(base.to_path_buf())
            .chain(with_extensions)
            .find(|candidate| {
                trace!(candidate = %candidate.display(), "probing");
                if is_executable(candidate) {
                    return true;
                }
                if candidate.exists() {
                    debug!(candidate = %candidate.display(), "exists but is not an executable file");
                }
                false
            })
    }
}

fn absolutize(candidate: PathBuf) -> Result<PathBuf, LookupError> {
    path::absolute(&candidate).map_err(|source| LookupError::Absolutize {
        path: candidate,
        source,
    })
}

/// Returns the absolute path of the first executable `name` in `path`, or
/// `None` when no directory has one.
///
/// Directories that are missing or unreadable are skipped.
pub fn lookup_executable(name: &str, path: &str) -> Result<Option<PathBuf>, LookupError> {
    Lookup::default().find(name, path)
}

/// Like [`lookup_executable`] but keeps going after the first match.
pub fn lookup_all(name: &str, path: &str) -> Result<Vec<PathBuf>, LookupError> {
    Lookup::default().find_all(name, path)
}
