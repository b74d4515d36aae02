use std::env;
use std::path::PathBuf;
use std::slice;

/// Ordered directories parsed from a `PATH`-like string.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PathList(Vec<PathBuf>);

impl PathList {
    /// Splits `path` on the platform separator (`:` on unix, `;` on windows).
    ///
    /// Empty entries are dropped, so an empty `path` yields no directories.
    /// When `expand_tilde` is set a leading `~` is replaced by the home directory.
    pub fn parse(path: &str, expand_tilde: bool) -> PathList {
        if path.is_empty() {
            return PathList::default();
        }
        let dirs = env::split_paths(path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| if expand_tilde { expand_home(dir) } else { dir })
            .collect();
        PathList(dirs)
    }

    pub fn iter(&self) -> slice::Iter<'_, PathBuf> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a PathBuf;
    type IntoIter = slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn expand_home(dir: PathBuf) -> PathBuf {
    match dir.to_str() {
        Some(raw) if raw.starts_with('~') => PathBuf::from(shellexpand::tilde(raw).as_ref()),
        _ => dir,
    }
}
