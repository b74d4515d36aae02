use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a lookup. Not finding anything is not one of them.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("executable name cannot be empty")]
    EmptyName,

    #[error("cannot make `{path}` absolute: {source}")]
    Absolutize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
