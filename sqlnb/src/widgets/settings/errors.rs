use std::path::PathBuf;

use thiserror::Error;

/// Failure to read an existing settings file.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("cannot read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
