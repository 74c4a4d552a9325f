use thiserror::Error;

/// Errors emitted while reading or validating a workspace snapshot.
#[derive(Debug, Error)]
pub(crate) enum SnapshotError {
    /// Filesystem operation failed.
    #[error("workspace snapshot IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("workspace snapshot JSON failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// An entry, notebook or connection has an empty name.
    #[error("workspace snapshot has an empty name in {section} at {path:?}")]
    EmptyName {
        section: &'static str,
        path: String,
    },
    /// Two siblings share a name, so only the first would be reachable.
    #[error("workspace snapshot repeats the name {path:?} in {section}")]
    DuplicateName {
        section: &'static str,
        path: String,
    },
}
