//! Data providers feeding the navigator with read-only snapshots.
//!
//! The navigator never touches the filesystem for its listings: directory
//! trees, notebooks and connections arrive here already materialized.

mod errors;
mod placeholder;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

pub(crate) use errors::SnapshotError;
pub(crate) use placeholder::PlaceholderProvider;

use crate::widgets::databases::Connection;
use crate::widgets::explorer::{Entry, path_label};
use crate::widgets::notebooks::NotebookSummary;

/// Supplies the explorer tree.
pub(crate) trait DirectoryProvider {
    fn entries(&self) -> Vec<Entry>;
}

/// Supplies the notebook listing.
pub(crate) trait NotebookProvider {
    fn notebooks(&self) -> Vec<NotebookSummary>;
}

/// Supplies the connection listing.
pub(crate) trait ConnectionProvider {
    fn connections(&self) -> Vec<Connection>;
}

/// One consistent set of provider data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct WorkspaceSnapshot {
    pub(crate) directory: Vec<Entry>,
    pub(crate) notebooks: Vec<NotebookSummary>,
    pub(crate) connections: Vec<Connection>,
}

impl WorkspaceSnapshot {
    /// Materialize a snapshot from three providers.
    pub(crate) fn collect(
        directory: &impl DirectoryProvider,
        notebooks: &impl NotebookProvider,
        connections: &impl ConnectionProvider,
    ) -> Self {
        Self {
            directory: directory.entries(),
            notebooks: notebooks.notebooks(),
            connections: connections.connections(),
        }
    }

    /// Built-in placeholder data.
    pub(crate) fn placeholder() -> Self {
        let provider = PlaceholderProvider;
        Self::collect(&provider, &provider, &provider)
    }

    /// Parse and validate a snapshot from JSON text.
    pub(crate) fn from_json(payload: &str) -> Result<Self, SnapshotError> {
        let snapshot: WorkspaceSnapshot = serde_json::from_str(payload)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read, parse and validate a snapshot file.
    pub(crate) fn load(path: &Path) -> Result<Self, SnapshotError> {
        let payload = fs::read_to_string(path)?;
        Self::from_json(&payload)
    }

    /// Reject blank names, and names repeated among siblings.
    ///
    /// Entries and notebooks are addressed by name, so a repeated name would
    /// leave every sibling after the first unreachable.
    pub(crate) fn validate(&self) -> Result<(), SnapshotError> {
        validate_entries(&self.directory, &mut Vec::new())?;
        validate_names(
            "notebooks",
            self.notebooks.iter().map(|notebook| notebook.name.as_str()),
        )?;
        validate_names(
            "connections",
            self.connections
                .iter()
                .map(|connection| connection.name.as_str()),
        )
    }
}

/// Load the configured snapshot, falling back to placeholder data.
pub(crate) fn load_workspace(path: Option<&Path>) -> WorkspaceSnapshot {
    let Some(path) = path else {
        log::info!("no workspace snapshot configured, using placeholder data");
        return WorkspaceSnapshot::placeholder();
    };

    match WorkspaceSnapshot::load(path) {
        Ok(snapshot) => {
            log::info!("workspace snapshot loaded from {}", path.display());
            snapshot
        },
        Err(err) => {
            log::warn!(
                "workspace snapshot {} rejected: {err}; using placeholder data",
                path.display()
            );
            WorkspaceSnapshot::placeholder()
        },
    }
}

fn validate_entries(
    entries: &[Entry],
    parent: &mut Vec<String>,
) -> Result<(), SnapshotError> {
    let mut seen = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        if is_blank(entry.name()) {
            parent.push(format!("[{index}]"));
            return Err(SnapshotError::EmptyName {
                section: "directory",
                path: path_label(parent),
            });
        }

        parent.push(entry.name().to_owned());
        if !seen.insert(entry.name()) {
            return Err(SnapshotError::DuplicateName {
                section: "directory",
                path: path_label(parent),
            });
        }

        if entry.is_directory() {
            validate_entries(entry.contents(), parent)?;
        }
        parent.pop();
    }

    Ok(())
}

fn validate_names<'a>(
    section: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), SnapshotError> {
    let mut seen = HashSet::new();

    for (index, name) in names.enumerate() {
        if is_blank(name) {
            return Err(SnapshotError::EmptyName {
                section,
                path: format!("[{index}]"),
            });
        }

        if !seen.insert(name) {
            return Err(SnapshotError::DuplicateName {
                section,
                path: name.to_owned(),
            });
        }
    }

    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
