use std::fmt;

use serde::{Deserialize, Serialize};

/// Runtime status reported by a notebook provider.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum NotebookStatus {
    Running,
    #[default]
    Stopped,
}

impl fmt::Display for NotebookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotebookStatus::Running => f.write_str("running"),
            NotebookStatus::Stopped => f.write_str("stopped"),
        }
    }
}

/// One row of the notebook listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct NotebookSummary {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) status: NotebookStatus,
}

impl NotebookSummary {
    pub(crate) fn new(name: impl Into<String>, status: NotebookStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// Generates `notebook-{n}.sql.nb` names that do not collide with a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NotebookNamer {
    next: usize,
}

impl Default for NotebookNamer {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl NotebookNamer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return the first free name at or after the counter.
    ///
    /// The counter moves past the returned name, so consecutive calls never
    /// repeat even when the listing is not updated in between.
    pub(crate) fn next_name(&mut self, existing: &[NotebookSummary]) -> String {
        let mut name = format_name(self.next);
        while existing.iter().any(|notebook| notebook.name == name) {
            self.next += 1;
            name = format_name(self.next);
        }

        self.next += 1;
        name
    }
}

fn format_name(index: usize) -> String {
    format!("notebook-{index}.sql.nb")
}

/// Read-only view model for the notebooks pane.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NotebooksViewModel<'a> {
    pub(crate) notebooks: &'a [NotebookSummary],
    pub(crate) open: Option<&'a str>,
    pub(crate) hovered: Option<&'a str>,
}
