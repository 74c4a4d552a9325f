use serde::{Deserialize, Serialize};
use sqlnb_ui_tree::{ExpansionState, Render, TreeNode, TreePath, render};

/// Navigable entry supplied by a directory provider.
///
/// Children are owned, so a tree of entries is always finite and acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum Entry {
    File {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<String>,
    },
    Directory {
        name: String,
        #[serde(default)]
        contents: Vec<Entry>,
    },
}

impl Entry {
    /// File without a size label.
    pub(crate) fn file(name: impl Into<String>) -> Self {
        Entry::File {
            name: name.into(),
            size: None,
        }
    }

    /// File annotated with a human-readable size.
    pub(crate) fn sized_file(
        name: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Entry::File {
            name: name.into(),
            size: Some(size.into()),
        }
    }

    pub(crate) fn directory(
        name: impl Into<String>,
        contents: Vec<Entry>,
    ) -> Self {
        Entry::Directory {
            name: name.into(),
            contents,
        }
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            Entry::File { name, .. } | Entry::Directory { name, .. } => name,
        }
    }

    pub(crate) fn size(&self) -> Option<&str> {
        match self {
            Entry::File { size, .. } => size.as_deref(),
            Entry::Directory { .. } => None,
        }
    }

    /// Children of a directory, or an empty slice for files.
    pub(crate) fn contents(&self) -> &[Entry] {
        match self {
            Entry::File { .. } => &[],
            Entry::Directory { contents, .. } => contents,
        }
    }

    pub(crate) fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory { .. })
    }
}

impl TreeNode for Entry {
    fn title(&self) -> &str {
        self.name()
    }

    fn annotation(&self) -> Option<&str> {
        self.size()
    }

    fn children(&self) -> Option<&[Self]> {
        match self {
            Entry::File { .. } => None,
            Entry::Directory { contents, .. } => Some(contents),
        }
    }

    fn is_folder(&self) -> bool {
        self.is_directory()
    }
}

/// Render a tree path as a `/`-joined label.
pub(crate) fn path_label(path: &[String]) -> String {
    path.join("/")
}

/// Read-only view model for the explorer tree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExplorerTreeViewModel<'a> {
    pub(crate) entries: &'a [Entry],
    pub(crate) expansion: &'a ExpansionState,
    pub(crate) selected_path: Option<&'a TreePath>,
    pub(crate) hovered_path: Option<&'a TreePath>,
}

impl<'a> ExplorerTreeViewModel<'a> {
    /// Lazy render sequence over the entries and their expansion flags.
    pub(crate) fn rows(&self) -> Render<'a, Entry> {
        render(self.entries, self.expansion)
    }
}
