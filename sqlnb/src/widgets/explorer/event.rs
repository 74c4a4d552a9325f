use sqlnb_ui_tree::TreePath;

/// Intent events handled by the explorer widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExplorerIntent {
    /// A tree row was clicked.
    NodePressed { path: TreePath },
    /// A tree row was double clicked.
    NodeActivated { path: TreePath },
    /// The cursor entered or left a tree row.
    NodeHovered { path: Option<TreePath> },
    /// The expand/collapse affordance of a directory was clicked.
    ToggleDirectory { path: TreePath },
}

/// Effect events produced by the explorer reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExplorerEffect {
    /// A directory's expansion flag changed.
    DirectoryToggled { path: TreePath, expanded: bool },
    /// A file was activated; the host decides what opening means.
    FileActivated { path: TreePath },
}
