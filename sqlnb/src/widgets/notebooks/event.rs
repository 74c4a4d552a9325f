/// Intent events handled by the notebooks widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NotebooksIntent {
    /// A notebook row was clicked.
    NotebookPressed { name: String },
    /// The cursor entered or left a notebook row.
    NotebookHovered { name: Option<String> },
    /// The "New Notebook" button was clicked.
    NewNotebookPressed,
    /// The open notebook was closed.
    CloseNotebook,
    /// The host finished a pending new-notebook request.
    NotebookCreated,
}

/// Effect events produced by the notebooks reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NotebooksEffect {
    /// A notebook became the open notebook.
    NotebookActivated { name: String },
    /// The user asked for a new notebook while none was open.
    NewNotebookRequested,
}
