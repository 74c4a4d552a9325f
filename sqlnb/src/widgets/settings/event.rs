/// Intent events raised by the settings pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingsIntent {
    /// Re-read the configured workspace snapshot.
    ReloadWorkspace,
    /// Collapse every pane and forget selection, expansion and the open
    /// notebook.
    ResetView,
}
