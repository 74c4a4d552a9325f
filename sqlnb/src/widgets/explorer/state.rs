use sqlnb_ui_tree::{ExpansionState, TreePath, find_node};

use super::model::Entry;

/// Runtime state for the explorer pane.
///
/// The entry snapshot itself is owned by the session; this state only keeps
/// what the user changed on top of it.
#[derive(Debug, Default)]
pub(crate) struct ExplorerState {
    expansion: ExpansionState,
    selected: Option<TreePath>,
    hovered: Option<TreePath>,
}

impl ExplorerState {
    // --- Read access ---

    pub(crate) fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Return selected tree path.
    pub(crate) fn selected_path(&self) -> Option<&TreePath> {
        self.selected.as_ref()
    }

    /// Return hovered tree path.
    pub(crate) fn hovered_path(&self) -> Option<&TreePath> {
        self.hovered.as_ref()
    }

    // --- Write access ---

    pub(super) fn set_selected_path(&mut self, path: Option<TreePath>) {
        self.selected = path;
    }

    pub(super) fn set_hovered_path(&mut self, path: Option<TreePath>) {
        self.hovered = path;
    }

    /// Flip the expansion flag of a directory and return the new value.
    pub(super) fn toggle_directory(&mut self, path: &[String]) -> bool {
        self.expansion.toggle(path)
    }

    /// Reconcile state with a fresh entry snapshot.
    ///
    /// Expansion flags are pruned to directories that still exist when
    /// `retain_expansion` is set and cleared otherwise. Selection and hover
    /// pointing at vanished entries are dropped.
    pub(super) fn refresh(
        &mut self,
        entries: &[Entry],
        retain_expansion: bool,
    ) {
        if retain_expansion {
            self.expansion.retain_folders(entries);
        } else {
            self.expansion.clear();
        }

        if self
            .selected
            .as_ref()
            .is_some_and(|path| find_node(entries, path).is_none())
        {
            self.selected = None;
        }

        if self
            .hovered
            .as_ref()
            .is_some_and(|path| find_node(entries, path).is_none())
        {
            self.hovered = None;
        }
    }

    pub(super) fn reset(&mut self) {
        self.expansion.clear();
        self.selected = None;
        self.hovered = None;
    }
}
