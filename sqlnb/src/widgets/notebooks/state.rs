use super::model::NotebookSummary;

/// Runtime state for the notebooks pane and the main area.
#[derive(Debug, Default)]
pub(crate) struct NotebooksState {
    open: Option<String>,
    hovered: Option<String>,
    creating: bool,
}

impl NotebooksState {
    /// Return the name of the open notebook.
    pub(crate) fn open(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub(crate) fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub(super) fn set_open(&mut self, name: Option<String>) {
        self.open = name;
    }

    pub(super) fn set_hovered(&mut self, name: Option<String>) {
        self.hovered = name;
    }

    /// Whether a new-notebook request is waiting on the host.
    pub(super) fn is_creating(&self) -> bool {
        self.creating
    }

    pub(super) fn set_creating(&mut self, creating: bool) {
        self.creating = creating;
    }

    /// Drop references to notebooks missing from `notebooks`.
    pub(super) fn retain_listed(&mut self, notebooks: &[NotebookSummary]) {
        let listed = |name: &str| {
            notebooks.iter().any(|notebook| notebook.name == name)
        };

        if self.open.as_deref().is_some_and(|name| !listed(name)) {
            self.open = None;
        }

        if self.hovered.as_deref().is_some_and(|name| !listed(name)) {
            self.hovered = None;
        }
    }

    pub(super) fn reset(&mut self) {
        self.open = None;
        self.hovered = None;
        self.creating = false;
    }
}
