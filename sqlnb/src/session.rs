use crate::events::HostEvent;
use crate::providers::WorkspaceSnapshot;
use crate::widgets::databases::DatabasesViewModel;
use crate::widgets::explorer::{ExplorerCtx, ExplorerIntent, ExplorerWidget};
use crate::widgets::notebooks::{
    NotebookSummary, NotebooksCtx, NotebooksIntent, NotebooksWidget,
};
use crate::widgets::pane::{DetailPane, PaneData, select_pane};
use crate::widgets::settings::{SettingsData, SettingsViewModel};
use crate::widgets::sidebar::{
    Section, SidebarIntent, SidebarViewModel, SidebarWidget,
};

/// Interaction routed to one of the navigator widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NavigatorIntent {
    Sidebar(SidebarIntent),
    Explorer(ExplorerIntent),
    Notebooks(NotebooksIntent),
}

/// Owner of all mutable navigation state for one shell window.
///
/// Provider data is held as a read-only snapshot; the widgets only keep the
/// active section, expansion flags, selection, hover and the open notebook.
#[derive(Debug)]
pub(crate) struct NavigatorSession {
    sidebar: SidebarWidget,
    explorer: ExplorerWidget,
    notebooks: NotebooksWidget,
    snapshot: WorkspaceSnapshot,
    retain_expansion: bool,
}

impl NavigatorSession {
    pub(crate) fn new(
        snapshot: WorkspaceSnapshot,
        initial_section: Option<Section>,
        retain_expansion: bool,
    ) -> Self {
        Self {
            sidebar: SidebarWidget::new(initial_section),
            explorer: ExplorerWidget::new(),
            notebooks: NotebooksWidget::new(),
            snapshot,
            retain_expansion,
        }
    }

    /// Build a session configured by loaded settings.
    pub(crate) fn from_settings(
        snapshot: WorkspaceSnapshot,
        settings: &SettingsData,
    ) -> Self {
        Self::new(
            snapshot,
            settings.initial_section(),
            settings.retain_expansion(),
        )
    }

    /// Route an interaction to its widget and return the resulting host event.
    pub(crate) fn dispatch(
        &mut self,
        intent: NavigatorIntent,
    ) -> Option<HostEvent> {
        match intent {
            NavigatorIntent::Sidebar(intent) => {
                self.sidebar.reduce(intent).map(HostEvent::from)
            },
            NavigatorIntent::Explorer(intent) => {
                let ctx = ExplorerCtx {
                    entries: &self.snapshot.directory,
                };
                self.explorer.reduce(intent, &ctx).map(HostEvent::from)
            },
            NavigatorIntent::Notebooks(intent) => {
                let ctx = NotebooksCtx {
                    notebooks: &self.snapshot.notebooks,
                };
                self.notebooks.reduce(intent, &ctx).map(HostEvent::from)
            },
        }
    }

    pub(crate) fn active_section(&self) -> Option<Section> {
        self.sidebar.active_section()
    }

    pub(crate) fn sidebar_vm(&self) -> SidebarViewModel {
        self.sidebar.vm()
    }

    pub(crate) fn snapshot(&self) -> &WorkspaceSnapshot {
        &self.snapshot
    }

    /// Name of the open notebook, if any.
    pub(crate) fn open_notebook(&self) -> Option<&str> {
        self.notebooks.open_notebook()
    }

    /// The detail pane for the active section.
    pub(crate) fn pane<'a>(
        &'a self,
        settings: SettingsViewModel<'a>,
    ) -> DetailPane<'a> {
        let data = PaneData {
            explorer: self.explorer.tree_vm(&self.snapshot.directory),
            notebooks: self.notebooks.vm(&self.snapshot.notebooks),
            databases: DatabasesViewModel {
                connections: &self.snapshot.connections,
            },
            settings,
        };

        select_pane(self.active_section(), data)
    }

    /// Swap in fresh provider data and reconcile widget state with it.
    pub(crate) fn apply_snapshot(&mut self, snapshot: WorkspaceSnapshot) {
        self.explorer
            .refresh(&snapshot.directory, self.retain_expansion);
        self.notebooks.refresh(&snapshot.notebooks);
        self.snapshot = snapshot;
        log::debug!(
            "navigator snapshot applied: {} entries, {} notebooks, {} connections",
            self.snapshot.directory.len(),
            self.snapshot.notebooks.len(),
            self.snapshot.connections.len()
        );
    }

    /// Append a notebook created by the host, settle the pending request and
    /// open the notebook.
    pub(crate) fn add_notebook(
        &mut self,
        notebook: NotebookSummary,
    ) -> Option<HostEvent> {
        let name = notebook.name.clone();
        self.snapshot.notebooks.push(notebook);
        self.dispatch(NavigatorIntent::Notebooks(
            NotebooksIntent::NotebookCreated,
        ));
        self.dispatch(NavigatorIntent::Notebooks(
            NotebooksIntent::NotebookPressed { name },
        ))
    }

    /// Drop every piece of interaction state, as when the view unmounts.
    pub(crate) fn reset(&mut self) {
        self.sidebar.reset();
        self.explorer.reset();
        self.notebooks.reset();
    }
}
