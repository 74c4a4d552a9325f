use sqlnb_ui_tree::TreePath;

use crate::widgets::explorer::ExplorerEffect;
use crate::widgets::notebooks::NotebooksEffect;
use crate::widgets::sidebar::{Section, SidebarEffect};

/// Outbound signals the navigator raises for the host shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostEvent {
    /// The section selector changed; `active` is the new active section.
    SectionToggled {
        section: Section,
        active: Option<Section>,
    },
    /// A directory was expanded or collapsed.
    DirectoryToggled { path: TreePath, expanded: bool },
    /// A file was activated in the explorer.
    FileActivated { path: TreePath },
    /// A new notebook was requested while none was open.
    NewNotebookRequested,
    /// A notebook from the listing became the open notebook.
    NotebookActivated { name: String },
}

impl From<SidebarEffect> for HostEvent {
    fn from(effect: SidebarEffect) -> Self {
        match effect {
            SidebarEffect::SectionToggled { section, active } => {
                HostEvent::SectionToggled { section, active }
            },
        }
    }
}

impl From<ExplorerEffect> for HostEvent {
    fn from(effect: ExplorerEffect) -> Self {
        match effect {
            ExplorerEffect::DirectoryToggled { path, expanded } => {
                HostEvent::DirectoryToggled { path, expanded }
            },
            ExplorerEffect::FileActivated { path } => {
                HostEvent::FileActivated { path }
            },
        }
    }
}

impl From<NotebooksEffect> for HostEvent {
    fn from(effect: NotebooksEffect) -> Self {
        match effect {
            NotebooksEffect::NotebookActivated { name } => {
                HostEvent::NotebookActivated { name }
            },
            NotebooksEffect::NewNotebookRequested => {
                HostEvent::NewNotebookRequested
            },
        }
    }
}
