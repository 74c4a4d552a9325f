use super::databases::DatabasesViewModel;
use super::explorer::ExplorerTreeViewModel;
use super::notebooks::NotebooksViewModel;
use super::settings::SettingsViewModel;
use super::sidebar::Section;

/// Everything the detail panes may display, borrowed for one frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PaneData<'a> {
    pub(crate) explorer: ExplorerTreeViewModel<'a>,
    pub(crate) notebooks: NotebooksViewModel<'a>,
    pub(crate) databases: DatabasesViewModel<'a>,
    pub(crate) settings: SettingsViewModel<'a>,
}

/// The single detail pane shown next to the rail.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DetailPane<'a> {
    Collapsed,
    Explorer(ExplorerTreeViewModel<'a>),
    Notebooks(NotebooksViewModel<'a>),
    Databases(DatabasesViewModel<'a>),
    Settings(SettingsViewModel<'a>),
}

/// Map the active section to exactly one detail pane.
pub(crate) fn select_pane(
    active: Option<Section>,
    data: PaneData<'_>,
) -> DetailPane<'_> {
    match active {
        None => DetailPane::Collapsed,
        Some(Section::Directory) => DetailPane::Explorer(data.explorer),
        Some(Section::Notebooks) => DetailPane::Notebooks(data.notebooks),
        Some(Section::Databases) => DetailPane::Databases(data.databases),
        Some(Section::Settings) => DetailPane::Settings(data.settings),
    }
}

#[cfg(test)]
mod tests {
    use sqlnb_ui_tree::ExpansionState;

    use super::{DetailPane, PaneData, select_pane};
    use crate::widgets::databases::{
        Connection, ConnectionKind, DatabasesViewModel,
    };
    use crate::widgets::explorer::{Entry, ExplorerTreeViewModel};
    use crate::widgets::notebooks::NotebooksViewModel;
    use crate::widgets::settings::{
        SettingsData, SettingsLoadStatus, SettingsViewModel,
    };
    use crate::widgets::sidebar::Section;

    #[test]
    fn given_each_active_value_when_dispatched_then_matching_pane_is_selected()
    {
        let entries = vec![Entry::file("a.sql")];
        let expansion = ExpansionState::new();
        let connections =
            vec![Connection::new("local", ConnectionKind::Sqlite)];
        let settings = SettingsData::default();
        let status = SettingsLoadStatus::Missing;
        let data = PaneData {
            explorer: ExplorerTreeViewModel {
                entries: &entries,
                expansion: &expansion,
                selected_path: None,
                hovered_path: None,
            },
            notebooks: NotebooksViewModel {
                notebooks: &[],
                open: None,
                hovered: None,
            },
            databases: DatabasesViewModel {
                connections: &connections,
            },
            settings: SettingsViewModel {
                settings: &settings,
                status: &status,
            },
        };

        assert!(matches!(select_pane(None, data), DetailPane::Collapsed));
        assert!(matches!(
            select_pane(Some(Section::Directory), data),
            DetailPane::Explorer(_)
        ));
        assert!(matches!(
            select_pane(Some(Section::Notebooks), data),
            DetailPane::Notebooks(_)
        ));
        assert!(matches!(
            select_pane(Some(Section::Settings), data),
            DetailPane::Settings(_)
        ));

        match select_pane(Some(Section::Databases), data) {
            DetailPane::Databases(vm) => {
                assert_eq!(vm.connections[0].name, "local");
            },
            other => panic!("expected databases pane, got {other:?}"),
        }
    }
}
