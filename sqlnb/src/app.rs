#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Task, Theme};

use crate::events::HostEvent;
use crate::providers::load_workspace;
use crate::session::{NavigatorIntent, NavigatorSession};
use crate::style::Palette;
use crate::widgets::notebooks::NotebookNamer;
use crate::widgets::settings::{SettingsIntent, SettingsWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    /// Interaction routed into the navigator session.
    Navigator(NavigatorIntent),
    /// Outbound signal raised by the navigator.
    Host(HostEvent),
    /// Settings pane action.
    Settings(SettingsIntent),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) palette: Palette,
    pub(crate) settings: SettingsWidget,
    pub(crate) session: NavigatorSession,
    pub(crate) namer: NotebookNamer,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = SettingsWidget::load();
        let snapshot = load_workspace(settings.settings().snapshot_path());
        let session =
            NavigatorSession::from_settings(snapshot, settings.settings());

        let app = App {
            palette: Palette::default(),
            settings,
            session,
            namer: NotebookNamer::new(),
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        match self.session.open_notebook() {
            Some(name) => format!("SQL-NB - {name}"),
            None => String::from("SQL-NB"),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
