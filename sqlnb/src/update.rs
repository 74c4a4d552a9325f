use iced::Task;

use super::{App, AppEvent};
use crate::events::HostEvent;
use crate::providers::load_workspace;
use crate::session::NavigatorIntent;
use crate::widgets::explorer::path_label;
use crate::widgets::notebooks::{NotebookStatus, NotebookSummary};
use crate::widgets::settings::SettingsIntent;

/// Thin dispatch: route each event to its owner.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Navigator(intent) => route_intent(app, intent),
        AppEvent::Host(event) => route_host_event(app, event),
        AppEvent::Settings(SettingsIntent::ReloadWorkspace) => {
            reload_workspace(app);
            Task::none()
        },
        AppEvent::Settings(SettingsIntent::ResetView) => {
            log::info!("navigator view reset");
            app.session.reset();
            Task::none()
        },
    }
}

fn route_intent(app: &mut App, intent: NavigatorIntent) -> Task<AppEvent> {
    host_task(app.session.dispatch(intent))
}

fn route_host_event(app: &mut App, event: HostEvent) -> Task<AppEvent> {
    match event {
        HostEvent::SectionToggled { section, active } => {
            log::debug!("section {section} toggled, active={active:?}");
            Task::none()
        },
        HostEvent::DirectoryToggled { path, expanded } => {
            log::debug!(
                "directory {} expanded={expanded}",
                path_label(&path)
            );
            Task::none()
        },
        HostEvent::FileActivated { path } => {
            log::info!(
                "opening files is not available yet: {}",
                path_label(&path)
            );
            Task::none()
        },
        HostEvent::NewNotebookRequested => create_notebook(app),
        HostEvent::NotebookActivated { name } => {
            log::info!("notebook {name} opened");
            Task::none()
        },
    }
}

/// Name a new notebook, add it to the in-memory listing and open it.
fn create_notebook(app: &mut App) -> Task<AppEvent> {
    let name = app.namer.next_name(&app.session.snapshot().notebooks);
    log::info!("creating notebook {name}");

    host_task(
        app.session
            .add_notebook(NotebookSummary::new(name, NotebookStatus::Stopped)),
    )
}

fn reload_workspace(app: &mut App) {
    let snapshot = load_workspace(app.settings.settings().snapshot_path());
    app.session.apply_snapshot(snapshot);
}

fn host_task(event: Option<HostEvent>) -> Task<AppEvent> {
    match event {
        Some(event) => Task::done(AppEvent::Host(event)),
        None => Task::none(),
    }
}
