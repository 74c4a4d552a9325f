use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::session::NavigatorIntent;
use crate::style::{Palette, pane_style};
use crate::widgets::databases::view::{self as databases_view, DatabasesProps};
use crate::widgets::explorer::view::{self as explorer_view, ExplorerProps};
use crate::widgets::notebook_area::view::{
    self as notebook_area_view, NotebookAreaProps,
};
use crate::widgets::notebooks::view::{self as notebooks_view, NotebooksProps};
use crate::widgets::pane::DetailPane;
use crate::widgets::settings::view::{self as settings_view, SettingsProps};
use crate::widgets::sidebar::SIDEBAR_PANE_WIDTH;
use crate::widgets::sidebar::view::{self as sidebar_view, SidebarProps};

const HEADER_HEIGHT: f32 = 44.0;
const HEADER_PADDING_X: f32 = 16.0;
const HEADER_TITLE_SIZE: f32 = 18.0;
const SEPARATOR_WIDTH: f32 = 1.0;

/// Render the root application view: header, rail, detail pane, main area.
pub(crate) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let palette = &app.palette;

    let rail = sidebar_view::view(SidebarProps {
        vm: app.session.sidebar_vm(),
        palette,
    })
    .map(|intent| AppEvent::Navigator(NavigatorIntent::Sidebar(intent)));

    let main_area = notebook_area_view::view(NotebookAreaProps {
        open: app.session.open_notebook(),
        palette,
    })
    .map(|intent| AppEvent::Navigator(NavigatorIntent::Notebooks(intent)));

    let mut body = row![rail].height(Length::Fill);
    if let Some(pane) = detail_pane(app, palette) {
        body = body.push(pane).push(separator(palette));
    }
    body = body.push(main_area);

    column![header(palette), separator_row(palette), body]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header(palette: &Palette) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let background = palette.rail;
    let foreground = palette.foreground;

    container(text("SQL-NB").size(HEADER_TITLE_SIZE))
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}

fn detail_pane<'a>(
    app: &'a App,
    palette: &'a Palette,
) -> Option<Element<'a, AppEvent, Theme, iced::Renderer>> {
    let content: Element<'a, AppEvent, Theme, iced::Renderer> =
        match app.session.pane(app.settings.vm()) {
            DetailPane::Collapsed => return None,
            DetailPane::Explorer(vm) => {
                explorer_view::view(ExplorerProps { vm, palette }).map(
                    |intent| {
                        AppEvent::Navigator(NavigatorIntent::Explorer(intent))
                    },
                )
            },
            DetailPane::Notebooks(vm) => {
                notebooks_view::view(NotebooksProps { vm, palette }).map(
                    |intent| {
                        AppEvent::Navigator(NavigatorIntent::Notebooks(intent))
                    },
                )
            },
            DetailPane::Databases(vm) => {
                databases_view::view(DatabasesProps { vm, palette })
            },
            DetailPane::Settings(vm) => {
                settings_view::view(SettingsProps { vm, palette })
                    .map(AppEvent::Settings)
            },
        };

    Some(
        container(content)
            .width(Length::Fixed(SIDEBAR_PANE_WIDTH))
            .height(Length::Fill)
            .padding([8.0, 0.0])
            .style(pane_style(*palette))
            .into(),
    )
}

fn separator(
    palette: &Palette,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let mut color = palette.overlay;
    color.a = 0.3;

    container(Space::new())
        .width(Length::Fixed(SEPARATOR_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}

fn separator_row(
    palette: &Palette,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let mut color = palette.overlay;
    color.a = 0.3;

    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_WIDTH))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}
