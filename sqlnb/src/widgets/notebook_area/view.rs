use iced::widget::{Space, button, column, container, row, text};
use iced::{Border, Element, Length, alignment};

use crate::style::Palette;
use crate::widgets::notebooks::NotebooksIntent;

const TITLE_SIZE: f32 = 20.0;
const BODY_SIZE: f32 = 14.0;
const TOP_SPACING: f32 = 96.0;
const BUTTON_PADDING: [f32; 2] = [6.0, 14.0];

/// Props for the main notebook area.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NotebookAreaProps<'a> {
    /// Name of the open notebook, if any.
    pub(crate) open: Option<&'a str>,
    pub(crate) palette: &'a Palette,
}

/// Render the open notebook, or the empty-notebook placeholder.
pub(crate) fn view(
    props: NotebookAreaProps<'_>,
) -> Element<'_, NotebooksIntent, iced::Theme, iced::Renderer> {
    let palette = *props.palette;

    let content: Element<'_, NotebooksIntent, iced::Theme, iced::Renderer> =
        match props.open {
            Some(name) => open_notebook(name, palette),
            None => empty_notebook(palette),
        };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(move |_| container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        })
        .into()
}

fn open_notebook<'a>(
    name: &'a str,
    palette: Palette,
) -> Element<'a, NotebooksIntent, iced::Theme, iced::Renderer> {
    let title = text(name).size(TITLE_SIZE);
    let close =
        outline_button("Close", palette, NotebooksIntent::CloseNotebook);

    column![
        Space::new().height(Length::Fixed(TOP_SPACING)),
        row![title, close]
            .spacing(16)
            .align_y(alignment::Vertical::Center),
    ]
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn empty_notebook<'a>(
    palette: Palette,
) -> Element<'a, NotebooksIntent, iced::Theme, iced::Renderer> {
    column![
        Space::new().height(Length::Fixed(TOP_SPACING)),
        text("No Notebook Selected").size(TITLE_SIZE),
        text("Open a notebook from the sidebar or start a new one.")
            .size(BODY_SIZE)
            .color(palette.dim_foreground),
        Space::new().height(Length::Fixed(8.0)),
        outline_button(
            "+ New Notebook",
            palette,
            NotebooksIntent::NewNotebookPressed,
        ),
    ]
    .spacing(8)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn outline_button<'a>(
    label: &'a str,
    palette: Palette,
    on_press: NotebooksIntent,
) -> Element<'a, NotebooksIntent, iced::Theme, iced::Renderer> {
    button(text(label).size(BODY_SIZE))
        .on_press(on_press)
        .padding(BUTTON_PADDING)
        .style(move |_, status| {
            let hovered = matches!(status, button::Status::Hovered);
            button::Style {
                background: hovered.then(|| palette.dim_accent.into()),
                text_color: palette.accent,
                border: Border {
                    width: 1.0,
                    color: palette.accent,
                    radius: iced::border::Radius::new(4.0),
                },
                ..Default::default()
            }
        })
        .into()
}
