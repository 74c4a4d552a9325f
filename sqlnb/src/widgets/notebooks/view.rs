use iced::widget::text::Wrapping;
use iced::widget::{Column, Space, column, container, mouse_area, row, text};
use iced::{Element, Length, alignment, mouse};

use super::event::NotebooksIntent;
use super::model::{NotebookStatus, NotebookSummary, NotebooksViewModel};
use crate::style::{Palette, list_row_style};

const HEADER_HEIGHT: f32 = 22.0;
const HEADER_PADDING_X: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 12.0;

const ROW_HEIGHT: f32 = 24.0;
const ROW_FONT_SIZE: f32 = 12.0;
const ROW_PADDING_X: f32 = 10.0;
const STATUS_DOT_SIZE: f32 = 6.0;

/// Props for the notebooks pane.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NotebooksProps<'a> {
    pub(crate) vm: NotebooksViewModel<'a>,
    pub(crate) palette: &'a Palette,
}

/// Render the notebooks pane (header + listing).
pub(crate) fn view(
    props: NotebooksProps<'_>,
) -> Element<'_, NotebooksIntent, iced::Theme, iced::Renderer> {
    let foreground = props.palette.dim_foreground;
    let header = container(
        text("NOTEBOOKS")
            .size(HEADER_FONT_SIZE)
            .wrapping(Wrapping::None),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .padding([0.0, HEADER_PADDING_X])
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        text_color: Some(foreground),
        ..Default::default()
    });

    let rows = props
        .vm
        .notebooks
        .iter()
        .map(|notebook| notebook_row(notebook, props));

    column![header, Column::with_children(rows).width(Length::Fill)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn notebook_row<'a>(
    notebook: &'a NotebookSummary,
    props: NotebooksProps<'a>,
) -> Element<'a, NotebooksIntent, iced::Theme, iced::Renderer> {
    let palette = *props.palette;
    let is_open = props.vm.open == Some(notebook.name.as_str());
    let is_hovered = props.vm.hovered == Some(notebook.name.as_str());

    let dot_color = match notebook.status {
        NotebookStatus::Running => palette.running,
        NotebookStatus::Stopped => palette.overlay,
    };
    let status_dot = container(Space::new())
        .width(Length::Fixed(STATUS_DOT_SIZE))
        .height(Length::Fixed(STATUS_DOT_SIZE))
        .style(move |_| container::Style {
            background: Some(dot_color.into()),
            border: iced::Border {
                radius: iced::border::Radius::new(STATUS_DOT_SIZE / 2.0),
                ..Default::default()
            },
            ..Default::default()
        });

    let label = text(notebook.name.as_str())
        .size(ROW_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None);

    let status = text(notebook.status.to_string())
        .size(ROW_FONT_SIZE)
        .color(palette.dim_foreground);

    let content = row![status_dot, label, status]
        .spacing(8)
        .align_y(alignment::Vertical::Center);

    let styled = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0.0, ROW_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| list_row_style(&palette, is_open, is_hovered));

    mouse_area(styled)
        .on_press(NotebooksIntent::NotebookPressed {
            name: notebook.name.clone(),
        })
        .on_enter(NotebooksIntent::NotebookHovered {
            name: Some(notebook.name.clone()),
        })
        .on_exit(NotebooksIntent::NotebookHovered { name: None })
        .interaction(mouse::Interaction::Pointer)
        .into()
}
