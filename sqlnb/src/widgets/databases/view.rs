use iced::widget::text::Wrapping;
use iced::widget::{Column, column, container, row, text};
use iced::{Element, Length, alignment};

use super::model::{Connection, DatabasesViewModel};
use crate::style::Palette;

const HEADER_HEIGHT: f32 = 22.0;
const HEADER_PADDING_X: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 12.0;

const ROW_HEIGHT: f32 = 24.0;
const ROW_FONT_SIZE: f32 = 12.0;
const ROW_PADDING_X: f32 = 10.0;

/// Props for the databases pane.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DatabasesProps<'a> {
    pub(crate) vm: DatabasesViewModel<'a>,
    pub(crate) palette: &'a Palette,
}

/// Render the connection listing. The pane is read-only.
pub(crate) fn view<'a, Message: 'a>(
    props: DatabasesProps<'a>,
) -> Element<'a, Message, iced::Theme, iced::Renderer> {
    let foreground = props.palette.dim_foreground;
    let header = container(
        text("DATABASES")
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
        .connections
        .iter()
        .map(|connection| connection_row(connection, props.palette));

    column![header, Column::with_children(rows).width(Length::Fill)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn connection_row<'a, Message: 'a>(
    connection: &'a Connection,
    palette: &Palette,
) -> Element<'a, Message, iced::Theme, iced::Renderer> {
    let label = text(connection.name.as_str())
        .size(ROW_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None);

    let kind = text(connection.kind.as_str())
        .size(ROW_FONT_SIZE)
        .color(palette.dim_foreground);

    container(row![label, kind].align_y(alignment::Vertical::Center))
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0.0, ROW_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}
