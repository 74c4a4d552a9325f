use iced::widget::text::Wrapping;
use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Border, Element, Length, alignment};

use super::SettingsViewModel;
use super::event::SettingsIntent;
use super::storage::SettingsLoadStatus;
use crate::style::Palette;

const HEADER_HEIGHT: f32 = 22.0;
const HEADER_PADDING_X: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 12.0;

const ROW_FONT_SIZE: f32 = 12.0;
const ROW_PADDING: [f32; 2] = [4.0, 10.0];

/// Props for the settings pane.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsProps<'a> {
    pub(crate) vm: SettingsViewModel<'a>,
    pub(crate) palette: &'a Palette,
}

/// Render the settings pane: loaded values plus reload and reset actions.
pub(crate) fn view(
    props: SettingsProps<'_>,
) -> Element<'_, SettingsIntent, iced::Theme, iced::Renderer> {
    let palette = *props.palette;

    let header = container(
        text("SETTINGS")
            .size(HEADER_FONT_SIZE)
            .wrapping(Wrapping::None),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .padding([0.0, HEADER_PADDING_X])
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        text_color: Some(palette.dim_foreground),
        ..Default::default()
    });

    let (status_label, status_color) = match props.vm.status {
        SettingsLoadStatus::Loaded => {
            (String::from("loaded"), palette.dim_foreground)
        },
        SettingsLoadStatus::Missing => (
            String::from("defaults (no settings file)"),
            palette.dim_foreground,
        ),
        SettingsLoadStatus::Invalid(message) => {
            (format!("invalid: {message}"), palette.warning)
        },
    };

    let status = container(
        text(status_label).size(ROW_FONT_SIZE).color(status_color),
    )
    .padding(ROW_PADDING);

    let rows = props
        .vm
        .settings
        .rows()
        .into_iter()
        .map(|(label, value)| settings_row(label, value, palette));

    let actions = row![
        Space::new().width(Length::Fixed(HEADER_PADDING_X)),
        action_button(
            "Reload workspace",
            SettingsIntent::ReloadWorkspace,
            palette
        ),
        action_button("Reset view", SettingsIntent::ResetView, palette),
    ]
    .spacing(6);

    column![
        header,
        status,
        Column::with_children(rows).width(Length::Fill),
        Space::new().height(Length::Fixed(8.0)),
        actions,
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn action_button<'a>(
    label: &'a str,
    intent: SettingsIntent,
    palette: Palette,
) -> Element<'a, SettingsIntent, iced::Theme, iced::Renderer> {
    button(text(label).size(ROW_FONT_SIZE))
        .on_press(intent)
        .padding([4.0, 10.0])
        .style(move |_, _| button::Style {
            background: Some(palette.overlay.into()),
            text_color: palette.foreground,
            border: Border {
                radius: iced::border::Radius::new(4.0),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn settings_row<'a>(
    label: &'static str,
    value: String,
    palette: Palette,
) -> Element<'a, SettingsIntent, iced::Theme, iced::Renderer> {
    let label = text(label)
        .size(ROW_FONT_SIZE)
        .color(palette.dim_foreground)
        .wrapping(Wrapping::None);
    let value = text(value).size(ROW_FONT_SIZE);

    container(column![label, value].spacing(2))
        .width(Length::Fill)
        .padding(ROW_PADDING)
        .into()
}
