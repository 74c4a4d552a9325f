use iced::widget::{Space, button, column, container, row, text, tooltip};
use iced::{Border, Element, Length, Theme, alignment};

use super::event::SidebarIntent;
use super::model::{SIDEBAR_RAIL_WIDTH, Section, SidebarViewModel};
use crate::style::Palette;

const RAIL_BUTTON_SIZE: f32 = 44.0;
const RAIL_GLYPH_SIZE: f32 = 16.0;
const ACTIVE_BORDER_WIDTH: f32 = 2.0;
const TOOLTIP_FONT_SIZE: f32 = 12.0;

/// Props for the section rail.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) palette: &'a Palette,
}

/// Render the section rail. The detail pane is composed by the host.
pub(crate) fn view(
    props: SidebarProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let main_sections =
        [Section::Directory, Section::Notebooks, Section::Databases]
            .into_iter()
            .map(|section| rail_button(section, props));

    let main_menu = column(main_sections).spacing(0).width(Length::Fill);

    let content = column![
        main_menu,
        Space::new().height(Length::Fill),
        rail_button(Section::Settings, props),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let background = props.palette.rail;

    container(content)
        .width(Length::Fixed(SIDEBAR_RAIL_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn rail_button<'a>(
    section: Section,
    props: SidebarProps<'a>,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let is_active = props.vm.active == Some(section);
    let glyph_color = if is_active {
        props.palette.accent
    } else {
        props.palette.dim_foreground
    };

    let glyph = text(section.glyph())
        .size(RAIL_GLYPH_SIZE)
        .color(glyph_color);

    let glyph = container(glyph)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let border_color = if is_active {
        props.palette.accent
    } else {
        iced::Color::TRANSPARENT
    };

    let border_strip = container(Space::new())
        .width(Length::Fixed(ACTIVE_BORDER_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(border_color.into()),
            ..Default::default()
        });

    let content = row![border_strip, glyph]
        .spacing(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let toggle = button(content)
        .on_press(SidebarIntent::ToggleSection(section))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(RAIL_BUTTON_SIZE))
        .style(|_, _| button::Style {
            background: None,
            border: Border::default(),
            ..Default::default()
        });

    let overlay = props.palette.overlay;
    let foreground = props.palette.foreground;
    let label = container(text(section.title()).size(TOOLTIP_FONT_SIZE))
        .padding([2.0, 6.0])
        .style(move |_| container::Style {
            background: Some(overlay.into()),
            text_color: Some(foreground),
            ..Default::default()
        });

    tooltip(toggle, label, tooltip::Position::Right).into()
}
