use iced::widget::text::Wrapping;
use iced::widget::{column, container, row, scrollable, text};
use iced::{Element, Length, alignment};
use sqlnb_ui_tree::{TreeRowContext, TreeView};

use super::event::ExplorerIntent;
use super::model::{Entry, ExplorerTreeViewModel};
use crate::style::{Palette, list_row_style, thin_scroll_style};

const HEADER_HEIGHT: f32 = 22.0;
const HEADER_PADDING_X: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 12.0;

const TREE_ROW_HEIGHT: f32 = 24.0;
const TREE_FONT_SIZE: f32 = 12.0;
const TREE_INDENT: f32 = 14.0;
const TREE_TOGGLE_WIDTH: f32 = 14.0;
const TREE_ROW_PADDING_X: f32 = 6.0;
const TREE_ROW_SPACING: f32 = 6.0;

/// Props for the explorer pane.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExplorerProps<'a> {
    pub(crate) vm: ExplorerTreeViewModel<'a>,
    pub(crate) palette: &'a Palette,
}

/// Render the explorer pane (header + tree, or a hint when it is empty).
pub(crate) fn view(
    props: ExplorerProps<'_>,
) -> Element<'_, ExplorerIntent, iced::Theme, iced::Renderer> {
    let header = explorer_header(props.palette);
    let body = if props.vm.rows().next().is_none() {
        empty_hint(props.palette)
    } else {
        explorer_tree(props)
    };

    column![header, body]
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .into()
}

fn explorer_header<'a>(
    palette: &'a Palette,
) -> Element<'a, ExplorerIntent, iced::Theme, iced::Renderer> {
    let foreground = palette.dim_foreground;

    let title = text("EXPLORER")
        .size(HEADER_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None);

    container(title)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}

fn empty_hint<'a>(
    palette: &'a Palette,
) -> Element<'a, ExplorerIntent, iced::Theme, iced::Renderer> {
    container(
        text("No files in this workspace")
            .size(TREE_FONT_SIZE)
            .color(palette.dim_foreground),
    )
    .padding([6.0, HEADER_PADDING_X])
    .into()
}

fn explorer_tree<'a>(
    props: ExplorerProps<'a>,
) -> Element<'a, ExplorerIntent, iced::Theme, iced::Renderer> {
    let palette = *props.palette;

    let tree = TreeView::new(props.vm.entries, props.vm.expansion, move |ctx| {
        tree_row(ctx, palette)
    })
    .selected(props.vm.selected_path)
    .hovered(props.vm.hovered_path)
    .on_press(|path| ExplorerIntent::NodePressed { path })
    .on_double_click(|path| ExplorerIntent::NodeActivated { path })
    .on_hover(|path| ExplorerIntent::NodeHovered { path })
    .on_toggle_folder(|path| ExplorerIntent::ToggleDirectory { path })
    .toggle_content(move |ctx| toggle_glyph(ctx, palette))
    .row_style(move |ctx| {
        list_row_style(&palette, ctx.is_selected, ctx.is_hovered)
    })
    .indent_width(TREE_INDENT)
    .toggle_width(TREE_TOGGLE_WIDTH)
    .view();

    scrollable::Scrollable::new(tree)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(4)
                .margin(0)
                .scroller_width(4),
        ))
        .style(thin_scroll_style(palette))
        .into()
}

fn tree_row<'a>(
    ctx: &TreeRowContext<'a, Entry>,
    palette: Palette,
) -> Element<'a, ExplorerIntent, iced::Theme, iced::Renderer> {
    let node = ctx.entry.node;

    let label = text(node.name())
        .size(TREE_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None);

    let mut content = row![label]
        .spacing(TREE_ROW_SPACING)
        .align_y(alignment::Vertical::Center);

    if let Some(size) = node.size() {
        content = content.push(
            text(size)
                .size(TREE_FONT_SIZE)
                .color(palette.dim_foreground)
                .wrapping(Wrapping::None),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(TREE_ROW_HEIGHT))
        .padding([0.0, TREE_ROW_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}

fn toggle_glyph<'a>(
    ctx: &TreeRowContext<'a, Entry>,
    palette: Palette,
) -> Element<'a, ExplorerIntent, iced::Theme, iced::Renderer> {
    let glyph = match (ctx.entry.node.is_directory(), ctx.entry.is_expanded) {
        (false, _) => "",
        (true, false) => ">",
        (true, true) => "v",
    };

    text(glyph)
        .size(TREE_FONT_SIZE)
        .color(palette.dim_foreground)
        .into()
}
