use iced::alignment;
use iced::widget::{Column, Row, Space, container, mouse_area};
use iced::{Element, Length, mouse};

use crate::model::{
    ExpansionState, FlattenedNode, TreeNode, TreePath, flatten_visible,
};

/// Flattened tree row used by [`TreeView`] render callbacks.
pub type TreeRow<'a, T> = FlattenedNode<'a, T>;

/// Rendering context passed to row callbacks.
pub struct TreeRowContext<'a, T: TreeNode> {
    pub entry: TreeRow<'a, T>,
    pub is_selected: bool,
    pub is_hovered: bool,
}

type RowRenderer<'a, T, Message> =
    dyn Fn(&TreeRowContext<'a, T>) -> Element<'a, Message> + 'a;
type RowStyle<'a, T> = dyn Fn(&TreeRowContext<'a, T>) -> container::Style + 'a;
type RowAction<'a, Message> = dyn Fn(TreePath) -> Message + 'a;
type HoverAction<'a, Message> = dyn Fn(Option<TreePath>) -> Message + 'a;

/// Tree list widget over an order-preserving tree and its expansion flags.
pub struct TreeView<'a, T: TreeNode, Message: Clone + 'a> {
    nodes: &'a [T],
    expansion: &'a ExpansionState,
    selected: Option<&'a TreePath>,
    hovered: Option<&'a TreePath>,
    on_press: Option<Box<RowAction<'a, Message>>>,
    on_double_click: Option<Box<RowAction<'a, Message>>>,
    on_hover: Option<Box<HoverAction<'a, Message>>>,
    on_toggle_folder: Option<Box<RowAction<'a, Message>>>,
    render_row: Box<RowRenderer<'a, T, Message>>,
    row_style: Option<Box<RowStyle<'a, T>>>,
    toggle_content: Option<Box<RowRenderer<'a, T, Message>>>,
    spacing: f32,
    indent_width: f32,
    toggle_width: f32,
}

impl<'a, T, Message> TreeView<'a, T, Message>
where
    T: TreeNode + 'a,
    Message: Clone + 'a,
{
    /// Create a tree view that renders each visible row using `render_row`.
    pub fn new(
        nodes: &'a [T],
        expansion: &'a ExpansionState,
        render_row: impl Fn(&TreeRowContext<'a, T>) -> Element<'a, Message> + 'a,
    ) -> Self {
        Self {
            nodes,
            expansion,
            selected: None,
            hovered: None,
            on_press: None,
            on_double_click: None,
            on_hover: None,
            on_toggle_folder: None,
            render_row: Box::new(render_row),
            row_style: None,
            toggle_content: None,
            spacing: 0.0,
            indent_width: 0.0,
            toggle_width: 0.0,
        }
    }

    /// Provide the currently selected path to inform row rendering.
    pub fn selected(mut self, path: Option<&'a TreePath>) -> Self {
        self.selected = path;
        self
    }

    /// Provide the currently hovered path to inform row rendering.
    pub fn hovered(mut self, path: Option<&'a TreePath>) -> Self {
        self.hovered = path;
        self
    }

    /// Emit a message when a row receives a left press.
    pub fn on_press(
        mut self,
        on_press: impl Fn(TreePath) -> Message + 'a,
    ) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    /// Emit a message when a row is double clicked.
    pub fn on_double_click(
        mut self,
        on_double_click: impl Fn(TreePath) -> Message + 'a,
    ) -> Self {
        self.on_double_click = Some(Box::new(on_double_click));
        self
    }

    /// Emit a message when the pointer enters or leaves a row.
    pub fn on_hover(
        mut self,
        on_hover: impl Fn(Option<TreePath>) -> Message + 'a,
    ) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    /// Emit a message when a folder toggle is clicked.
    pub fn on_toggle_folder(
        mut self,
        on_toggle: impl Fn(TreePath) -> Message + 'a,
    ) -> Self {
        self.on_toggle_folder = Some(Box::new(on_toggle));
        self
    }

    /// Provide a row style callback for background/text styling.
    pub fn row_style(
        mut self,
        row_style: impl Fn(&TreeRowContext<'a, T>) -> container::Style + 'a,
    ) -> Self {
        self.row_style = Some(Box::new(row_style));
        self
    }

    /// Provide content to render inside the toggle area.
    pub fn toggle_content(
        mut self,
        toggle_content: impl Fn(&TreeRowContext<'a, T>) -> Element<'a, Message> + 'a,
    ) -> Self {
        self.toggle_content = Some(Box::new(toggle_content));
        self
    }

    /// Set indentation width per tree depth level.
    pub fn indent_width(mut self, width: f32) -> Self {
        self.indent_width = width.max(0.0);
        self
    }

    /// Set the width reserved for the toggle area.
    pub fn toggle_width(mut self, width: f32) -> Self {
        self.toggle_width = width.max(0.0);
        self
    }

    /// Vertical spacing between rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Build the `Element` for the tree view.
    pub fn view(self) -> Element<'a, Message> {
        let mut column = Column::new().spacing(self.spacing);

        for entry in flatten_visible(self.nodes, self.expansion) {
            let is_selected =
                self.selected.is_some_and(|path| path == &entry.path);
            let is_hovered =
                self.hovered.is_some_and(|path| path == &entry.path);
            let path = entry.path.clone();
            let context = TreeRowContext {
                entry,
                is_selected,
                is_hovered,
            };

            let content = wrap_mouse_area(
                (self.render_row)(&context),
                self.on_press.as_deref(),
                self.on_double_click.as_deref(),
                self.on_hover.as_deref(),
                &path,
            );

            let mut row = Row::new().spacing(0.0);

            let indent = context.entry.depth as f32 * self.indent_width;
            if indent > 0.0 {
                row = row.push(Space::new().width(Length::Fixed(indent)));
            }

            if self.toggle_width > 0.0 || self.toggle_content.is_some() {
                row = row.push(self.toggle_slot(&context, &path));
            }

            row = row.push(content);

            let mut row_element: Element<'a, Message> = row.into();

            if let Some(ref row_style) = self.row_style {
                let style = row_style(&context);
                row_element =
                    container(row_element).style(move |_| style).into();
            }

            column = column.push(row_element);
        }

        column.into()
    }

    fn toggle_slot(
        &self,
        context: &TreeRowContext<'a, T>,
        path: &TreePath,
    ) -> Element<'a, Message> {
        let content = self
            .toggle_content
            .as_ref()
            .map(|toggle| toggle(context))
            .unwrap_or_else(|| Space::new().into());

        let content: Element<'a, Message> = container(content)
            .width(Length::Fixed(self.toggle_width))
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();

        if !context.entry.node.is_folder() {
            return content;
        }

        match self.on_toggle_folder.as_deref() {
            Some(on_toggle) => wrap_mouse_area(
                content,
                Some(on_toggle),
                None,
                self.on_hover.as_deref(),
                path,
            ),
            None => content,
        }
    }
}

fn wrap_mouse_area<'a, Message: Clone + 'a>(
    element: Element<'a, Message>,
    on_press: Option<&(dyn Fn(TreePath) -> Message + 'a)>,
    on_double_click: Option<&(dyn Fn(TreePath) -> Message + 'a)>,
    on_hover: Option<&(dyn Fn(Option<TreePath>) -> Message + 'a)>,
    path: &TreePath,
) -> Element<'a, Message> {
    if on_press.is_none() && on_double_click.is_none() && on_hover.is_none() {
        return element;
    }

    let mut area = mouse_area(element);

    if let Some(on_press) = on_press {
        area = area.on_press(on_press(path.clone()));
    }

    if let Some(on_double_click) = on_double_click {
        area = area.on_double_click(on_double_click(path.clone()));
    }

    if let Some(on_hover) = on_hover {
        area = area
            .on_enter(on_hover(Some(path.clone())))
            .on_exit(on_hover(None));
    }

    area.interaction(mouse::Interaction::Pointer).into()
}
