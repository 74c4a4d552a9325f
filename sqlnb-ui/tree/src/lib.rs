//! Order-preserving tree helpers and a lightweight [`iced`] tree widget.
//!
//! This crate is split into two layers:
//! - model helpers ([`TreeNode`], [`ExpansionState`], [`render`],
//!   [`flatten_visible`]) that are UI-agnostic;
//! - view helpers ([`TreeView`], [`TreeRowContext`]) that draw rows in `iced`.
//!
//! Nodes are never sorted: folders and files appear exactly in the order the
//! data provider supplied them. Expansion flags live outside the nodes, in an
//! [`ExpansionState`] owned by the caller, so tree snapshots stay read-only.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::Element;
//! use iced::widget::text;
//! use sqlnb_ui_tree::{ExpansionState, TreeNode, TreePath, TreeView};
//!
//! enum Node {
//!     Folder { title: String, children: Vec<Node> },
//!     File { title: String },
//! }
//!
//! impl TreeNode for Node {
//!     fn title(&self) -> &str {
//!         match self {
//!             Node::Folder { title, .. } => title,
//!             Node::File { title } => title,
//!         }
//!     }
//!
//!     fn children(&self) -> Option<&[Self]> {
//!         match self {
//!             Node::Folder { children, .. } => Some(children),
//!             Node::File { .. } => None,
//!         }
//!     }
//!
//!     fn is_folder(&self) -> bool {
//!         matches!(self, Node::Folder { .. })
//!     }
//! }
//!
//! #[derive(Clone)]
//! enum Message {
//!     Toggle(TreePath),
//! }
//!
//! struct State {
//!     nodes: Vec<Node>,
//!     expansion: ExpansionState,
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     TreeView::new(&state.nodes, &state.expansion, |ctx| {
//!         text(ctx.entry.node.title()).into()
//!     })
//!     .on_press(Message::Toggle)
//!     .indent_width(14.0)
//!     .view()
//! }
//! ```

mod model;
mod view;

pub use model::{
    ExpansionState, FlattenedNode, Render, RenderNode, TreeBranch, TreeLeaf,
    TreeNode, TreePath, find_node, flatten_visible, render,
};
pub use view::{TreeRow, TreeRowContext, TreeView};
