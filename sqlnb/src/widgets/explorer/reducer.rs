use sqlnb_ui_tree::{TreePath, find_node};

use super::event::{ExplorerEffect, ExplorerIntent};
use super::model::{Entry, path_label};
use super::state::ExplorerState;

/// Runtime context for the explorer reducer.
pub(crate) struct ExplorerCtx<'a> {
    /// Entry snapshot currently shown in the pane.
    pub(crate) entries: &'a [Entry],
}

/// Reduce an explorer intent into state updates and an effect.
pub(crate) fn reduce(
    state: &mut ExplorerState,
    intent: ExplorerIntent,
    ctx: &ExplorerCtx<'_>,
) -> Option<ExplorerEffect> {
    match intent {
        ExplorerIntent::NodePressed { path } => {
            reduce_node_pressed(state, path, ctx)
        },
        ExplorerIntent::NodeActivated { path } => {
            reduce_node_activated(path, ctx)
        },
        ExplorerIntent::NodeHovered { path } => {
            state.set_hovered_path(path);
            None
        },
        ExplorerIntent::ToggleDirectory { path } => {
            reduce_toggle_directory(state, path, ctx)
        },
    }
}

/// Handle row press: select, and toggle directories.
fn reduce_node_pressed(
    state: &mut ExplorerState,
    path: TreePath,
    ctx: &ExplorerCtx<'_>,
) -> Option<ExplorerEffect> {
    let Some(entry) = find_node(ctx.entries, &path) else {
        log::warn!("explorer press on unknown entry: {}", path_label(&path));
        return None;
    };

    state.set_selected_path(Some(path.clone()));

    if !entry.is_directory() {
        return None;
    }

    let expanded = state.toggle_directory(&path);
    log::debug!(
        "explorer directory {} expanded={expanded}",
        path_label(&path)
    );
    Some(ExplorerEffect::DirectoryToggled { path, expanded })
}

/// Handle double activation: files surface to the host, directories ignore it.
fn reduce_node_activated(
    path: TreePath,
    ctx: &ExplorerCtx<'_>,
) -> Option<ExplorerEffect> {
    match find_node(ctx.entries, &path) {
        Some(entry) if !entry.is_directory() => {
            log::info!("explorer file activated: {}", path_label(&path));
            Some(ExplorerEffect::FileActivated { path })
        },
        Some(_) => None,
        None => {
            log::warn!(
                "explorer activation of unknown entry: {}",
                path_label(&path)
            );
            None
        },
    }
}

/// Handle the toggle affordance: flip the flag without moving selection.
fn reduce_toggle_directory(
    state: &mut ExplorerState,
    path: TreePath,
    ctx: &ExplorerCtx<'_>,
) -> Option<ExplorerEffect> {
    if !find_node(ctx.entries, &path).is_some_and(Entry::is_directory) {
        log::warn!("explorer toggle on non-directory: {}", path_label(&path));
        return None;
    }

    let expanded = state.toggle_directory(&path);
    Some(ExplorerEffect::DirectoryToggled { path, expanded })
}
