mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{ExplorerEffect, ExplorerIntent};
pub(crate) use model::{Entry, ExplorerTreeViewModel, path_label};
pub(crate) use reducer::ExplorerCtx;
use state::ExplorerState;

/// Explorer widget: expansion, selection and hover state layered over a
/// read-only entry snapshot.
#[derive(Debug, Default)]
pub(crate) struct ExplorerWidget {
    state: ExplorerState,
}

impl ExplorerWidget {
    /// Create a widget with every directory collapsed.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reduce an intent event into state updates and an effect.
    pub(crate) fn reduce(
        &mut self,
        intent: ExplorerIntent,
        ctx: &ExplorerCtx<'_>,
    ) -> Option<ExplorerEffect> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Return a tree view model over `entries`.
    pub(crate) fn tree_vm<'a>(
        &'a self,
        entries: &'a [Entry],
    ) -> ExplorerTreeViewModel<'a> {
        ExplorerTreeViewModel {
            entries,
            expansion: self.state.expansion(),
            selected_path: self.state.selected_path(),
            hovered_path: self.state.hovered_path(),
        }
    }

    /// Reconcile expansion, selection and hover with a fresh snapshot.
    pub(crate) fn refresh(
        &mut self,
        entries: &[Entry],
        retain_expansion: bool,
    ) {
        self.state.refresh(entries, retain_expansion);
    }

    /// Collapse every directory and forget selection and hover.
    pub(crate) fn reset(&mut self) {
        self.state.reset();
    }
}
