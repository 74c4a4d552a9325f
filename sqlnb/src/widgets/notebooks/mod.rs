mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{NotebooksEffect, NotebooksIntent};
pub(crate) use model::{
    NotebookNamer, NotebookStatus, NotebookSummary, NotebooksViewModel,
};
pub(crate) use reducer::NotebooksCtx;
use state::NotebooksState;

/// Notebooks widget: which notebook is open and which row is hovered.
#[derive(Debug, Default)]
pub(crate) struct NotebooksWidget {
    state: NotebooksState,
}

impl NotebooksWidget {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reduce an intent event into state updates and an effect.
    pub(crate) fn reduce(
        &mut self,
        intent: NotebooksIntent,
        ctx: &NotebooksCtx<'_>,
    ) -> Option<NotebooksEffect> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Return a view model over `notebooks`.
    pub(crate) fn vm<'a>(
        &'a self,
        notebooks: &'a [NotebookSummary],
    ) -> NotebooksViewModel<'a> {
        NotebooksViewModel {
            notebooks,
            open: self.state.open(),
            hovered: self.state.hovered(),
        }
    }

    /// Return the name of the open notebook.
    pub(crate) fn open_notebook(&self) -> Option<&str> {
        self.state.open()
    }

    /// Forget the open or hovered notebook when it left the listing.
    pub(crate) fn refresh(&mut self, notebooks: &[NotebookSummary]) {
        self.state.retain_listed(notebooks);
    }

    /// Close the open notebook and clear hover.
    pub(crate) fn reset(&mut self) {
        self.state.reset();
    }
}
