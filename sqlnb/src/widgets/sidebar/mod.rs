mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarIntent};
pub(crate) use model::{SIDEBAR_PANE_WIDTH, Section, SidebarViewModel};
use state::SidebarState;

/// Sidebar widget: the section selector behind the rail.
#[derive(Debug, Default)]
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct the selector with `initial` active, or every pane collapsed.
    pub(crate) fn new(initial: Option<Section>) -> Self {
        Self {
            state: SidebarState::with_active(initial),
        }
    }

    /// Reduce an intent event into state updates and an effect.
    pub(crate) fn reduce(
        &mut self,
        intent: SidebarIntent,
    ) -> Option<SidebarEffect> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Return the active section, if any.
    pub(crate) fn active_section(&self) -> Option<Section> {
        self.state.active()
    }

    /// Build a read-only view model for the rail.
    pub(crate) fn vm(&self) -> SidebarViewModel {
        SidebarViewModel {
            active: self.state.active(),
        }
    }

    /// Collapse every pane.
    pub(crate) fn reset(&mut self) {
        self.state.collapse();
    }
}
