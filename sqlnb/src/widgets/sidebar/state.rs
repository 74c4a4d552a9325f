use super::model::Section;

/// Active-section state owned by the sidebar widget.
#[derive(Debug, Default)]
pub(super) struct SidebarState {
    active: Option<Section>,
}

impl SidebarState {
    pub(super) fn with_active(active: Option<Section>) -> Self {
        Self { active }
    }

    pub(super) fn active(&self) -> Option<Section> {
        self.active
    }

    /// Select `section`, or collapse it when it is already active.
    ///
    /// Returns the new active section.
    pub(super) fn toggle(&mut self, section: Section) -> Option<Section> {
        self.active = if self.active == Some(section) {
            None
        } else {
            Some(section)
        };
        self.active
    }

    pub(super) fn collapse(&mut self) {
        self.active = None;
    }
}
