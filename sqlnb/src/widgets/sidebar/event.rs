use super::model::Section;

/// Intent events handled by the sidebar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarIntent {
    /// A rail button was pressed.
    ToggleSection(Section),
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarEffect {
    /// The pressed section and the active section after the toggle.
    SectionToggled {
        section: Section,
        active: Option<Section>,
    },
}
