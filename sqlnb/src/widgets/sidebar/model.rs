use std::fmt;

/// Fixed width of the section rail.
pub(crate) const SIDEBAR_RAIL_WIDTH: f32 = 52.0;

/// Fixed width of the detail pane shown next to the rail.
pub(crate) const SIDEBAR_PANE_WIDTH: f32 = 280.0;

/// Top-level sidebar sections. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Section {
    Directory,
    Notebooks,
    Databases,
    Settings,
}

impl Section {
    /// Every section in rail order.
    pub(crate) const ALL: [Section; 4] = [
        Section::Directory,
        Section::Notebooks,
        Section::Databases,
        Section::Settings,
    ];

    /// Stable key used in configuration files and log lines.
    pub(crate) fn key(self) -> &'static str {
        match self {
            Section::Directory => "directory",
            Section::Notebooks => "notebooks",
            Section::Databases => "databases",
            Section::Settings => "settings",
        }
    }

    /// Parse a configuration key, ignoring case and surrounding whitespace.
    pub(crate) fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(key))
    }

    /// Title of the detail pane bound to this section.
    pub(crate) fn title(self) -> &'static str {
        match self {
            Section::Directory => "Explorer",
            Section::Notebooks => "Notebooks",
            Section::Databases => "Databases",
            Section::Settings => "Settings",
        }
    }

    /// Short glyph drawn in the rail button.
    pub(crate) fn glyph(self) -> &'static str {
        match self {
            Section::Directory => "F",
            Section::Notebooks => "N",
            Section::Databases => "D",
            Section::Settings => "S",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Read-only view model for the section rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SidebarViewModel {
    pub(crate) active: Option<Section>,
}
