use std::path::{Path, PathBuf};

use crate::widgets::sidebar::Section;

const DEFAULT_RETAIN_EXPANSION: bool = true;

/// Typed settings payload loaded from `settings.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SettingsData {
    sidebar: SidebarSettingsData,
    explorer: ExplorerSettingsData,
    workspace: WorkspaceSettingsData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SidebarSettingsData {
    initial_section: Option<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ExplorerSettingsData {
    retain_expansion: bool,
}

impl Default for ExplorerSettingsData {
    fn default() -> Self {
        Self {
            retain_expansion: DEFAULT_RETAIN_EXPANSION,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct WorkspaceSettingsData {
    snapshot: Option<PathBuf>,
}

impl SettingsData {
    /// Section active when the shell starts.
    pub(crate) fn initial_section(&self) -> Option<Section> {
        self.sidebar.initial_section
    }

    /// Whether expansion flags survive a snapshot refresh.
    pub(crate) fn retain_expansion(&self) -> bool {
        self.explorer.retain_expansion
    }

    /// Workspace snapshot file, if one is configured.
    pub(crate) fn snapshot_path(&self) -> Option<&Path> {
        self.workspace.snapshot.as_deref()
    }

    /// Anchor a relative snapshot path at `base`.
    pub(super) fn resolve_snapshot(&mut self, base: &Path) {
        if let Some(snapshot) = self
            .workspace
            .snapshot
            .as_mut()
            .filter(|snapshot| snapshot.is_relative())
        {
            *snapshot = base.join(&*snapshot);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_initial_section(&mut self, value: Option<Section>) {
        self.sidebar.initial_section = value;
    }

    #[cfg(test)]
    pub(crate) fn set_retain_expansion(&mut self, value: bool) {
        self.explorer.retain_expansion = value;
    }

    /// Build settings from JSON, falling back to defaults field by field.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut settings = SettingsData::default();

        if let Some(sidebar) = value.get("sidebar") {
            if let Some(key) = read_string_field(sidebar, "initial_section") {
                settings.sidebar.initial_section = Section::from_key(&key);
                if settings.sidebar.initial_section.is_none() {
                    log::warn!(
                        "settings: unknown sidebar.initial_section {key:?}"
                    );
                }
            }
        }

        if let Some(explorer) = value.get("explorer") {
            if let Some(retain) = explorer
                .get("retain_expansion")
                .and_then(serde_json::Value::as_bool)
            {
                settings.explorer.retain_expansion = retain;
            }
        }

        if let Some(workspace) = value.get("workspace") {
            if let Some(snapshot) = read_string_field(workspace, "snapshot")
                .filter(|value| is_non_empty(value))
            {
                settings.workspace.snapshot = Some(PathBuf::from(snapshot));
            }
        }

        settings
    }

    /// Label/value pairs shown by the settings pane.
    pub(crate) fn rows(&self) -> Vec<(&'static str, String)> {
        let initial_section = self
            .sidebar
            .initial_section
            .map(|section| section.key().to_owned())
            .unwrap_or_else(|| String::from("none"));

        let snapshot = self
            .workspace
            .snapshot
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| String::from("built-in placeholder"));

        vec![
            ("sidebar.initial_section", initial_section),
            (
                "explorer.retain_expansion",
                self.explorer.retain_expansion.to_string(),
            ),
            ("workspace.snapshot", snapshot),
        ]
    }
}

fn read_string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(|value| value.as_str())
        .map(String::from)
}

fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::json;

    use super::SettingsData;
    use crate::widgets::sidebar::Section;

    #[test]
    fn given_empty_json_when_parsed_then_defaults_are_used() {
        let settings = SettingsData::from_json(&json!({}));

        assert_eq!(settings, SettingsData::default());
        assert_eq!(settings.initial_section(), None);
        assert!(settings.retain_expansion());
        assert_eq!(settings.snapshot_path(), None);
    }

    #[test]
    fn given_full_json_when_parsed_then_every_field_is_read() {
        let settings = SettingsData::from_json(&json!({
            "sidebar": { "initial_section": "Databases" },
            "explorer": { "retain_expansion": false },
            "workspace": { "snapshot": "/tmp/workspace.json" }
        }));

        assert_eq!(settings.initial_section(), Some(Section::Databases));
        assert!(!settings.retain_expansion());
        assert_eq!(
            settings.snapshot_path(),
            Some(Path::new("/tmp/workspace.json"))
        );
    }

    #[test]
    fn given_ill_typed_fields_when_parsed_then_each_falls_back_individually() {
        let settings = SettingsData::from_json(&json!({
            "sidebar": { "initial_section": "explorer" },
            "explorer": { "retain_expansion": "no" },
            "workspace": { "snapshot": "   " }
        }));

        assert_eq!(settings, SettingsData::default());
    }

    #[test]
    fn given_settings_when_rows_built_then_labels_are_stable() {
        let mut settings = SettingsData::default();
        settings.set_initial_section(Some(Section::Notebooks));
        settings.set_retain_expansion(false);

        let rows = settings.rows();

        assert_eq!(
            rows,
            vec![
                ("sidebar.initial_section", String::from("notebooks")),
                ("explorer.retain_expansion", String::from("false")),
                ("workspace.snapshot", String::from("built-in placeholder")),
            ]
        );
    }
}
