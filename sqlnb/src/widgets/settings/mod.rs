mod errors;
mod event;
mod model;
mod storage;
pub(crate) mod view;

pub(crate) use event::SettingsIntent;
pub(crate) use model::SettingsData;
pub(crate) use storage::SettingsLoadStatus;
use storage::{SettingsLoad, SettingsLocation};

/// Read-only view model for the settings pane.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsViewModel<'a> {
    pub(crate) settings: &'a SettingsData,
    pub(crate) status: &'a SettingsLoadStatus,
}

/// Settings widget: the configuration the shell started with.
#[derive(Debug)]
pub(crate) struct SettingsWidget {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsWidget {
    /// Load settings from the user's config directory.
    pub(crate) fn load() -> Self {
        let location = SettingsLocation::discover();
        let SettingsLoad { settings, status } =
            location.read().unwrap_or_else(|err| {
                log::warn!("{err}; using default settings");
                SettingsLoad::fallback(SettingsLoadStatus::Invalid(
                    err.to_string(),
                ))
            });

        match &status {
            SettingsLoadStatus::Loaded => {
                log::info!("settings loaded from {}", location.file().display())
            },
            SettingsLoadStatus::Missing => log::info!(
                "no settings at {}, using defaults",
                location.file().display()
            ),
            SettingsLoadStatus::Invalid(message) => {
                log::warn!("settings file invalid: {message}")
            },
        }

        Self { settings, status }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        settings: SettingsData,
        status: SettingsLoadStatus,
    ) -> Self {
        Self { settings, status }
    }

    pub(crate) fn settings(&self) -> &SettingsData {
        &self.settings
    }

    pub(crate) fn vm(&self) -> SettingsViewModel<'_> {
        SettingsViewModel {
            settings: &self.settings,
            status: &self.status,
        }
    }
}
