use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

const APP_DIR: &str = "sqlnb";
const SETTINGS_FILE: &str = "settings.json";

/// How `settings.json` was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Settings read from a [`SettingsLocation`], paths already resolved.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    pub(crate) settings: SettingsData,
    pub(crate) status: SettingsLoadStatus,
}

impl SettingsLoad {
    /// Default settings tagged with `status`.
    pub(crate) fn fallback(status: SettingsLoadStatus) -> Self {
        Self {
            settings: SettingsData::default(),
            status,
        }
    }
}

/// A `settings.json` file and the directory its relative paths resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SettingsLocation {
    file: PathBuf,
}

impl SettingsLocation {
    /// Settings file under the user's config directory.
    pub(crate) fn discover() -> Self {
        let dir = config_dir_from(
            std::env::var_os("XDG_CONFIG_HOME"),
            std::env::var_os("HOME"),
        );
        Self::at(dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    pub(crate) fn at(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub(crate) fn file(&self) -> &Path {
        &self.file
    }

    /// Read and interpret the file.
    ///
    /// A missing file yields defaults with [`SettingsLoadStatus::Missing`] and
    /// malformed JSON yields defaults with [`SettingsLoadStatus::Invalid`].
    /// Only a file that exists but cannot be read is an error. A relative
    /// `workspace.snapshot` is resolved against the settings directory.
    pub(crate) fn read(&self) -> Result<SettingsLoad, SettingsError> {
        let payload = match fs::read_to_string(&self.file) {
            Ok(payload) => payload,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(SettingsLoad::fallback(SettingsLoadStatus::Missing));
            },
            Err(source) => {
                return Err(SettingsError::Read {
                    path: self.file.clone(),
                    source,
                });
            },
        };

        let value = match serde_json::from_str::<serde_json::Value>(&payload) {
            Ok(value) => value,
            Err(err) => {
                return Ok(SettingsLoad::fallback(SettingsLoadStatus::Invalid(
                    err.to_string(),
                )));
            },
        };

        let mut settings = SettingsData::from_json(&value);
        if let Some(dir) = self.file.parent() {
            settings.resolve_snapshot(dir);
        }

        Ok(SettingsLoad {
            settings,
            status: SettingsLoadStatus::Loaded,
        })
    }
}

/// `$XDG_CONFIG_HOME`, else `$HOME/.config`, else the temp dir.
///
/// Empty or relative `XDG_CONFIG_HOME` values are ignored.
fn config_dir_from(xdg: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let xdg = xdg.map(PathBuf::from).filter(|dir| dir.is_absolute());
    if let Some(dir) = xdg {
        return dir;
    }

    match home.filter(|home| !home.is_empty()) {
        Some(home) => PathBuf::from(home).join(".config"),
        None => std::env::temp_dir(),
    }
}
