use crate::menu::EditTarget;
use crate::paths;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const SETTINGS_ENV: &str = "QOL_LAUNCHER_SETTINGS";
pub const CONFIG_ENV: &str = "QOL_LAUNCHER_CONFIG";

const DEFAULT_ABOUT_URL: &str = "https://github.com/0x7eTeam/macbox";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LauncherSettings {
    /// Menu definition, relative to the starting directory unless absolute.
    pub config_file: PathBuf,
    /// Program launched by "Edit Options". Without one the config file is
    /// opened with the desktop's default handler.
    pub editor: Option<PathBuf>,
    pub icon: PathBuf,
    /// Shown in place of the icon when it can't be loaded.
    pub title: String,
    pub tooltip: String,
    pub about_url: String,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from("config.json"),
            editor: None,
            icon: PathBuf::from("logo.png"),
            title: "QoL Launcher".to_string(),
            tooltip: "QoL Launcher".to_string(),
            about_url: DEFAULT_ABOUT_URL.to_string(),
        }
    }
}

impl LauncherSettings {
    /// Reads settings from `$QOL_LAUNCHER_SETTINGS` or the user config dir,
    /// falling back to defaults. Never fails: a broken file is logged.
    pub fn load(base_dir: Option<&Path>) -> Self {
        let settings_path = std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .or_else(|| paths::settings_path().ok());
        let config_override = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(settings_path.as_deref(), config_override, base_dir)
    }

    pub fn load_from(
        settings_path: Option<&Path>,
        config_override: Option<PathBuf>,
        base_dir: Option<&Path>,
    ) -> Self {
        let mut settings = match settings_path {
            Some(path) if path.exists() => Self::from_file(path).unwrap_or_else(|e| {
                log::warn!("Ignoring settings file: {:#}", e);
                Self::default()
            }),
            _ => Self::default(),
        };

        if let Some(config_file) = config_override {
            settings.config_file = config_file;
        }
        if let Some(base) = base_dir {
            settings.resolve_relative_to(base);
        }
        settings
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Anchors relative file paths at `base`. A bare editor name such as
    /// `code` is left alone so it resolves through `PATH`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        self.config_file = anchor(base, &self.config_file);
        self.icon = anchor(base, &self.icon);
        if let Some(editor) = &self.editor {
            if editor.components().count() > 1 {
                self.editor = Some(anchor(base, editor));
            }
        }
    }

    pub fn edit_target(&self) -> EditTarget {
        match &self.editor {
            Some(program) => EditTarget::Executable(program.clone()),
            None => EditTarget::OpenFile(self.config_file.clone()),
        }
    }
}

fn anchor(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
