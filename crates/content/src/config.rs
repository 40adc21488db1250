use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

pub const SETTINGS_FILE_NAME: &str = "portfolio.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub content_path: Option<PathBuf>,
    pub nav_breakpoint_px: f32,
    pub reveal_threshold: f32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            content_path: None,
            nav_breakpoint_px: 768.0,
            reveal_threshold: 0.1,
            log_filter: "info".into(),
        }
    }
}

/// A settings source that was skipped. Loading always yields usable settings;
/// these are reported once logging is up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsDiagnostic {
    #[error("unable to read settings file {path}: {reason}")]
    UnreadableFile { path: PathBuf, reason: String },
    #[error("ignoring malformed settings file {path}: {reason}")]
    MalformedFile { path: PathBuf, reason: String },
    #[error("ignoring non-numeric {name}={value}")]
    NonNumericEnv { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSettings {
    pub settings: Settings,
    /// Settings file that contributed values, if any.
    pub source: Option<PathBuf>,
    pub diagnostics: Vec<SettingsDiagnostic>,
}

impl LoadedSettings {
    pub fn log_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            warn!(%diagnostic, "settings source skipped");
        }
    }
}

/// Defaults, then `portfolio.toml` (working directory first, then the
/// platform config dir), then environment variables.
pub fn load_settings() -> LoadedSettings {
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = dirs::config_dir().map(|dir| dir.join("portfolio"));
    load_settings_from(&working_dir, config_dir.as_deref(), |name| {
        std::env::var(name).ok()
    })
}

pub fn load_settings_from(
    working_dir: &Path,
    config_dir: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> LoadedSettings {
    let mut settings = Settings::default();
    let mut diagnostics = Vec::new();

    let source = settings_file_path(working_dir, config_dir);
    if let Some(path) = &source {
        let applied = fs::read_to_string(path)
            .map_err(|err| SettingsDiagnostic::UnreadableFile {
                path: path.clone(),
                reason: err.to_string(),
            })
            .and_then(|raw| {
                let base_dir = path.parent().unwrap_or(working_dir);
                apply_file_overrides(&mut settings, &raw, base_dir).map_err(|reason| {
                    SettingsDiagnostic::MalformedFile {
                        path: path.clone(),
                        reason,
                    }
                })
            });
        if let Err(diagnostic) = applied {
            diagnostics.push(diagnostic);
        }
    }

    diagnostics.extend(apply_env_overrides(&mut settings, lookup));
    LoadedSettings {
        settings,
        source,
        diagnostics,
    }
}

pub fn settings_file_path(working_dir: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    let local = working_dir.join(SETTINGS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    let user = config_dir?.join(SETTINGS_FILE_NAME);
    user.is_file().then_some(user)
}

/// Applies known keys from a settings file. A relative `content_path` is
/// resolved against `base_dir`, the directory holding the file.
pub fn apply_file_overrides(
    settings: &mut Settings,
    raw: &str,
    base_dir: &Path,
) -> Result<(), String> {
    let file_cfg =
        toml::from_str::<HashMap<String, toml::Value>>(raw).map_err(|err| err.to_string())?;

    if let Some(v) = file_cfg.get("content_path").and_then(toml::Value::as_str) {
        settings.content_path = Some(base_dir.join(v));
    }
    if let Some(v) = file_cfg.get("nav_breakpoint_px").and_then(as_f32) {
        settings.nav_breakpoint_px = v;
    }
    if let Some(v) = file_cfg.get("reveal_threshold").and_then(as_f32) {
        settings.reveal_threshold = v;
    }
    if let Some(v) = file_cfg.get("log_filter").and_then(toml::Value::as_str) {
        settings.log_filter = v.to_string();
    }
    Ok(())
}

pub fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Vec<SettingsDiagnostic> {
    let mut diagnostics = Vec::new();

    if let Some(v) = lookup("PORTFOLIO_CONTENT") {
        settings.content_path = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("APP__CONTENT_PATH") {
        settings.content_path = Some(PathBuf::from(v));
    }

    for (name, field) in [
        ("APP__NAV_BREAKPOINT_PX", &mut settings.nav_breakpoint_px),
        ("APP__REVEAL_THRESHOLD", &mut settings.reveal_threshold),
    ] {
        let Some(v) = lookup(name) else { continue };
        match v.parse::<f32>() {
            Ok(parsed) => *field = parsed,
            Err(_) => diagnostics.push(SettingsDiagnostic::NonNumericEnv { name, value: v }),
        }
    }

    if let Some(v) = lookup("PORTFOLIO_LOG") {
        settings.log_filter = v;
    }
    diagnostics
}

fn as_f32(value: &toml::Value) -> Option<f32> {
    match value {
        toml::Value::Float(v) => Some(*v as f32),
        toml::Value::Integer(v) => Some(*v as f32),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
