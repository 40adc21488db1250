//! Static site content: built-in data, TOML content files, and settings.

mod builtin;
pub mod config;
pub mod loader;
pub mod validate;

pub use builtin::builtin_site_content;
pub use config::{load_settings, LoadedSettings, Settings, SettingsDiagnostic};
pub use loader::{load_site_content, parse_site_content, read_content_file, render_site_content};
pub use validate::{validate_site_content, ContentError};
