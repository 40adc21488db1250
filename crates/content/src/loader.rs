use std::{fs, path::Path};

use anyhow::Context;
use shared::domain::SiteContent;
use tracing::info;

use crate::{builtin::builtin_site_content, validate::validate_site_content};

/// Loads content from `path`, or the built-in content when `path` is `None`.
/// Either way the result has passed validation.
pub fn load_site_content(path: Option<&Path>) -> anyhow::Result<SiteContent> {
    let content = match path {
        Some(path) => {
            let content = read_content_file(path)?;
            info!(path = %path.display(), projects = content.projects.len(), "loaded site content");
            content
        }
        None => builtin_site_content(),
    };
    validate_site_content(&content).context("site content failed validation")?;
    Ok(content)
}

pub fn read_content_file(path: &Path) -> anyhow::Result<SiteContent> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read content file '{}'", path.display()))?;
    parse_site_content(&raw)
        .with_context(|| format!("failed to parse content file '{}'", path.display()))
}

pub fn parse_site_content(raw: &str) -> anyhow::Result<SiteContent> {
    Ok(toml::from_str::<SiteContent>(raw)?)
}

pub fn render_site_content(content: &SiteContent) -> anyhow::Result<String> {
    toml::to_string_pretty(content).context("failed to render site content as TOML")
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
