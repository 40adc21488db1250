use std::collections::HashSet;

use shared::{
    domain::{FilterKey, SiteContent},
    error::ErrorCode,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("menu must contain at least one page")]
    EmptyMenu,
    #[error("menu page '{title}' has no links")]
    EmptyPage { title: String },
    #[error("menu link name '{name}' is used more than once")]
    DuplicateLinkName { name: String },
    #[error("project id {id} is used more than once")]
    DuplicateProjectId { id: i64 },
    #[error("skill '{name}' has level {level}; levels must be between 0 and 100")]
    SkillLevelOutOfRange { name: String, level: u8 },
    #[error("filter '{key}' is listed more than once")]
    DuplicateFilter { key: String },
    #[error("filter '{key}' names a category no project belongs to")]
    FilterWithoutProjects { key: String },
}

impl ContentError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidContent
    }
}

/// Checks the shape invariants the controllers rely on.
pub fn validate_site_content(content: &SiteContent) -> Result<(), ContentError> {
    if content.menu.is_empty() {
        return Err(ContentError::EmptyMenu);
    }

    let mut link_names = HashSet::new();
    for page in &content.menu {
        if page.items.is_empty() {
            return Err(ContentError::EmptyPage {
                title: page.title.clone(),
            });
        }
        for link in &page.items {
            if !link_names.insert(link.name.as_str()) {
                return Err(ContentError::DuplicateLinkName {
                    name: link.name.clone(),
                });
            }
        }
    }

    let mut ids = HashSet::new();
    for project in &content.projects {
        if !ids.insert(project.id) {
            return Err(ContentError::DuplicateProjectId { id: project.id.0 });
        }
    }

    if let Some(skill) = content.skills.iter().find(|skill| skill.level > 100) {
        return Err(ContentError::SkillLevelOutOfRange {
            name: skill.name.clone(),
            level: skill.level,
        });
    }

    let mut filter_keys = HashSet::new();
    for option in &content.filters {
        if !filter_keys.insert(option.key) {
            return Err(ContentError::DuplicateFilter {
                key: option.key.to_string(),
            });
        }
        if let FilterKey::Category(category) = option.key {
            if !content
                .projects
                .iter()
                .any(|project| project.category == category)
            {
                return Err(ContentError::FilterWithoutProjects {
                    key: option.key.to_string(),
                });
            }
        }
    }

    Ok(())
}
