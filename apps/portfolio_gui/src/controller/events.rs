//! UI events and status notices for the portfolio page controller.

use shared::{
    domain::ItemId,
    error::{ErrorCode, ErrorReport, ViewError},
};

/// Page regions that mount their own visibility controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Section a nav target scrolls to. Targets without a section on this
    /// page (external links, unknown routes) return `None`.
    pub fn for_target(target: &str) -> Option<Section> {
        match target.trim().trim_end_matches('/') {
            "" => Some(Section::Hero),
            "/about" | "/resume" => Some(Section::About),
            "/portfolio" | "/projects" => Some(Section::Projects),
            "/contact" => Some(Section::Contact),
            _ => None,
        }
    }
}

pub enum UiEvent {
    FrameRendered,
    ViewportResized {
        width_px: f32,
    },
    SectionIntersected {
        section: Section,
        visible_fraction: f32,
    },
    ToggleMenu,
    SelectLink {
        name: String,
        target: String,
    },
    NextMenuPage,
    PrevMenuPage,
    GoToMenuPage(usize),
    SetFilter(String),
    OpenDetail(ItemId),
    CloseDetail,
    /// Action whose destination is not part of this page.
    Placeholder {
        label: String,
        target: String,
    },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::FrameRendered => "frame_rendered",
            UiEvent::ViewportResized { .. } => "viewport_resized",
            UiEvent::SectionIntersected { .. } => "section_intersected",
            UiEvent::ToggleMenu => "toggle_menu",
            UiEvent::SelectLink { .. } => "select_link",
            UiEvent::NextMenuPage => "next_menu_page",
            UiEvent::PrevMenuPage => "prev_menu_page",
            UiEvent::GoToMenuPage(_) => "go_to_menu_page",
            UiEvent::SetFilter(_) => "set_filter",
            UiEvent::OpenDetail(_) => "open_detail",
            UiEvent::CloseDetail => "close_detail",
            UiEvent::Placeholder { .. } => "placeholder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotice {
    severity: NoticeSeverity,
    message: String,
}

impl StatusNotice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> NoticeSeverity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&ErrorReport> for StatusNotice {
    fn from(report: &ErrorReport) -> Self {
        let severity = match report.code {
            ErrorCode::DegradedInput => NoticeSeverity::Warning,
            ErrorCode::InvalidArgument | ErrorCode::InvalidContent => NoticeSeverity::Error,
        };
        Self {
            severity,
            message: report.message.clone(),
        }
    }
}

impl From<&ViewError> for StatusNotice {
    fn from(err: &ViewError) -> Self {
        Self::from(&ErrorReport::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_map_to_page_sections() {
        assert_eq!(Section::for_target("/"), Some(Section::Hero));
        assert_eq!(Section::for_target("/about/"), Some(Section::About));
        assert_eq!(Section::for_target("/resume"), Some(Section::About));
        assert_eq!(Section::for_target("/portfolio"), Some(Section::Projects));
        assert_eq!(Section::for_target("/contact"), Some(Section::Contact));
        assert_eq!(Section::for_target("https://github.com"), None);
    }

    #[test]
    fn view_errors_become_error_notices() {
        let notice = StatusNotice::from(&ViewError::PageOutOfRange {
            index: 4,
            page_count: 2,
        });
        assert_eq!(notice.severity(), NoticeSeverity::Error);
        assert!(notice.message().contains('4'));
    }

    #[test]
    fn degraded_reports_become_warning_notices() {
        let report = ErrorReport::new(ErrorCode::DegradedInput, "showing all projects");
        let notice = StatusNotice::from(&report);
        assert_eq!(notice.severity(), NoticeSeverity::Warning);
        assert_eq!(notice.message(), "showing all projects");
    }
}
