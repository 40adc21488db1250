//! Paged side navigation: drawer state on narrow viewports, page cursor,
//! and the active link.

use serde::{Deserialize, Serialize};
use shared::{
    domain::{MenuPage, NavLink},
    error::ViewError,
};
use tracing::{debug, error};

/// Widths strictly below this are treated as narrow.
pub const DEFAULT_NARROW_BREAKPOINT_PX: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuMode {
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    pub is_menu_open: bool,
    pub current_page_index: usize,
    pub active_link_name: Option<String>,
    pub is_narrow_viewport: bool,
}

#[derive(Debug, Clone)]
pub struct PagedMenuController {
    pages: Vec<MenuPage>,
    breakpoint_px: f32,
    state: MenuState,
}

impl PagedMenuController {
    /// Builds the controller for an initial viewport width. A narrow start
    /// is collapsed; a wide start is expanded.
    pub fn new(
        pages: Vec<MenuPage>,
        breakpoint_px: f32,
        initial_width_px: f32,
    ) -> Result<Self, ViewError> {
        if pages.is_empty() {
            error!("paged menu constructed without pages");
            return Err(ViewError::EmptyMenu);
        }
        let is_narrow_viewport = initial_width_px < breakpoint_px;
        Ok(Self {
            pages,
            breakpoint_px,
            state: MenuState {
                is_menu_open: !is_narrow_viewport,
                current_page_index: 0,
                active_link_name: None,
                is_narrow_viewport,
            },
        })
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn mode(&self) -> MenuMode {
        if self.state.is_menu_open {
            MenuMode::Expanded
        } else {
            MenuMode::Collapsed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_menu_open
    }

    pub fn is_narrow(&self) -> bool {
        self.state.is_narrow_viewport
    }

    pub fn breakpoint_px(&self) -> f32 {
        self.breakpoint_px
    }

    pub fn pages(&self) -> &[MenuPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page_index(&self) -> usize {
        self.state.current_page_index
    }

    pub fn current_page(&self) -> &MenuPage {
        &self.pages[self.state.current_page_index]
    }

    pub fn active_link_name(&self) -> Option<&str> {
        self.state.active_link_name.as_deref()
    }

    pub fn is_active(&self, link: &NavLink) -> bool {
        self.active_link_name() == Some(link.name.as_str())
    }

    /// Resize entry point. Only a breakpoint crossing changes state.
    pub fn set_viewport_width(&mut self, width_px: f32) {
        let narrow = width_px < self.breakpoint_px;
        if narrow == self.state.is_narrow_viewport {
            return;
        }
        self.state.is_narrow_viewport = narrow;
        self.state.is_menu_open = !narrow;
        debug!(width_px, narrow, mode = ?self.mode(), "menu crossed viewport breakpoint");
    }

    /// Drawer toggle; ignored on wide viewports where the menu is pinned.
    pub fn toggle_open(&mut self) {
        if !self.state.is_narrow_viewport {
            return;
        }
        self.state.is_menu_open = !self.state.is_menu_open;
        debug!(mode = ?self.mode(), "menu drawer toggled");
    }

    /// Marks `name` active. On narrow viewports this also closes the drawer.
    pub fn select_link(&mut self, name: &str) {
        if self.active_link_name() != Some(name) {
            self.state.active_link_name = Some(name.to_string());
            debug!(link = name, "menu link selected");
        }
        if self.state.is_narrow_viewport {
            self.state.is_menu_open = false;
        }
    }

    pub fn next_page(&mut self) {
        let count = self.pages.len();
        self.state.current_page_index = (self.state.current_page_index + 1) % count;
    }

    pub fn prev_page(&mut self) {
        let count = self.pages.len();
        self.state.current_page_index = (self.state.current_page_index + count - 1) % count;
    }

    /// Jumps to `index`; out-of-range requests leave the cursor untouched.
    pub fn go_to_page(&mut self, index: usize) -> Result<(), ViewError> {
        let page_count = self.pages.len();
        if index >= page_count {
            error!(index, page_count, "menu page index out of range");
            return Err(ViewError::PageOutOfRange { index, page_count });
        }
        self.state.current_page_index = index;
        Ok(())
    }

    /// Page holding the link called `name`, if any.
    pub fn page_of_link(&self, name: &str) -> Option<usize> {
        self.pages
            .iter()
            .position(|page| page.items.iter().any(|link| link.name == name))
    }
}

#[cfg(test)]
#[path = "tests/menu_tests.rs"]
mod tests;
