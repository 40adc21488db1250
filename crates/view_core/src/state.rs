use serde::{Deserialize, Serialize};
use shared::domain::{FilterKey, ItemId};

use crate::{
    gallery::FilterableGalleryController, menu::PagedMenuController,
    visibility::VisibilityController,
};

/// Read-only snapshot of every view flag on a page, for renderers and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub is_visible: bool,
    pub is_menu_open: bool,
    pub active_link_name: Option<String>,
    pub current_page_index: usize,
    pub active_filter_key: FilterKey,
    pub selected_item_id: Option<ItemId>,
    pub is_detail_open: bool,
    pub is_narrow_viewport: bool,
}

impl ViewState {
    pub fn capture(
        visibility: &VisibilityController,
        menu: &PagedMenuController,
        gallery: &FilterableGalleryController,
    ) -> Self {
        let menu_state = menu.state();
        let gallery_state = gallery.state();
        Self {
            is_visible: visibility.is_visible(),
            is_menu_open: menu_state.is_menu_open,
            active_link_name: menu_state.active_link_name.clone(),
            current_page_index: menu_state.current_page_index,
            active_filter_key: gallery_state.active_filter_key,
            selected_item_id: gallery_state.selected_item_id,
            is_detail_open: gallery_state.is_detail_open,
            is_narrow_viewport: menu_state.is_narrow_viewport,
        }
    }
}
