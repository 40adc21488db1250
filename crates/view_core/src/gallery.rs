//! Category-filtered project catalog with a single detail overlay.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::{
    domain::{Category, FilterKey, FilterOption, GalleryItem, ItemId},
    error::{ErrorCode, ErrorReport, ViewError},
};
use tracing::{debug, error, warn};

use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// How a requested filter key was interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resolution", rename_all = "snake_case")]
pub enum FilterResolution {
    Applied { key: FilterKey },
    /// The key was not recognized and the gallery fell back to `all`.
    FellBackToAll { requested: String },
}

impl FilterResolution {
    pub fn key(&self) -> FilterKey {
        match self {
            FilterResolution::Applied { key } => *key,
            FilterResolution::FellBackToAll { .. } => FilterKey::All,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, FilterResolution::FellBackToAll { .. })
    }

    /// `DegradedInput` report for a fallback, `None` when the key applied as given.
    pub fn degraded_report(&self) -> Option<ErrorReport> {
        match self {
            FilterResolution::Applied { .. } => None,
            FilterResolution::FellBackToAll { requested } => Some(ErrorReport::new(
                ErrorCode::DegradedInput,
                format!("unrecognized filter '{requested}'; showing all projects"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryState {
    pub active_filter_key: FilterKey,
    pub selected_item_id: Option<ItemId>,
    pub is_detail_open: bool,
}

#[derive(Debug)]
pub struct FilterableGalleryController {
    catalog: Vec<GalleryItem>,
    filters: Vec<FilterOption>,
    active_filter: FilterKey,
    visible: Vec<usize>,
    selected: Option<ItemId>,
    scroll_lock: ScrollLock,
    lock_hold: Option<ScrollLockGuard>,
}

impl FilterableGalleryController {
    pub fn new(catalog: Vec<GalleryItem>, scroll_lock: ScrollLock) -> Result<Self, ViewError> {
        let filters = derive_filter_options(&catalog);
        Self::with_filters(catalog, filters, scroll_lock)
    }

    /// Like [`Self::new`] but with an explicit filter bar. An empty list
    /// falls back to the derived one.
    pub fn with_filters(
        catalog: Vec<GalleryItem>,
        filters: Vec<FilterOption>,
        scroll_lock: ScrollLock,
    ) -> Result<Self, ViewError> {
        let mut seen = HashSet::with_capacity(catalog.len());
        for item in &catalog {
            if !seen.insert(item.id) {
                error!(id = item.id.0, "gallery catalog contains duplicate id");
                return Err(ViewError::DuplicateItemId { id: item.id });
            }
        }
        let filters = if filters.is_empty() {
            derive_filter_options(&catalog)
        } else {
            filters
        };
        let visible = (0..catalog.len()).collect();
        Ok(Self {
            catalog,
            filters,
            active_filter: FilterKey::All,
            visible,
            selected: None,
            scroll_lock,
            lock_hold: None,
        })
    }

    pub fn catalog(&self) -> &[GalleryItem] {
        &self.catalog
    }

    pub fn filter_options(&self) -> &[FilterOption] {
        &self.filters
    }

    pub fn active_filter(&self) -> FilterKey {
        self.active_filter
    }

    /// Applies `key`. Unrecognized keys degrade to `all` rather than
    /// producing a silently empty grid.
    pub fn set_filter(&mut self, key: &str) -> FilterResolution {
        let resolution = match FilterKey::parse(key) {
            Some(parsed) => FilterResolution::Applied { key: parsed },
            None => {
                warn!(requested = key, "unrecognized gallery filter; showing all items");
                FilterResolution::FellBackToAll {
                    requested: key.to_string(),
                }
            }
        };
        self.apply_filter(resolution.key());
        resolution
    }

    pub fn apply_filter(&mut self, key: FilterKey) {
        self.active_filter = key;
        self.visible = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, item)| key.matches(item.category))
            .map(|(index, _)| index)
            .collect();
        debug!(filter = %key, visible = self.visible.len(), "gallery filter applied");
    }

    /// Items passing the active filter, in catalog order. May be empty.
    pub fn visible_items(&self) -> Vec<&GalleryItem> {
        self.visible.iter().map(|&index| &self.catalog[index]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn featured_items(&self) -> impl Iterator<Item = &GalleryItem> {
        self.catalog.iter().filter(|item| item.featured)
    }

    pub fn item(&self, id: ItemId) -> Option<&GalleryItem> {
        self.catalog.iter().find(|item| item.id == id)
    }

    /// Opens the detail overlay for `id` and suspends page scrolling.
    pub fn open_detail(&mut self, id: ItemId) -> Result<(), ViewError> {
        if self.item(id).is_none() {
            error!(id = id.0, "open_detail called with unknown gallery id");
            return Err(ViewError::UnknownItem { id });
        }
        self.selected = Some(id);
        if self.lock_hold.is_none() {
            self.lock_hold = Some(self.scroll_lock.acquire());
        }
        debug!(id = id.0, "gallery detail opened");
        Ok(())
    }

    /// Closes the overlay and releases the scroll lock. No-op when closed.
    pub fn close_detail(&mut self) {
        if self.selected.take().is_none() {
            return;
        }
        self.lock_hold = None;
        debug!("gallery detail closed");
    }

    pub fn is_detail_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_item_id(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&GalleryItem> {
        self.selected.and_then(|id| self.item(id))
    }

    pub fn state(&self) -> GalleryState {
        GalleryState {
            active_filter_key: self.active_filter,
            selected_item_id: self.selected,
            is_detail_open: self.is_detail_open(),
        }
    }
}

/// `All` followed by each category present in the catalog, in order of
/// first appearance.
pub fn derive_filter_options(catalog: &[GalleryItem]) -> Vec<FilterOption> {
    let mut categories: Vec<Category> = Vec::new();
    for item in catalog {
        if !categories.contains(&item.category) {
            categories.push(item.category);
        }
    }
    std::iter::once(FilterOption::all())
        .chain(categories.into_iter().map(FilterOption::for_category))
        .collect()
}

#[cfg(test)]
#[path = "tests/gallery_tests.rs"]
mod tests;
