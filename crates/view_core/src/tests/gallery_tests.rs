use super::*;

fn item(id: i64, category: Category) -> GalleryItem {
    GalleryItem {
        id: ItemId(id),
        title: format!("Project {id}"),
        description: String::new(),
        image_ref: format!("project-{id}.png"),
        category,
        technologies: vec!["Rust".to_string()],
        live_link: None,
        source_link: None,
        featured: id == 1,
    }
}

fn web_mobile_web() -> Vec<GalleryItem> {
    vec![
        item(1, Category::Web),
        item(2, Category::Mobile),
        item(3, Category::Web),
    ]
}

fn gallery() -> (FilterableGalleryController, ScrollLock) {
    let lock = ScrollLock::new();
    let gallery =
        FilterableGalleryController::new(web_mobile_web(), lock.clone()).expect("gallery");
    (gallery, lock)
}

fn visible_ids(gallery: &FilterableGalleryController) -> Vec<i64> {
    gallery.visible_items().iter().map(|item| item.id.0).collect()
}

#[test]
fn starts_unfiltered_with_detail_closed() {
    let (gallery, lock) = gallery();
    assert_eq!(gallery.active_filter(), FilterKey::All);
    assert_eq!(visible_ids(&gallery), vec![1, 2, 3]);
    assert!(!gallery.is_detail_open());
    assert!(!lock.is_locked());
}

#[test]
fn category_filter_preserves_catalog_order() {
    let (mut gallery, _) = gallery();
    let resolution = gallery.set_filter("web");
    assert_eq!(
        resolution,
        FilterResolution::Applied {
            key: FilterKey::Category(Category::Web)
        }
    );
    assert_eq!(visible_ids(&gallery), vec![1, 3]);
}

#[test]
fn known_category_without_items_yields_empty_result() {
    let (mut gallery, _) = gallery();
    gallery.set_filter("web");
    let resolution = gallery.set_filter("ai");
    assert!(!resolution.is_degraded());
    assert!(gallery.visible_items().is_empty());
    assert!(gallery.is_empty_result());
    assert_eq!(gallery.active_filter(), FilterKey::Category(Category::Ai));
}

#[test]
fn all_after_any_filter_restores_full_catalog() {
    let (mut gallery, _) = gallery();
    for key in ["web", "mobile", "ai", "design"] {
        gallery.set_filter(key);
        gallery.set_filter("all");
        assert_eq!(visible_ids(&gallery), vec![1, 2, 3]);
    }
}

#[test]
fn unknown_filter_key_falls_back_to_all() {
    let (mut gallery, _) = gallery();
    gallery.set_filter("mobile");
    let resolution = gallery.set_filter("mobiel");
    assert!(resolution.is_degraded());
    assert_eq!(resolution.key(), FilterKey::All);
    assert_eq!(gallery.active_filter(), FilterKey::All);
    assert_eq!(visible_ids(&gallery), vec![1, 2, 3]);

    let report = resolution.degraded_report().expect("fallback report");
    assert_eq!(report.code, ErrorCode::DegradedInput);
    assert!(report.message.contains("mobiel"));
}

#[test]
fn applied_filter_has_no_degraded_report() {
    let (mut gallery, _) = gallery();
    assert!(gallery.set_filter("web").degraded_report().is_none());
    assert!(gallery.set_filter("ai").degraded_report().is_none());
}

#[test]
fn open_then_close_clears_selection_and_releases_lock() {
    let (mut gallery, lock) = gallery();
    gallery.open_detail(ItemId(2)).expect("open");
    assert!(gallery.is_detail_open());
    assert_eq!(gallery.selected_item_id(), Some(ItemId(2)));
    assert_eq!(
        gallery.selected_item().map(|item| item.title.as_str()),
        Some("Project 2")
    );
    assert!(lock.is_locked());

    gallery.close_detail();
    assert!(!gallery.is_detail_open());
    assert_eq!(gallery.selected_item_id(), None);
    assert!(!lock.is_locked());

    gallery.close_detail();
    gallery.close_detail();
    assert!(!gallery.is_detail_open());
    assert_eq!(lock.holder_count(), 0);
}

#[test]
fn opening_unknown_id_is_invalid_argument_and_changes_nothing() {
    let (mut gallery, lock) = gallery();
    let err = gallery.open_detail(ItemId(99)).expect_err("unknown id");
    assert_eq!(err, ViewError::UnknownItem { id: ItemId(99) });
    assert_eq!(err.code(), shared::error::ErrorCode::InvalidArgument);
    assert!(!gallery.is_detail_open());
    assert!(!lock.is_locked());
}

#[test]
fn switching_detail_while_open_keeps_single_lock_hold() {
    let (mut gallery, lock) = gallery();
    gallery.open_detail(ItemId(1)).expect("open 1");
    gallery.open_detail(ItemId(3)).expect("open 3");
    assert_eq!(gallery.selected_item_id(), Some(ItemId(3)));
    assert_eq!(lock.holder_count(), 1);
    gallery.close_detail();
    assert!(!lock.is_locked());
}

#[test]
fn dropping_gallery_while_open_releases_lock() {
    let (mut gallery, lock) = gallery();
    gallery.open_detail(ItemId(1)).expect("open");
    drop(gallery);
    assert!(!lock.is_locked());
}

#[test]
fn two_galleries_share_lock_until_both_close() {
    let lock = ScrollLock::new();
    let mut first =
        FilterableGalleryController::new(web_mobile_web(), lock.clone()).expect("first");
    let mut second =
        FilterableGalleryController::new(web_mobile_web(), lock.clone()).expect("second");
    first.open_detail(ItemId(1)).expect("open first");
    second.open_detail(ItemId(2)).expect("open second");

    first.close_detail();
    assert!(lock.is_locked());
    second.close_detail();
    assert!(!lock.is_locked());
}

#[test]
fn filtering_keeps_detail_open() {
    let (mut gallery, lock) = gallery();
    gallery.open_detail(ItemId(2)).expect("open");
    gallery.set_filter("web");
    assert!(gallery.is_detail_open());
    assert!(lock.is_locked());
}

#[test]
fn rejects_duplicate_ids() {
    let catalog = vec![item(1, Category::Web), item(1, Category::Data)];
    let err = FilterableGalleryController::new(catalog, ScrollLock::new()).expect_err("dup");
    assert_eq!(err, ViewError::DuplicateItemId { id: ItemId(1) });
}

#[test]
fn derives_filter_options_in_first_appearance_order() {
    let catalog = vec![
        item(1, Category::Data),
        item(2, Category::Web),
        item(3, Category::Data),
    ];
    let keys: Vec<String> = derive_filter_options(&catalog)
        .into_iter()
        .map(|option| option.key.to_string())
        .collect();
    assert_eq!(keys, vec!["all", "data", "web"]);
}

#[test]
fn explicit_filter_list_overrides_derived_one() {
    let filters = vec![
        FilterOption::all(),
        FilterOption::for_category(Category::Ai),
    ];
    let gallery =
        FilterableGalleryController::with_filters(web_mobile_web(), filters, ScrollLock::new())
            .expect("gallery");
    assert_eq!(gallery.filter_options().len(), 2);
    assert_eq!(
        gallery.filter_options()[1].key,
        FilterKey::Category(Category::Ai)
    );
}

#[test]
fn state_snapshot_tracks_selection() {
    let (mut gallery, _) = gallery();
    gallery.set_filter("mobile");
    gallery.open_detail(ItemId(2)).expect("open");
    assert_eq!(
        gallery.state(),
        GalleryState {
            active_filter_key: FilterKey::Category(Category::Mobile),
            selected_item_id: Some(ItemId(2)),
            is_detail_open: true,
        }
    );
    assert_eq!(gallery.featured_items().count(), 1);
}
