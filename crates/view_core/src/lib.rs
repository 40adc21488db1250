//! Presentation-state controllers for the portfolio page.
//!
//! Each view mounts its own controller instance and owns it for its
//! lifetime. All operations run to completion on the UI thread, so shared
//! resources use `Rc`/`Cell` rather than locks.

pub mod entrance;
pub mod gallery;
pub mod menu;
pub mod observer;
pub mod scroll_lock;
pub mod state;
pub mod visibility;

pub use entrance::{skill_fill_fraction, EntranceSchedule};
pub use gallery::{
    derive_filter_options, FilterResolution, FilterableGalleryController, GalleryState,
};
pub use menu::{MenuMode, MenuState, PagedMenuController, DEFAULT_NARROW_BREAKPOINT_PX};
pub use observer::{Observation, ObservedTarget, ObserverRegistry};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use state::ViewState;
pub use visibility::{VisibilityController, VisibilityTrigger, DEFAULT_REVEAL_THRESHOLD};
