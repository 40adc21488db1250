//! Controller layer: UI events, page-level state transitions, and event queue orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
