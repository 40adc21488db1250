//! UI layer for the portfolio page: app shell, navigation, sections, and theme.

pub mod app;
pub mod detail;
pub mod nav;
pub mod sections;
pub mod theme;

pub use app::PortfolioApp;
