//! Rendering of the dashboard page and its summary

pub mod card;
pub mod page;
pub mod script;
pub mod sidebar;
pub mod styles;
pub mod summary;
pub mod video;

pub use page::DashboardRenderer;
pub use summary::SummaryReporter;
