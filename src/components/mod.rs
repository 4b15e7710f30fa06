//! UI Components
//!
//! Reusable Leptos components.

mod modal;
mod loading;
mod dashboard_header;
mod sidebar;
mod pagination;

pub use modal::ModalHost;
pub use loading::Loading;
pub use dashboard_header::DashboardHeader;
pub use sidebar::AppSidebar;
pub use pagination::{PageSizeSelect, PaginationBar, SearchBar};
