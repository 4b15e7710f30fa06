//! Build-time Configuration
//!
//! Constants resolved at compile time. The API base URL can be overridden
//! with the `API_BASE_URL` environment variable when building.

/// Remote API base URL
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "authToken";

// ========================
// Route Paths
// ========================

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROPERTIES_PATH: &str = "/dashboard/properties";
pub const FREIGHT_PATH: &str = "/dashboard/freight";

// ========================
// Freight Values Paging
// ========================

/// Page size used when a freight is first opened
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Choices offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: &[u32] = &[5, 10, 20, 50];

/// Delay before leaving the login page after a successful login
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1500;
