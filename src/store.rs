//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Provided by the
//! dashboard shell and shared by its nested pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Customer, Freight, Property};

/// Data loaded for the logged-in customer
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Customer shown in the header
    pub customer: Option<Customer>,
    /// Property definitions (properties table and freight attachment picker)
    pub properties: Vec<Property>,
    /// Freights of the customer
    pub freights: Vec<Freight>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}
