//! Routed Pages

mod login;
mod register;
mod dashboard;
mod properties;
mod freight;

pub use login::Login;
pub use register::Register;
pub use dashboard::{Dashboard, DashboardHome};
pub use properties::Properties;
pub use freight::FreightPage;
