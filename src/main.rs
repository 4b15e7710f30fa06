//! Shipping Admin Frontend Entry Point

mod config;
mod models;
mod token;
mod session;
mod api;
mod validation;
mod state;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
