#![allow(warnings)]
//! PulseFit Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod data;
mod list;
mod markdown;
mod models;
mod store;
mod thread;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
