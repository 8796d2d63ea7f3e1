#![allow(warnings)]
//! Yello Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod models;
mod notify;
mod route;
mod session;
mod storage;
mod store;
mod vote;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
