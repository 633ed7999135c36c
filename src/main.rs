//! Diet Planner Frontend Entry Point

mod app;
mod bmi;
mod charts;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod form;
mod meal_plan;
mod models;
mod store;
mod tabs;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
