//! Almazara Web Client
//!
//! Administration of an olive-oil mill cooperative, built with Leptos (WASM).
//!
//! # Features
//!
//! - Role dashboards for administrators, employees and members
//! - CRUD pages with searchable, paginated tables and modal forms
//! - Monthly bar charts of settlements and olive entries
//! - Logout after 15 minutes without activity
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! It talks to the mill's REST API over HTTP; every rule that does not touch
//! the DOM (pagination, formatting, aggregation, form coercion) comes from
//! the `almazara` library built without its native `client` feature.

use leptos::*;

mod api;
mod app;
mod components;
mod export;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
