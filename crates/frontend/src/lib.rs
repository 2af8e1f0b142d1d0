//! Operations dashboard: Leptos CSR frontend drawing Chart.js charts in three
//! tabbed views.

pub mod app;
pub mod app_shell;
pub mod dashboards;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Installs console logging and the panic hook, then mounts the dashboard
/// into `<body>`.
#[wasm_bindgen]
pub fn mount_dashboard() {
    // A second mount keeps the logger from the first one.
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("Mounting dashboard v{}", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    mount_dashboard();
}
