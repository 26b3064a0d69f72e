mod components;
mod config;
mod context;
mod hooks;
mod models;
mod routes;
mod services;
mod utils;
mod viewmodels;

use components::App;
use config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🍰 Dessert storefront starting... (API: {})", CONFIG.api_base_url());

    yew::Renderer::<App>::new().render();
}
