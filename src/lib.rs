// ============================================================================
// WOPU WEB - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura:
// - Router: tabla de rutas + loader de vistas + controlador de navegación
// - Views: render de HTML + `mount_*` exportados a los módulos JS de cada vista
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API
// - State: sesión (token/claims) y onboarding
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod utils;
pub mod router;
pub mod state;
pub mod dom;
pub mod services;
pub mod viewmodels;
pub mod views;
mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Instancia viva de la app (los listeners globales la referencian)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Debug } else { log::Level::Warn };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 Wopu - Rust + MVVM");

    if let Some(app) = App::new()? {
        app.start()?;
        APP.with(|cell| *cell.borrow_mut() = Some(app));
    }

    Ok(())
}
