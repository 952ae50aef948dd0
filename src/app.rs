// ============================================================================
// APP - Shell de la aplicación (app/index.html)
// ============================================================================
// Dueño del controlador de navegación y del estado compartido. Registra los
// listeners globales una sola vez y lanza la navegación inicial.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::dom::{closest_from_target, on_click, on_window_event, query_selector, set_location_hash, WebViewHost};
use crate::router::{NavigationController, RouteTable};
use crate::services::HttpFragmentFetcher;
use crate::state::{OnboardingState, SessionState};
use crate::utils::constants::{NAV_LINK_CLASS, TOUR_FINISHED_EVENT};
use crate::utils::storage::{KeyValueStore, LocalStore};

type WebNavigation = NavigationController<WebViewHost, HttpFragmentFetcher>;

/// Aplicación principal
pub struct App {
    navigation: Rc<WebNavigation>,
    onboarding: Rc<OnboardingState>,
}

impl App {
    /// Crear la app sobre el contenedor configurado. `Ok(None)` si la página no
    /// es el shell (p. ej. login/registro cargan el mismo módulo).
    pub fn new() -> Result<Option<Self>, JsValue> {
        if crate::dom::get_element_by_id(&CONFIG.view_container_id).is_none() {
            log::debug!("🔍 [APP] Sin #{}, no se monta el router", CONFIG.view_container_id);
            return Ok(None);
        }

        let store: Rc<dyn KeyValueStore> = Rc::new(LocalStore);
        let onboarding = Rc::new(OnboardingState::new(store.clone()));
        let navigation = Rc::new(NavigationController::new(
            WebViewHost::new(&CONFIG.view_container_id)?,
            Rc::new(RouteTable::wopu()),
            HttpFragmentFetcher,
            SessionState::new(store),
            onboarding.clone(),
            &CONFIG,
        ));

        Ok(Some(Self { navigation, onboarding }))
    }

    /// Listeners globales + primera navegación
    pub fn start(&self) -> Result<(), JsValue> {
        let navigation = self.navigation.clone();
        on_window_event("hashchange", move |_| navigate(navigation.clone()))?;

        let onboarding = self.onboarding.clone();
        on_window_event(TOUR_FINISHED_EVENT, move |_| {
            if let Err(e) = onboarding.finish() {
                log::error!("❌ [APP] No se pudo guardar el fin del tour: {}", e);
            }
        })?;

        self.bind_sidebar()?;

        navigate(self.navigation.clone());
        Ok(())
    }

    /// Los links del sidebar solo cambian el hash; el resto lo hace `hashchange`
    fn bind_sidebar(&self) -> Result<(), JsValue> {
        let Some(sidebar) = query_selector(".sidebar-nav")? else {
            log::warn!("⚠️ [APP] Sin .sidebar-nav");
            return Ok(());
        };

        let selector = format!(".{}[data-view]", NAV_LINK_CLASS);
        on_click(&sidebar, move |event| {
            let Some(link) = closest_from_target(&event, &selector) else { return };
            event.prevent_default();
            if let Some(view) = link.get_attribute("data-view") {
                if let Err(e) = set_location_hash(&view) {
                    log::error!("❌ [APP] Error cambiando hash a {}: {:?}", view, e);
                }
            }
        })
    }
}

fn navigate(navigation: Rc<WebNavigation>) {
    spawn_local(async move {
        match navigation.handle_navigation().await {
            Ok(resolution) => log::debug!("🧭 [APP] Vista activa: {}", resolution.view),
            Err(e) => log::error!("❌ [APP] Error de navegación: {}", e),
        }
    });
}
