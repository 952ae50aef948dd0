// ============================================================================
// WEB VIEW HOST - Implementación de `ViewHost` sobre el DOM real
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, Element};

use crate::dom::{document, query_selector_all, window, ElementBuilder};
use crate::router::{HostError, ViewHost};
use crate::utils::constants::{
    ACTIVE_CLASS, DYNAMIC_SCRIPT_CLASS, DYNAMIC_STYLE_CLASS, NAV_LINK_CLASS, TOUR_START_EVENT,
};

fn host_err(context: &str, e: JsValue) -> HostError {
    HostError::new(format!("{}: {:?}", context, e))
}

pub struct WebViewHost {
    container: Element,
}

impl WebViewHost {
    /// `container_id`: elemento donde se inyecta el HTML de cada vista
    pub fn new(container_id: &str) -> Result<Self, JsValue> {
        let container = crate::dom::require_element(container_id)?;
        Ok(Self { container })
    }

    fn nav_links(&self) -> Vec<Element> {
        query_selector_all(&format!(".{}[data-view]", NAV_LINK_CLASS)).unwrap_or_default()
    }
}

impl ViewHost for WebViewHost {
    fn set_view_html(&self, html: &str) -> Result<(), HostError> {
        self.container.set_inner_html(html);
        Ok(())
    }

    fn remove_dynamic_nodes(&self) -> Result<(), HostError> {
        let selector = format!(".{}, .{}", DYNAMIC_STYLE_CLASS, DYNAMIC_SCRIPT_CLASS);
        let nodes = query_selector_all(&selector).map_err(|e| host_err("querySelectorAll", e))?;
        for node in &nodes {
            node.remove();
        }
        if !nodes.is_empty() {
            log::debug!("🧹 [HOST] {} nodos dinámicos eliminados", nodes.len());
        }
        Ok(())
    }

    fn append_stylesheet(&self, href: &str) -> Result<(), HostError> {
        let head = document()
            .and_then(|doc| doc.head())
            .ok_or_else(|| HostError::new("No <head>"))?;

        let link = ElementBuilder::new("link")
            .and_then(|b| b.attr("rel", "stylesheet"))
            .and_then(|b| b.attr("href", href))
            .map(|b| b.class(DYNAMIC_STYLE_CLASS).build())
            .map_err(|e| host_err("create <link>", e))?;

        head.append_child(&link).map(|_| ()).map_err(|e| host_err("append <link>", e))
    }

    fn append_module_script(&self, src: &str) -> Result<(), HostError> {
        let body = document()
            .and_then(|doc| doc.body())
            .ok_or_else(|| HostError::new("No <body>"))?;

        let script = ElementBuilder::new("script")
            .and_then(|b| b.attr("type", "module"))
            .and_then(|b| b.attr("src", src))
            .map(|b| b.class(DYNAMIC_SCRIPT_CLASS).build())
            .map_err(|e| host_err("create <script>", e))?;

        body.append_child(&script).map(|_| ()).map_err(|e| host_err("append <script>", e))
    }

    fn location_fragment(&self) -> String {
        window()
            .and_then(|win| win.location().hash().ok())
            .map(|hash| hash.trim_start_matches('#').to_string())
            .unwrap_or_default()
    }

    fn replace_fragment(&self, view: &str) -> Result<(), HostError> {
        // replaceState no dispara hashchange: la redirección no provoca una segunda carga
        let history = window()
            .ok_or_else(|| HostError::new("No window"))?
            .history()
            .map_err(|e| host_err("history", e))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", view)))
            .map_err(|e| host_err("history.replaceState", e))
    }

    fn nav_link_views(&self) -> Vec<String> {
        self.nav_links()
            .iter()
            .filter_map(|link| link.get_attribute("data-view"))
            .collect()
    }

    fn set_nav_link_active(&self, view: &str, active: bool) -> Result<(), HostError> {
        for link in self.nav_links() {
            if link.get_attribute("data-view").as_deref() != Some(view) {
                continue;
            }
            let class_list = link.class_list();
            let result = if active { class_list.add_1(ACTIVE_CLASS) } else { class_list.remove_1(ACTIVE_CLASS) };
            result.map_err(|e| host_err("classList", e))?;
        }
        Ok(())
    }

    fn signal_tour_start(&self, steps_json: &str, delay_ms: u32) {
        let steps_json = steps_json.to_string();
        Timeout::new(delay_ms, move || {
            let Some(win) = window() else { return };

            let init = CustomEventInit::new();
            init.set_detail(&JsValue::from_str(&steps_json));
            match CustomEvent::new_with_event_init_dict(TOUR_START_EVENT, &init) {
                Ok(event) => {
                    if let Err(e) = win.dispatch_event(&event) {
                        log::error!("❌ [HOST] Error despachando {}: {:?}", TOUR_START_EVENT, e);
                    }
                }
                Err(e) => log::error!("❌ [HOST] Error creando {}: {:?}", TOUR_START_EVENT, e),
            }
        })
        .forget();
    }
}
