// ============================================================================
// VIEW LOADER - Inyecta HTML, CSS y módulo JS de una vista
// ============================================================================
// Invariante: los nodos dinámicos presentes en el documento corresponden
// exactamente a la última vista cargada. Se eliminan TODOS antes de agregar
// los nuevos.
// ============================================================================

use std::rc::Rc;

use crate::router::error::LoadError;
use crate::router::host::{FragmentFetcher, ViewHost};
use crate::router::routes::RouteTable;
use crate::utils::constants::{LOAD_ERROR_HTML, NOT_FOUND_HTML};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadOutcome {
    Loaded,
    /// La vista no existe en la tabla; se mostró el placeholder 404
    NotFound,
}

pub struct ViewLoader<F> {
    routes: Rc<RouteTable>,
    fetcher: F,
}

impl<F: FragmentFetcher> ViewLoader<F> {
    pub fn new(routes: Rc<RouteTable>, fetcher: F) -> Self {
        Self { routes, fetcher }
    }

    /// Carga `view` en el host.
    ///
    /// Si la descarga del HTML falla se muestra un mensaje de error genérico y se
    /// devuelve el `LoadError` (sin reintentos ni render parcial).
    pub async fn load_view<H: ViewHost>(&self, host: &H, view: &str) -> Result<LoadOutcome, LoadError> {
        let Some(route) = self.routes.get(view) else {
            log::error!("❌ [LOADER] Vista \"{}\" no encontrada", view);
            host.set_view_html(NOT_FOUND_HTML)?;
            return Ok(LoadOutcome::NotFound);
        };

        host.remove_dynamic_nodes()?;

        let html = match self.fetcher.fetch_fragment(&route.html_path).await {
            Ok(html) => html,
            Err(e) => {
                log::error!("❌ [LOADER] Error cargando vista {}: {}", view, e);
                host.set_view_html(LOAD_ERROR_HTML)?;
                return Err(e);
            }
        };
        host.set_view_html(&html)?;

        for css_path in &route.css_paths {
            host.append_stylesheet(css_path)?;
        }

        if let Some(js_path) = &route.js_path {
            host.append_module_script(&cache_busted(js_path))?;
        }

        log::info!("✅ [LOADER] Vista cargada: {}", view);
        Ok(LoadOutcome::Loaded)
    }
}

/// Agrega `?t=<epoch ms>` para que el navegador no sirva un módulo cacheado
pub fn cache_busted(path: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", path, separator, chrono::Utc::now().timestamp_millis())
}
