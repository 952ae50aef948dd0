// ============================================================================
// PUERTOS - Lo que el router necesita del navegador
// ============================================================================
// `dom::WebViewHost` y `services::HttpFragmentFetcher` son las implementaciones
// reales; los tests usan dobles en memoria.
// ============================================================================

use crate::router::error::{HostError, LoadError};

/// Documento + location + sidebar de navegación
pub trait ViewHost {
    /// Reemplaza el contenido del contenedor de vistas
    fn set_view_html(&self, html: &str) -> Result<(), HostError>;

    /// Elimina todos los `<link>`/`<script>` marcados como dinámicos
    fn remove_dynamic_nodes(&self) -> Result<(), HostError>;

    /// Agrega un `<link rel="stylesheet">` marcado como dinámico al `<head>`
    fn append_stylesheet(&self, href: &str) -> Result<(), HostError>;

    /// Agrega un `<script type="module">` marcado como dinámico al `<body>`
    fn append_module_script(&self, src: &str) -> Result<(), HostError>;

    /// Fragmento actual sin `#` (vacío si no hay)
    fn location_fragment(&self) -> String;

    /// Reescribe el fragmento visible sin agregar una entrada al historial
    fn replace_fragment(&self, view: &str) -> Result<(), HostError>;

    /// Valores `data-view` de los links de navegación
    fn nav_link_views(&self) -> Vec<String>;

    fn set_nav_link_active(&self, view: &str, active: bool) -> Result<(), HostError>;

    /// Pide a la librería del tour que arranque pasados `delay_ms`
    fn signal_tour_start(&self, steps_json: &str, delay_ms: u32);
}

/// Descarga del fragmento HTML de una vista
#[allow(async_fn_in_trait)]
pub trait FragmentFetcher {
    async fn fetch_fragment(&self, path: &str) -> Result<String, LoadError>;
}
