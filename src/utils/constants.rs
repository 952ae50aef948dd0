// ============================================================================
// CONSTANTES - Claves de storage y clases de nodos dinámicos
// ============================================================================

/// Token de sesión emitido por `POST /auth/login`
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Flag del tour de bienvenida ("true" cuando terminó o se canceló)
pub const TUTORIAL_COMPLETED_KEY: &str = "wopu_tutorial_completed";

/// Flag de perfil completado
pub const PROFILE_COMPLETED_KEY: &str = "wopu_profile_completed";

/// Perfil capturado en la vista complete-profile (JSON)
pub const USER_PROFILE_KEY: &str = "wopu_user_profile";

/// Clase de los `<link>` inyectados por el loader
pub const DYNAMIC_STYLE_CLASS: &str = "dynamic-style";

/// Clase de los `<script>` inyectados por el loader
pub const DYNAMIC_SCRIPT_CLASS: &str = "dynamic-script";

/// Clase de los links de navegación del sidebar (llevan `data-view`)
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Clase CSS del link activo
pub const ACTIVE_CLASS: &str = "active";

pub const NOT_FOUND_HTML: &str = "<h1>404 - Page Not Found</h1>";

pub const LOAD_ERROR_HTML: &str = "<h1>Error loading page. Please try again.</h1>";

/// Rol que habilita las vistas de administración
pub const ADMIN_ROLE: &str = "admin";

/// Eventos del tour de bienvenida (la librería del tour escucha/emite estos)
pub const TOUR_START_EVENT: &str = "wopu:tour-start";
pub const TOUR_FINISHED_EVENT: &str = "wopu:tour-finished";
