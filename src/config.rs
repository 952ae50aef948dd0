use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub landing_view: String,
    pub fallback_view: String,
    pub view_container_id: String,
    pub enable_logging: bool,
    pub tour_start_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api".to_string(),
            landing_view: "tasks".to_string(),
            fallback_view: "not-found".to_string(),
            view_container_id: "view-container".to_string(),
            enable_logging: true,
            tour_start_delay_ms: 500,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            landing_view: option_env!("LANDING_VIEW")
                .map(str::to_string)
                .unwrap_or(defaults.landing_view),
            fallback_view: option_env!("FALLBACK_VIEW")
                .map(str::to_string)
                .unwrap_or(defaults.fallback_view),
            view_container_id: option_env!("VIEW_CONTAINER_ID")
                .map(str::to_string)
                .unwrap_or(defaults.view_container_id),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            tour_start_delay_ms: option_env!("TOUR_START_DELAY_MS")
                .unwrap_or("500").parse().unwrap_or(500),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_router_conventions() {
        let config = AppConfig::default();
        assert_eq!(config.landing_view, "tasks");
        assert_eq!(config.fallback_view, "not-found");
        assert_eq!(config.view_container_id, "view-container");
    }
}
