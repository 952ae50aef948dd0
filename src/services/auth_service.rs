use crate::models::{Credentials, LoginResponse, MessageResponse};
use crate::services::api_client::{ApiClient, ApiError};

/// Registro con email y password
pub async fn register(api: &ApiClient, credentials: &Credentials) -> Result<MessageResponse, ApiError> {
    log::info!("📝 [AUTH] Registrando {}", credentials.email);
    api.post_json("/auth/register", credentials).await
}

/// Login; devuelve el token de acceso
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    log::info!("🔐 [AUTH] Login de {}", credentials.email);
    api.post_json("/auth/login", credentials).await
}
