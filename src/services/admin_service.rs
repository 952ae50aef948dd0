use crate::models::User;
use crate::services::api_client::{ApiClient, ApiError};

/// Lista de usuarios (el servidor exige rol admin)
pub async fn fetch_users(api: &ApiClient) -> Result<Vec<User>, ApiError> {
    let users: Vec<User> = api.get_json("/users").await?;
    log::info!("👥 [ADMIN] {} usuarios obtenidos", users.len());
    Ok(users)
}
