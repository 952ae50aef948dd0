// ============================================================================
// AUTH VIEWMODEL - Login / registro / a dónde ir después
// ============================================================================

use crate::models::{Credentials, MessageResponse};
use crate::utils::constants::PROFILE_COMPLETED_KEY;
use crate::utils::storage::{is_flag_set, KeyValueStore};

/// Página de la app (relativa a las páginas de auth)
pub const APP_PAGE: &str = "../app/index.html";
pub const LOGIN_PAGE: &str = "login.html";

/// Valida el formulario de login/registro
pub fn credentials_from_form(email: &str, password: &str) -> Result<Credentials, String> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required.".to_string());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address.".to_string());
    }
    Ok(Credentials { email: email.to_string(), password: password.to_string() })
}

/// Destino tras el login: tareas si el perfil ya está completo, si no complete-profile
pub fn landing_after_login(store: &dyn KeyValueStore) -> String {
    let view = if is_flag_set(store, PROFILE_COMPLETED_KEY) { "tasks" } else { "complete-profile" };
    format!("{}#{}", APP_PAGE, view)
}

/// Aviso tras el registro: el mensaje del servidor o uno por defecto
pub fn registration_message(response: &MessageResponse) -> String {
    response
        .message
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "Registration successful! Please log in.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStore;

    #[test]
    fn credentials_require_both_fields() {
        assert!(credentials_from_form("", "secret").is_err());
        assert!(credentials_from_form("a@b.c", "").is_err());
        assert!(credentials_from_form("not-an-email", "secret").is_err());
        let creds = credentials_from_form("  miguel@example.com ", "secret").unwrap();
        assert_eq!(creds.email, "miguel@example.com");
    }

    #[test]
    fn new_users_complete_their_profile_first() {
        assert_eq!(landing_after_login(&MemoryStore::new()), "../app/index.html#complete-profile");
        let store = MemoryStore::new().with_item(PROFILE_COMPLETED_KEY, "true");
        assert_eq!(landing_after_login(&store), "../app/index.html#tasks");
    }

    #[test]
    fn registration_message_falls_back_when_server_is_silent() {
        let default = "Registration successful! Please log in.";
        assert_eq!(registration_message(&MessageResponse { message: None }), default);
        assert_eq!(registration_message(&MessageResponse { message: Some(String::new()) }), default);
        assert_eq!(
            registration_message(&MessageResponse { message: Some("User registered successfully.".into()) }),
            "User registered successfully."
        );
    }
}
