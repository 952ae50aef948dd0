// ============================================================================
// AUTH PAGES - Login, registro y logout
// ============================================================================
// Páginas fuera del shell de la app (`auth/login.html`, `auth/register.html`).
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{alert, field_value, on_submit, redirect_to, require_element};
use crate::services::{auth_service, ApiClient};
use crate::state::SessionState;
use crate::utils::storage::{KeyValueStore, LocalStore};
use crate::viewmodels::auth_viewmodel::{
    credentials_from_form, landing_after_login, registration_message, APP_PAGE, LOGIN_PAGE,
};

fn read_credentials() -> Result<crate::models::Credentials, String> {
    credentials_from_form(
        &field_value("email").unwrap_or_default(),
        &field_value("password").unwrap_or_default(),
    )
}

fn go(href: &str) {
    if let Err(e) = redirect_to(href) {
        log::error!("❌ [AUTH] Error redirigiendo a {}: {:?}", href, e);
    }
}

async fn login(store: Rc<dyn KeyValueStore>) {
    let credentials = match read_credentials() {
        Ok(credentials) => credentials,
        Err(message) => return alert(&message),
    };

    match auth_service::login(&ApiClient::anonymous(), &credentials).await {
        Ok(response) => {
            let session = SessionState::new(store.clone());
            if let Err(e) = session.sign_in(&response.access_token) {
                log::error!("❌ [AUTH] No se pudo guardar el token: {}", e);
                return alert(&format!("Error: {}", e));
            }
            go(&landing_after_login(store.as_ref()));
        }
        Err(e) => alert(&format!("Error: {}", e.user_message())),
    }
}

async fn register() {
    let credentials = match read_credentials() {
        Ok(credentials) => credentials,
        Err(message) => return alert(&message),
    };

    match auth_service::register(&ApiClient::anonymous(), &credentials).await {
        Ok(response) => {
            alert(&registration_message(&response));
            go(LOGIN_PAGE);
        }
        Err(e) => alert(&format!("Error: {}", e.user_message())),
    }
}

/// Monta el formulario de login (`auth/login.html`)
#[wasm_bindgen]
pub fn mount_login_page() -> Result<(), JsValue> {
    log::info!("🔐 [AUTH] Montando login");
    let store: Rc<dyn KeyValueStore> = Rc::new(LocalStore);

    if SessionState::new(store.clone()).is_authenticated() {
        log::info!("🔐 [AUTH] Ya hay sesión, entrando a la app");
        go(&landing_after_login(store.as_ref()));
        return Ok(());
    }

    on_submit(&require_element("login-form")?, move || {
        spawn_local(login(store.clone()));
    })
}

/// Monta el formulario de registro (`auth/register.html`)
#[wasm_bindgen]
pub fn mount_register_page() -> Result<(), JsValue> {
    log::info!("📝 [AUTH] Montando registro");
    on_submit(&require_element("register-form")?, || spawn_local(register()))
}

/// Borra el token y vuelve al login
#[wasm_bindgen]
pub fn logout() -> Result<(), JsValue> {
    SessionState::new(Rc::new(LocalStore))
        .sign_out()
        .map_err(|e| JsValue::from_str(&e))?;
    redirect_to(&login_page_from_app())
}

/// Ruta del login vista desde la página de la app
pub fn login_page_from_app() -> String {
    APP_PAGE.replace("app/index.html", &format!("auth/{}", LOGIN_PAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_goes_back_to_auth_folder() {
        assert_eq!(login_page_from_app(), "../auth/login.html");
    }
}
