// ============================================================================
// COMPLETE PROFILE VIEW - Formulario de primer uso
// ============================================================================
// Guarda local + `PUT /profile`. Si el servidor falla se registra y se sigue:
// el flag local es lo que decide el destino tras el login.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{alert, field_value, on_submit, require_element, set_field_value, set_location_hash};
use crate::models::UserProfile;
use crate::services::{profile_service, ApiClient};
use crate::state::SessionState;
use crate::utils::constants::USER_PROFILE_KEY;
use crate::utils::storage::{load_json, KeyValueStore, LocalStore};
use crate::viewmodels::ProfileForm;

/// Formulario a partir del perfil del servidor (nombre partido en el primer espacio)
pub fn form_from_profile(profile: &UserProfile) -> ProfileForm {
    let (first_name, last_name) = profile
        .full_name
        .trim()
        .split_once(' ')
        .map(|(first, last)| (first.to_string(), last.trim().to_string()))
        .unwrap_or_else(|| (profile.full_name.trim().to_string(), String::new()));
    ProfileForm {
        first_name,
        last_name,
        dob: profile.date_of_birth.clone().unwrap_or_default(),
        personal_goal: profile.personal_goal.clone().unwrap_or_default(),
        financial_goal: profile.financial_goal.clone().unwrap_or_default(),
    }
}

fn fill_form(form: &ProfileForm) {
    set_field_value("first-name", &form.first_name);
    set_field_value("last-name", &form.last_name);
    set_field_value("dob", &form.dob);
    set_field_value("personal-goal", &form.personal_goal);
    set_field_value("financial-goal", &form.financial_goal);
}

fn read_form() -> ProfileForm {
    let value = |id: &str| field_value(id).unwrap_or_default();
    ProfileForm {
        first_name: value("first-name"),
        last_name: value("last-name"),
        dob: value("dob"),
        personal_goal: value("personal-goal"),
        financial_goal: value("financial-goal"),
    }
}

async fn submit(store: Rc<dyn KeyValueStore>, api: ApiClient, form: ProfileForm) {
    let profile = match form.to_profile() {
        Ok(profile) => profile,
        Err(message) => {
            alert(&message);
            return;
        }
    };

    if let Err(e) = form.save_locally(store.as_ref()) {
        log::error!("❌ [PROFILE] Error guardando perfil local: {}", e);
    }

    match profile_service::update_profile(&api, &profile).await {
        Ok(_) => log::info!("✅ [PROFILE] Perfil guardado en el servidor"),
        Err(e) => log::warn!("⚠️ [PROFILE] El servidor no guardó el perfil: {}", e),
    }

    alert("Profile complete! Welcome to Wopu.");
    if let Err(e) = set_location_hash("tasks") {
        log::error!("❌ [PROFILE] Error navegando a #tasks: {:?}", e);
    }
}

/// Monta el formulario de perfil (llamado desde `views/complete-profile.js`)
#[wasm_bindgen]
pub fn mount_complete_profile_view() -> Result<(), JsValue> {
    log::info!("👤 [PROFILE] Montando vista");
    let store: Rc<dyn KeyValueStore> = Rc::new(LocalStore);
    let api = ApiClient::from_session(&SessionState::new(store.clone()));

    match load_json::<ProfileForm>(store.as_ref(), USER_PROFILE_KEY) {
        Some(saved) => fill_form(&saved),
        None => {
            let api = api.clone();
            spawn_local(async move {
                if let Ok(profile) = profile_service::fetch_profile(&api).await {
                    fill_form(&form_from_profile(&profile));
                }
            });
        }
    }

    on_submit(&require_element("complete-profile-form")?, move || {
        spawn_local(submit(store.clone(), api.clone(), read_form()));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_profile_splits_full_name() {
        let profile = UserProfile {
            full_name: "Ana María Pérez".into(),
            date_of_birth: Some("1990-04-02".into()),
            personal_goal: None,
            financial_goal: Some("Save 10%".into()),
        };
        let form = form_from_profile(&profile);
        assert_eq!(form.first_name, "Ana");
        assert_eq!(form.last_name, "María Pérez");
        assert_eq!(form.dob, "1990-04-02");
        assert_eq!(form.personal_goal, "");
        assert_eq!(form.financial_goal, "Save 10%");
    }

    #[test]
    fn single_word_name_has_no_last_name() {
        let profile = UserProfile {
            full_name: "Miguel".into(),
            date_of_birth: None,
            personal_goal: None,
            financial_goal: None,
        };
        let form = form_from_profile(&profile);
        assert_eq!((form.first_name.as_str(), form.last_name.as_str()), ("Miguel", ""));
    }
}
