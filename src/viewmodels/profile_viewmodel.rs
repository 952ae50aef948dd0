use serde::{Deserialize, Serialize};

use crate::models::UserProfile;
use crate::utils::constants::{PROFILE_COMPLETED_KEY, USER_PROFILE_KEY};
use crate::utils::storage::{save_json, KeyValueStore};

/// Formulario de complete-profile
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub personal_goal: String,
    pub financial_goal: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ProfileForm {
    pub fn to_profile(&self) -> Result<UserProfile, String> {
        let full_name = format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string();
        if full_name.is_empty() {
            return Err("Full name is required.".to_string());
        }
        Ok(UserProfile {
            full_name,
            date_of_birth: non_empty(&self.dob),
            personal_goal: non_empty(&self.personal_goal),
            financial_goal: non_empty(&self.financial_goal),
        })
    }

    /// Guarda el formulario y marca el perfil como completado
    pub fn save_locally(&self, store: &dyn KeyValueStore) -> Result<(), String> {
        save_json(store, USER_PROFILE_KEY, self)?;
        store.set_item(PROFILE_COMPLETED_KEY, "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::{is_flag_set, load_json, MemoryStore};

    fn form() -> ProfileForm {
        ProfileForm {
            first_name: " Ana ".into(),
            last_name: "Pérez".into(),
            dob: "1990-04-02".into(),
            personal_goal: "Read 20 books".into(),
            financial_goal: "".into(),
        }
    }

    #[test]
    fn builds_profile_with_full_name() {
        let profile = form().to_profile().unwrap();
        assert_eq!(profile.full_name, "Ana Pérez");
        assert_eq!(profile.financial_goal, None);
        assert_eq!(profile.date_of_birth.as_deref(), Some("1990-04-02"));
    }

    #[test]
    fn name_is_required() {
        let form = ProfileForm { first_name: " ".into(), ..Default::default() };
        assert!(form.to_profile().is_err());
    }

    #[test]
    fn save_sets_completion_flag() {
        let store = MemoryStore::new();
        form().save_locally(&store).unwrap();
        assert!(is_flag_set(&store, PROFILE_COMPLETED_KEY));
        assert_eq!(load_json::<ProfileForm>(&store, USER_PROFILE_KEY), Some(form()));
    }
}
