use serde::{Deserialize, Serialize};

/// Perfil capturado en complete-profile y enviado a `PUT /profile`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub personal_goal: Option<String>,
    #[serde(default)]
    pub financial_goal: Option<String>,
}
