use serde::{Deserialize, Serialize};

/// Fila de la lista de usuarios (vista admin)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: String,
}
