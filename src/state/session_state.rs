// ============================================================================
// SESSION STATE - Token local + claims para gating de UI
// ============================================================================
// El token se guarda al hacer login y se borra al hacer logout; el cliente
// nunca lo refresca. Los claims se decodifican en cada consulta (sin cache)
// para reflejar siempre lo que hay en storage.
// ============================================================================

use std::rc::Rc;

use crate::models::SessionClaims;
use crate::utils::constants::ACCESS_TOKEN_KEY;
use crate::utils::jwt::decode_claims;
use crate::utils::storage::KeyValueStore;

#[derive(Clone)]
pub struct SessionState {
    store: Rc<dyn KeyValueStore>,
}

impl SessionState {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get_item(ACCESS_TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    /// Claims del token actual; `None` = no autenticado
    pub fn claims(&self) -> Option<SessionClaims> {
        self.token().as_deref().and_then(decode_claims)
    }

    pub fn is_authenticated(&self) -> bool {
        self.claims().is_some()
    }

    /// ¿Los claims actuales conceden `role`?
    pub fn grants(&self, role: &str) -> bool {
        self.claims().map(|c| c.has_role(role)).unwrap_or(false)
    }

    pub fn sign_in(&self, token: &str) -> Result<(), String> {
        self.store.set_item(ACCESS_TOKEN_KEY, token)?;
        match self.claims() {
            Some(claims) => log::info!("🔐 [SESSION] Sesión iniciada (user {}, rol {})", claims.user_id, claims.role),
            None => log::warn!("⚠️ [SESSION] Token guardado pero no se pudieron leer sus claims"),
        }
        Ok(())
    }

    pub fn sign_out(&self) -> Result<(), String> {
        log::info!("👋 [SESSION] Cerrando sesión");
        self.store.remove_item(ACCESS_TOKEN_KEY)
    }
}
