// ============================================================================
// JWT - Lectura de claims SIN verificar la firma
// ============================================================================
// Solo sirve para decidir qué mostrar (gating de UI). El servidor vuelve a
// validar el token en cada request protegido; nunca usar esto como control
// de acceso real.
// ============================================================================

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;

use crate::models::SessionClaims;

/// Payload tal como lo emite el backend: `{ user: { id, role }, iat, exp }`.
/// También se acepta la forma plana `{ userId | id, role }`.
#[derive(Deserialize)]
struct RawPayload {
    user: Option<RawUser>,
    #[serde(rename = "userId", alias = "id")]
    user_id: Option<serde_json::Value>,
    role: Option<String>,
    exp: Option<i64>,
}

#[derive(Deserialize)]
struct RawUser {
    id: serde_json::Value,
    role: String,
}

/// Decodifica el segmento central del token. `None` ante cualquier entrada mal formada.
pub fn decode_claims(token: &str) -> Option<SessionClaims> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let payload_segment = token.split('.').nth(1).filter(|s| !s.is_empty())?;
    let bytes = decode_segment(payload_segment)?;

    let raw: RawPayload = match serde_json::from_slice(&bytes) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("⚠️ [JWT] Payload no es JSON válido: {}", e);
            return None;
        }
    };

    let (id, role) = match raw.user {
        Some(user) => (user.id, user.role),
        None => (raw.user_id?, raw.role?),
    };

    Some(SessionClaims {
        user_id: id_to_string(&id)?,
        role,
        expires_at: raw.exp,
    })
}

/// base64url sin padding; se tolera padding y alfabeto estándar
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    let trimmed = segment.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
        .map_err(|e| log::warn!("⚠️ [JWT] Segmento base64 inválido: {}", e))
        .ok()
}

fn id_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decodes_nested_user_payload() {
        let token = token_with(r#"{"user":{"id":42,"role":"admin"},"iat":1,"exp":3600}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_id, "42");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.expires_at, Some(3600));
    }

    #[test]
    fn decodes_flat_payload() {
        let token = token_with(r#"{"userId":"u-7","role":"user"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_id, "u-7");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.expires_at, None);
    }

    #[test]
    fn tolerates_padded_segments() {
        let payload = base64::engine::general_purpose::URL_SAFE
            .encode(r#"{"user":{"id":1,"role":"user"}}"#);
        let token = format!("h.{}.s", payload);
        assert_eq!(decode_claims(&token).unwrap().user_id, "1");
    }

    #[test]
    fn malformed_tokens_decode_to_none() {
        assert!(decode_claims("").is_none());
        assert!(decode_claims("no-dots-at-all").is_none());
        assert!(decode_claims("header..signature").is_none());
        assert!(decode_claims("header.@@@not-base64@@@.sig").is_none());
        assert!(decode_claims(&token_with("not json")).is_none());
        assert!(decode_claims(&token_with(r#"{"userId":5}"#)).is_none());
        assert!(decode_claims(&token_with(r#"{"user":{"id":null,"role":"user"}}"#)).is_none());
    }
}
