// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio. Agrega `Authorization: Bearer <token>` cuando hay
// token; el servidor revalida el token en cada request protegido.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::MessageResponse;
use crate::state::SessionState;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Mensaje para mostrar al usuario
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Extrae `message` (o `detail`) de un cuerpo de error; si no es JSON usa el texto
pub fn error_message(status: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body).ok().and_then(|json| {
        json.get("message")
            .or_else(|| json.get("detail"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    });

    match from_json {
        Some(message) if !message.is_empty() => message,
        _ if !body.trim().is_empty() && !body.trim_start().starts_with('{') => body.trim().to_string(),
        _ => format!("Request failed with status {}", status),
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Cliente con la URL configurada y el token de la sesión actual
    pub fn from_session(session: &SessionState) -> Self {
        Self::new(&CONFIG.api_base_url, session.token())
    }

    /// Cliente sin token (login / registro)
    pub fn anonymous() -> Self {
        Self::new(&CONFIG.api_base_url, None)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    async fn send_json<B: Serialize>(&self, builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        log::warn!("⚠️ [API] HTTP {} {}: {}", status, response.url(), message);
        Err(ApiError::Http { status, message })
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.authorize(Request::get(&self.url(path)));
        Self::parse(self.send(builder).await?).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let builder = self.authorize(Request::post(&self.url(path)));
        Self::parse(self.send_json(builder, body).await?).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let builder = self.authorize(Request::put(&self.url(path)));
        Self::parse(self.send_json(builder, body).await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<MessageResponse, ApiError> {
        let builder = self.authorize(Request::delete(&self.url(path)));
        let response = self.send(builder).await?;
        // Algunos endpoints responden sin cuerpo
        Ok(Self::parse(response).await.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_message() {
        assert_eq!(error_message(409, r#"{"message":"Email already in use."}"#), "Email already in use.");
        assert_eq!(error_message(401, r#"{"detail":"Invalid credentials."}"#), "Invalid credentials.");
    }

    #[test]
    fn error_message_falls_back_to_text_or_status() {
        assert_eq!(error_message(502, "Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(500, ""), "Request failed with status 500");
        assert_eq!(error_message(500, r#"{"error":true}"#), "Request failed with status 500");
    }

    #[test]
    fn url_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:3000/api/", None);
        assert_eq!(client.url("/tasks"), "http://localhost:3000/api/tasks");
    }

    #[test]
    fn http_errors_show_server_message() {
        let err = ApiError::Http { status: 400, message: "Title is required.".into() };
        assert_eq!(err.user_message(), "Title is required.");
        assert_eq!(ApiError::Network("offline".into()).user_message(), "Network error: offline");
    }
}
