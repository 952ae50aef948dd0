use thiserror::Error;

/// Fallo de una operación sobre el DOM
#[derive(Debug, Clone, PartialEq, Error)]
#[error("DOM error: {0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Error al cargar una vista. Se recupera localmente mostrando un placeholder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("failed to load {path}: HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("failed to load {path}: {message}")]
    Network { path: String, message: String },
    #[error(transparent)]
    Host(#[from] HostError),
}
