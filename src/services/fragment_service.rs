// ============================================================================
// FRAGMENT SERVICE - Descarga del HTML de cada vista
// ============================================================================

use gloo_net::http::Request;

use crate::router::{FragmentFetcher, LoadError};

/// Descarga los fragmentos relativos a la página actual
#[derive(Clone, Copy, Default)]
pub struct HttpFragmentFetcher;

impl FragmentFetcher for HttpFragmentFetcher {
    async fn fetch_fragment(&self, path: &str) -> Result<String, LoadError> {
        let response = Request::get(path).send().await.map_err(|e| LoadError::Network {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        if !response.ok() {
            return Err(LoadError::Status { path: path.to_string(), status: response.status() });
        }

        response.text().await.map_err(|e| LoadError::Network {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
