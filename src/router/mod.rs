// ============================================================================
// ROUTER - Tabla de rutas, carga de vistas y navegación por hash
// ============================================================================

pub mod error;
pub mod routes;
pub mod host;
pub mod loader;
pub mod navigation;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{HostError, LoadError};
pub use routes::{RouteEntry, RouteTable};
pub use host::{FragmentFetcher, ViewHost};
pub use loader::{LoadOutcome, ViewLoader};
pub use navigation::{NavigationController, Redirect, Resolution};
