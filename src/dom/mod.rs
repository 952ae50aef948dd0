// ============================================================================
// DOM MODULE - Helpers para manipulación DOM + implementación web del router
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;
pub mod host;

pub use element::*;
pub use builder::*;
pub use events::*;
pub use host::*;
