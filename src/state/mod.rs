// ============================================================================
// STATE MODULE - Estado propio de la aplicación (sin globals mutables)
// ============================================================================

pub mod session_state;
pub mod onboarding;

pub use session_state::*;
pub use onboarding::*;
