// ============================================================================
// VIEWS - Render puro (viewmodel → HTML) + `mount_*` exportados a JS
// ============================================================================
// Cada fragmento HTML trae su módulo JS; el módulo solo llama al `mount_*`
// correspondiente cuando el loader lo inyecta.
// ============================================================================

pub mod tasks;
pub mod finances;
pub mod admin;
pub mod complete_profile;
pub mod auth;

pub use tasks::mount_tasks_view;
pub use finances::mount_finances_view;
pub use admin::mount_admin_view;
pub use complete_profile::mount_complete_profile_view;
pub use auth::{logout, mount_login_page, mount_register_page};
