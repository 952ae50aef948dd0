pub mod api_client;
pub mod auth_service;
pub mod task_service;
pub mod finance_service;
pub mod admin_service;
pub mod profile_service;
pub mod fragment_service;

pub use api_client::{ApiClient, ApiError};
pub use fragment_service::HttpFragmentFetcher;
