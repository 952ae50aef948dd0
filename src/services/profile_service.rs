use crate::models::{MessageResponse, UserProfile};
use crate::services::api_client::{ApiClient, ApiError};

pub async fn fetch_profile(api: &ApiClient) -> Result<UserProfile, ApiError> {
    api.get_json("/profile").await
}

pub async fn update_profile(api: &ApiClient, profile: &UserProfile) -> Result<MessageResponse, ApiError> {
    api.put_json("/profile", profile).await
}
