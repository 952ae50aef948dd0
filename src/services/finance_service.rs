use crate::models::{MessageResponse, Transaction, TransactionInput};
use crate::services::api_client::{ApiClient, ApiError};

pub async fn fetch_transactions(api: &ApiClient) -> Result<Vec<Transaction>, ApiError> {
    let transactions: Vec<Transaction> = api.get_json("/finances").await?;
    log::info!("💰 [FINANCES] {} transacciones obtenidas", transactions.len());
    Ok(transactions)
}

pub async fn create_transaction(api: &ApiClient, input: &TransactionInput) -> Result<Transaction, ApiError> {
    api.post_json("/finances", input).await
}

pub async fn update_transaction(api: &ApiClient, id: i64, input: &TransactionInput) -> Result<Transaction, ApiError> {
    api.put_json(&format!("/finances/{}", id), input).await
}

pub async fn delete_transaction(api: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    api.delete(&format!("/finances/{}", id)).await
}
