use crate::models::{MessageResponse, NewTask, Task, TaskUpdate};
use crate::services::api_client::{ApiClient, ApiError};

pub async fn fetch_tasks(api: &ApiClient) -> Result<Vec<Task>, ApiError> {
    let tasks: Vec<Task> = api.get_json("/tasks").await?;
    log::info!("📋 [TASKS] {} tareas obtenidas", tasks.len());
    Ok(tasks)
}

pub async fn create_task(api: &ApiClient, task: &NewTask) -> Result<Task, ApiError> {
    api.post_json("/tasks", task).await
}

pub async fn update_task(api: &ApiClient, id: i64, update: &TaskUpdate) -> Result<Task, ApiError> {
    api.put_json(&format!("/tasks/{}", id), update).await
}

pub async fn delete_task(api: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    api.delete(&format!("/tasks/{}", id)).await
}
