use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::{CompleteTaskPayload, CreateTaskPayload};
use super::service;
use super::store::TaskStore;
use crate::error::ApiError;
use crate::http::{error_response, json_response};

/// List all tasks with their count
pub async fn list_tasks(store: &dyn TaskStore) -> Result<Response<Body>, Error> {
    match service::list_tasks(store).await {
        Ok((tasks, count)) => json_response(
            StatusCode::OK,
            &serde_json::json!({ "tasks": tasks, "count": count }),
        ),
        Err(e) => error_response(&e),
    }
}

/// Get a single task
pub async fn get_task(store: &dyn TaskStore, task_id: &str) -> Result<Response<Body>, Error> {
    match service::get_task(store, task_id).await {
        Ok(task) => json_response(StatusCode::OK, &task),
        Err(e) => error_response(&e),
    }
}

/// Create a new task
pub async fn create_task(store: &dyn TaskStore, body: &[u8]) -> Result<Response<Body>, Error> {
    // A missing or non-string title fails the parse
    let payload: CreateTaskPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(_) => {
            return error_response(&ApiError::InvalidInput("Title is required".to_string()))
        }
    };

    match service::create_task(store, payload).await {
        Ok(task) => json_response(StatusCode::CREATED, &task),
        Err(e) => error_response(&e),
    }
}

/// Mark a task as complete and save the photo reference
pub async fn complete_task(
    store: &dyn TaskStore,
    task_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    // An absent body means "no photo supplied" rather than a bad request
    let payload: CompleteTaskPayload = if body.is_empty() {
        CompleteTaskPayload::default()
    } else {
        match serde_json::from_slice(body) {
            Ok(payload) => payload,
            Err(e) => {
                return error_response(&ApiError::InvalidInput(format!(
                    "Invalid completion payload: {}",
                    e
                )))
            }
        }
    };

    match service::complete_task(store, task_id, payload).await {
        Ok(task) => json_response(
            StatusCode::OK,
            &serde_json::json!({ "message": "Task completed! 🐕", "task": task }),
        ),
        Err(e) => error_response(&e),
    }
}

/// Delete a task
pub async fn delete_task(store: &dyn TaskStore, task_id: &str) -> Result<Response<Body>, Error> {
    match service::delete_task(store, task_id).await {
        Ok(()) => json_response(
            StatusCode::OK,
            &serde_json::json!({ "message": "Task deleted" }),
        ),
        Err(e) => error_response(&e),
    }
}

/// Insert the sample tasks
pub async fn seed_tasks(store: &dyn TaskStore) -> Result<Response<Body>, Error> {
    match service::seed_tasks(store).await {
        Ok(tasks) => json_response(
            StatusCode::CREATED,
            &serde_json::json!({ "message": "Sample data added!", "tasks": tasks }),
        ),
        Err(e) => error_response(&e),
    }
}
