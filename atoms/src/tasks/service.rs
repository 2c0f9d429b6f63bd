use super::model::{CompleteTaskPayload, CreateTaskPayload, Task};
use super::store::TaskStore;
use crate::error::{ApiError, ApiResult};

/// Photo reference recorded when a task is completed without one
pub const DEFAULT_PHOTO_URL: &str = "photo_uploaded.jpg";

/// Get all tasks with their count (pure domain logic, no HTTP)
pub async fn list_tasks(store: &dyn TaskStore) -> ApiResult<(Vec<Task>, usize)> {
    let tasks = store.list().await?;
    let count = tasks.len();
    Ok((tasks, count))
}

/// Get a specific task
pub async fn get_task(store: &dyn TaskStore, task_id: &str) -> ApiResult<Task> {
    store.get(task_id).await
}

/// Validate the payload and create a new task
pub async fn create_task(store: &dyn TaskStore, payload: CreateTaskPayload) -> ApiResult<Task> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::InvalidInput("Title is required".to_string()));
    }

    store.create(Task::new(payload.title)).await
}

/// Mark a task as complete and attach the photo reference.
/// Re-completing overwrites photo_url and completed_at (last writer wins).
pub async fn complete_task(
    store: &dyn TaskStore,
    task_id: &str,
    payload: CompleteTaskPayload,
) -> ApiResult<Task> {
    let photo_url = payload
        .photo_url
        .unwrap_or_else(|| DEFAULT_PHOTO_URL.to_string());

    store.complete(task_id, &photo_url).await
}

/// Delete a task
pub async fn delete_task(store: &dyn TaskStore, task_id: &str) -> ApiResult<()> {
    store.delete(task_id).await
}

/// Insert the fixed sample tasks (testing/demo convenience)
pub async fn seed_tasks(store: &dyn TaskStore) -> ApiResult<Vec<Task>> {
    store.seed().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::store::MemoryTaskStore;

    #[tokio::test]
    async fn create_assigns_id_and_open_state() {
        let store = MemoryTaskStore::new();
        let task = create_task(
            &store,
            CreateTaskPayload {
                title: "Feed Rex".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(!task.id.is_empty());
        assert_eq!(task.title, "Feed Rex");
        assert!(!task.completed);
        assert_eq!(task.photo_url, None);
        assert_eq!(task.completed_at, None);
    }

    #[tokio::test]
    async fn create_rejects_blank_titles_and_persists_nothing() {
        let store = MemoryTaskStore::new();

        for title in ["", "   "] {
            let err = create_task(
                &store,
                CreateTaskPayload {
                    title: title.to_string(),
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err, ApiError::InvalidInput(_)));
        }

        let (_, count) = list_tasks(&store).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let store = MemoryTaskStore::new();
        let mut ids = std::collections::HashSet::new();

        for _ in 0..25 {
            let task = create_task(
                &store,
                CreateTaskPayload {
                    title: "Walk Buddy".to_string(),
                },
            )
            .await
            .unwrap();
            assert!(ids.insert(task.id));
        }
    }

    #[tokio::test]
    async fn complete_without_photo_uses_the_default_reference() {
        let store = MemoryTaskStore::new();
        let task = create_task(
            &store,
            CreateTaskPayload {
                title: "Give treats".to_string(),
            },
        )
        .await
        .unwrap();

        let updated = complete_task(&store, &task.id, CompleteTaskPayload::default())
            .await
            .unwrap();
        assert!(updated.completed);
        assert_eq!(updated.photo_url.as_deref(), Some(DEFAULT_PHOTO_URL));
        assert!(updated.completed_at.is_some());
    }

    #[tokio::test]
    async fn complete_unknown_task_is_not_found() {
        let store = MemoryTaskStore::new();
        assert!(matches!(
            complete_task(&store, "nonexistent-id", CompleteTaskPayload::default()).await,
            Err(ApiError::NotFound("Task"))
        ));
    }

    #[tokio::test]
    async fn re_completing_overwrites_the_photo_reference() {
        let store = MemoryTaskStore::new();
        let task = create_task(
            &store,
            CreateTaskPayload {
                title: "Feed Rex".to_string(),
            },
        )
        .await
        .unwrap();

        complete_task(
            &store,
            &task.id,
            CompleteTaskPayload {
                photo_url: Some("first.jpg".to_string()),
            },
        )
        .await
        .unwrap();

        let second = complete_task(
            &store,
            &task.id,
            CompleteTaskPayload {
                photo_url: Some("second.jpg".to_string()),
            },
        )
        .await
        .unwrap();

        assert!(second.completed);
        assert_eq!(second.photo_url.as_deref(), Some("second.jpg"));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = MemoryTaskStore::new();
        let task = create_task(
            &store,
            CreateTaskPayload {
                title: "Walk Buddy".to_string(),
            },
        )
        .await
        .unwrap();

        delete_task(&store, &task.id).await.unwrap();
        assert!(matches!(
            get_task(&store, &task.id).await,
            Err(ApiError::NotFound("Task"))
        ));
    }
}
