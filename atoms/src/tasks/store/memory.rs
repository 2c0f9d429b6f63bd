use async_trait::async_trait;
use std::sync::RwLock;

use super::TaskStore;
use crate::error::{ApiError, ApiResult};
use crate::tasks::model::Task;

/// Ephemeral task store - an owned list in process memory, lost on restart.
///
/// Lookups are O(n) scans by id, fine at this scale. The lock is never held
/// across an await.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ApiResult<std::sync::RwLockReadGuard<'_, Vec<Task>>> {
        self.tasks
            .read()
            .map_err(|_| ApiError::BackendUnavailable("task store lock poisoned".to_string()))
    }

    fn write(&self) -> ApiResult<std::sync::RwLockWriteGuard<'_, Vec<Task>>> {
        self.tasks
            .write()
            .map_err(|_| ApiError::BackendUnavailable("task store lock poisoned".to_string()))
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        let mut tasks = self.read()?.clone();
        // Sort by created_at desc (newest first)
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn get(&self, task_id: &str) -> ApiResult<Task> {
        self.read()?
            .iter()
            .find(|t| t.id == task_id)
            .cloned()
            .ok_or(ApiError::NotFound("Task"))
    }

    async fn create(&self, task: Task) -> ApiResult<Task> {
        self.write()?.push(task.clone());
        Ok(task)
    }

    async fn complete(&self, task_id: &str, photo_url: &str) -> ApiResult<Task> {
        let mut tasks = self.write()?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(ApiError::NotFound("Task"))?;

        task.completed = true;
        task.photo_url = Some(photo_url.to_string());
        task.completed_at = Some(chrono::Utc::now().to_rfc3339());
        Ok(task.clone())
    }

    async fn delete(&self, task_id: &str) -> ApiResult<()> {
        let mut tasks = self.write()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != task_id);

        if tasks.len() == before {
            return Err(ApiError::NotFound("Task"));
        }
        Ok(())
    }
}
