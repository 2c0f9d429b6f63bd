use async_trait::async_trait;

use super::model::Task;
use crate::error::ApiResult;

pub mod dynamo;
pub mod memory;

pub use dynamo::DynamoTaskStore;
pub use memory::MemoryTaskStore;

/// Sample tasks inserted by `seed` (testing/demo convenience)
pub const SAMPLE_TITLES: [&str; 3] = ["Feed Rex", "Walk Buddy", "Give treats"];

/// Storage contract shared by every backend.
///
/// The service layer only ever sees `&dyn TaskStore`; which implementation is
/// active is decided once at process start. Both backends return the same
/// success/error shapes, and both list newest-first.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Every stored task, sorted by `created_at` descending.
    async fn list(&self) -> ApiResult<Vec<Task>>;

    /// A single task, or `NotFound`.
    async fn get(&self, task_id: &str) -> ApiResult<Task>;

    /// Persist a fully-formed task. Ids are generator-unique and not re-checked.
    async fn create(&self, task: Task) -> ApiResult<Task>;

    /// Mark a task completed and attach the photo reference, or `NotFound`.
    async fn complete(&self, task_id: &str, photo_url: &str) -> ApiResult<Task>;

    /// Hard delete, or `NotFound`.
    async fn delete(&self, task_id: &str) -> ApiResult<()>;

    /// Insert the fixed sample tasks; shared code path so both backends match.
    async fn seed(&self) -> ApiResult<Vec<Task>> {
        let mut tasks = Vec::with_capacity(SAMPLE_TITLES.len());
        for title in SAMPLE_TITLES {
            tasks.push(self.create(Task::new(title)).await?);
        }
        Ok(tasks)
    }
}
