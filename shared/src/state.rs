use std::env;
use std::sync::Arc;

use pawtrack_atoms::photos::PhotoRegistry;
use pawtrack_atoms::tasks::store::{DynamoTaskStore, MemoryTaskStore, TaskStore};

/// Everything a handler needs, built once at process start.
///
/// Handlers only ever see the trait object - which backend is behind it is
/// decided here and nowhere else.
pub struct AppState {
    pub task_store: Arc<dyn TaskStore>,
    pub photos: PhotoRegistry,
}

/// Select the task store from the environment and assemble the app state.
///
/// `STORAGE_BACKEND=dynamodb` uses the DynamoDB table named by `TABLE_NAME`
/// (default "Tasks"); anything else falls back to the in-memory store.
pub async fn init_state() -> AppState {
    let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "memory".to_string());

    let task_store: Arc<dyn TaskStore> = match backend.as_str() {
        "dynamodb" => {
            let table_name = env::var("TABLE_NAME").unwrap_or_else(|_| "Tasks".to_string());
            let config = aws_config::load_from_env().await;
            let client = aws_sdk_dynamodb::Client::new(&config);
            tracing::info!("🗄️ Using DynamoDB task store - table: {}", table_name);
            Arc::new(DynamoTaskStore::new(client, table_name))
        }
        other => {
            if other != "memory" {
                tracing::warn!(
                    "⚠️ Unknown STORAGE_BACKEND '{}' - falling back to in-memory store",
                    other
                );
            }
            tracing::info!("🗄️ Using in-memory task store (state resets on restart)");
            Arc::new(MemoryTaskStore::new())
        }
    };

    AppState {
        task_store,
        photos: PhotoRegistry::new(),
    }
}
