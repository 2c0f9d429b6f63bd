
// Re-export model types, the store contract and service functions
pub mod http;
pub mod model;
pub mod service;
pub mod store;

pub use model::{CompleteTaskPayload, CreateTaskPayload, Task};
pub use service::*;
pub use store::{DynamoTaskStore, MemoryTaskStore, TaskStore};
