pub mod dynamo;
pub mod error;
pub mod http;
pub mod photos;
pub mod tasks;

pub use error::{ApiError, ApiResult};
