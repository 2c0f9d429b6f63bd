
// Re-export model types and the registry
pub mod http;
pub mod model;
pub mod service;

pub use model::{PhotoUpload, StoredPhoto};
pub use service::PhotoRegistry;
