use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::collections::HashMap;
use std::sync::RwLock;

use super::model::{PhotoUpload, StoredPhoto};
use crate::error::{ApiError, ApiResult};

/// In-process photo reference registry.
///
/// Assigns an opaque id per upload and maps it to the stored payload. Entirely
/// independent of task storage - callers pass the returned reference into the
/// task completion flow themselves.
#[derive(Debug, Default)]
pub struct PhotoRegistry {
    photos: RwLock<HashMap<String, StoredPhoto>>,
}

impl PhotoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an upload and return its reference, shaped `/photos/{photo_id}`
    pub fn register_upload(&self, upload: PhotoUpload) -> ApiResult<String> {
        let stored = match upload {
            PhotoUpload::File { filename, bytes } => StoredPhoto::File { filename, bytes },
            PhotoUpload::Base64(encoded) => {
                let bytes = BASE64.decode(encoded.as_bytes()).map_err(|_| {
                    ApiError::InvalidInput("photo_base64 is not valid base64".to_string())
                })?;
                StoredPhoto::Embedded { bytes }
            }
        };

        let photo_id = uuid::Uuid::new_v4().to_string();
        self.photos
            .write()
            .map_err(|_| ApiError::BackendUnavailable("photo registry lock poisoned".to_string()))?
            .insert(photo_id.clone(), stored);

        tracing::info!("📷 Photo registered - id: {}", photo_id);
        Ok(format!("/photos/{}", photo_id))
    }

    /// Resolve a photo id back to its stored payload
    pub fn get(&self, photo_id: &str) -> ApiResult<StoredPhoto> {
        self.photos
            .read()
            .map_err(|_| ApiError::BackendUnavailable("photo registry lock poisoned".to_string()))?
            .get(photo_id)
            .cloned()
            .ok_or(ApiError::NotFound("Photo"))
    }
}
