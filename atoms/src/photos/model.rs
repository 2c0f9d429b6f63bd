use serde::Deserialize;

/// An incoming photo payload - either a raw file body or an embedded base64 blob
#[derive(Debug)]
pub enum PhotoUpload {
    File { filename: String, bytes: Vec<u8> },
    Base64(String),
}

/// What the registry keeps per photo id. Photos are never processed, only held
/// so the reference stays resolvable.
#[derive(Debug, Clone)]
pub enum StoredPhoto {
    File { filename: String, bytes: Vec<u8> },
    Embedded { bytes: Vec<u8> },
}

#[derive(Debug, Deserialize)]
pub struct UploadPhotoPayload {
    pub photo_base64: Option<String>,
}
