use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::{PhotoUpload, StoredPhoto, UploadPhotoPayload};
use super::service::PhotoRegistry;
use crate::error::ApiError;
use crate::http::{error_response, json_response};

const DEFAULT_UPLOAD_FILENAME: &str = "upload.bin";

/// Upload a photo (accepts a base64 JSON payload or a raw file body)
pub async fn upload_photo(
    registry: &PhotoRegistry,
    content_type: Option<&str>,
    filename: Option<&str>,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let upload = if content_type.is_some_and(|ct| ct.starts_with("application/json")) {
        let payload: UploadPhotoPayload = match serde_json::from_slice(body) {
            Ok(payload) => payload,
            Err(e) => {
                return error_response(&ApiError::InvalidInput(format!(
                    "Invalid upload payload: {}",
                    e
                )))
            }
        };

        match payload.photo_base64 {
            Some(encoded) => PhotoUpload::Base64(encoded),
            None => return error_response(&ApiError::MissingPayload),
        }
    } else if !body.is_empty() {
        PhotoUpload::File {
            filename: filename.unwrap_or(DEFAULT_UPLOAD_FILENAME).to_string(),
            bytes: body.to_vec(),
        }
    } else {
        return error_response(&ApiError::MissingPayload);
    };

    match registry.register_upload(upload) {
        Ok(photo_url) => json_response(
            StatusCode::CREATED,
            &serde_json::json!({ "photo_url": photo_url }),
        ),
        Err(e) => error_response(&e),
    }
}

/// Retrieve a registered photo payload
pub async fn get_photo(
    registry: &PhotoRegistry,
    photo_id: &str,
) -> Result<Response<Body>, Error> {
    match registry.get(photo_id) {
        Ok(StoredPhoto::Embedded { bytes }) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/octet-stream")
            .header("Access-Control-Allow-Origin", "*")
            .body(Body::from(bytes))
            .map_err(Box::new)?),
        Ok(StoredPhoto::File { filename, bytes }) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/octet-stream")
            .header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", filename),
            )
            .header("Access-Control-Allow-Origin", "*")
            .body(Body::from(bytes))
            .map_err(Box::new)?),
        Err(e) => error_response(&e),
    }
}
