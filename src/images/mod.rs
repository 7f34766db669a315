//! Inline encoding of uploaded team photos.
//!
//! Photos are stored directly in the document as `data:` URIs. Encoding runs
//! off the async workers and hands back a [`PendingImage`] that a form
//! submission awaits before saving.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tokio::task::JoinHandle;

use crate::errors::AppError;

/// Build a `data:<mime>;base64,<payload>` URI.
pub fn encode_data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Reject anything that is not an `image/*` upload.
pub fn validate_image(bytes: &[u8], mime: &str) -> Result<(), AppError> {
    let essence = mime.split(';').next().unwrap_or_default().trim();
    match essence.strip_prefix("image/") {
        Some(subtype) if !subtype.is_empty() => {}
        _ => {
            return Err(AppError::Validation(format!(
                "Expected an image upload, got '{}'",
                mime
            )))
        }
    }
    if bytes.is_empty() {
        return Err(AppError::Validation("Image upload is empty".to_string()));
    }
    Ok(())
}

/// Spawns photo encodings on the blocking pool.
pub struct ImageEncoder;

impl ImageEncoder {
    pub fn spawn(bytes: Vec<u8>, mime: String) -> Result<PendingImage, AppError> {
        validate_image(&bytes, &mime)?;
        let essence = mime.split(';').next().unwrap_or_default().trim().to_string();
        tracing::debug!("Encoding {} byte {} upload", bytes.len(), essence);
        let handle = tokio::task::spawn_blocking(move || encode_data_uri(&bytes, &essence));
        Ok(PendingImage { handle })
    }
}

/// An encoding in flight; `wait` resolves to the data URI.
pub struct PendingImage {
    handle: JoinHandle<String>,
}

impl PendingImage {
    pub async fn wait(self) -> Result<String, AppError> {
        Ok(self.handle.await?)
    }
}
