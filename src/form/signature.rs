// src/form/signature.rs

//! Signature uploads: raw image bytes -> data URI.
//!
//! The preview embeds signatures inline, so an upload becomes a
//! `data:<mime>;base64,<payload>` string stored as the field value. The
//! image format is sniffed from magic bytes; file extensions are not
//! trusted.

use crate::error::{AppError, AppResult};
use base64::Engine as _;
use std::path::Path;

/// Identify a supported raster format from its leading bytes.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        return Some("image/png");
    }
    if bytes.starts_with(b"\xff\xd8\xff") {
        return Some("image/jpeg");
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    None
}

/// Encode image bytes as a data URI. Rejects formats that cannot be
/// sniffed; an `<img>` with an unrenderable src would show as broken.
pub fn data_uri_from_bytes(bytes: &[u8]) -> AppResult<String> {
    let mime = sniff_image_mime(bytes).ok_or(AppError::UploadUnsupportedImage)?;
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{mime};base64,{payload}"))
}

/// Read an image file and encode it. An unreadable file is reported, not
/// swallowed; callers that want to ignore the failure can drop the error
/// without any state having changed.
pub fn load_data_uri_from_path(path: impl AsRef<Path>) -> AppResult<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::UploadUnreadable(format!("{}: {e}", path.display())))?;
    data_uri_from_bytes(&bytes)
}

// ======================================================
// Unit Tests
// ======================================================
