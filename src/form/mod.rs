// src/form/mod.rs

pub mod signature;
pub mod state;

pub use signature::{data_uri_from_bytes, load_data_uri_from_path, sniff_image_mime};
pub use state::{FieldValue, FormState};
