// src/session/mod.rs

mod ops;
mod types;
mod validate;

pub use ops::{
    apply_redraft, clear_redraft, clear_signature, generate_request, load_session_from_path,
    load_session_from_str, load_signature_from_path, preview_html, redraft_request, seed_form_state,
    session_form_layout, set_field, set_signature_from_bytes, template_failed, template_loaded,
};
pub use types::{DocumentSession, SessionError};
pub use validate::{validate_inputs, validate_section_inputs};
