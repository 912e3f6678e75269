// src/session/types.rs

use crate::error::AppError;
use crate::form::state::FormState;
use crate::template::doc_config::{ConfigError, DocumentConfig};
use crate::template::TemplateSlot;

/// One active document-filling session.
///
/// Created when a document page mounts, discarded on navigation; nothing
/// here is persisted. The config and (once loaded) the template text are
/// immutable; the form state mutates on every user edit and the preview is
/// re-derived from scratch each time.
#[derive(Debug, Clone)]
pub struct DocumentSession {
    pub config: DocumentConfig,
    pub template: TemplateSlot,
    pub form: FormState,

    /// Opaque backend HTML that replaces the rendered preview after a
    /// redraft, until cleared or until the next field edit.
    pub redrafted_html: Option<String>,
}

#[derive(Debug)]
pub enum SessionError {
    Io(std::io::Error),
    Config(ConfigError),
    /// User-correctable input problem (bad date, unknown choice, …).
    InputProblem(String),
    /// The operation does not apply to the session's current shape.
    InvalidState(String),
    /// Signature upload failed; form state is unchanged.
    Upload(AppError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Io(e) => write!(f, "I/O error: {e}"),
            SessionError::Config(e) => write!(f, "{e}"),
            SessionError::InputProblem(msg) => write!(f, "input problem: {msg}"),
            SessionError::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            SessionError::Upload(e) => write!(f, "upload failed: {e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        SessionError::Io(e)
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        SessionError::Config(e)
    }
}
