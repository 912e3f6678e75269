// src/error.rs

use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    Io(std::io::Error),
    Msg(String),
    InvalidPath,

    // --------------------------------------------------
    // document-type configuration
    // --------------------------------------------------
    ConfigReadFailed(String),
    ConfigInvalidJson(String),
    ConfigValidation(String),
    UnknownDocumentType(String),

    // --------------------------------------------------
    // document service (template fetch / generate / redraft)
    // --------------------------------------------------
    TemplateFetchFailed(String),
    TemplateUnavailable { status: u16 },
    GenerateFailed(String),
    GenerateRejected { status: u16 },
    RedraftFailed(String),
    RedraftRejected { status: u16 },
    ServiceResponseInvalid(String),

    // --------------------------------------------------
    // form input / uploads
    // --------------------------------------------------
    InputProblem(String),
    UploadUnreadable(String),
    UploadUnsupportedImage,
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            // generic
            Io(_) => "File operation failed.",
            Msg(_) => "Operation failed.",
            InvalidPath => "Invalid path.",

            // configuration
            ConfigReadFailed(_) => "Failed to read document configuration.",
            ConfigInvalidJson(_) => "Document configuration is corrupted.",
            ConfigValidation(_) => "Document configuration is invalid.",
            UnknownDocumentType(_) => "Unknown document type.",

            // service
            TemplateFetchFailed(_) => "Could not reach the document service.",
            TemplateUnavailable { .. } => "Template is unavailable.",
            GenerateFailed(_) => "PDF generation request failed.",
            GenerateRejected { .. } => "The service rejected the PDF request.",
            RedraftFailed(_) => "Redraft request failed.",
            RedraftRejected { .. } => "The service rejected the redraft request.",
            ServiceResponseInvalid(_) => "The service returned an unexpected response.",

            // input / uploads
            InputProblem(_) => "Invalid form input.",
            UploadUnreadable(_) => "Could not read the uploaded file.",
            UploadUnsupportedImage => "Unsupported image format.",
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AppError::*;

        match self {
            Io(e) => write!(f, "io error: {e}"),
            Msg(s) => write!(f, "{s}"),
            InvalidPath => write!(f, "invalid path"),

            ConfigReadFailed(s) => write!(f, "config read failed: {s}"),
            ConfigInvalidJson(s) => write!(f, "config invalid json: {s}"),
            ConfigValidation(s) => write!(f, "config validation failed: {s}"),
            UnknownDocumentType(s) => write!(f, "unknown document type: {s}"),

            TemplateFetchFailed(s) => write!(f, "template fetch failed: {s}"),
            TemplateUnavailable { status } => {
                write!(f, "template unavailable: http status {status}")
            }
            GenerateFailed(s) => write!(f, "generate failed: {s}"),
            GenerateRejected { status } => write!(f, "generate rejected: http status {status}"),
            RedraftFailed(s) => write!(f, "redraft failed: {s}"),
            RedraftRejected { status } => write!(f, "redraft rejected: http status {status}"),
            ServiceResponseInvalid(s) => write!(f, "service response invalid: {s}"),

            InputProblem(s) => write!(f, "input problem: {s}"),
            UploadUnreadable(s) => write!(f, "upload unreadable: {s}"),
            UploadUnsupportedImage => write!(f, "unsupported image format"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
