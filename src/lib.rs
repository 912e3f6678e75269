// src/lib.rs

pub mod context;
pub mod error;
pub mod form;
pub mod notice;
pub mod preview;
pub mod service;
pub mod session;
pub mod sync;
pub mod template;

pub use error::{AppError, AppResult};
pub use preview::render::PreviewMode;
pub use session::DocumentSession;
