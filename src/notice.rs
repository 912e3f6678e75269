// src/notice.rs

//! Transient status messages for the active document session.
//!
//! Submission and upload failures are surfaced to the user as a visible
//! message; the presentation layer owns the rendering, this state owns the
//! content. Mirrors the lifecycle of one panel: set on failure, cleared on
//! the next attempt or on dismiss.

use crate::error::{AppError, UserMsgKind};

#[derive(Clone, Debug, Default)]
pub struct MsgState {
    kind: Option<UserMsgKind>,
    short: Option<String>,
    detail: Option<String>,
}

impl MsgState {
    pub fn clear(&mut self) {
        self.kind = None;
        self.short = None;
        self.detail = None;
    }

    pub fn is_set(&self) -> bool {
        self.kind.is_some() && self.short.is_some()
    }

    pub fn kind(&self) -> Option<UserMsgKind> {
        self.kind
    }

    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn set_success(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Success);
        self.short = Some(short.into());
        self.detail = None;
    }

    pub fn set_warn(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Warn);
        self.short = Some(short.into());
        self.detail = None;
    }

    pub fn set_info(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Info);
        self.short = Some(short.into());
        self.detail = None;
    }

    pub fn set_error(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Error);
        self.short = Some(short.into());
        self.detail = None;
    }

    /// Fill from an `AppError`: short user text, full detail kept for
    /// debug display.
    pub fn from_app_error(&mut self, err: &AppError, debug_ui: bool) {
        let msg = err.user_msg();
        self.kind = Some(msg.kind);
        self.short = Some(if debug_ui {
            err.to_string()
        } else {
            msg.short.to_string()
        });
        self.detail = msg.detail;
    }
}

// ======================================================
// Unit Tests
// ======================================================
