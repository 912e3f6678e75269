// src/service/request.rs

//! Payloads exchanged with the document service. Pure serialization; the
//! transport lives in [`crate::service::client`].

use crate::form::state::FormState;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Body of `POST /generate`. The context carries every field key in the
/// form state, empty values included, so the backend can apply its own
/// fallback rendering for unfilled fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub document_type: String,
    pub context: BTreeMap<String, JsonValue>,
}

impl GenerateRequest {
    pub fn from_state(document_type: impl Into<String>, state: &FormState) -> Self {
        let context = state
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_json()))
            .collect();

        Self {
            document_type: document_type.into(),
            context,
        }
    }
}

/// Body of `POST /redraft`: the current preview HTML plus free-text
/// instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedraftRequest {
    pub html: String,
    pub instructions: String,
}

impl RedraftRequest {
    pub fn new(html: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            instructions: instructions.into(),
        }
    }
}

/// Response of `POST /redraft`. The HTML is opaque; the session re-mounts
/// it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedraftResponse {
    pub redrafted_html: String,
}

// ======================================================
// Unit Tests
// ======================================================
