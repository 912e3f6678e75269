// src/session/ops.rs

use crate::form::signature::{data_uri_from_bytes, load_data_uri_from_path};
use crate::form::state::{FieldValue, FormState};
use crate::preview::render::{render_slot, PreviewMode};
use crate::service::request::{GenerateRequest, RedraftRequest};
use crate::sync::FormLayout;
use crate::template::doc_config::{parse_config_str, DatePart, DocumentConfig, FieldKind, FieldSpec};
use crate::template::TemplateSlot;
use chrono::{Datelike, NaiveDate};
use std::path::Path;

use super::types::{DocumentSession, SessionError};

/// Literal accepted in a date field's `default` to mean the current date.
const DEFAULT_TODAY: &str = "today";

pub fn load_session_from_path(path: impl AsRef<Path>) -> Result<DocumentSession, SessionError> {
    let s = std::fs::read_to_string(path)?;
    load_session_from_str(&s)
}

/// Build a session from a JSON5 document-type config. The template slot
/// starts in `Loading`; the caller feeds it via `template_loaded` /
/// `template_failed` once the fetch settles.
pub fn load_session_from_str(config_json5: &str) -> Result<DocumentSession, SessionError> {
    let config = parse_config_str(config_json5)?;
    let form = seed_form_state(&config);

    Ok(DocumentSession {
        config,
        form,
        template: TemplateSlot::Loading,
        redrafted_html: None,
    })
}

/// Seed a form state with a default entry for every declared and derived
/// key, so no render pass ever reads an undefined key.
pub fn seed_form_state(config: &DocumentConfig) -> FormState {
    let mut form = FormState::new();

    for section in &config.sections {
        for field in &section.fields {
            match field.kind {
                FieldKind::Signature => {
                    form.set(field.key.clone(), FieldValue::Absent);
                }
                FieldKind::Date => {
                    let initial = match field.default.as_deref() {
                        Some(DEFAULT_TODAY) => today_iso(),
                        Some(other) => other.to_string(),
                        None => String::new(),
                    };
                    seed_derived_parts(&mut form, field, &initial);
                    form.set(field.key.clone(), FieldValue::Text(initial));
                }
                FieldKind::Text | FieldKind::Select => {
                    let initial = field.default.clone().unwrap_or_default();
                    form.set(field.key.clone(), FieldValue::Text(initial));
                }
            }
        }
    }

    form
}

fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn seed_derived_parts(form: &mut FormState, field: &FieldSpec, value: &str) {
    let Some(derived) = &field.derived else {
        return;
    };

    let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
    for part in derived {
        let text = parsed
            .map(|d| derived_value(d, part.part))
            .unwrap_or_default();
        form.set(part.key.clone(), FieldValue::Text(text));
    }
}

fn derived_value(date: NaiveDate, part: DatePart) -> String {
    match part {
        // Unpadded day of month, long English month name, four-digit year.
        DatePart::Day => date.day().to_string(),
        DatePart::MonthName => date.format("%B").to_string(),
        DatePart::Year => date.format("%Y").to_string(),
    }
}

/// Set a text-entry field (text, select, or date). Any successful edit
/// clears a pending redraft override; the preview returns to the pure
/// render path.
pub fn set_field(
    session: &mut DocumentSession,
    key: &str,
    value: &str,
) -> Result<(), SessionError> {
    let k = key.trim();
    if k.is_empty() {
        return Err(SessionError::InputProblem("field key is empty".to_string()));
    }

    if session.config.derived_keys().contains(k) {
        return Err(SessionError::InputProblem(format!(
            "'{k}' is system-populated and cannot be edited directly"
        )));
    }

    let Some(spec) = session.config.field(k).cloned() else {
        return Err(SessionError::InputProblem(format!(
            "'{k}' is not a declared field"
        )));
    };

    match spec.kind {
        FieldKind::Signature => {
            return Err(SessionError::InvalidState(format!(
                "'{k}' is a signature field; use a signature upload"
            )));
        }

        FieldKind::Select => {
            if !value.is_empty() {
                let choices = spec.choices.as_deref().unwrap_or_default();
                if !choices.iter().any(|c| c == value) {
                    return Err(SessionError::InputProblem(format!(
                        "'{k}' must be one of: {}",
                        choices.join(", ")
                    )));
                }
            }
        }

        FieldKind::Date => {
            if !value.is_empty() && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                return Err(SessionError::InputProblem(format!(
                    "'{k}' must be a YYYY-MM-DD date"
                )));
            }
            seed_derived_parts(&mut session.form, &spec, value);
        }

        FieldKind::Text => {}
    }

    session.form.set(k.to_string(), FieldValue::Text(value.to_string()));
    session.redrafted_html = None;
    Ok(())
}

/// Store an uploaded signature image. The value becomes a data URI; on any
/// failure the form state is left untouched.
pub fn set_signature_from_bytes(
    session: &mut DocumentSession,
    key: &str,
    bytes: &[u8],
) -> Result<(), SessionError> {
    let spec = signature_spec(session, key)?;
    let uri = data_uri_from_bytes(bytes).map_err(SessionError::Upload)?;

    session.form.set(spec.key, FieldValue::Image(uri));
    session.redrafted_html = None;
    Ok(())
}

/// Read a signature image from disk and store it.
pub fn load_signature_from_path(
    session: &mut DocumentSession,
    key: &str,
    path: impl AsRef<Path>,
) -> Result<(), SessionError> {
    let spec = signature_spec(session, key)?;
    let uri = load_data_uri_from_path(path).map_err(SessionError::Upload)?;

    session.form.set(spec.key, FieldValue::Image(uri));
    session.redrafted_html = None;
    Ok(())
}

pub fn clear_signature(session: &mut DocumentSession, key: &str) -> Result<(), SessionError> {
    let spec = signature_spec(session, key)?;
    session.form.set(spec.key, FieldValue::Absent);
    session.redrafted_html = None;
    Ok(())
}

fn signature_spec(session: &DocumentSession, key: &str) -> Result<FieldSpec, SessionError> {
    let k = key.trim();
    let Some(spec) = session.config.field(k) else {
        return Err(SessionError::InputProblem(format!(
            "'{k}' is not a declared field"
        )));
    };
    if !matches!(spec.kind, FieldKind::Signature) {
        return Err(SessionError::InvalidState(format!(
            "'{k}' is not a signature field"
        )));
    }
    Ok(spec.clone())
}

pub fn template_loaded(session: &mut DocumentSession, text: impl Into<String>) {
    session.template = TemplateSlot::Ready(text.into());
}

pub fn template_failed(session: &mut DocumentSession) {
    session.template = TemplateSlot::Failed;
}

/// Current preview HTML. A redraft override, when present, is returned
/// verbatim (it is opaque backend HTML); otherwise the preview is derived
/// from template + form state through the lifecycle gate.
pub fn preview_html(session: &DocumentSession, mode: PreviewMode) -> String {
    if let Some(html) = &session.redrafted_html {
        return html.clone();
    }
    render_slot(&session.template, &session.form, &session.config, mode)
}

/// Serialize the whole form state for the PDF-generation endpoint.
pub fn generate_request(session: &DocumentSession) -> GenerateRequest {
    GenerateRequest::from_state(&session.config.document_type, &session.form)
}

/// Build a redraft request from the current preview. Requires a loaded
/// template; there is nothing meaningful to redraft before that.
pub fn redraft_request(
    session: &DocumentSession,
    instructions: impl Into<String>,
) -> Result<RedraftRequest, SessionError> {
    if !session.template.is_ready() {
        return Err(SessionError::InvalidState(
            "template is not loaded; nothing to redraft".to_string(),
        ));
    }

    Ok(RedraftRequest::new(
        preview_html(session, PreviewMode::Interactive),
        instructions,
    ))
}

pub fn apply_redraft(session: &mut DocumentSession, html: impl Into<String>) {
    session.redrafted_html = Some(html.into());
}

pub fn clear_redraft(session: &mut DocumentSession) {
    session.redrafted_html = None;
}

/// Control-to-section layout for the preview sync controller.
pub fn session_form_layout(session: &DocumentSession) -> FormLayout {
    FormLayout::from_config(&session.config)
}

// ======================================================
// Unit Tests
// ======================================================
