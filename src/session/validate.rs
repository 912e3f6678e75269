// src/session/validate.rs

use crate::form::state::{FieldValue, FormState};
use crate::template::doc_config::{FieldKind, FieldSpec};
use chrono::NaiveDate;

use super::types::{DocumentSession, SessionError};

trait ValidationSink {
    fn missing_required(&mut self, spec: &FieldSpec);
    fn value_error(&mut self, spec: &FieldSpec, err: SessionError);

    fn stop_early(&self) -> bool;
}

struct SessionSink {
    err: Option<SessionError>,
}

impl SessionSink {
    fn new() -> Self {
        Self { err: None }
    }
}

impl ValidationSink for SessionSink {
    fn missing_required(&mut self, spec: &FieldSpec) {
        if self.err.is_some() {
            return;
        }
        self.err = Some(SessionError::InputProblem(format!(
            "missing required input: {}",
            spec.key
        )));
    }

    fn value_error(&mut self, _spec: &FieldSpec, err: SessionError) {
        if self.err.is_some() {
            return;
        }
        self.err = Some(err);
    }

    fn stop_early(&self) -> bool {
        true
    }
}

struct SectionSink {
    errors: Vec<String>,
}

impl SectionSink {
    fn new() -> Self {
        Self { errors: Vec::new() }
    }
}

impl ValidationSink for SectionSink {
    fn missing_required(&mut self, spec: &FieldSpec) {
        self.errors
            .push(format!("Missing required: {} ({})", spec.label, spec.key));
    }

    fn value_error(&mut self, spec: &FieldSpec, err: SessionError) {
        self.errors
            .push(format!("{} ({}): {}", spec.label, spec.key, err));
    }

    fn stop_early(&self) -> bool {
        false
    }
}

fn validate_against_specs(
    form: &FormState,
    specs: &[&FieldSpec],
    sink: &mut impl ValidationSink,
) {
    for spec in specs {
        let value = form.get(&spec.key);

        if spec.required && value.is_empty() {
            sink.missing_required(spec);
            if sink.stop_early() {
                return;
            }
            continue;
        }

        if value.is_empty() {
            continue; // optional + unfilled
        }

        if let Err(e) = validate_field_value(spec, value) {
            sink.value_error(spec, e);
            if sink.stop_early() {
                return;
            }
        }
    }
}

/// Validate every declared field of the session:
/// - required fields present and non-empty
/// - shape checks (select choices, YYYY-MM-DD dates, data-URI signatures)
/// - validator rules: `regex:` / `min_len:` / `max_len:`
///
/// Stops at the first problem. Intended for callers that want a gate (for
/// instance before enabling submission); the request builder itself never
/// calls this, because the backend applies its own fallback rendering for
/// empty fields.
pub fn validate_inputs(session: &DocumentSession) -> Result<(), SessionError> {
    let specs: Vec<&FieldSpec> = session
        .config
        .sections
        .iter()
        .flat_map(|s| s.fields.iter())
        .collect();

    let mut sink = SessionSink::new();
    validate_against_specs(&session.form, &specs, &mut sink);

    match sink.err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Validate one disclosure section, collecting every problem into a
/// display-ready list.
pub fn validate_section_inputs(
    session: &DocumentSession,
    section_id: &str,
) -> Result<(), Vec<String>> {
    let Some(section) = session
        .config
        .sections
        .iter()
        .find(|s| s.section_id == section_id)
    else {
        return Err(vec![format!("unknown section: {section_id}")]);
    };

    let specs: Vec<&FieldSpec> = section.fields.iter().collect();
    let mut sink = SectionSink::new();
    validate_against_specs(&session.form, &specs, &mut sink);

    if sink.errors.is_empty() {
        Ok(())
    } else {
        Err(sink.errors)
    }
}

fn validate_field_value(spec: &FieldSpec, value: &FieldValue) -> Result<(), SessionError> {
    let key = spec.key.as_str();

    match spec.kind {
        FieldKind::Text => {
            let s = value.as_text().ok_or_else(|| {
                SessionError::InputProblem(format!("'{key}' must be a text value"))
            })?;
            apply_validators_text(key, s, spec.validators.as_deref())?;
        }

        FieldKind::Select => {
            let s = value.as_text().ok_or_else(|| {
                SessionError::InputProblem(format!("'{key}' must be a text value"))
            })?;
            let choices = spec.choices.as_deref().unwrap_or_default();
            if !choices.iter().any(|c| c == s) {
                return Err(SessionError::InputProblem(format!(
                    "'{key}' must be one of: {}",
                    choices.join(", ")
                )));
            }
        }

        FieldKind::Date => {
            let s = value.as_text().ok_or_else(|| {
                SessionError::InputProblem(format!("'{key}' must be a text value"))
            })?;
            if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_err() {
                return Err(SessionError::InputProblem(format!(
                    "'{key}' must be a YYYY-MM-DD date"
                )));
            }
        }

        FieldKind::Signature => {
            let uri = value.as_image().ok_or_else(|| {
                SessionError::InputProblem(format!("'{key}' must be an uploaded image"))
            })?;
            if !uri.starts_with("data:image/") {
                return Err(SessionError::InputProblem(format!(
                    "'{key}' must be an image data URI"
                )));
            }
        }
    }

    Ok(())
}

fn apply_validators_text(
    key: &str,
    s: &str,
    validators: Option<&[String]>,
) -> Result<(), SessionError> {
    let Some(vs) = validators else {
        return Ok(());
    };

    for rule in vs.iter() {
        if let Some(pat) = rule.strip_prefix("regex:") {
            let re = regex::Regex::new(pat).map_err(|e| {
                SessionError::InvalidState(format!(
                    "config error: invalid regex for '{key}': {e}"
                ))
            })?;
            if !re.is_match(s) {
                return Err(SessionError::InputProblem(format!(
                    "'{key}' does not match pattern"
                )));
            }
        } else if let Some(n) = rule.strip_prefix("min_len:") {
            let n = n.parse::<usize>().map_err(|_| {
                SessionError::InvalidState(format!(
                    "config error: invalid min_len rule for '{key}': {rule}"
                ))
            })?;
            if s.chars().count() < n {
                return Err(SessionError::InputProblem(format!(
                    "'{key}' must be at least {n} chars"
                )));
            }
        } else if let Some(n) = rule.strip_prefix("max_len:") {
            let n = n.parse::<usize>().map_err(|_| {
                SessionError::InvalidState(format!(
                    "config error: invalid max_len rule for '{key}': {rule}"
                ))
            })?;
            if s.chars().count() > n {
                return Err(SessionError::InputProblem(format!(
                    "'{key}' must be at most {n} chars"
                )));
            }
        }
    }

    Ok(())
}

// ======================================================
// Unit Tests
// ======================================================
