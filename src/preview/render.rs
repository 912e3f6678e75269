// src/preview/render.rs

//! The live-preview renderer.
//!
//! `render` is a pure function of the template text, the form state, and
//! the document configuration: repeated calls with unchanged inputs yield
//! byte-identical output, and no raw `{{` ever survives into the result.

use crate::form::state::{FieldValue, FormState};
use crate::preview::blank::blank_marker;
use crate::preview::html::{self, HtmlBuf};
use crate::template::doc_config::DocumentConfig;
use crate::template::placeholder::{normalize_token, split_segments, Segment};
use crate::template::TemplateSlot;

/// CSS class of the embedded signature image.
pub const CLASS_SIGNATURE_IMAGE: &str = "signature-image";

/// Filler echoed for a derived key that has no value yet.
const DERIVED_FILLER: &str = "____";
/// Static blank shown by the non-interactive preview.
const SIMPLE_BLANK: &str = "__________";

/// How blanks are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    /// Static underline markers; no interactivity metadata.
    Simple,
    /// Tagged spans carrying `data-key` for the sync controller.
    Interactive,
}

/// Resolution of one placeholder occurrence. Derived fresh on every pass,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    Filled(String),
    Blank(String),
    Image(String),
}

/// Decide how one resolved key renders against the current state.
pub fn resolve_mode(key: &str, state: &FormState, config: &DocumentConfig) -> RenderMode {
    let value = state.get(key);
    match value {
        FieldValue::Image(uri) if !uri.is_empty() && config.is_image_key(key) => {
            RenderMode::Image(uri.clone())
        }
        FieldValue::Text(s) if !s.is_empty() => RenderMode::Filled(s.clone()),
        _ => RenderMode::Blank(key.to_string()),
    }
}

/// Render a ready template against the form state.
pub fn render(
    template: &str,
    state: &FormState,
    config: &DocumentConfig,
    mode: PreviewMode,
) -> String {
    let derived = config.derived_keys();
    let mut out = HtmlBuf::with_capacity(template.len() + 64);

    for seg in split_segments(template) {
        match seg {
            // Template text is markup by contract; placeholders have
            // already been split out of it.
            Segment::Literal(text) => out.push_fragment(text),

            Segment::Token(tok) => {
                let key = normalize_token(tok, config);

                if key.is_empty() {
                    log::warn!("unresolvable placeholder token {tok:?}");
                    match mode {
                        PreviewMode::Simple => out.push_fragment(&html::underline(SIMPLE_BLANK)),
                        PreviewMode::Interactive => out.push_fragment(&blank_marker("", config)),
                    }
                    continue;
                }

                // Derived keys are system-populated: echo, never a blank.
                if derived.contains(&key) {
                    match state.get(&key) {
                        FieldValue::Text(s) if !s.is_empty() => out.push_text(s),
                        _ => out.push_fragment(DERIVED_FILLER),
                    }
                    continue;
                }

                match resolve_mode(&key, state, config) {
                    RenderMode::Filled(text) => out.push_text(&text),
                    RenderMode::Image(uri) => {
                        out.push_fragment(&html::img(&uri, CLASS_SIGNATURE_IMAGE, "Signature"))
                    }
                    RenderMode::Blank(key) => match mode {
                        PreviewMode::Simple => out.push_fragment(&html::underline(SIMPLE_BLANK)),
                        PreviewMode::Interactive => {
                            out.push_fragment(&blank_marker(&key, config))
                        }
                    },
                }
            }

            // An opener with no closer: emit escaped braces plus the tail
            // with its own braces escaped, so the output never contains a
            // raw "{{".
            Segment::UnterminatedOpen(rest) => {
                log::warn!("unterminated placeholder opener in template");
                out.push_fragment("&#123;&#123;");
                out.push_fragment(&rest.replace('{', "&#123;"));
            }
        }
    }

    out.into_string()
}

/// Render through the template lifecycle gate: a pending fetch shows a
/// loading paragraph, a failed fetch a fixed error message, and an empty
/// template a diagnostic line. Never panics, never propagates.
pub fn render_slot(
    slot: &TemplateSlot,
    state: &FormState,
    config: &DocumentConfig,
    mode: PreviewMode,
) -> String {
    match slot {
        TemplateSlot::Loading => html::paragraph(None, "Loading template…"),
        TemplateSlot::Failed => html::paragraph(
            Some("preview-error"),
            "Error loading template. Please check the document service.",
        ),
        TemplateSlot::Ready(t) if t.is_empty() => html::paragraph(None, "No template loaded."),
        TemplateSlot::Ready(t) => render(t, state, config, mode),
    }
}

// ======================================================
// Unit Tests
// ======================================================
