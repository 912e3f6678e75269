// src/preview/blank.rs

//! Interactive blank markers for unfilled fields.

use crate::preview::html;
use crate::template::doc_config::DocumentConfig;

/// CSS class of a clickable text blank.
pub const CLASS_BLANK: &str = "placeholder-blank";
/// CSS class of an upload marker for image fields.
pub const CLASS_BLANK_FILE: &str = "placeholder-blank-file";
/// CSS class added to the diagnostic marker for unresolvable placeholders.
pub const CLASS_BLANK_UNRESOLVED: &str = "placeholder-blank placeholder-unresolved";

/// Human label for a field key: the configured field label when the key is
/// declared, otherwise underscores become spaces and each word is
/// title-cased (`SOME_WEIRD_TOKEN` -> `Some Weird Token`).
pub fn friendly_label(key: &str, config: &DocumentConfig) -> String {
    if let Some(label) = config.label_for(key) {
        return label.to_string();
    }

    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut cs = w.chars();
            match cs.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &cs.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the interactive marker for an unfilled field.
///
/// Image-valued keys get an upload marker whose data key targets the
/// file-upload control, since focusing a text input would be meaningless
/// for them. Empty keys get a diagnostic marker so an unresolvable
/// placeholder stays visible instead of disappearing.
pub fn blank_marker(key: &str, config: &DocumentConfig) -> String {
    if key.is_empty() {
        return html::marker_span(
            CLASS_BLANK_UNRESOLVED,
            "",
            "This placeholder could not be resolved to a form field",
            "Unresolved Field",
        );
    }

    if config.is_image_key(key) {
        return html::marker_span(
            CLASS_BLANK_FILE,
            &config.upload_control_id(key),
            "Upload a signature file",
            "Upload Signature",
        );
    }

    let label = friendly_label(key, config);
    let title = format!("Click to fill '{label}' in the form");
    html::marker_span(CLASS_BLANK, key, &title, &label)
}

// ======================================================
// Unit Tests
// ======================================================
