// src/template/placeholder.rs

//! Placeholder scanning and key normalization.
//!
//! Templates mark substitution points with `{{ token }}`. The inner token
//! may be authored in dot notation (`company.name`), as a canonical key
//! (`COMPANY_NAME`), or as anything else a template author typed; every
//! spelling must resolve to exactly one canonical field key.

use crate::template::doc_config::DocumentConfig;

/// One piece of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text outside any placeholder.
    Literal(&'a str),
    /// The trimmed inner text of one `{{ ... }}` span.
    Token(&'a str),
    /// A `{{` with no closing `}}`; carries the text after the opener.
    UnterminatedOpen(&'a str),
}

/// Split a template into literal and placeholder segments, left to right,
/// non-overlapping. The inner text may contain anything except `}`-pairs;
/// an opener without a closer yields `UnterminatedOpen` so callers can
/// degrade without ever re-emitting a raw `{{`.
pub fn split_segments(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut out = Vec::new();

    let mut lit_start = 0;
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'{' && bytes[i + 1] == b'{' {
            // Find closing "}}".
            let inner_start = i + 2;
            let mut j = inner_start;
            while j + 1 < bytes.len() {
                if bytes[j] == b'}' && bytes[j + 1] == b'}' {
                    break;
                }
                j += 1;
            }

            if j + 1 >= bytes.len() {
                // No closer: everything before the opener is literal, the
                // rest is the unterminated tail.
                if lit_start < i {
                    out.push(Segment::Literal(&template[lit_start..i]));
                }
                out.push(Segment::UnterminatedOpen(&template[inner_start..]));
                return out;
            }

            if lit_start < i {
                out.push(Segment::Literal(&template[lit_start..i]));
            }
            out.push(Segment::Token(template[inner_start..j].trim()));

            i = j + 2;
            lit_start = i;
            continue;
        }
        i += 1;
    }

    if lit_start < template.len() {
        out.push(Segment::Literal(&template[lit_start..]));
    }
    out
}

/// Canonicalize a raw placeholder token to a field key.
///
/// Resolution order: a token that already names a declared key wins, then
/// the alias table (per the config's lookup policy), then fallback
/// synthesis. Empty and pathological tokens normalize to the empty key,
/// which the renderer shows as a diagnostic blank.
pub fn normalize_token(raw: &str, config: &DocumentConfig) -> String {
    let clean = raw.trim();
    if clean.is_empty() {
        return String::new();
    }

    if config.declared_keys().contains(clean) {
        return clean.to_string();
    }

    if let Some(target) = config.resolve_alias(clean) {
        return target.to_string();
    }

    synthesize_key(clean)
}

/// Deterministic fallback for tokens with no alias entry: every run of
/// non-alphanumeric characters collapses to a single underscore, outer
/// underscores are dropped, and the result is upper-cased.
/// `some-weird.token!` becomes `SOME_WEIRD_TOKEN`.
pub fn synthesize_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;

    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c.to_ascii_uppercase());
        } else {
            pending_sep = true;
        }
    }

    out
}

// ======================================================
// Unit Tests
// ======================================================
