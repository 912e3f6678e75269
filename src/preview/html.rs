// src/preview/html.rs

//! Safe HTML fragment construction.
//!
//! The preview is mounted as raw HTML by the presentation layer, so every
//! fragment must be safe by construction: user text only enters through
//! [`escape_text`] / [`escape_attr`], and element markup is only produced by
//! the builders below from trusted inputs. Nothing in the preview pipeline
//! concatenates unescaped user input into markup.

/// Escape text content (`&`, `<`, `>`).
pub fn escape_text(s: &str) -> String {
    // Fast path: nothing to escape.
    if !s.bytes().any(|b| matches!(b, b'&' | b'<' | b'>')) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value (`&`, `<`, `>`, `"`).
pub fn escape_attr(s: &str) -> String {
    if !s.bytes().any(|b| matches!(b, b'&' | b'<' | b'>' | b'"')) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Accumulates a preview document. Text goes through escaping; element
/// markup must come from the builders in this module.
#[derive(Debug, Default)]
pub struct HtmlBuf {
    buf: String,
}

impl HtmlBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: String::with_capacity(cap),
        }
    }

    /// Append user or template text; escaped.
    pub fn push_text(&mut self, s: &str) {
        self.buf.push_str(&escape_text(s));
    }

    /// Append a fragment produced by a builder in this module, or template
    /// text that is markup by contract (the raw template body).
    pub fn push_fragment(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// `<img>` element for an embedded signature image.
pub fn img(src: &str, class: &str, alt: &str) -> String {
    format!(
        r#"<img src="{}" class="{}" alt="{}" />"#,
        escape_attr(src),
        escape_attr(class),
        escape_attr(alt)
    )
}

/// Marker span: class + data key + tooltip + visible label.
pub fn marker_span(class: &str, data_key: &str, title: &str, label: &str) -> String {
    format!(
        r#"<span class="{}" data-key="{}" title="{}"> [{}] </span>"#,
        escape_attr(class),
        escape_attr(data_key),
        escape_attr(title),
        escape_text(label)
    )
}

/// Static underline filler used by the non-interactive preview.
pub fn underline(text: &str) -> String {
    format!("<u>{}</u>", escape_text(text))
}

/// A one-paragraph status message (loading / error states).
pub fn paragraph(class: Option<&str>, text: &str) -> String {
    match class {
        Some(c) => format!(r#"<p class="{}">{}</p>"#, escape_attr(c), escape_text(text)),
        None => format!("<p>{}</p>", escape_text(text)),
    }
}

// ======================================================
// Unit Tests
// ======================================================
