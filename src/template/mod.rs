// src/template/mod.rs

pub mod doc_config;
pub mod placeholder;

pub use doc_config::{
    load_config_path, parse_config_str, AliasLookup, ConfigError, DatePart, DerivedPart,
    DocumentConfig, FieldKind, FieldSpec, SectionConfig,
};
pub use placeholder::{normalize_token, split_segments, synthesize_key, Segment};

/// Lifecycle of the fetched template text for one document session.
///
/// The template is requested once at session start; the renderer consults
/// the slot on every pass so a pending or failed fetch degrades to a fixed
/// status paragraph instead of propagating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSlot {
    #[default]
    Loading,
    Ready(String),
    Failed,
}

impl TemplateSlot {
    pub fn is_ready(&self) -> bool {
        matches!(self, TemplateSlot::Ready(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            TemplateSlot::Ready(t) => Some(t),
            _ => None,
        }
    }
}
