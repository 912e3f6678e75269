// src/template/doc_config.rs

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Top-level JSON5 configuration for one document type.
///
/// Describes the form the user fills: declared fields grouped into
/// disclosure sections, the alias table mapping template-authored token
/// spellings to canonical field keys, and the derived date parts the
/// session recomputes on edit.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub document_type: String,
    pub title: Option<String>,

    /// Suggested file name for the downloaded PDF.
    pub pdf_file_name: Option<String>,

    #[serde(default)]
    pub alias_lookup: AliasLookup,

    /// Substring marking a field key as image-valued (signature uploads).
    #[serde(default = "default_image_key_marker")]
    pub image_key_marker: String,

    pub sections: Vec<SectionConfig>,

    /// Token spelling (as authored in templates) -> canonical field key.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

fn default_image_key_marker() -> String {
    "SIGNATURE".to_string()
}

/// Alias-table lookup policy. Explicit per document type; the table is
/// stored as authored and the policy is applied at lookup time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasLookup {
    #[default]
    Insensitive,
    Sensitive,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionConfig {
    pub section_id: String,
    pub title: Option<String>,

    /// Whether the disclosure section starts expanded.
    #[serde(default)]
    pub open_by_default: bool,

    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,

    #[serde(default)]
    pub required: bool,

    /// Sample hint text shown in the form control.
    pub placeholder: Option<String>,

    /// Initial value. For date fields the literal `"today"` seeds the
    /// current date.
    pub default: Option<String>,

    /// For select inputs.
    pub choices: Option<Vec<String>>,

    /// `regex:…` / `min_len:…` / `max_len:…` rules.
    pub validators: Option<Vec<String>>,

    /// For date fields: system-populated sub-keys recomputed on edit.
    pub derived: Option<Vec<DerivedPart>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Date,
    Select,
    Signature,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DerivedPart {
    pub key: String,
    pub part: DatePart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePart {
    Day,
    MonthName,
    Year,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(json5::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Config parse error: {e}"),
            ConfigError::Validation(msg) => write!(f, "Config validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<json5::Error> for ConfigError {
    fn from(e: json5::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Parse a JSON5 config string.
pub fn parse_config_str(s: &str) -> Result<DocumentConfig, ConfigError> {
    let cfg: DocumentConfig = json5::from_str(s)?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Load a JSON5 config from disk.
pub fn load_config_path(path: impl AsRef<Path>) -> Result<DocumentConfig, ConfigError> {
    let s = fs::read_to_string(path)?;
    parse_config_str(&s)
}

/// Structural validation. Field-key uniqueness is enforced here because a
/// collision would make placeholder resolution ambiguous.
pub fn validate_config(cfg: &DocumentConfig) -> Result<(), ConfigError> {
    if cfg.document_type.trim().is_empty() {
        return Err(ConfigError::Validation(
            "document_type must be non-empty".to_string(),
        ));
    }
    if cfg.image_key_marker.trim().is_empty() {
        return Err(ConfigError::Validation(
            "image_key_marker must be non-empty".to_string(),
        ));
    }
    if cfg.sections.is_empty() {
        return Err(ConfigError::Validation(
            "config must contain at least one section".to_string(),
        ));
    }

    let mut section_ids = BTreeSet::new();
    let mut keys = BTreeSet::new();

    for (i, s) in cfg.sections.iter().enumerate() {
        if s.section_id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "sections[{i}].section_id must be non-empty"
            )));
        }
        if !section_ids.insert(s.section_id.trim().to_string()) {
            return Err(ConfigError::Validation(format!(
                "sections[{i}].section_id must be unique; duplicate found for '{}'",
                s.section_id
            )));
        }
        if s.fields.is_empty() {
            return Err(ConfigError::Validation(format!(
                "sections[{i}] must contain at least one field"
            )));
        }

        for (j, f) in s.fields.iter().enumerate() {
            if f.key.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "sections[{i}].fields[{j}].key must be non-empty"
                )));
            }
            if f.label.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "sections[{i}].fields[{j}].label must be non-empty"
                )));
            }
            if !keys.insert(f.key.trim().to_string()) {
                return Err(ConfigError::Validation(format!(
                    "field key '{}' is declared more than once",
                    f.key
                )));
            }

            // Select sanity
            if matches!(f.kind, FieldKind::Select) {
                let choices = f.choices.as_ref().ok_or_else(|| {
                    ConfigError::Validation(format!(
                        "sections[{i}].fields[{j}] type=select requires choices"
                    ))
                })?;
                if choices.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "sections[{i}].fields[{j}] select choices must be non-empty"
                    )));
                }
            }

            // Signature fields must be recognizable through the key marker,
            // otherwise the renderer would emit a text blank for them.
            if matches!(f.kind, FieldKind::Signature) && !f.key.contains(&cfg.image_key_marker) {
                return Err(ConfigError::Validation(format!(
                    "signature field '{}' must contain the image key marker '{}'",
                    f.key, cfg.image_key_marker
                )));
            }

            if let Some(derived) = &f.derived {
                if !matches!(f.kind, FieldKind::Date) {
                    return Err(ConfigError::Validation(format!(
                        "field '{}' declares derived parts but is not a date field",
                        f.key
                    )));
                }
                for d in derived {
                    if d.key.trim().is_empty() {
                        return Err(ConfigError::Validation(format!(
                            "field '{}' has a derived part with an empty key",
                            f.key
                        )));
                    }
                    if !keys.insert(d.key.trim().to_string()) {
                        return Err(ConfigError::Validation(format!(
                            "derived key '{}' collides with another field key",
                            d.key
                        )));
                    }
                }
            }
        }
    }

    // Alias targets must be resolvable; a dangling target would always fall
    // through to fallback synthesis and silently shadow the alias.
    for (spelling, target) in cfg.aliases.iter() {
        if spelling.trim().is_empty() {
            return Err(ConfigError::Validation(
                "alias spellings must be non-empty".to_string(),
            ));
        }
        if !keys.contains(target.trim()) {
            return Err(ConfigError::Validation(format!(
                "alias '{spelling}' maps to undeclared key '{target}'"
            )));
        }
    }

    // Case-insensitive lookup needs spellings that stay distinct when folded.
    if cfg.alias_lookup == AliasLookup::Insensitive {
        let mut folded = BTreeSet::new();
        for spelling in cfg.aliases.keys() {
            if !folded.insert(spelling.trim().to_ascii_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "alias '{spelling}' collides with another spelling under \
                     case-insensitive lookup"
                )));
            }
        }
    }

    Ok(())
}

impl DocumentConfig {
    /// All declared field keys, derived keys included.
    pub fn declared_keys(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for s in &self.sections {
            for f in &s.fields {
                out.insert(f.key.trim().to_string());
                if let Some(derived) = &f.derived {
                    for d in derived {
                        out.insert(d.key.trim().to_string());
                    }
                }
            }
        }
        out
    }

    /// Keys that are system-populated from a date field.
    pub fn derived_keys(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for s in &self.sections {
            for f in &s.fields {
                if let Some(derived) = &f.derived {
                    for d in derived {
                        out.insert(d.key.trim().to_string());
                    }
                }
            }
        }
        out
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.key == key)
    }

    /// Section hosting the field's form control. Derived keys live with
    /// their source field.
    pub fn section_of(&self, key: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| {
            s.fields.iter().any(|f| {
                f.key == key
                    || f.derived
                        .as_ref()
                        .is_some_and(|ds| ds.iter().any(|d| d.key == key))
            })
        })
    }

    /// Human label for a declared key, if any.
    pub fn label_for(&self, key: &str) -> Option<&str> {
        self.field(key).map(|f| f.label.as_str())
    }

    pub fn is_image_key(&self, key: &str) -> bool {
        key.contains(&self.image_key_marker)
    }

    /// Identifier of the file-upload control paired with an image field.
    pub fn upload_control_id(&self, key: &str) -> String {
        format!("{key}_UPLOAD")
    }

    /// Resolve a token spelling through the alias table per the configured
    /// lookup policy.
    pub fn resolve_alias(&self, token: &str) -> Option<&str> {
        match self.alias_lookup {
            AliasLookup::Sensitive => self.aliases.get(token).map(String::as_str),
            AliasLookup::Insensitive => self
                .aliases
                .iter()
                .find(|(spelling, _)| spelling.eq_ignore_ascii_case(token))
                .map(|(_, target)| target.as_str()),
        }
    }
}
