// src/sync.rs

//! Preview sync controller.
//!
//! Links rendered preview markers back to the form controls that feed
//! them, without coupling the renderer to any UI technology. The
//! presentation layer forwards delegated pointer events from the preview
//! container; the controller answers with an ordered list of effects
//! (highlight, unhighlight, focus, expand-section) it applies to the form.
//!
//! Per-marker lifecycle: `Idle -> Hovered -> Idle` on pointer enter/leave,
//! and `Idle/Hovered -> Activated` on click. The controller is attached
//! once per mounted preview container and must be detached on unmount;
//! hover state never outlives the attachment.

use crate::preview::blank::{CLASS_BLANK, CLASS_BLANK_FILE};
use crate::template::doc_config::DocumentConfig;
use std::collections::{BTreeMap, BTreeSet};

/// Static mapping from form-control identifiers to the disclosure section
/// hosting them, plus which sections start expanded. Built once per
/// document type; image fields contribute their paired upload control.
#[derive(Debug, Clone, Default)]
pub struct FormLayout {
    control_section: BTreeMap<String, String>,
    open_by_default: BTreeSet<String>,
}

impl FormLayout {
    pub fn from_config(config: &DocumentConfig) -> Self {
        let mut control_section = BTreeMap::new();
        let mut open_by_default = BTreeSet::new();

        for section in &config.sections {
            if section.open_by_default {
                open_by_default.insert(section.section_id.clone());
            }
            for field in &section.fields {
                control_section.insert(field.key.clone(), section.section_id.clone());
                if config.is_image_key(&field.key) {
                    control_section.insert(
                        config.upload_control_id(&field.key),
                        section.section_id.clone(),
                    );
                }
            }
        }

        Self {
            control_section,
            open_by_default,
        }
    }

    pub fn knows_control(&self, control: &str) -> bool {
        self.control_section.contains_key(control)
    }

    pub fn section_of(&self, control: &str) -> Option<&str> {
        self.control_section.get(control).map(String::as_str)
    }
}

/// The delegated event target: its class attribute and the `data-key` the
/// renderer stamped on marker spans. Non-marker targets simply carry
/// whatever classes they have and are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInfo {
    pub class_attr: String,
    pub data_key: Option<String>,
}

impl TargetInfo {
    pub fn new(class_attr: impl Into<String>, data_key: Option<String>) -> Self {
        Self {
            class_attr: class_attr.into(),
            data_key,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_attr.split_ascii_whitespace().any(|c| c == class)
    }

    fn is_marker(&self) -> bool {
        self.has_class(CLASS_BLANK) || self.has_class(CLASS_BLANK_FILE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEvent {
    PointerOver(TargetInfo),
    PointerOut(TargetInfo),
    Click(TargetInfo),
}

/// What the presentation layer must do to the form, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEffect {
    Highlight { control: String },
    Unhighlight { control: String },
    ExpandSection { section_id: String },
    Focus { control: String },
}

#[derive(Debug, Clone)]
pub struct SyncController {
    layout: FormLayout,

    /// Mirror of which disclosure sections are currently expanded.
    open_sections: BTreeSet<String>,

    /// Controls currently highlighted from preview hover.
    hovered: BTreeSet<String>,

    attached: bool,
}

impl SyncController {
    /// Attach to a freshly mounted preview container. Event delegation
    /// means re-renders that swap the preview subtree need no re-attach.
    pub fn attach(layout: FormLayout) -> Self {
        let open_sections = layout.open_by_default.clone();
        Self {
            layout,
            open_sections,
            hovered: BTreeSet::new(),
            attached: true,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Controls currently highlighted (transient; empty after detach).
    pub fn hovered(&self) -> &BTreeSet<String> {
        &self.hovered
    }

    /// The presentation layer reports user-driven section toggles so the
    /// mirror stays accurate.
    pub fn note_section_toggled(&mut self, section_id: &str, open: bool) {
        if open {
            self.open_sections.insert(section_id.to_string());
        } else {
            self.open_sections.remove(section_id);
        }
    }

    pub fn section_is_open(&self, section_id: &str) -> bool {
        self.open_sections.contains(section_id)
    }

    /// Process one delegated pointer event from the preview container.
    pub fn handle(&mut self, event: PreviewEvent) -> Vec<SyncEffect> {
        if !self.attached {
            log::debug!("sync event after detach ignored");
            return Vec::new();
        }

        match event {
            PreviewEvent::PointerOver(target) => match self.resolve(&target) {
                Some(control) => {
                    if self.hovered.insert(control.clone()) {
                        vec![SyncEffect::Highlight { control }]
                    } else {
                        Vec::new()
                    }
                }
                None => Vec::new(),
            },

            PreviewEvent::PointerOut(target) => match self.resolve(&target) {
                Some(control) => {
                    if self.hovered.remove(&control) {
                        vec![SyncEffect::Unhighlight { control }]
                    } else {
                        Vec::new()
                    }
                }
                None => Vec::new(),
            },

            PreviewEvent::Click(target) => {
                let Some(control) = self.resolve(&target) else {
                    return Vec::new();
                };

                let mut effects = Vec::new();
                if let Some(section) = self.layout.section_of(&control) {
                    // Expand before focusing: focus into a collapsed
                    // section would be invisible.
                    if !self.open_sections.contains(section) {
                        effects.push(SyncEffect::ExpandSection {
                            section_id: section.to_string(),
                        });
                        self.open_sections.insert(section.to_string());
                    }
                }
                effects.push(SyncEffect::Focus { control });
                effects
            }
        }
    }

    /// Resolve a delegated target to a known form control. Non-marker
    /// targets and unknown keys resolve to nothing.
    fn resolve(&self, target: &TargetInfo) -> Option<String> {
        if !target.is_marker() {
            return None;
        }

        let key = target.data_key.as_deref().unwrap_or("");
        if key.is_empty() {
            return None;
        }

        if !self.layout.knows_control(key) {
            log::debug!("sync event for unknown control {key:?} ignored");
            return None;
        }

        Some(key.to_string())
    }

    /// Unmount cleanup: reverse any outstanding highlights and drop all
    /// transient state. The controller ignores events afterwards.
    pub fn detach(&mut self) -> Vec<SyncEffect> {
        let effects = std::mem::take(&mut self.hovered)
            .into_iter()
            .map(|control| SyncEffect::Unhighlight { control })
            .collect();

        self.attached = false;
        effects
    }
}

// ======================================================
// Unit Tests
// ======================================================
