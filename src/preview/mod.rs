// src/preview/mod.rs

pub mod blank;
pub mod html;
pub mod render;

pub use blank::{blank_marker, friendly_label};
pub use render::{render, render_slot, PreviewMode, RenderMode};
