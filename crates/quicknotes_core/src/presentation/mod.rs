//! Presentation-facing state for note list and dialog front ends.
//!
//! # Responsibility
//! - Turn the collection into a renderable view.
//! - Hold the add/edit dialog state that used to live in page globals.

pub mod editor;
pub mod render;
