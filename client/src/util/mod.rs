//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate the DOM and JS-global concerns (the Quill widget,
//! native dialogs, file inputs) from component markup.

pub mod confirm;
pub mod file_input;
pub mod quill;
