//! # labnote
//!
//! Platform-neutral core of the lab-notebook browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser shell (`client/`) owns the DOM and the rich-text widgets; this
//! crate owns everything else: the REST client for notebooks and experiments,
//! the rich-text adapter seam, the explicit application state, and the
//! controllers that tie them together. Controllers take the state, the store,
//! and the editors as arguments so every handler can run natively in tests.

pub mod api;
pub mod config;
pub mod confirm;
pub mod create_form;
pub mod edit_modal;
pub mod experiments;
pub mod filter;
pub mod notebooks;
pub mod render;
pub mod rich_text;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_support;
