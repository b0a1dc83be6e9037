//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `AppState` signal from context and
//! hand user actions to the core controllers through `services::dispatch`.

pub mod create_form;
pub mod edit_modal;
pub mod experiment_card;
pub mod experiment_list;
pub mod filter_bar;
pub mod image_input;
pub mod notebook_panel;
pub mod rich_text_field;
pub mod status_line;
