//! Control widgets for the Rill framework.
//!
//! Currently this is the `TextInput` widget: a single-line editable text
//! field. Editing behavior and keyboard handling belong to the platform
//! backends; this crate carries the validated configuration.

mod text_input;

pub use text_input::{DESCRIPTOR, TextInputConfig, text_input};
