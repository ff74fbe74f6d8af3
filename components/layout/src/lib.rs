//! Layout widgets for the Rill framework.
//!
//! Currently this is the `ScrollView` widget: a container that displays
//! content larger than its frame. The actual scrolling behavior lives in
//! the platform backends; this crate carries the validated configuration.

mod scroll;

pub use scroll::{Axis, DESCRIPTOR, ScrollConfig, scroll, scroll_horizontal};
