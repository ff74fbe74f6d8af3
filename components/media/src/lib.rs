//! Media widgets for the Rill framework.
//!
//! Currently this is the `Image` widget: a typed configuration describing a
//! remote or bundled image and how it fills its frame. Platform backends own
//! the actual decoding and drawing; this crate only validates construction
//! and applies defaults exactly once, at construction time.

mod image;

pub use image::{DESCRIPTOR, ImageConfig, ResizeMode, image};
