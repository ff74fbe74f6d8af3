//! Native backends for the Rill framework.
//!
//! Real platform view systems (UIKit, desktop toolkits) live on the far
//! side of a bridge. This crate defines that seam as [`NativeBridge`], the
//! low-level primitives a platform integration must supply, and builds the
//! portable machinery on top of it:
//!
//! - [`NativeHost`], the host-contract implementation for bridge-backed
//!   platforms,
//! - per-platform view wrappers ([`web`], [`ios`], [`desktop`]) owning a
//!   native view's construction and incremental update,
//! - [`WrapperRegistry`], the tagged-variant dispatch keyed on widget kind
//!   and platform identity,
//! - [`RecordingBridge`], an in-memory bridge that records every primitive
//!   call for headless testing.

mod bridge;
pub mod desktop;
mod host;
pub mod ios;
mod recording;
mod registry;
pub mod web;

pub use bridge::{NativeBridge, WidgetSpec};
pub use host::NativeHost;
pub use recording::{BridgeCommand, RecordingBridge};
pub use registry::{NativeWidget, WrapperRegistry};
