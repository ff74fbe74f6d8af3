//! Core functionality for the Rill framework.
//!
//! This crate defines the pieces every other Rill crate builds on:
//!
//! - the virtual [`Element`] tree describing what should be on screen,
//! - the [`Host`] contract a rendering backend implements to turn tree nodes
//!   into real views,
//! - [`NativeViewHandle`] records bridging tree nodes to platform view
//!   objects,
//! - the [`NativeModules`] registry exposing asynchronous device
//!   capabilities to portable code,
//! - the [`Store`] and its selector/dispatch bindings feeding state into
//!   component render functions,
//! - a small [`Profiler`] for validating performance-sensitive paths.
//!
//! Reconciliation (diffing successive element trees into a minimal host
//! operation sequence) lives outside this crate; [`host::mount`] only walks a
//! tree once through the contract to build its initial view structure.

pub mod element;
pub mod error;
pub mod handle;
pub mod host;
pub mod modules;
pub mod profiler;
pub mod store;
pub mod widget;

#[doc(inline)]
pub use element::{Element, EventHandler, PropValue, Props, element};
#[doc(inline)]
pub use error::{CapabilityError, WidgetError};
#[doc(inline)]
pub use handle::{NativeViewHandle, RawHandle};
#[doc(inline)]
pub use host::{Host, event_name, mount};
#[doc(inline)]
pub use modules::{NativeModule, NativeModules};
#[doc(inline)]
pub use profiler::Profiler;
#[doc(inline)]
pub use store::{Component, Dispatch, Phase, Store, use_dispatch, use_selector};
#[doc(inline)]
pub use widget::{Descriptor, PlatformId, WidgetKind};
