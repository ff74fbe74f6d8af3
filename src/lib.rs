#![doc = include_str!("../README.md")]

mod logging;

pub use logging::init_tracing;

#[doc(inline)]
pub use rill_core::{
    Component, Descriptor, Dispatch, Element, EventHandler, Host, NativeModule, NativeModules,
    NativeViewHandle, Phase, PlatformId, Profiler, PropValue, Props, RawHandle, Store,
    WidgetError, WidgetKind, element, event_name, mount, use_dispatch, use_selector,
};

pub use rill_controls as controls;
pub use rill_device as device;
pub use rill_dom as dom;
pub use rill_layout as layout;
pub use rill_media as media;
pub use rill_native as native;

/// The most common imports, grouped for glob use.
pub mod prelude {
    pub use rill_core::{
        Component, Element, EventHandler, Host, PropValue, Props, Store, element, mount,
        use_dispatch, use_selector,
    };
    pub use rill_dom::DomDocument;
    pub use rill_native::{NativeBridge, NativeHost, RecordingBridge, WrapperRegistry};
}
