//! Host-contract implementation for bridge-backed platforms.

use rill_core::{Host, PropValue, Props, RawHandle, event_name};

use crate::bridge::NativeBridge;

/// Adapts a [`NativeBridge`] to the host contract.
///
/// Where the web backend mutates a retained DOM directly, iOS and desktop
/// backends route every tree operation through their bridge. The prop
/// convention (event keys, null removal, stringification) is enforced here
/// so that every bridge sees the same shape of traffic.
#[derive(Debug)]
pub struct NativeHost<B: NativeBridge> {
    bridge: B,
}

impl<B: NativeBridge> NativeHost<B> {
    /// Wraps a bridge as a host.
    pub const fn new(bridge: B) -> Self {
        Self { bridge }
    }

    /// The underlying bridge.
    pub const fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Mutable access to the underlying bridge.
    pub const fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    /// Consumes the host and returns its bridge.
    pub fn into_bridge(self) -> B {
        self.bridge
    }
}

impl<B: NativeBridge> Host for NativeHost<B> {
    type Node = RawHandle;

    fn create_element(&mut self, tag: &str, props: &Props) -> RawHandle {
        self.bridge.create_node(tag, props)
    }

    fn set_text(&mut self, node: &RawHandle, text: &str) {
        self.bridge.set_text(*node, text);
    }

    fn append(&mut self, parent: &RawHandle, child: &RawHandle) {
        self.bridge.append(*parent, *child);
    }

    fn replace(&mut self, old: &RawHandle, new: &RawHandle) {
        self.bridge.replace(*old, *new);
    }

    fn set_prop(&mut self, node: &RawHandle, key: &str, value: &PropValue) {
        if let Some(event) = event_name(key) {
            match value {
                PropValue::Handler(handler) => {
                    self.bridge.add_listener(*node, &event, handler.clone());
                    return;
                }
                PropValue::Null => {
                    // Fall through so a stale attribute under the same key
                    // is removed as well.
                    self.bridge.remove_listener(*node, &event);
                }
                _ => {}
            }
        }
        match value.to_attribute() {
            Some(text) => self.bridge.set_attribute(*node, key, &text),
            None => self.bridge.remove_attribute(*node, key),
        }
    }

    fn clear(&mut self, node: &RawHandle) {
        self.bridge.clear(*node);
    }
}
