//! An in-memory bridge that records every primitive call.

use rill_core::{EventHandler, PlatformId, Props, RawHandle};
use tracing::trace;

use crate::bridge::{NativeBridge, WidgetSpec};

/// One recorded bridge primitive.
///
/// Update commands record the prop keys that crossed the bridge (in key
/// order) rather than the values, which keeps commands comparable while
/// still pinning down exactly what was forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCommand {
    /// `create_node` was called.
    CreateNode {
        /// The allocated token.
        node: RawHandle,
        /// The requested tag.
        tag: String,
    },
    /// `set_text` was called.
    SetText {
        /// The target view.
        node: RawHandle,
        /// The new content.
        text: String,
    },
    /// `append` was called.
    Append {
        /// The parent view.
        parent: RawHandle,
        /// The appended child.
        child: RawHandle,
    },
    /// `replace` was called.
    Replace {
        /// The view being replaced.
        old: RawHandle,
        /// Its replacement.
        new: RawHandle,
    },
    /// `set_attribute` was called.
    SetAttribute {
        /// The target view.
        node: RawHandle,
        /// The attribute key.
        key: String,
        /// The stringified value.
        value: String,
    },
    /// `remove_attribute` was called.
    RemoveAttribute {
        /// The target view.
        node: RawHandle,
        /// The attribute key.
        key: String,
    },
    /// `add_listener` was called.
    AddListener {
        /// The target view.
        node: RawHandle,
        /// The event name.
        event: String,
    },
    /// `remove_listener` was called.
    RemoveListener {
        /// The target view.
        node: RawHandle,
        /// The event name.
        event: String,
    },
    /// `clear` was called.
    Clear {
        /// The emptied view.
        node: RawHandle,
    },
    /// `instantiate` was called.
    Instantiate {
        /// The allocated token.
        node: RawHandle,
        /// The typed construction payload.
        spec: WidgetSpec,
    },
    /// `update_image` was called.
    UpdateImage {
        /// The target view.
        node: RawHandle,
        /// Keys of the forwarded props.
        keys: Vec<String>,
    },
    /// `update_scroll` was called.
    UpdateScroll {
        /// The target view.
        node: RawHandle,
        /// Keys of the forwarded props.
        keys: Vec<String>,
    },
    /// `update_text_input` was called.
    UpdateTextInput {
        /// The target view.
        node: RawHandle,
        /// Keys of the forwarded props.
        keys: Vec<String>,
    },
}

/// A bridge with no platform behind it: tokens are allocated from a
/// counter and every call lands in a command log, in issue order.
#[derive(Debug)]
pub struct RecordingBridge {
    platform: PlatformId,
    next: u64,
    commands: Vec<BridgeCommand>,
}

impl RecordingBridge {
    /// Creates a recording bridge reporting the given platform identity.
    #[must_use]
    pub const fn new(platform: PlatformId) -> Self {
        Self {
            platform,
            next: 1,
            commands: Vec::new(),
        }
    }

    /// The recorded commands, in issue order.
    #[must_use]
    pub fn commands(&self) -> &[BridgeCommand] {
        &self.commands
    }

    /// Drains and returns the recorded commands.
    pub fn take_commands(&mut self) -> Vec<BridgeCommand> {
        std::mem::take(&mut self.commands)
    }

    /// The spec of the most recent `instantiate` call, if any.
    #[must_use]
    pub fn last_instantiated(&self) -> Option<&WidgetSpec> {
        self.commands.iter().rev().find_map(|command| match command {
            BridgeCommand::Instantiate { spec, .. } => Some(spec),
            _ => None,
        })
    }

    fn allocate(&mut self) -> RawHandle {
        let handle = RawHandle::new(self.next);
        self.next += 1;
        handle
    }

    fn prop_keys(props: &Props) -> Vec<String> {
        props.iter().map(|(key, _)| key.to_owned()).collect()
    }
}

impl NativeBridge for RecordingBridge {
    fn platform(&self) -> PlatformId {
        self.platform
    }

    fn create_node(&mut self, tag: &str, _props: &Props) -> RawHandle {
        let node = self.allocate();
        trace!(node = node.value(), tag, "create node");
        self.commands.push(BridgeCommand::CreateNode {
            node,
            tag: tag.to_owned(),
        });
        node
    }

    fn set_text(&mut self, node: RawHandle, text: &str) {
        self.commands.push(BridgeCommand::SetText {
            node,
            text: text.to_owned(),
        });
    }

    fn append(&mut self, parent: RawHandle, child: RawHandle) {
        self.commands.push(BridgeCommand::Append { parent, child });
    }

    fn replace(&mut self, old: RawHandle, new: RawHandle) {
        self.commands.push(BridgeCommand::Replace { old, new });
    }

    fn set_attribute(&mut self, node: RawHandle, key: &str, value: &str) {
        self.commands.push(BridgeCommand::SetAttribute {
            node,
            key: key.to_owned(),
            value: value.to_owned(),
        });
    }

    fn remove_attribute(&mut self, node: RawHandle, key: &str) {
        self.commands.push(BridgeCommand::RemoveAttribute {
            node,
            key: key.to_owned(),
        });
    }

    fn add_listener(&mut self, node: RawHandle, event: &str, _handler: EventHandler) {
        self.commands.push(BridgeCommand::AddListener {
            node,
            event: event.to_owned(),
        });
    }

    fn remove_listener(&mut self, node: RawHandle, event: &str) {
        self.commands.push(BridgeCommand::RemoveListener {
            node,
            event: event.to_owned(),
        });
    }

    fn clear(&mut self, node: RawHandle) {
        self.commands.push(BridgeCommand::Clear { node });
    }

    fn instantiate(&mut self, spec: WidgetSpec) -> RawHandle {
        let node = self.allocate();
        self.commands.push(BridgeCommand::Instantiate { node, spec });
        node
    }

    fn update_image(&mut self, node: RawHandle, props: &Props) {
        let keys = Self::prop_keys(props);
        self.commands.push(BridgeCommand::UpdateImage { node, keys });
    }

    fn update_scroll(&mut self, node: RawHandle, props: &Props) {
        let keys = Self::prop_keys(props);
        self.commands.push(BridgeCommand::UpdateScroll { node, keys });
    }

    fn update_text_input(&mut self, node: RawHandle, props: &Props) {
        let keys = Self::prop_keys(props);
        self.commands
            .push(BridgeCommand::UpdateTextInput { node, keys });
    }
}
