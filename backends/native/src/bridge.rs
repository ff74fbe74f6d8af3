//! The platform bridge: low-level primitives a native integration supplies.

use rill_controls::TextInputConfig;
use rill_core::{EventHandler, PlatformId, Props, RawHandle, WidgetKind};
use rill_layout::ScrollConfig;
use rill_media::ImageConfig;

/// Typed construction payload crossing the bridge, one variant per widget
/// kind. Validation and default application happen before a spec is built;
/// the platform side receives a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetSpec {
    /// An image view.
    Image(ImageConfig),
    /// A scroll container.
    Scroll(ScrollConfig),
    /// A text input field.
    TextInput(TextInputConfig),
}

impl WidgetSpec {
    /// The widget kind this spec constructs.
    #[must_use]
    pub const fn kind(&self) -> WidgetKind {
        match self {
            Self::Image(_) => WidgetKind::Image,
            Self::Scroll(_) => WidgetKind::Scroll,
            Self::TextInput(_) => WidgetKind::TextInput,
        }
    }
}

/// The primitives a platform integration must supply.
///
/// Tree operations mirror the host contract one-to-one; widget operations
/// carry typed construction specs and untyped incremental updates. A bridge
/// is driven from the single render thread and applies calls strictly in
/// the order they are issued.
pub trait NativeBridge {
    /// The backend identity this bridge renders to.
    fn platform(&self) -> PlatformId;

    /// Creates a detached primitive view; a `"text"` tag yields a platform
    /// text view seeded from the `"text"` prop.
    fn create_node(&mut self, tag: &str, props: &Props) -> RawHandle;

    /// Replaces a text view's content in place.
    fn set_text(&mut self, node: RawHandle, text: &str);

    /// Attaches `child` as the last child of `parent`.
    fn append(&mut self, parent: RawHandle, child: RawHandle);

    /// Substitutes `new` for `old` at the same position in its parent.
    fn replace(&mut self, old: RawHandle, new: RawHandle);

    /// Sets one attribute to its stringified value.
    fn set_attribute(&mut self, node: RawHandle, key: &str, value: &str);

    /// Removes one attribute.
    fn remove_attribute(&mut self, node: RawHandle, key: &str);

    /// Registers an event listener.
    fn add_listener(&mut self, node: RawHandle, event: &str, handler: EventHandler);

    /// Removes an event listener.
    fn remove_listener(&mut self, node: RawHandle, event: &str);

    /// Removes all children of `node`.
    fn clear(&mut self, node: RawHandle);

    /// Instantiates a native widget from its validated configuration and
    /// returns the owning token.
    fn instantiate(&mut self, spec: WidgetSpec) -> RawHandle;

    /// Applies an incremental update to an image view. Whether and how the
    /// platform diffs the mapping is its own concern.
    fn update_image(&mut self, node: RawHandle, props: &Props);

    /// Applies an incremental update to a scroll container.
    fn update_scroll(&mut self, node: RawHandle, props: &Props);

    /// Applies an incremental update to a text input.
    fn update_text_input(&mut self, node: RawHandle, props: &Props);
}
