//! iOS view wrappers.
//!
//! UIKit views are expensive to touch, so these wrappers keep the last
//! applied configuration and only cross the bridge when an update would
//! actually change it. Invalid incremental values are logged and skipped
//! rather than tearing down the view.

use rill_controls::TextInputConfig;
use rill_core::{NativeViewHandle, Props, WidgetKind};
use rill_layout::{Axis, ScrollConfig};
use rill_media::{ImageConfig, ResizeMode};
use tracing::warn;

use crate::bridge::{NativeBridge, WidgetSpec};
use crate::registry::{NativeWidget, WrapperRegistry};

/// An `Image` backed by a UIKit image view.
#[derive(Debug)]
pub struct IosImage {
    config: ImageConfig,
    handle: NativeViewHandle,
}

impl IosImage {
    /// Instantiates the native view from a validated configuration.
    pub fn new(bridge: &mut dyn NativeBridge, config: ImageConfig, id: Option<String>) -> Self {
        let raw = bridge.instantiate(WidgetSpec::Image(config.clone()));
        Self {
            config,
            handle: NativeViewHandle::new(id, raw, WidgetKind::Image),
        }
    }

    /// The last configuration applied to the native view.
    #[must_use]
    pub const fn config(&self) -> &ImageConfig {
        &self.config
    }
}

impl NativeWidget for IosImage {
    fn handle(&self) -> &NativeViewHandle {
        &self.handle
    }

    fn update(&mut self, props: &Props, bridge: &mut dyn NativeBridge) {
        let mut next = self.config.clone();
        if let Some(source) = props.string("source") {
            next.source = source.to_owned();
        }
        if let Some(raw_mode) = props.string("resizeMode") {
            match ResizeMode::parse(raw_mode) {
                Some(mode) => next.resize_mode = mode,
                None => warn!(mode = raw_mode, "skipping unknown resize mode"),
            }
        }
        if next != self.config {
            bridge.update_image(self.handle.raw(), props);
            self.config = next;
        }
    }
}

/// A `ScrollView` backed by a UIKit scroll view.
#[derive(Debug)]
pub struct IosScroll {
    config: ScrollConfig,
    handle: NativeViewHandle,
}

impl IosScroll {
    /// Instantiates the native view from a validated configuration.
    pub fn new(bridge: &mut dyn NativeBridge, config: ScrollConfig, id: Option<String>) -> Self {
        let raw = bridge.instantiate(WidgetSpec::Scroll(config));
        Self {
            config,
            handle: NativeViewHandle::new(id, raw, WidgetKind::Scroll),
        }
    }

    /// The last configuration applied to the native view.
    #[must_use]
    pub const fn config(&self) -> &ScrollConfig {
        &self.config
    }
}

impl NativeWidget for IosScroll {
    fn handle(&self) -> &NativeViewHandle {
        &self.handle
    }

    fn update(&mut self, props: &Props, bridge: &mut dyn NativeBridge) {
        let mut next = self.config;
        if let Some(horizontal) = props.boolean("horizontal") {
            next.axis = if horizontal { Axis::Horizontal } else { Axis::Vertical };
        }
        if let Some(shown) = props.boolean("showsHorizontalScrollIndicator") {
            next.shows_horizontal_indicator = shown;
        }
        if let Some(shown) = props.boolean("showsVerticalScrollIndicator") {
            next.shows_vertical_indicator = shown;
        }
        if next != self.config {
            bridge.update_scroll(self.handle.raw(), props);
            self.config = next;
        }
    }
}

/// A `TextInput` backed by a UIKit text field.
#[derive(Debug)]
pub struct IosTextInput {
    config: TextInputConfig,
    handle: NativeViewHandle,
}

impl IosTextInput {
    /// Instantiates the native view from a validated configuration.
    pub fn new(
        bridge: &mut dyn NativeBridge,
        config: TextInputConfig,
        id: Option<String>,
    ) -> Self {
        let raw = bridge.instantiate(WidgetSpec::TextInput(config.clone()));
        Self {
            config,
            handle: NativeViewHandle::new(id, raw, WidgetKind::TextInput),
        }
    }

    /// The last configuration applied to the native view.
    #[must_use]
    pub const fn config(&self) -> &TextInputConfig {
        &self.config
    }
}

impl NativeWidget for IosTextInput {
    fn handle(&self) -> &NativeViewHandle {
        &self.handle
    }

    fn update(&mut self, props: &Props, bridge: &mut dyn NativeBridge) {
        let mut next = self.config.clone();
        if let Some(value) = props.string("value") {
            next.value = value.to_owned();
        }
        if let Some(placeholder) = props.string("placeholder") {
            next.placeholder = placeholder.to_owned();
        }
        if let Some(secure) = props.boolean("secure") {
            next.secure = secure;
        }
        if next != self.config {
            bridge.update_text_input(self.handle.raw(), props);
            self.config = next;
        }
    }
}

/// Builds an iOS image wrapper with a generated identifier.
pub fn create_ios_image(bridge: &mut dyn NativeBridge, config: ImageConfig) -> IosImage {
    IosImage::new(bridge, config, None)
}

/// Builds an iOS scroll wrapper with a generated identifier.
pub fn create_ios_scroll(bridge: &mut dyn NativeBridge, config: ScrollConfig) -> IosScroll {
    IosScroll::new(bridge, config, None)
}

/// Builds an iOS text input wrapper with a generated identifier.
pub fn create_ios_text_input(
    bridge: &mut dyn NativeBridge,
    config: TextInputConfig,
) -> IosTextInput {
    IosTextInput::new(bridge, config, None)
}

fn requested_id(props: &Props) -> Option<String> {
    props.string("id").map(ToOwned::to_owned)
}

/// Registers the iOS wrapper factories.
pub fn register_wrappers(registry: &mut WrapperRegistry) {
    use rill_core::PlatformId::Ios;

    registry.register(WidgetKind::Image, Ios, |props, bridge| {
        let config = ImageConfig::from_props(props)?;
        Ok(Box::new(IosImage::new(bridge, config, requested_id(props))))
    });
    registry.register(WidgetKind::Scroll, Ios, |props, bridge| {
        let config = ScrollConfig::from_props(props)?;
        Ok(Box::new(IosScroll::new(bridge, config, requested_id(props))))
    });
    registry.register(WidgetKind::TextInput, Ios, |props, bridge| {
        let config = TextInputConfig::from_props(props)?;
        Ok(Box::new(IosTextInput::new(
            bridge,
            config,
            requested_id(props),
        )))
    });
}

#[cfg(test)]
mod tests {
    use rill_core::PlatformId;

    use super::*;
    use crate::recording::{BridgeCommand, RecordingBridge};

    #[test]
    fn image_defaults_to_cover_resize_mode() {
        let mut bridge = RecordingBridge::new(PlatformId::Ios);
        let image = create_ios_image(&mut bridge, ImageConfig::new("photo.jpg"));

        assert_eq!(image.config().resize_mode, ResizeMode::Cover);
        assert_eq!(
            bridge.last_instantiated(),
            Some(&WidgetSpec::Image(ImageConfig::new("photo.jpg")))
        );
    }

    #[test]
    fn unchanged_update_stays_off_the_bridge() {
        let mut bridge = RecordingBridge::new(PlatformId::Ios);
        let mut image = create_ios_image(&mut bridge, ImageConfig::new("a.png"));
        bridge.take_commands();

        let props: Props = [("source", "a.png")].into_iter().collect();
        image.update(&props, &mut bridge);

        assert!(bridge.commands().is_empty());
    }

    #[test]
    fn changed_update_crosses_the_bridge_once() {
        let mut bridge = RecordingBridge::new(PlatformId::Ios);
        let mut image = create_ios_image(&mut bridge, ImageConfig::new("a.png"));
        bridge.take_commands();

        let props: Props = [("source", "b.png")].into_iter().collect();
        image.update(&props, &mut bridge);

        assert_eq!(
            bridge.commands(),
            [BridgeCommand::UpdateImage {
                node: image.handle().raw(),
                keys: vec!["source".to_owned()],
            }]
        );
        assert_eq!(image.config().source, "b.png");
    }

    #[test]
    fn invalid_resize_mode_is_skipped() {
        let mut bridge = RecordingBridge::new(PlatformId::Ios);
        let mut image = create_ios_image(&mut bridge, ImageConfig::new("a.png"));
        bridge.take_commands();

        let props: Props = [("resizeMode", "tile")].into_iter().collect();
        image.update(&props, &mut bridge);

        assert!(bridge.commands().is_empty());
        assert_eq!(image.config().resize_mode, ResizeMode::Cover);
    }

    #[test]
    fn scroll_diffs_on_typed_fields() {
        let mut bridge = RecordingBridge::new(PlatformId::Ios);
        let mut scroll = create_ios_scroll(&mut bridge, ScrollConfig::new());
        bridge.take_commands();

        let props: Props = [("horizontal", false)].into_iter().collect();
        scroll.update(&props, &mut bridge);
        assert!(bridge.commands().is_empty());

        let props: Props = [("horizontal", true)].into_iter().collect();
        scroll.update(&props, &mut bridge);
        assert_eq!(scroll.config().axis, Axis::Horizontal);
        assert_eq!(bridge.commands().len(), 1);
    }

    #[test]
    fn factory_honors_a_requested_id() {
        let registry = WrapperRegistry::for_platform(PlatformId::Ios);
        let mut bridge = RecordingBridge::new(PlatformId::Ios);
        let props: Props = [("value", "hi"), ("id", "login-field")]
            .into_iter()
            .collect();
        let widget = registry
            .create(WidgetKind::TextInput, PlatformId::Ios, &props, &mut bridge)
            .unwrap();
        assert_eq!(widget.handle().id(), "login-field");
    }
}
