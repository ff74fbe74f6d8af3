//! Web view wrappers.
//!
//! The browser already speaks attributes, so web wrappers lower both
//! construction and updates to plain `set_attribute`/`remove_attribute`
//! traffic instead of the typed widget channels the other platforms use.

use rill_controls::TextInputConfig;
use rill_core::{NativeViewHandle, Props, WidgetKind};
use rill_layout::{Axis, ScrollConfig};
use rill_media::ImageConfig;

use crate::bridge::NativeBridge;
use crate::registry::{NativeWidget, WrapperRegistry};

fn forward_as_attributes(
    handle: &NativeViewHandle,
    props: &Props,
    bridge: &mut dyn NativeBridge,
    rename: fn(&str) -> &str,
) {
    for (key, value) in props.iter() {
        let attr = rename(key);
        match value.to_attribute() {
            Some(text) => bridge.set_attribute(handle.raw(), attr, &text),
            None => bridge.remove_attribute(handle.raw(), attr),
        }
    }
}

/// An `Image` rendered as an `<img>`-shaped DOM element.
#[derive(Debug)]
pub struct WebImage {
    handle: NativeViewHandle,
}

impl WebImage {
    /// Creates the element and writes the configuration as attributes.
    pub fn new(bridge: &mut dyn NativeBridge, config: &ImageConfig, id: Option<String>) -> Self {
        let raw = bridge.create_node(WidgetKind::Image.tag(), &Props::new());
        bridge.set_attribute(raw, "src", &config.source);
        bridge.set_attribute(raw, "data-resize-mode", config.resize_mode.as_str());
        Self {
            handle: NativeViewHandle::new(id, raw, WidgetKind::Image),
        }
    }
}

impl NativeWidget for WebImage {
    fn handle(&self) -> &NativeViewHandle {
        &self.handle
    }

    fn update(&mut self, props: &Props, bridge: &mut dyn NativeBridge) {
        forward_as_attributes(&self.handle, props, bridge, |key| match key {
            "source" => "src",
            "resizeMode" => "data-resize-mode",
            other => other,
        });
    }
}

/// A `ScrollView` rendered as an overflow container.
#[derive(Debug)]
pub struct WebScroll {
    handle: NativeViewHandle,
}

impl WebScroll {
    /// Creates the element and writes the configuration as attributes.
    pub fn new(bridge: &mut dyn NativeBridge, config: &ScrollConfig, id: Option<String>) -> Self {
        let raw = bridge.create_node(WidgetKind::Scroll.tag(), &Props::new());
        let axis = match config.axis {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        };
        bridge.set_attribute(raw, "data-axis", axis);
        bridge.set_attribute(
            raw,
            "data-shows-horizontal-indicator",
            if config.shows_horizontal_indicator { "true" } else { "false" },
        );
        bridge.set_attribute(
            raw,
            "data-shows-vertical-indicator",
            if config.shows_vertical_indicator { "true" } else { "false" },
        );
        Self {
            handle: NativeViewHandle::new(id, raw, WidgetKind::Scroll),
        }
    }
}

impl NativeWidget for WebScroll {
    fn handle(&self) -> &NativeViewHandle {
        &self.handle
    }

    fn update(&mut self, props: &Props, bridge: &mut dyn NativeBridge) {
        let raw = self.handle.raw();
        for (key, value) in props.iter() {
            if key == "horizontal" {
                // Same encoding construction uses.
                if let Some(horizontal) = value.as_bool() {
                    let axis = if horizontal { "horizontal" } else { "vertical" };
                    bridge.set_attribute(raw, "data-axis", axis);
                }
                continue;
            }
            let attr = match key {
                "showsHorizontalScrollIndicator" => "data-shows-horizontal-indicator",
                "showsVerticalScrollIndicator" => "data-shows-vertical-indicator",
                other => other,
            };
            match value.to_attribute() {
                Some(text) => bridge.set_attribute(raw, attr, &text),
                None => bridge.remove_attribute(raw, attr),
            }
        }
    }
}

/// A `TextInput` rendered as an `<input>`-shaped DOM element.
#[derive(Debug)]
pub struct WebTextInput {
    handle: NativeViewHandle,
}

impl WebTextInput {
    /// Creates the element and writes the configuration as attributes.
    pub fn new(
        bridge: &mut dyn NativeBridge,
        config: &TextInputConfig,
        id: Option<String>,
    ) -> Self {
        let raw = bridge.create_node(WidgetKind::TextInput.tag(), &Props::new());
        bridge.set_attribute(raw, "value", &config.value);
        bridge.set_attribute(raw, "placeholder", &config.placeholder);
        bridge.set_attribute(raw, "type", if config.secure { "password" } else { "text" });
        Self {
            handle: NativeViewHandle::new(id, raw, WidgetKind::TextInput),
        }
    }
}

impl NativeWidget for WebTextInput {
    fn handle(&self) -> &NativeViewHandle {
        &self.handle
    }

    fn update(&mut self, props: &Props, bridge: &mut dyn NativeBridge) {
        if let Some(secure) = props.boolean("secure") {
            bridge.set_attribute(
                self.handle.raw(),
                "type",
                if secure { "password" } else { "text" },
            );
        }
        forward_as_attributes(&self.handle, props, bridge, |key| match key {
            "secure" => "data-secure",
            other => other,
        });
    }
}

/// Builds a web image wrapper with a generated identifier.
pub fn create_web_image(bridge: &mut dyn NativeBridge, config: &ImageConfig) -> WebImage {
    WebImage::new(bridge, config, None)
}

/// Builds a web scroll wrapper with a generated identifier.
pub fn create_web_scroll(bridge: &mut dyn NativeBridge, config: &ScrollConfig) -> WebScroll {
    WebScroll::new(bridge, config, None)
}

/// Builds a web text input wrapper with a generated identifier.
pub fn create_web_text_input(
    bridge: &mut dyn NativeBridge,
    config: &TextInputConfig,
) -> WebTextInput {
    WebTextInput::new(bridge, config, None)
}

fn requested_id(props: &Props) -> Option<String> {
    props.string("id").map(ToOwned::to_owned)
}

/// Registers the web wrapper factories.
pub fn register_wrappers(registry: &mut WrapperRegistry) {
    use rill_core::PlatformId::Web;

    registry.register(WidgetKind::Image, Web, |props, bridge| {
        let config = ImageConfig::from_props(props)?;
        Ok(Box::new(WebImage::new(bridge, &config, requested_id(props))))
    });
    registry.register(WidgetKind::Scroll, Web, |props, bridge| {
        let config = ScrollConfig::from_props(props)?;
        Ok(Box::new(WebScroll::new(bridge, &config, requested_id(props))))
    });
    registry.register(WidgetKind::TextInput, Web, |props, bridge| {
        let config = TextInputConfig::from_props(props)?;
        Ok(Box::new(WebTextInput::new(
            bridge,
            &config,
            requested_id(props),
        )))
    });
}

#[cfg(test)]
mod tests {
    use rill_core::{PlatformId, PropValue};

    use super::*;
    use crate::recording::{BridgeCommand, RecordingBridge};

    #[test]
    fn image_construction_lowers_to_attributes() {
        let mut bridge = RecordingBridge::new(PlatformId::Web);
        let config = ImageConfig::new("logo.png");
        let image = create_web_image(&mut bridge, &config);

        let raw = image.handle().raw();
        assert_eq!(
            bridge.commands(),
            [
                BridgeCommand::CreateNode {
                    node: raw,
                    tag: "Image".to_owned(),
                },
                BridgeCommand::SetAttribute {
                    node: raw,
                    key: "src".to_owned(),
                    value: "logo.png".to_owned(),
                },
                BridgeCommand::SetAttribute {
                    node: raw,
                    key: "data-resize-mode".to_owned(),
                    value: "cover".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn image_update_renames_source_to_src() {
        let mut bridge = RecordingBridge::new(PlatformId::Web);
        let mut image = create_web_image(&mut bridge, &ImageConfig::new("a.png"));
        bridge.take_commands();

        let props: Props = [("source", "b.png")].into_iter().collect();
        image.update(&props, &mut bridge);

        assert_eq!(
            bridge.commands(),
            [BridgeCommand::SetAttribute {
                node: image.handle().raw(),
                key: "src".to_owned(),
                value: "b.png".to_owned(),
            }]
        );
    }

    #[test]
    fn orientation_update_rewrites_the_axis_attribute() {
        let mut bridge = RecordingBridge::new(PlatformId::Web);
        let mut scroll = create_web_scroll(&mut bridge, &ScrollConfig::new());
        let raw = scroll.handle().raw();
        assert!(bridge.commands().contains(&BridgeCommand::SetAttribute {
            node: raw,
            key: "data-axis".to_owned(),
            value: "vertical".to_owned(),
        }));
        bridge.take_commands();

        let props: Props = [("horizontal", true)].into_iter().collect();
        scroll.update(&props, &mut bridge);
        assert_eq!(
            bridge.take_commands(),
            [BridgeCommand::SetAttribute {
                node: raw,
                key: "data-axis".to_owned(),
                value: "horizontal".to_owned(),
            }]
        );

        let props: Props = [("horizontal", false)].into_iter().collect();
        scroll.update(&props, &mut bridge);
        assert_eq!(
            bridge.take_commands(),
            [BridgeCommand::SetAttribute {
                node: raw,
                key: "data-axis".to_owned(),
                value: "vertical".to_owned(),
            }]
        );
    }

    #[test]
    fn null_props_remove_attributes() {
        let mut bridge = RecordingBridge::new(PlatformId::Web);
        let mut scroll = create_web_scroll(&mut bridge, &ScrollConfig::new());
        bridge.take_commands();

        let props: Props = [("data-testid", PropValue::Null)].into_iter().collect();
        scroll.update(&props, &mut bridge);

        assert_eq!(
            bridge.commands(),
            [BridgeCommand::RemoveAttribute {
                node: scroll.handle().raw(),
                key: "data-testid".to_owned(),
            }]
        );
    }

    #[test]
    fn secure_text_input_renders_a_password_field() {
        let mut bridge = RecordingBridge::new(PlatformId::Web);
        let config = TextInputConfig::new().secure(true);
        let input = create_web_text_input(&mut bridge, &config);

        assert!(bridge.commands().contains(&BridgeCommand::SetAttribute {
            node: input.handle().raw(),
            key: "type".to_owned(),
            value: "password".to_owned(),
        }));
    }

    #[test]
    fn factory_honors_a_requested_id() {
        let registry = WrapperRegistry::for_platform(PlatformId::Web);
        let mut bridge = RecordingBridge::new(PlatformId::Web);
        let props: Props = [("source", "a.png"), ("id", "hero-image")]
            .into_iter()
            .collect();
        let widget = registry
            .create(WidgetKind::Image, PlatformId::Web, &props, &mut bridge)
            .unwrap();
        assert_eq!(widget.handle().id(), "hero-image");
    }
}
