//! Desktop view wrappers.
//!
//! Desktop toolkits reconcile widget state on their own side of the
//! bridge, so these wrappers stay thin: construction ships the typed
//! configuration and every update forwards the incoming props map as-is,
//! leaving change detection to the toolkit.

use rill_controls::TextInputConfig;
use rill_core::{NativeViewHandle, Props, WidgetKind};
use rill_layout::ScrollConfig;
use rill_media::ImageConfig;

use crate::bridge::{NativeBridge, WidgetSpec};
use crate::registry::{NativeWidget, WrapperRegistry};

/// An `Image` backed by a desktop image widget.
#[derive(Debug)]
pub struct DesktopImage {
    handle: NativeViewHandle,
}

impl DesktopImage {
    /// Instantiates the native widget from a validated configuration.
    pub fn new(bridge: &mut dyn NativeBridge, config: ImageConfig, id: Option<String>) -> Self {
        let raw = bridge.instantiate(WidgetSpec::Image(config));
        Self {
            handle: NativeViewHandle::new(id, raw, WidgetKind::Image),
        }
    }
}

impl NativeWidget for DesktopImage {
    fn handle(&self) -> &NativeViewHandle {
        &self.handle
    }

    fn update(&mut self, props: &Props, bridge: &mut dyn NativeBridge) {
        bridge.update_image(self.handle.raw(), props);
    }
}

/// A `ScrollView` backed by a desktop scroll area.
#[derive(Debug)]
pub struct DesktopScroll {
    handle: NativeViewHandle,
}

impl DesktopScroll {
    /// Instantiates the native widget from a validated configuration.
    pub fn new(bridge: &mut dyn NativeBridge, config: ScrollConfig, id: Option<String>) -> Self {
        let raw = bridge.instantiate(WidgetSpec::Scroll(config));
        Self {
            handle: NativeViewHandle::new(id, raw, WidgetKind::Scroll),
        }
    }
}

impl NativeWidget for DesktopScroll {
    fn handle(&self) -> &NativeViewHandle {
        &self.handle
    }

    fn update(&mut self, props: &Props, bridge: &mut dyn NativeBridge) {
        bridge.update_scroll(self.handle.raw(), props);
    }
}

/// A `TextInput` backed by a desktop text entry widget.
#[derive(Debug)]
pub struct DesktopTextInput {
    handle: NativeViewHandle,
}

impl DesktopTextInput {
    /// Instantiates the native widget from a validated configuration.
    pub fn new(
        bridge: &mut dyn NativeBridge,
        config: TextInputConfig,
        id: Option<String>,
    ) -> Self {
        let raw = bridge.instantiate(WidgetSpec::TextInput(config));
        Self {
            handle: NativeViewHandle::new(id, raw, WidgetKind::TextInput),
        }
    }
}

impl NativeWidget for DesktopTextInput {
    fn handle(&self) -> &NativeViewHandle {
        &self.handle
    }

    fn update(&mut self, props: &Props, bridge: &mut dyn NativeBridge) {
        bridge.update_text_input(self.handle.raw(), props);
    }
}

/// Builds a desktop image wrapper with a generated identifier.
pub fn create_desktop_image(bridge: &mut dyn NativeBridge, config: ImageConfig) -> DesktopImage {
    DesktopImage::new(bridge, config, None)
}

/// Builds a desktop scroll wrapper with a generated identifier.
pub fn create_desktop_scroll(bridge: &mut dyn NativeBridge, config: ScrollConfig) -> DesktopScroll {
    DesktopScroll::new(bridge, config, None)
}

/// Builds a desktop text input wrapper with a generated identifier.
pub fn create_desktop_text_input(
    bridge: &mut dyn NativeBridge,
    config: TextInputConfig,
) -> DesktopTextInput {
    DesktopTextInput::new(bridge, config, None)
}

fn requested_id(props: &Props) -> Option<String> {
    props.string("id").map(ToOwned::to_owned)
}

/// Registers the desktop wrapper factories.
pub fn register_wrappers(registry: &mut WrapperRegistry) {
    use rill_core::PlatformId::Desktop;

    registry.register(WidgetKind::Image, Desktop, |props, bridge| {
        let config = ImageConfig::from_props(props)?;
        Ok(Box::new(DesktopImage::new(
            bridge,
            config,
            requested_id(props),
        )))
    });
    registry.register(WidgetKind::Scroll, Desktop, |props, bridge| {
        let config = ScrollConfig::from_props(props)?;
        Ok(Box::new(DesktopScroll::new(
            bridge,
            config,
            requested_id(props),
        )))
    });
    registry.register(WidgetKind::TextInput, Desktop, |props, bridge| {
        let config = TextInputConfig::from_props(props)?;
        Ok(Box::new(DesktopTextInput::new(
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
    fn text_input_forwards_the_whole_props_map() {
        let mut bridge = RecordingBridge::new(PlatformId::Desktop);
        let mut input = create_desktop_text_input(&mut bridge, TextInputConfig::new());
        bridge.take_commands();

        let props: Props = [
            ("placeholder", rill_core::PropValue::from("name")),
            ("secure", rill_core::PropValue::from(false)),
            ("value", rill_core::PropValue::from("Ada")),
        ]
        .into_iter()
        .collect();
        input.update(&props, &mut bridge);

        assert_eq!(
            bridge.commands(),
            [BridgeCommand::UpdateTextInput {
                node: input.handle().raw(),
                keys: vec![
                    "placeholder".to_owned(),
                    "secure".to_owned(),
                    "value".to_owned(),
                ],
            }]
        );
    }

    #[test]
    fn identical_updates_are_forwarded_every_time() {
        let mut bridge = RecordingBridge::new(PlatformId::Desktop);
        let mut image = create_desktop_image(&mut bridge, ImageConfig::new("a.png"));
        bridge.take_commands();

        let props: Props = [("source", "a.png")].into_iter().collect();
        image.update(&props, &mut bridge);
        image.update(&props, &mut bridge);

        assert_eq!(bridge.commands().len(), 2);
    }

    #[test]
    fn construction_ships_the_typed_spec() {
        let mut bridge = RecordingBridge::new(PlatformId::Desktop);
        let scroll = create_desktop_scroll(&mut bridge, ScrollConfig::new());

        assert_eq!(
            bridge.last_instantiated(),
            Some(&WidgetSpec::Scroll(ScrollConfig::new()))
        );
        assert_eq!(scroll.handle().kind(), WidgetKind::Scroll);
    }
}
