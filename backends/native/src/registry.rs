//! Wrapper dispatch keyed on widget kind and platform identity.

use core::fmt;
use std::collections::HashMap;

use rill_core::{NativeViewHandle, PlatformId, Props, WidgetError, WidgetKind};
use tracing::debug;

use crate::bridge::NativeBridge;

/// A live platform view wrapper.
///
/// A wrapper owns exactly one native view: it is built by a registry
/// factory when an element of its kind mounts, receives every subsequent
/// prop change through [`update`](Self::update), and is dropped when the
/// element unmounts. Each platform decides for itself how much of an
/// update actually reaches the bridge.
pub trait NativeWidget {
    /// The handle naming the wrapped view.
    fn handle(&self) -> &NativeViewHandle;

    /// Applies changed props to the wrapped view.
    fn update(&mut self, props: &Props, bridge: &mut dyn NativeBridge);
}

type WrapperFactory =
    Box<dyn Fn(&Props, &mut dyn NativeBridge) -> Result<Box<dyn NativeWidget>, WidgetError>>;

/// Factory table resolving `(widget kind, platform)` pairs to wrapper
/// constructors.
#[derive(Default)]
pub struct WrapperRegistry {
    factories: HashMap<(WidgetKind, PlatformId), WrapperFactory>,
}

impl WrapperRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with every wrapper the given
    /// platform ships.
    #[must_use]
    pub fn for_platform(platform: PlatformId) -> Self {
        let mut registry = Self::new();
        match platform {
            PlatformId::Web => crate::web::register_wrappers(&mut registry),
            PlatformId::Ios => crate::ios::register_wrappers(&mut registry),
            PlatformId::Desktop => crate::desktop::register_wrappers(&mut registry),
        }
        registry
    }

    /// Registers a factory for one `(kind, platform)` pair, replacing any
    /// previous registration.
    pub fn register<F>(&mut self, kind: WidgetKind, platform: PlatformId, factory: F)
    where
        F: Fn(&Props, &mut dyn NativeBridge) -> Result<Box<dyn NativeWidget>, WidgetError>
            + 'static,
    {
        debug!(%kind, %platform, "register wrapper factory");
        self.factories.insert((kind, platform), Box::new(factory));
    }

    /// Builds a wrapper for the given pair from raw props.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::UnknownWrapper`] when no factory is
    /// registered for the pair, or the factory's own validation error.
    pub fn create(
        &self,
        kind: WidgetKind,
        platform: PlatformId,
        props: &Props,
        bridge: &mut dyn NativeBridge,
    ) -> Result<Box<dyn NativeWidget>, WidgetError> {
        let factory = self
            .factories
            .get(&(kind, platform))
            .ok_or(WidgetError::UnknownWrapper { kind, platform })?;
        factory(props, bridge)
    }

    /// Whether a factory is registered for the pair.
    #[must_use]
    pub fn contains(&self, kind: WidgetKind, platform: PlatformId) -> bool {
        self.factories.contains_key(&(kind, platform))
    }

    /// Number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry holds no factories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for WrapperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapperRegistry")
            .field("factories", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingBridge;

    #[test]
    fn empty_registry_reports_unknown_wrapper() {
        let registry = WrapperRegistry::new();
        let mut bridge = RecordingBridge::new(PlatformId::Web);
        let result = registry.create(
            WidgetKind::Image,
            PlatformId::Web,
            &Props::new(),
            &mut bridge,
        );
        assert_eq!(
            result.err(),
            Some(WidgetError::UnknownWrapper {
                kind: WidgetKind::Image,
                platform: PlatformId::Web,
            })
        );
    }

    #[test]
    fn platform_registries_cover_every_kind() {
        for platform in [PlatformId::Web, PlatformId::Ios, PlatformId::Desktop] {
            let registry = WrapperRegistry::for_platform(platform);
            for kind in [WidgetKind::Image, WidgetKind::Scroll, WidgetKind::TextInput] {
                assert!(registry.contains(kind, platform), "{kind} on {platform}");
            }
            assert_eq!(registry.len(), 3);
        }
    }

    #[test]
    fn creation_respects_the_platform_axis() {
        let registry = WrapperRegistry::for_platform(PlatformId::Ios);
        let mut bridge = RecordingBridge::new(PlatformId::Ios);
        let result = registry.create(
            WidgetKind::Scroll,
            PlatformId::Desktop,
            &Props::new(),
            &mut bridge,
        );
        assert!(matches!(
            result.err(),
            Some(WidgetError::UnknownWrapper { .. })
        ));
    }
}
