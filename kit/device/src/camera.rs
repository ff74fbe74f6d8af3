//! The camera capability.

use std::cell::Cell;

use futures::future::LocalBoxFuture;
use rill_core::{CapabilityError, NativeModule};
use tracing::debug;

/// Name the camera module registers under.
pub const NAME: &str = "Camera";

/// Hardware seam for image capture.
///
/// The production integration wraps the platform camera API; tests and
/// headless targets plug in [`SimulatedCamera`] or [`NoCamera`].
pub trait CameraDevice {
    /// Captures one image and resolves to a URI naming the stored capture.
    fn capture(&self) -> LocalBoxFuture<'_, Result<String, CapabilityError>>;
}

/// A camera that fabricates capture URIs from a counter.
#[derive(Debug, Default)]
pub struct SimulatedCamera {
    captures: Cell<u64>,
}

impl SimulatedCamera {
    /// Creates a simulated camera with no captures taken.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CameraDevice for SimulatedCamera {
    fn capture(&self) -> LocalBoxFuture<'_, Result<String, CapabilityError>> {
        Box::pin(async move {
            let serial = self.captures.get() + 1;
            self.captures.set(serial);
            Ok(format!("camera://capture-{serial}.jpg"))
        })
    }
}

/// A device with no camera hardware.
#[derive(Debug, Default)]
pub struct NoCamera;

impl CameraDevice for NoCamera {
    fn capture(&self) -> LocalBoxFuture<'_, Result<String, CapabilityError>> {
        Box::pin(async { Err(CapabilityError::Unavailable) })
    }
}

/// The `Camera` capability module.
pub struct CameraModule {
    device: Box<dyn CameraDevice>,
}

impl CameraModule {
    /// Wraps a camera device as a registrable module.
    #[must_use]
    pub fn new(device: impl CameraDevice + 'static) -> Self {
        Self {
            device: Box::new(device),
        }
    }

    /// Captures one image.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::Unavailable`] when no camera hardware
    /// exists and whatever failure the device itself raises otherwise.
    pub async fn capture(&self) -> Result<String, CapabilityError> {
        self.device.capture().await
    }
}

impl NativeModule for CameraModule {
    fn name(&self) -> &str {
        NAME
    }

    fn initialize(&self) {
        debug!(module = NAME, "initialized");
    }
}

impl core::fmt::Debug for CameraModule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CameraModule").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn simulated_captures_are_numbered() {
        let module = CameraModule::new(SimulatedCamera::new());
        assert_eq!(
            block_on(module.capture()).unwrap(),
            "camera://capture-1.jpg"
        );
        assert_eq!(
            block_on(module.capture()).unwrap(),
            "camera://capture-2.jpg"
        );
    }

    #[test]
    fn missing_hardware_resolves_to_unavailable() {
        let module = CameraModule::new(NoCamera);
        assert!(matches!(
            block_on(module.capture()),
            Err(CapabilityError::Unavailable)
        ));
    }

    #[test]
    fn registers_under_the_well_known_name() {
        let mut modules = rill_core::NativeModules::new();
        modules.register(CameraModule::new(SimulatedCamera::new()));
        assert!(modules.contains(NAME));
        assert!(modules.get_as::<CameraModule>(NAME).is_some());
    }
}
