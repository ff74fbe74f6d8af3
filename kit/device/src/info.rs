//! The device information capability.

use rill_core::{CapabilityError, NativeModule};
use tracing::debug;

/// Name the device info module registers under.
pub const NAME: &str = "DeviceInfo";

/// Static facts about the device the process runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Operating system family, e.g. `linux` or `macos`.
    pub os: String,
    /// Processor architecture, e.g. `aarch64`.
    pub arch: String,
}

/// The `DeviceInfo` capability module.
#[derive(Debug, Default)]
pub struct DeviceInfoModule;

impl DeviceInfoModule {
    /// Creates the device info module.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolves to the device description.
    ///
    /// The answer is derived from compile-time platform constants today; it
    /// keeps the async shape so platform integrations that must query an
    /// OS service can slot in without an API break.
    ///
    /// # Errors
    ///
    /// Never fails on supported platforms.
    #[allow(clippy::unused_async)]
    pub async fn device_info(&self) -> Result<DeviceInfo, CapabilityError> {
        Ok(DeviceInfo {
            os: std::env::consts::OS.to_owned(),
            arch: std::env::consts::ARCH.to_owned(),
        })
    }
}

impl NativeModule for DeviceInfoModule {
    fn name(&self) -> &str {
        NAME
    }

    fn initialize(&self) {
        debug!(module = NAME, "initialized");
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn reports_the_build_platform() {
        let module = DeviceInfoModule::new();
        let info = block_on(module.device_info()).unwrap();
        assert_eq!(info.os, std::env::consts::OS);
        assert_eq!(info.arch, std::env::consts::ARCH);
    }

    #[test]
    fn registers_under_the_well_known_name() {
        let mut modules = rill_core::NativeModules::new();
        modules.register(DeviceInfoModule::new());
        assert!(modules.get_as::<DeviceInfoModule>(NAME).is_some());
    }
}
