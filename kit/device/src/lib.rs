//! Device capability modules for the Rill framework.
//!
//! Each module wraps one platform capability behind an async API and
//! registers in a [`NativeModules`](rill_core::NativeModules) catalog under
//! a well-known name. Capability failure is a value, never a panic: every
//! operation resolves to a `Result` with
//! [`CapabilityError`](rill_core::CapabilityError) on the failure side, so
//! application code can branch and render an error state.

mod camera;
mod filesystem;
mod geolocation;
mod info;

pub use camera::{CameraDevice, CameraModule, NoCamera, SimulatedCamera};
pub use filesystem::FilesystemModule;
pub use geolocation::{
    Coordinates, DeniedLocation, FixedLocation, GeolocationModule, LocationProvider,
};
pub use info::{DeviceInfo, DeviceInfoModule};
