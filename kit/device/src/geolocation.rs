//! The geolocation capability.

use futures::future::LocalBoxFuture;
use rill_core::{CapabilityError, NativeModule};
use tracing::debug;

/// Name the geolocation module registers under.
pub const NAME: &str = "Geolocation";

/// A position fix in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Degrees north of the equator, negative south.
    pub latitude: f64,
    /// Degrees east of the prime meridian, negative west.
    pub longitude: f64,
}

/// Hardware seam for position fixes.
pub trait LocationProvider {
    /// Resolves to the current position.
    fn current_position(&self) -> LocalBoxFuture<'_, Result<Coordinates, CapabilityError>>;
}

/// A provider that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

impl LocationProvider for FixedLocation {
    fn current_position(&self) -> LocalBoxFuture<'_, Result<Coordinates, CapabilityError>> {
        let position = self.0;
        Box::pin(async move { Ok(position) })
    }
}

/// A provider standing in for a user who declined the location prompt.
#[derive(Debug, Default)]
pub struct DeniedLocation;

impl LocationProvider for DeniedLocation {
    fn current_position(&self) -> LocalBoxFuture<'_, Result<Coordinates, CapabilityError>> {
        Box::pin(async {
            Err(CapabilityError::PermissionDenied(
                "location access was declined".to_owned(),
            ))
        })
    }
}

/// The `Geolocation` capability module.
pub struct GeolocationModule {
    provider: Box<dyn LocationProvider>,
}

impl GeolocationModule {
    /// Wraps a location provider as a registrable module.
    #[must_use]
    pub fn new(provider: impl LocationProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }

    /// Resolves to the current position.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::PermissionDenied`] when access was
    /// declined and whatever failure the provider itself raises otherwise.
    pub async fn current_position(&self) -> Result<Coordinates, CapabilityError> {
        self.provider.current_position().await
    }
}

impl NativeModule for GeolocationModule {
    fn name(&self) -> &str {
        NAME
    }

    fn initialize(&self) {
        debug!(module = NAME, "initialized");
    }
}

impl core::fmt::Debug for GeolocationModule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GeolocationModule").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    const OSLO: Coordinates = Coordinates {
        latitude: 59.9139,
        longitude: 10.7522,
    };

    #[test]
    fn fixed_provider_reports_its_position() {
        let module = GeolocationModule::new(FixedLocation(OSLO));
        let position = block_on(module.current_position()).unwrap();
        assert_eq!(position, OSLO);
    }

    #[test]
    fn declined_prompt_resolves_to_permission_denied() {
        let module = GeolocationModule::new(DeniedLocation);
        assert!(matches!(
            block_on(module.current_position()),
            Err(CapabilityError::PermissionDenied(_))
        ));
    }

    #[test]
    fn registers_under_the_well_known_name() {
        let mut modules = rill_core::NativeModules::new();
        modules.register(GeolocationModule::new(FixedLocation(OSLO)));
        assert!(modules.contains(NAME));
    }
}
