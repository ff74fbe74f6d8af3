//! The native module registry: a catalog of named, asynchronous platform
//! capability modules.
//!
//! The registry is an explicitly constructed instance handed to whatever
//! owns the render root; there is no process-global singleton, so tests can
//! build isolated registries. Registration is expected to happen during
//! startup, before render-thread activity touches [`NativeModules::get`];
//! after startup the mapping is effectively read-only.

use core::fmt;
use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

/// A named platform capability provider.
///
/// A module's domain operations are asynchronous and must be safe to invoke
/// concurrently with no shared mutable state across calls, unless the module
/// explicitly serializes itself. The registry guarantees nothing beyond
/// single-writer registration.
pub trait NativeModule: Any {
    /// The unique name this module is registered under.
    fn name(&self) -> &str;

    /// Synchronous initialization hook, invoked exactly once at
    /// registration, before the module becomes reachable by lookup.
    /// Initialization errors are the module's own concern and must be
    /// raised here, so a partially initialized module never becomes
    /// reachable.
    fn initialize(&self);
}

/// Catalog mapping module names to shared module instances.
#[derive(Default)]
pub struct NativeModules {
    entries: HashMap<String, Rc<dyn NativeModule>>,
}

impl NativeModules {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `module` under its declared name, initializing it first.
    ///
    /// Re-registering under an existing name silently replaces the previous
    /// entry; no teardown hook is invoked on the replaced module, and
    /// references already obtained by prior callers stay valid.
    pub fn register(&mut self, module: impl NativeModule + 'static) {
        module.initialize();
        let name = module.name().to_owned();
        let previous = self.entries.insert(name.clone(), Rc::new(module));
        if previous.is_some() {
            warn!(module = %name, "replaced an already registered native module without teardown");
        } else {
            debug!(module = %name, "registered native module");
        }
    }

    /// Looks up a module by name.
    ///
    /// Absence is an expected, non-exceptional condition used for runtime
    /// feature detection; this never panics.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rc<dyn NativeModule>> {
        self.entries.get(name)
    }

    /// Looks up a module and downcasts it to a concrete type.
    #[must_use]
    pub fn get_as<T: NativeModule>(&self, name: &str) -> Option<&T> {
        let module = self.entries.get(name)?;
        (module.as_ref() as &dyn Any).downcast_ref::<T>()
    }

    /// Returns `true` if a module is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The number of registered modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no modules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for NativeModules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc as StdRc;

    struct Probe {
        name: &'static str,
        initialized: StdRc<Cell<u32>>,
        serial: u32,
    }

    impl NativeModule for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn initialize(&self) {
            self.initialized.set(self.initialized.get() + 1);
        }
    }

    #[test]
    fn register_then_get_returns_the_module() {
        let initialized = StdRc::new(Cell::new(0));
        let mut registry = NativeModules::new();
        registry.register(Probe {
            name: "Probe",
            initialized: initialized.clone(),
            serial: 1,
        });

        assert_eq!(initialized.get(), 1, "initialize runs at registration");
        assert!(registry.get("Probe").is_some());
        assert_eq!(registry.get_as::<Probe>("Probe").unwrap().serial, 1);
    }

    #[test]
    fn missing_module_is_none_not_a_panic() {
        let registry = NativeModules::new();
        assert!(registry.get("nonexistent").is_none());
        assert!(!registry.contains("nonexistent"));
    }

    #[test]
    fn reregistration_replaces_without_invalidating_prior_handles() {
        let initialized = StdRc::new(Cell::new(0));
        let mut registry = NativeModules::new();
        registry.register(Probe {
            name: "Probe",
            initialized: initialized.clone(),
            serial: 1,
        });

        let held = registry.get("Probe").unwrap().clone();

        registry.register(Probe {
            name: "Probe",
            initialized: initialized.clone(),
            serial: 2,
        });

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_as::<Probe>("Probe").unwrap().serial, 2);
        // The handle obtained before replacement still points at the old
        // instance.
        let held = (held.as_ref() as &dyn std::any::Any)
            .downcast_ref::<Probe>()
            .unwrap();
        assert_eq!(held.serial, 1);
        assert_eq!(initialized.get(), 2);
    }
}
