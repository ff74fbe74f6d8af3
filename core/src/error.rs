//! Error types shared across the framework.
//!
//! Capability failures are recoverable by the caller and always surface as
//! explicit [`CapabilityError`] values. Programmer-contract violations
//! (operating on detached nodes, re-entrant dispatch) are panics, never
//! error values.

use thiserror::Error;

use crate::widget::{PlatformId, WidgetKind};

/// Failure outcome of a native capability operation.
///
/// A capability operation that cannot complete resolves to one of these
/// variants instead of a sentinel success value, so callers can branch on
/// success versus failure and render an error state.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The capability has no backing hardware or service on this platform.
    #[error("capability is not available on this platform")]
    Unavailable,
    /// The user or platform denied access.
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// The underlying I/O operation failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised while constructing or dispatching a widget wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// A required prop was absent.
    #[error("`{widget}` requires the `{key}` prop")]
    MissingProp {
        /// The widget's declared name.
        widget: &'static str,
        /// The missing prop key.
        key: &'static str,
    },
    /// A prop was present but carried an unusable value.
    #[error("`{widget}` received an invalid value for `{key}`: {reason}")]
    InvalidProp {
        /// The widget's declared name.
        widget: &'static str,
        /// The offending prop key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// No wrapper factory is registered for the requested pair.
    #[error("no wrapper registered for {kind} on {platform}")]
    UnknownWrapper {
        /// The requested widget kind.
        kind: WidgetKind,
        /// The requested platform.
        platform: PlatformId,
    },
}
