//! Native view handles: the record bridging a tree node to a real platform
//! view object.

use uuid::Uuid;

use crate::widget::WidgetKind;

/// Opaque ownership token referring to a real platform object.
///
/// The token is issued by the platform bridge that created the view and is
/// only meaningful to it; generic tree code holds the token but never the
/// underlying object's internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawHandle(u64);

impl RawHandle {
    /// Wraps a raw platform identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier backing this token.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// The record a platform view wrapper hands back into generic tree code.
///
/// Created by a wrapper's factory in response to a create operation,
/// mutated through the wrapper's update entry point, and released to the
/// platform's own disposal mechanism when the corresponding element node is
/// removed. No two element nodes may share one handle.
#[derive(Debug, Clone)]
pub struct NativeViewHandle {
    id: String,
    raw: RawHandle,
    kind: WidgetKind,
}

impl NativeViewHandle {
    /// Creates a handle. A caller-supplied `id` is honored; otherwise a
    /// random identifier is generated.
    #[must_use]
    pub fn new(id: Option<String>, raw: RawHandle, kind: WidgetKind) -> Self {
        Self {
            id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            raw,
            kind,
        }
    }

    /// The globally unique view identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The opaque platform token.
    #[must_use]
    pub const fn raw(&self) -> RawHandle {
        self.raw
    }

    /// The widget kind this handle was created for, used for runtime
    /// dispatch when updating.
    #[must_use]
    pub const fn kind(&self) -> WidgetKind {
        self.kind
    }
}
