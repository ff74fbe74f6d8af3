//! Widget kinds, platform identities and component descriptors.

use core::fmt;

use crate::element::Props;
use crate::error::WidgetError;

/// The widget kinds handled by platform view wrappers rather than host
/// primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Media imagery.
    Image,
    /// Scroll container.
    Scroll,
    /// Single-line text input.
    TextInput,
}

impl WidgetKind {
    /// The element tag registered for this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Scroll => "ScrollView",
            Self::TextInput => "TextInput",
        }
    }

    /// Resolves an element tag to its widget kind, if any.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Image" => Some(Self::Image),
            "ScrollView" => Some(Self::Scroll),
            "TextInput" => Some(Self::TextInput),
            _ => None,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Identity of a rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformId {
    /// Browser DOM.
    Web,
    /// iOS native views.
    Ios,
    /// Desktop native widgets.
    Desktop,
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Web => "web",
            Self::Ios => "ios",
            Self::Desktop => "desktop",
        })
    }
}

/// A declared component: its tag name and required prop schema.
///
/// Registration is explicit construction of a descriptor value; widget
/// crates export one and validate raw props against it before building a
/// typed configuration.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    /// The component's tag name.
    pub name: &'static str,
    /// Prop keys that must be present for construction to succeed.
    pub required_props: &'static [&'static str],
}

impl Descriptor {
    /// Checks that every required prop is present.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingProp`] naming the first absent key.
    pub fn validate(&self, props: &Props) -> Result<(), WidgetError> {
        for key in self.required_props {
            if !props.contains_key(key) {
                return Err(WidgetError::MissingProp {
                    widget: self.name,
                    key,
                });
            }
        }
        Ok(())
    }
}
