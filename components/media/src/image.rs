//! The `Image` widget configuration.

use rill_core::{Descriptor, Props, WidgetError};

/// Declared component descriptor for `Image`.
pub const DESCRIPTOR: Descriptor = Descriptor {
    name: "Image",
    required_props: &["source"],
};

/// How an image fills the frame it is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ResizeMode {
    /// Scale uniformly until both dimensions cover the frame, cropping
    /// overflow (default).
    #[default]
    Cover,
    /// Scale uniformly until the whole image fits inside the frame.
    Contain,
    /// Scale each axis independently to match the frame exactly.
    Stretch,
    /// Keep the image's natural size, centered in the frame.
    Center,
}

impl ResizeMode {
    /// Parses the prop representation of a resize mode.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cover" => Some(Self::Cover),
            "contain" => Some(Self::Contain),
            "stretch" => Some(Self::Stretch),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    /// The prop representation of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
            Self::Stretch => "stretch",
            Self::Center => "center",
        }
    }
}

/// Validated configuration for an `Image` widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    /// Where the image bytes come from (URL or bundle path).
    pub source: String,
    /// How the image fills its frame.
    pub resize_mode: ResizeMode,
}

impl ImageConfig {
    /// Creates a configuration with the default resize mode.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            resize_mode: ResizeMode::default(),
        }
    }

    /// Overrides the resize mode.
    #[must_use]
    pub const fn resize_mode(mut self, mode: ResizeMode) -> Self {
        self.resize_mode = mode;
        self
    }

    /// Builds a configuration from raw props, validating required fields
    /// against [`DESCRIPTOR`].
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingProp`] when `source` is absent and
    /// [`WidgetError::InvalidProp`] when a prop carries an unusable value.
    pub fn from_props(props: &Props) -> Result<Self, WidgetError> {
        DESCRIPTOR.validate(props)?;
        let source = props.string("source").ok_or_else(|| WidgetError::InvalidProp {
            widget: DESCRIPTOR.name,
            key: "source",
            reason: "expected a string".to_owned(),
        })?;
        let mut config = Self::new(source);
        if let Some(raw) = props.string("resizeMode") {
            config.resize_mode =
                ResizeMode::parse(raw).ok_or_else(|| WidgetError::InvalidProp {
                    widget: DESCRIPTOR.name,
                    key: "resizeMode",
                    reason: format!("unknown mode `{raw}`"),
                })?;
        }
        Ok(config)
    }
}

/// Convenience constructor for building an image configuration inline.
pub fn image(source: impl Into<String>) -> ImageConfig {
    ImageConfig::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_cover() {
        let config = image("a.png");
        assert_eq!(config.resize_mode, ResizeMode::Cover);
    }

    #[test]
    fn from_props_requires_source() {
        let props = Props::new();
        assert_eq!(
            ImageConfig::from_props(&props),
            Err(WidgetError::MissingProp {
                widget: "Image",
                key: "source",
            })
        );
    }

    #[test]
    fn from_props_applies_defaults_and_overrides() {
        let props: Props = [("source", "a.png")].into_iter().collect();
        let config = ImageConfig::from_props(&props).unwrap();
        assert_eq!(config.source, "a.png");
        assert_eq!(config.resize_mode, ResizeMode::Cover);

        let props: Props = [("source", "a.png"), ("resizeMode", "contain")]
            .into_iter()
            .collect();
        let config = ImageConfig::from_props(&props).unwrap();
        assert_eq!(config.resize_mode, ResizeMode::Contain);
    }

    #[test]
    fn from_props_rejects_unknown_modes() {
        let props: Props = [("source", "a.png"), ("resizeMode", "tile")]
            .into_iter()
            .collect();
        assert!(matches!(
            ImageConfig::from_props(&props),
            Err(WidgetError::InvalidProp { key: "resizeMode", .. })
        ));
    }
}
