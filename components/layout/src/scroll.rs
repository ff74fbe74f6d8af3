//! The `ScrollView` widget configuration.

use rill_core::{Descriptor, Props, WidgetError};

/// Declared component descriptor for `ScrollView`.
pub const DESCRIPTOR: Descriptor = Descriptor {
    name: "ScrollView",
    required_props: &[],
};

/// Scrolling direction of a `ScrollView`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Horizontal scrolling only.
    Horizontal,
    /// Vertical scrolling only (default).
    #[default]
    Vertical,
}

/// Validated configuration for a `ScrollView` widget.
///
/// Defaults are applied once at construction: vertical orientation with
/// both indicators visible. They are not re-derived afterwards unless a
/// later update explicitly overrides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Scrolling direction.
    pub axis: Axis,
    /// Whether the horizontal scroll indicator is shown.
    pub shows_horizontal_indicator: bool,
    /// Whether the vertical scroll indicator is shown.
    pub shows_vertical_indicator: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            shows_horizontal_indicator: true,
            shows_vertical_indicator: true,
        }
    }
}

impl ScrollConfig {
    /// Creates a configuration with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scrolling direction.
    #[must_use]
    pub const fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Shows or hides the horizontal indicator.
    #[must_use]
    pub const fn horizontal_indicator(mut self, shown: bool) -> Self {
        self.shows_horizontal_indicator = shown;
        self
    }

    /// Shows or hides the vertical indicator.
    #[must_use]
    pub const fn vertical_indicator(mut self, shown: bool) -> Self {
        self.shows_vertical_indicator = shown;
        self
    }

    /// Builds a configuration from raw props.
    ///
    /// The `horizontal` flag flips the axis; each indicator is hidden only
    /// when its prop is explicitly `false`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError`] if validation against [`DESCRIPTOR`] fails;
    /// all props of this widget are optional today.
    pub fn from_props(props: &Props) -> Result<Self, WidgetError> {
        DESCRIPTOR.validate(props)?;
        let mut config = Self::default();
        if props.boolean("horizontal") == Some(true) {
            config.axis = Axis::Horizontal;
        }
        if let Some(shown) = props.boolean("showsHorizontalScrollIndicator") {
            config.shows_horizontal_indicator = shown;
        }
        if let Some(shown) = props.boolean("showsVerticalScrollIndicator") {
            config.shows_vertical_indicator = shown;
        }
        Ok(config)
    }
}

/// Creates a vertical scroll configuration, the most common direction.
#[must_use]
pub fn scroll() -> ScrollConfig {
    ScrollConfig::new()
}

/// Creates a horizontal scroll configuration.
#[must_use]
pub fn scroll_horizontal() -> ScrollConfig {
    ScrollConfig::new().axis(Axis::Horizontal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let config = scroll();
        assert_eq!(config.axis, Axis::Vertical);
        assert!(config.shows_horizontal_indicator);
        assert!(config.shows_vertical_indicator);
    }

    #[test]
    fn from_props_with_no_optional_fields_yields_defaults() {
        let config = ScrollConfig::from_props(&Props::new()).unwrap();
        assert_eq!(config, ScrollConfig::default());
    }

    #[test]
    fn indicators_hide_only_on_explicit_false() {
        let props: Props = [("showsVerticalScrollIndicator", false)]
            .into_iter()
            .collect();
        let config = ScrollConfig::from_props(&props).unwrap();
        assert!(config.shows_horizontal_indicator);
        assert!(!config.shows_vertical_indicator);
    }

    #[test]
    fn horizontal_flag_flips_the_axis() {
        let props: Props = [("horizontal", true)].into_iter().collect();
        let config = ScrollConfig::from_props(&props).unwrap();
        assert_eq!(config.axis, Axis::Horizontal);
    }
}
