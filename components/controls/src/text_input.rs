//! The `TextInput` widget configuration.

use rill_core::{Descriptor, Props, WidgetError};

/// Declared component descriptor for `TextInput`.
pub const DESCRIPTOR: Descriptor = Descriptor {
    name: "TextInput",
    required_props: &[],
};

/// Validated configuration for a `TextInput` widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInputConfig {
    /// The current text value.
    pub value: String,
    /// Placeholder shown while the field is empty.
    pub placeholder: String,
    /// Whether input is obscured (password entry).
    pub secure: bool,
}

impl TextInputConfig {
    /// Creates an empty, non-secure configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial text value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Obscures input for password entry.
    #[must_use]
    pub const fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Builds a configuration from raw props.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError`] if validation against [`DESCRIPTOR`] fails;
    /// all props of this widget are optional today.
    pub fn from_props(props: &Props) -> Result<Self, WidgetError> {
        DESCRIPTOR.validate(props)?;
        let mut config = Self::default();
        if let Some(value) = props.string("value") {
            config.value = value.to_owned();
        }
        if let Some(placeholder) = props.string("placeholder") {
            config.placeholder = placeholder.to_owned();
        }
        if let Some(secure) = props.boolean("secure") {
            config.secure = secure;
        }
        Ok(config)
    }
}

/// Convenience constructor for building a text input configuration inline.
#[must_use]
pub fn text_input() -> TextInputConfig {
    TextInputConfig::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty_and_visible() {
        let config = text_input();
        assert!(config.value.is_empty());
        assert!(config.placeholder.is_empty());
        assert!(!config.secure);
    }

    #[test]
    fn from_props_reads_all_fields() {
        let props: Props = [
            ("value", rill_core::PropValue::from("hunter2")),
            ("placeholder", rill_core::PropValue::from("password")),
            ("secure", rill_core::PropValue::from(true)),
        ]
        .into_iter()
        .collect();

        let config = TextInputConfig::from_props(&props).unwrap();
        assert_eq!(config.value, "hunter2");
        assert_eq!(config.placeholder, "password");
        assert!(config.secure);
    }
}
