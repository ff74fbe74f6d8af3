//! The virtual element tree: tagged nodes with keyed props and ordered
//! children.
//!
//! An [`Element`] describes what should be on screen without referencing any
//! concrete view system. Its `tag` names either a primitive host element
//! (`"div"`, `"text"`) or a registered widget kind (`"Image"`,
//! `"ScrollView"`, `"TextInput"`); the tag decides which host path or
//! platform wrapper handles the node and is immutable for the node's
//! lifetime. A node is never retagged in place, only replaced.

use core::fmt;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Nested style object attached to a prop (`{"color": "red"}`).
pub type StyleMap = BTreeMap<String, String>;

/// A callable prop value registered as an event listener by hosts.
///
/// Handlers are reference counted so that a prop map can be cloned freely;
/// equality between handlers is identity, not behavior.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn()>);

impl EventHandler {
    /// Wraps a closure as an event handler.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the handler.
    pub fn invoke(&self) {
        (self.0)();
    }

    /// Returns `true` if both handlers refer to the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler")
    }
}

/// A single prop value: primitive, nested style object, or event handler.
#[derive(Debug, Clone)]
pub enum PropValue {
    /// Absent value; setting it removes any prior attribute under the key.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value.
    Str(String),
    /// Nested style object.
    Style(StyleMap),
    /// Event handler registered under the `on*` prop convention.
    Handler(EventHandler),
}

impl PropValue {
    /// Wraps a closure as a [`PropValue::Handler`].
    pub fn handler(f: impl Fn() + 'static) -> Self {
        Self::Handler(EventHandler::new(f))
    }

    /// Returns the string value, if this is a [`PropValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a [`PropValue::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a [`PropValue::Number`].
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the handler, if this is a [`PropValue::Handler`].
    #[must_use]
    pub const fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            Self::Handler(handler) => Some(handler),
            _ => None,
        }
    }

    /// Returns `true` for [`PropValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the value as its backend attribute representation.
    ///
    /// `Null` and `Handler` values have no attribute representation and
    /// yield `None`; every other value is stringified. Style objects render
    /// as `key: value; ...` declarations in key order.
    #[must_use]
    pub fn to_attribute(&self) -> Option<String> {
        match self {
            Self::Null | Self::Handler(_) => None,
            Self::Bool(value) => Some(value.to_string()),
            Self::Number(value) => Some(value.to_string()),
            Self::Str(value) => Some(value.clone()),
            Self::Style(style) => {
                let mut out = String::new();
                for (key, value) in style {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(key);
                    out.push_str(": ");
                    out.push_str(value);
                    out.push(';');
                }
                Some(out)
            }
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Style(a), Self::Style(b)) => a == b,
            (Self::Handler(a), Self::Handler(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<StyleMap> for PropValue {
    fn from(value: StyleMap) -> Self {
        Self::Style(value)
    }
}

impl From<EventHandler> for PropValue {
    fn from(value: EventHandler) -> Self {
        Self::Handler(value)
    }
}

/// A mapping from prop key to value. Keys are unique; key insertion order is
/// not semantically significant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    /// Creates an empty prop map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a prop, replacing any previous value under the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Looks up a prop value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// Returns `true` if a prop exists under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Looks up a string prop.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    /// Looks up a boolean prop.
    #[must_use]
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(PropValue::as_bool)
    }

    /// Looks up a numeric prop.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(PropValue::as_number)
    }

    /// Iterates over all props in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of props.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map holds no props.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// A single node in the declarative virtual UI tree.
///
/// Children are ordered; their order determines render order and diff
/// alignment. The optional `key` carries caller-supplied identity for
/// external reconcilers and has no semantics inside this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    key: Option<String>,
    props: Props,
    children: Vec<Element>,
}

impl Element {
    /// Creates an element with the given tag and no props or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            key: None,
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// Creates a text element holding `content`.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(crate::host::TEXT_TAG).prop("text", content.into())
    }

    /// The tag naming the host primitive or widget kind handling this node.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The caller-supplied identity key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The node's props.
    #[must_use]
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// The node's children, in render order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Sets the identity key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Adds a prop.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends every child from the iterator.
    #[must_use]
    pub fn extend_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Convenience constructor for building an element tree inline.
pub fn element(tag: impl Into<String>) -> Element {
    Element::new(tag)
}
