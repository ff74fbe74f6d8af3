//! The host contract: the fixed operation set a rendering backend must
//! implement so that one reconciliation logic can drive arbitrarily
//! different native view systems.
//!
//! All operations are synchronous, side-effecting, and executed on the
//! render thread. Hosts apply operations strictly in call order; later
//! operations may depend on attachments made by earlier ones. Operating on
//! a detached or foreign node is a programmer error, not a recoverable
//! condition — the reconciler is responsible for never issuing out-of-order
//! operations.

use crate::element::{Element, PropValue, Props};

/// The tag reserved for platform text nodes.
pub const TEXT_TAG: &str = "text";

/// The operation set a rendering backend implements.
///
/// Implementations exist once per backend identity (web, iOS, desktop).
/// Every implementation enforces the same prop-to-attribute convention:
/// keys matching `on` + CapitalizedEvent with a [`PropValue::Handler`]
/// value register a listener (see [`event_name`]), a [`PropValue::Null`]
/// value removes any prior attribute or listener under the key, and every
/// other value is stringified into the backend's attribute representation.
pub trait Host {
    /// The backend's node reference. Cloning a node clones the reference,
    /// not the underlying view.
    type Node: Clone;

    /// Constructs a new, detached view.
    ///
    /// A `tag` of [`TEXT_TAG`] produces a platform text node seeded from
    /// the `"text"` prop; other tags use `props` only for construction-time
    /// configuration, and prop application happens through
    /// [`Host::set_prop`]. The returned node must not be attached to any
    /// parent.
    fn create_element(&mut self, tag: &str, props: &Props) -> Self::Node;

    /// Replaces a text-bearing view's content in place.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Attaches `child` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` cannot hold children.
    fn append(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Atomically substitutes `new` for `old` at the same position in its
    /// parent. Callers rely on this being a single visible transition, not
    /// a remove-then-insert with an observable gap.
    ///
    /// # Panics
    ///
    /// Panics if `old` is detached.
    fn replace(&mut self, old: &Self::Node, new: &Self::Node);

    /// Applies a single prop following the shared prop convention.
    fn set_prop(&mut self, node: &Self::Node, key: &str, value: &PropValue);

    /// Removes all children of `node`.
    fn clear(&mut self, node: &Self::Node);
}

/// Maps an `on`-prefixed prop key to its event name.
///
/// `onClick` becomes `click`, `onChange` becomes `change`. Keys that do not
/// match the `on` + CapitalizedEvent shape (`online`, `on`) yield `None`
/// and are treated as ordinary attributes.
#[must_use]
pub fn event_name(key: &str) -> Option<String> {
    let rest = key.strip_prefix("on")?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    let mut name = String::with_capacity(rest.len());
    name.push(first.to_ascii_lowercase());
    name.push_str(chars.as_str());
    Some(name)
}

/// Builds the view subtree for `element` and attaches it under `parent`.
///
/// This is an initial mount, not a diff: every node is created fresh, props
/// are applied through [`Host::set_prop`], and children are appended in
/// order. Reconciliation against a previous tree is the caller's concern.
pub fn mount<H: Host>(host: &mut H, element: &Element, parent: &H::Node) -> H::Node {
    let node = create_subtree(host, element);
    host.append(parent, &node);
    node
}

/// Builds the view subtree for `element` without attaching it anywhere.
pub fn create_subtree<H: Host>(host: &mut H, element: &Element) -> H::Node {
    let node = host.create_element(element.tag(), element.props());
    if element.tag() == TEXT_TAG {
        return node;
    }
    for (key, value) in element.props().iter() {
        host.set_prop(&node, key, value);
    }
    for child in element.children() {
        let built = create_subtree(host, child);
        host.append(&node, &built);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::event_name;

    #[test]
    fn event_prop_keys() {
        assert_eq!(event_name("onClick").as_deref(), Some("click"));
        assert_eq!(event_name("onScrollEnd").as_deref(), Some("scrollEnd"));
        assert_eq!(event_name("online"), None);
        assert_eq!(event_name("on"), None);
        assert_eq!(event_name("class"), None);
    }
}
