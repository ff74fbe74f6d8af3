//! Retained DOM nodes.

use core::fmt;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use rill_core::EventHandler;

pub(crate) enum NodeData {
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        listeners: BTreeMap<String, EventHandler>,
        children: Vec<DomNode>,
        parent: Weak<RefCell<NodeData>>,
    },
    Text {
        content: String,
        parent: Weak<RefCell<NodeData>>,
    },
}

/// A reference to one node in the retained DOM.
///
/// Cloning clones the reference; all clones observe the same underlying
/// node. Nodes hold strong references to their children and weak references
/// to their parent.
#[derive(Clone)]
pub struct DomNode(pub(crate) Rc<RefCell<NodeData>>);

impl DomNode {
    pub(crate) fn element(tag: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(NodeData::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            listeners: BTreeMap::new(),
            children: Vec::new(),
            parent: Weak::new(),
        })))
    }

    pub(crate) fn text(content: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(NodeData::Text {
            content: content.into(),
            parent: Weak::new(),
        })))
    }

    /// Returns `true` if both references point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns `true` for text nodes.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(&*self.0.borrow(), NodeData::Text { .. })
    }

    /// The element tag, or `None` for text nodes.
    #[must_use]
    pub fn tag(&self) -> Option<String> {
        match &*self.0.borrow() {
            NodeData::Element { tag, .. } => Some(tag.clone()),
            NodeData::Text { .. } => None,
        }
    }

    /// An attribute value by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<String> {
        match &*self.0.borrow() {
            NodeData::Element { attributes, .. } => attributes.get(key).cloned(),
            NodeData::Text { .. } => None,
        }
    }

    /// Returns `true` if a listener is registered for `event`.
    #[must_use]
    pub fn has_listener(&self, event: &str) -> bool {
        match &*self.0.borrow() {
            NodeData::Element { listeners, .. } => listeners.contains_key(event),
            NodeData::Text { .. } => false,
        }
    }

    /// The number of children (zero for text nodes).
    #[must_use]
    pub fn child_count(&self) -> usize {
        match &*self.0.borrow() {
            NodeData::Element { children, .. } => children.len(),
            NodeData::Text { .. } => 0,
        }
    }

    /// The child at `index`, if any.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Self> {
        match &*self.0.borrow() {
            NodeData::Element { children, .. } => children.get(index).cloned(),
            NodeData::Text { .. } => None,
        }
    }

    /// The parent node, if attached.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let parent = match &*self.0.borrow() {
            NodeData::Element { parent, .. } | NodeData::Text { parent, .. } => parent.upgrade(),
        };
        parent.map(DomNode)
    }

    /// This node's position among its siblings, if attached.
    #[must_use]
    pub fn index_in_parent(&self) -> Option<usize> {
        let parent = self.parent()?;
        let data = parent.0.borrow();
        match &*data {
            NodeData::Element { children, .. } => children.iter().position(|c| c.ptr_eq(self)),
            NodeData::Text { .. } => None,
        }
    }

    /// The concatenated text content of this subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        match &*self.0.borrow() {
            NodeData::Text { content, .. } => content.clone(),
            NodeData::Element { children, .. } => {
                children.iter().map(DomNode::text_content).collect()
            }
        }
    }

    /// Invokes the listener registered for `event`, returning `true` when
    /// one was found.
    pub fn emit(&self, event: &str) -> bool {
        let handler = match &*self.0.borrow() {
            NodeData::Element { listeners, .. } => listeners.get(event).cloned(),
            NodeData::Text { .. } => None,
        };
        // The borrow is released before invocation so the handler may
        // mutate the tree.
        handler.map(|handler| handler.invoke()).is_some()
    }

    /// Serializes the subtree as HTML-shaped markup, attributes in key
    /// order. Text content is emitted verbatim, without escaping.
    #[must_use]
    pub fn outer_html(&self) -> String {
        match &*self.0.borrow() {
            NodeData::Text { content, .. } => content.clone(),
            NodeData::Element {
                tag,
                attributes,
                children,
                ..
            } => {
                let mut out = String::new();
                out.push('<');
                out.push_str(tag);
                for (key, value) in attributes {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    out.push_str(value);
                    out.push('"');
                }
                out.push('>');
                for child in children {
                    out.push_str(&child.outer_html());
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                out
            }
        }
    }

    pub(crate) fn set_attribute(&self, key: &str, value: String) {
        match &mut *self.0.borrow_mut() {
            NodeData::Element { attributes, .. } => {
                attributes.insert(key.to_owned(), value);
            }
            NodeData::Text { .. } => panic!("cannot set attribute `{key}` on a text node"),
        }
    }

    pub(crate) fn remove_attribute(&self, key: &str) {
        match &mut *self.0.borrow_mut() {
            NodeData::Element { attributes, .. } => {
                attributes.remove(key);
            }
            NodeData::Text { .. } => panic!("cannot remove attribute `{key}` from a text node"),
        }
    }

    pub(crate) fn set_listener(&self, event: String, handler: EventHandler) {
        match &mut *self.0.borrow_mut() {
            NodeData::Element { listeners, .. } => {
                listeners.insert(event, handler);
            }
            NodeData::Text { .. } => panic!("cannot register a listener on a text node"),
        }
    }

    pub(crate) fn remove_listener(&self, event: &str) {
        match &mut *self.0.borrow_mut() {
            NodeData::Element { listeners, .. } => {
                listeners.remove(event);
            }
            NodeData::Text { .. } => {}
        }
    }

    pub(crate) fn set_parent(&self, parent: Weak<RefCell<NodeData>>) {
        match &mut *self.0.borrow_mut() {
            NodeData::Element { parent: slot, .. } | NodeData::Text { parent: slot, .. } => {
                *slot = parent;
            }
        }
    }

    pub(crate) fn detach_from_parent(&self) {
        if let Some(parent) = self.parent() {
            if let NodeData::Element { children, .. } = &mut *parent.0.borrow_mut() {
                children.retain(|child| !child.ptr_eq(self));
            }
        }
        self.set_parent(Weak::new());
    }
}

impl fmt::Debug for DomNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0.borrow() {
            NodeData::Text { content, .. } => f.debug_tuple("Text").field(content).finish(),
            NodeData::Element { tag, children, .. } => f
                .debug_struct("Element")
                .field("tag", tag)
                .field("children", &children.len())
                .finish(),
        }
    }
}
