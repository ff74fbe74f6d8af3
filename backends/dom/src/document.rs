//! The DOM document: host-contract entry point for the web backend.

use std::rc::Rc;

use rill_core::host::TEXT_TAG;
use rill_core::{Host, PropValue, Props, event_name};
use tracing::trace;

use crate::node::{DomNode, NodeData};

/// The browser-shaped host backend.
///
/// A document owns a root element and constructs detached nodes on demand;
/// every mutation flows through the [`Host`] implementation.
#[derive(Debug)]
pub struct DomDocument {
    root: DomNode,
}

impl Default for DomDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDocument {
    /// Creates a document with an empty `root` element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomNode::element("root"),
        }
    }

    /// The mounting point for this document.
    #[must_use]
    pub const fn root(&self) -> &DomNode {
        &self.root
    }
}

impl Host for DomDocument {
    type Node = DomNode;

    fn create_element(&mut self, tag: &str, props: &Props) -> DomNode {
        trace!(tag, "create element");
        if tag == TEXT_TAG {
            DomNode::text(props.string("text").unwrap_or_default())
        } else {
            DomNode::element(tag)
        }
    }

    fn set_text(&mut self, node: &DomNode, text: &str) {
        let mut data = node.0.borrow_mut();
        match &mut *data {
            NodeData::Text { content, .. } => {
                text.clone_into(content);
            }
            NodeData::Element { children, .. } => {
                // textContent semantics: the subtree collapses to one text
                // node.
                for child in children.iter() {
                    child.set_parent(std::rc::Weak::new());
                }
                children.clear();
                let replacement = DomNode::text(text);
                replacement.set_parent(Rc::downgrade(&node.0));
                children.push(replacement);
            }
        }
    }

    fn append(&mut self, parent: &DomNode, child: &DomNode) {
        child.detach_from_parent();
        child.set_parent(Rc::downgrade(&parent.0));
        match &mut *parent.0.borrow_mut() {
            NodeData::Element { children, .. } => children.push(child.clone()),
            NodeData::Text { .. } => panic!("cannot append a child to a text node"),
        }
    }

    fn replace(&mut self, old: &DomNode, new: &DomNode) {
        let parent = old
            .parent()
            .expect("replace target is detached from the tree");
        new.detach_from_parent();
        match &mut *parent.0.borrow_mut() {
            NodeData::Element { children, .. } => {
                let index = children
                    .iter()
                    .position(|child| child.ptr_eq(old))
                    .expect("replace target is not a child of its parent");
                children[index] = new.clone();
            }
            NodeData::Text { .. } => unreachable!("text nodes never hold children"),
        }
        new.set_parent(Rc::downgrade(&parent.0));
        old.set_parent(std::rc::Weak::new());
    }

    fn set_prop(&mut self, node: &DomNode, key: &str, value: &PropValue) {
        if let Some(event) = event_name(key) {
            match value {
                PropValue::Handler(handler) => {
                    node.set_listener(event, handler.clone());
                    return;
                }
                PropValue::Null => {
                    // Fall through so a stale attribute under the same key
                    // is removed as well.
                    node.remove_listener(&event);
                }
                // An event-shaped key with a plain value falls through to
                // the attribute path.
                _ => {}
            }
        }
        match value.to_attribute() {
            Some(text) => node.set_attribute(key, text),
            None => node.remove_attribute(key),
        }
    }

    fn clear(&mut self, node: &DomNode) {
        match &mut *node.0.borrow_mut() {
            NodeData::Element { children, .. } => {
                for child in children.iter() {
                    child.set_parent(std::rc::Weak::new());
                }
                children.clear();
            }
            NodeData::Text { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_core::{Element, PropValue, element, mount};
    use std::cell::Cell;

    fn empty_props() -> Props {
        Props::new()
    }

    #[test]
    fn mounting_reconstructs_the_element_tree() {
        let tree = element("div")
            .prop("class", "row")
            .child(Element::text("hello"))
            .child(element("span").prop("id", "name"));

        let mut document = DomDocument::new();
        let root = document.root().clone();
        mount(&mut document, &tree, &root);

        assert_eq!(
            root.outer_html(),
            "<root><div class=\"row\">hello<span id=\"name\"></span></div></root>"
        );
    }

    #[test]
    fn created_elements_are_detached() {
        let mut document = DomDocument::new();
        let node = document.create_element("div", &empty_props());
        assert!(node.parent().is_none());
    }

    #[test]
    fn replace_preserves_sibling_position() {
        let mut document = DomDocument::new();
        let root = document.root().clone();

        let first = document.create_element("a", &empty_props());
        let second = document.create_element("b", &empty_props());
        let third = document.create_element("c", &empty_props());
        document.append(&root, &first);
        document.append(&root, &second);
        document.append(&root, &third);

        let replacement = document.create_element("strong", &empty_props());
        document.replace(&second, &replacement);

        assert_eq!(replacement.index_in_parent(), Some(1));
        assert_eq!(root.child_count(), 3);
        assert!(second.parent().is_none());
        assert_eq!(root.outer_html(), "<root><a></a><strong></strong><c></c></root>");
    }

    #[test]
    #[should_panic(expected = "replace target is detached")]
    fn replacing_a_detached_node_is_fatal() {
        let mut document = DomDocument::new();
        let orphan = document.create_element("div", &empty_props());
        let replacement = document.create_element("span", &empty_props());
        document.replace(&orphan, &replacement);
    }

    #[test]
    fn set_prop_is_idempotent() {
        let mut document = DomDocument::new();
        let node = document.create_element("div", &empty_props());

        document.set_prop(&node, "class", &PropValue::from("card"));
        let once = node.outer_html();
        document.set_prop(&node, "class", &PropValue::from("card"));
        assert_eq!(node.outer_html(), once);
    }

    #[test]
    fn null_removes_attributes() {
        let mut document = DomDocument::new();
        let node = document.create_element("div", &empty_props());

        document.set_prop(&node, "title", &PropValue::from("hi"));
        assert_eq!(node.attribute("title").as_deref(), Some("hi"));

        document.set_prop(&node, "title", &PropValue::Null);
        assert_eq!(node.attribute("title"), None);
    }

    #[test]
    fn event_props_register_listeners_instead_of_attributes() {
        let mut document = DomDocument::new();
        let node = document.create_element("button", &empty_props());

        let clicks = Rc::new(Cell::new(0));
        let seen = clicks.clone();
        document.set_prop(
            &node,
            "onClick",
            &PropValue::handler(move || seen.set(seen.get() + 1)),
        );

        assert!(node.has_listener("click"));
        assert_eq!(node.attribute("onClick"), None);
        assert!(node.emit("click"));
        assert_eq!(clicks.get(), 1);

        document.set_prop(&node, "onClick", &PropValue::Null);
        assert!(!node.has_listener("click"));
        assert!(!node.emit("click"));
    }

    #[test]
    fn null_on_an_event_key_clears_listener_and_stale_attribute() {
        let mut document = DomDocument::new();
        let node = document.create_element("button", &empty_props());

        // An event-shaped key with a plain value lands as an attribute.
        document.set_prop(&node, "onClick", &PropValue::from("legacy"));
        assert_eq!(node.attribute("onClick").as_deref(), Some("legacy"));

        document.set_prop(&node, "onClick", &PropValue::handler(|| ()));
        assert!(node.has_listener("click"));

        document.set_prop(&node, "onClick", &PropValue::Null);
        assert!(!node.has_listener("click"));
        assert_eq!(node.attribute("onClick"), None);
    }

    #[test]
    fn set_text_replaces_content_in_place() {
        let mut document = DomDocument::new();
        let root = document.root().clone();
        let text_props: Props = [("text", "before")].into_iter().collect();
        let text = document.create_element("text", &text_props);
        document.append(&root, &text);

        document.set_text(&text, "after");
        assert_eq!(root.text_content(), "after");

        let div = document.create_element("div", &empty_props());
        document.append(&root, &div);
        let span = document.create_element("span", &empty_props());
        document.append(&div, &span);
        document.set_text(&div, "flat");
        assert_eq!(div.text_content(), "flat");
        assert_eq!(div.child_count(), 1);
    }

    #[test]
    fn clear_removes_all_children() {
        let mut document = DomDocument::new();
        let root = document.root().clone();
        for tag in ["a", "b", "c"] {
            let child = document.create_element(tag, &empty_props());
            document.append(&root, &child);
        }
        assert_eq!(root.child_count(), 3);

        let detached = root.child(0).unwrap();
        document.clear(&root);
        assert_eq!(root.child_count(), 0);
        assert!(detached.parent().is_none());
    }

    #[test]
    fn style_props_render_as_declarations() {
        let mut document = DomDocument::new();
        let node = document.create_element("div", &empty_props());

        let style: rill_core::element::StyleMap = [
            ("color".to_owned(), "red".to_owned()),
            ("margin".to_owned(), "4px".to_owned()),
        ]
        .into();
        document.set_prop(&node, "style", &PropValue::from(style));
        assert_eq!(
            node.attribute("style").as_deref(),
            Some("color: red; margin: 4px;")
        );
    }
}
