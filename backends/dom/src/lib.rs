//! Web backend for the Rill framework.
//!
//! This crate hosts a retained, in-memory DOM: element nodes with attribute
//! maps, event listener registries and ordered children, plus text nodes.
//! [`DomDocument`] implements the host contract over these nodes, which
//! makes it both the browser-shaped reference backend and the harness the
//! rest of the workspace tests the contract against.
//!
//! Structural invariants (attachment, sibling position, single-transition
//! replacement) are enforced with panics: issuing an operation against a
//! detached node is a reconciler bug, not a recoverable condition.

mod document;
mod node;

pub use document::DomDocument;
pub use node::DomNode;
