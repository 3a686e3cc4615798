//! DOM - Document Abstraction
//!
//! The engine touches the host page through this seam: query by
//! selector, create elements, mutate attributes and text. Hosts with a
//! real document implement [`Document`]; tests and the simulator use the
//! arena-backed [`MemoryDocument`].

mod memory;
mod selector;

pub use memory::MemoryDocument;
pub use selector::{Compound, Selector};

/// Handle to a node owned by a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Trait for the document surface the switcher consumes
pub trait Document {
    /// First node matching `selector`, in document order
    fn query(&self, selector: &str) -> Option<NodeId>;

    /// Every node matching `selector`, in document order
    fn query_all(&self, selector: &str) -> Vec<NodeId>;

    /// First descendant of `node` matching `selector`
    fn query_within(&self, node: NodeId, selector: &str) -> Option<NodeId>;

    /// Create a detached element. Detached nodes are invisible to
    /// queries until appended.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Append `child` as the last child of `parent`, detaching it from
    /// any previous parent
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Insert `child` as the first child of `parent`, detaching it from
    /// any previous parent
    fn prepend_child(&mut self, parent: NodeId, child: NodeId);

    /// Set an attribute, replacing any previous value
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Read an attribute
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Replace the node's text content. Any element children are
    /// removed, mirroring a `textContent` assignment.
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Concatenated text of the node and its descendants
    fn text(&self, node: NodeId) -> String;
}
