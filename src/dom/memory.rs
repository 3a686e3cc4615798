//! MemoryDocument - Arena-Backed In-Memory Document
//!
//! A plain element tree with string attributes, enough to stand in for a
//! page's navbar in tests and in the simulator binary. Node handles stay
//! valid for the document's lifetime; detaching never frees arena slots.

use super::selector::{Compound, Selector};
use super::{Document, NodeId};

struct NodeData {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }
}

/// In-memory document with a "body" root
pub struct MemoryDocument {
    nodes: Vec<NodeData>,
}

impl MemoryDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new("body")],
        }
    }

    /// The root element
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Tag name of a node
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    /// Parent of a node, if attached
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Children of a node, in order
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Convenience builder: create an element with a class attribute and
    /// append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str, class: &str) -> NodeId {
        let node = self.create_element(tag);
        if !class.is_empty() {
            self.set_attribute(node, "class", class);
        }
        self.append_child(parent, node);
        node
    }

    // ==================== Matching ====================

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attribute(node, "class")
            .is_some_and(|v| v.split_whitespace().any(|c| c == class))
    }

    fn node_matches(&self, node: NodeId, compound: &Compound) -> bool {
        if let Some(tag) = compound.tag() {
            if self.nodes[node.0].tag != tag {
                return false;
            }
        }
        compound.classes().iter().all(|c| self.has_class(node, c))
    }

    fn matches_selector(&self, node: NodeId, selector: &Selector) -> bool {
        let Some((last, ancestor_parts)) = selector.parts().split_last() else {
            return false;
        };
        if !self.node_matches(node, last) {
            return false;
        }

        // Remaining compounds must match ancestors, innermost last
        let mut remaining = ancestor_parts;
        let mut current = self.nodes[node.0].parent;
        while let Some(part) = remaining.last() {
            let Some(ancestor) = current else {
                return false;
            };
            if self.node_matches(ancestor, part) {
                remaining = &remaining[..remaining.len() - 1];
            }
            current = self.nodes[ancestor.0].parent;
        }
        true
    }

    /// Depth-first walk of the subtree below `node`
    fn walk(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.nodes[node.0].children {
            out.push(child);
            self.walk(child, out);
        }
    }

    fn collect_matches(&self, from: NodeId, selector: &Selector) -> Vec<NodeId> {
        let mut order = Vec::new();
        self.walk(from, &mut order);
        order
            .into_iter()
            .filter(|&n| self.matches_selector(n, selector))
            .collect()
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != child);
        }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn query(&self, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector);
        self.collect_matches(self.root(), &selector).first().copied()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let selector = Selector::parse(selector);
        self.collect_matches(self.root(), &selector)
    }

    fn query_within(&self, node: NodeId, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector);
        self.collect_matches(node, &selector).first().copied()
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(tag));
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(0, child);
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let attributes = &mut self.nodes[node.0].attributes;
        if let Some(entry) = attributes.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            attributes.push((name.to_string(), value.to_string()));
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes[node.0]
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        // Mirrors a textContent assignment: children go away
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
        self.nodes[node.0].text = text.to_string();
    }

    fn text(&self, node: NodeId) -> String {
        let mut out = self.nodes[node.0].text.clone();
        for &child in &self.nodes[node.0].children {
            out.push_str(&self.text(child));
        }
        out
    }
}
