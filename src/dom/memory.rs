//! In-memory document tree.

use super::{Document, NodeId};

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

/// A document held entirely in memory.
///
/// Nodes live in an arena and are never freed; detaching a node only unlinks
/// it. The tree starts with a single `body` element. Clicks are recorded
/// rather than performed, so callers can see what the dialog activated.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    body: NodeId,
    focused: Option<NodeId>,
    clicks: Vec<NodeId>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        let body = Node {
            parent: None,
            children: Vec::new(),
            data: NodeData::Element {
                tag: "body".to_string(),
                attributes: Vec::new(),
            },
        };
        Self {
            nodes: vec![body],
            body: NodeId(0),
            focused: None,
            clicks: Vec::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Append a new element with the given attributes under `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> NodeId {
        let node = self.create_element(tag);
        for (name, value) in attributes {
            self.set_attribute(node, name, value);
        }
        self.append_child(parent, node);
        node
    }

    /// Append a new text node under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let node = self.create_text(text);
        self.append_child(parent, node);
        node
    }

    /// Elements passed to [`Document::click`], oldest first.
    pub fn clicks(&self) -> &[NodeId] {
        &self.clicks
    }

    pub fn take_clicks(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.clicks)
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            data,
        });
        id
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.retain(|&child| child != id);
        }
        if let Some(n) = self.nodes.get_mut(id.0) {
            n.parent = None;
        }
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    fn collect_elements(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let Some(node) = self.node(id) else {
            return;
        };
        if matches!(node.data, NodeData::Element { .. }) {
            out.push(id);
        }
        for &child in &node.children {
            self.collect_elements(child, out);
        }
    }
}

impl Document for MemoryDocument {
    fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_elements(self.body, &mut out);
        out
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.data {
            NodeData::Element { tag, .. } => Some(tag.as_str()),
            NodeData::Text(_) => None,
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.node(node)?.data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeData::Text(_) => None,
        }
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(Node {
            data: NodeData::Element { attributes, .. },
            ..
        }) = self.nodes.get_mut(node.0)
        else {
            return;
        };
        match attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    fn child_nodes(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.data {
            NodeData::Text(text) => Some(text.as_str()),
            NodeData::Element { .. } => None,
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(Node {
            data: NodeData::Text(value),
            ..
        }) = self.nodes.get_mut(node.0)
        {
            *value = text.to_string();
        }
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element {
            tag: tag.to_lowercase(),
            attributes: Vec::new(),
        })
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(parent).is_none()
            || self.node(child).is_none()
            || self.is_inclusive_ancestor(child, parent)
        {
            return;
        }
        self.detach(child);
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child.0) {
            c.parent = Some(parent);
        }
    }

    fn insert_after(&mut self, reference: NodeId, node: NodeId) {
        let Some(parent) = self.parent(reference) else {
            return;
        };
        if reference == node || self.node(node).is_none() || self.is_inclusive_ancestor(node, parent)
        {
            return;
        }
        self.detach(node);
        if let Some(p) = self.nodes.get_mut(parent.0) {
            let position = p
                .children
                .iter()
                .position(|&child| child == reference)
                .map_or(p.children.len(), |i| i + 1);
            p.children.insert(position, node);
        }
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.parent = Some(parent);
        }
    }

    fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    fn focus(&mut self, node: NodeId) {
        if self.is_element(node) {
            self.focused = Some(node);
        }
    }

    fn click(&mut self, node: NodeId) {
        if self.is_element(node) {
            self.clicks.push(node);
        }
    }
}
