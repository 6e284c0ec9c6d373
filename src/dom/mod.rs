//! The host toolkit seen through the document it renders.
//!
//! The dialog helpers never talk to a concrete UI toolkit. Everything they
//! need (walking nodes, reading and writing attributes, editing label text,
//! moving focus, simulating a click) goes through the [`Document`] trait.
//! [`MemoryDocument`] is a complete in-memory implementation used by tests
//! and by hosts that mirror their widget tree into it.

mod memory;

pub use memory::MemoryDocument;

/// Handle of a node (element or text) inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Capabilities the dialog helpers require from the host toolkit.
///
/// Tag names are reported in lowercase. Text nodes have no tag and no
/// attributes; elements have no text of their own.
pub trait Document {
    /// Every element attached to the document, in document order.
    fn elements(&self) -> Vec<NodeId>;

    /// Tag name of an element, `None` for text nodes.
    fn tag_name(&self, node: NodeId) -> Option<&str>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Child nodes, text nodes included, in order.
    fn child_nodes(&self, node: NodeId) -> Vec<NodeId>;

    /// Value of a text node, `None` for elements.
    fn text(&self, node: NodeId) -> Option<&str>;

    fn set_text(&mut self, node: NodeId, text: &str);

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Create a detached text node.
    fn create_text(&mut self, text: &str) -> NodeId;

    /// Move `child` to the end of `parent`'s children.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Move `node` directly after `reference` under the same parent.
    fn insert_after(&mut self, reference: NodeId, node: NodeId);

    /// The element holding input focus.
    fn active_element(&self) -> Option<NodeId>;

    fn focus(&mut self, node: NodeId);

    /// Perform the toolkit's native primary-click behaviour (e.g. toggle a
    /// checkbox). Wired callbacks and tab switching are run by the dialog
    /// itself and must not be re-entered from here.
    fn click(&mut self, node: NodeId);

    fn is_element(&self, node: NodeId) -> bool {
        self.tag_name(node).is_some()
    }

    /// Element children only.
    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.child_nodes(node)
            .into_iter()
            .filter(|&child| self.is_element(child))
            .collect()
    }

    fn class_tokens(&self, node: NodeId) -> Vec<&str> {
        self.attribute(node, "class")
            .map(|classes| classes.split_whitespace().collect())
            .unwrap_or_default()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.class_tokens(node).contains(&class)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let mut classes: Vec<String> = self
            .class_tokens(node)
            .into_iter()
            .map(str::to_owned)
            .collect();
        classes.push(class.to_owned());
        self.set_attribute(node, "class", &classes.join(" "));
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            return;
        }
        let classes: Vec<String> = self
            .class_tokens(node)
            .into_iter()
            .filter(|token| *token != class)
            .map(str::to_owned)
            .collect();
        self.set_attribute(node, "class", &classes.join(" "));
    }

    /// First element in document order carrying `class`.
    fn first_with_class(&self, class: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&el| self.has_class(el, class))
    }

    /// First element in document order whose `id` attribute equals `id`.
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&el| self.attribute(el, "id") == Some(id))
    }

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self, node: NodeId) -> String {
        if let Some(text) = self.text(node) {
            return text.to_owned();
        }
        self.child_nodes(node)
            .into_iter()
            .map(|child| self.text_content(child))
            .collect()
    }
}
