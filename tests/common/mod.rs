//! Shared integration test helpers for dlg-ui.
//!
//! ```ignore
//! mod common;
//! use common::{DialogFixture, RecordingDocument};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers is used per file.

#![allow(dead_code)]

use dlg_ui::{Document, MemoryDocument, NodeId};
use std::cell::RefCell;
use std::rc::Rc;

/// A typical confirmation dialog:
///
/// ```text
/// <body>
///   <label for="name">Name</label><input id="name" data-access-key="n">
///   <textarea id="notes"></textarea>
///   <button class="dlg-callback-ok dlg-default-action" data-access-key="o">OK</button>
///   <button class="dlg-callback-cancel" data-access-key="c">Cancel</button>
///   <button class="dlg-callback-help">Help</button>
/// </body>
/// ```
pub struct DialogFixture {
    pub doc: MemoryDocument,
    pub name_label: NodeId,
    pub name: NodeId,
    pub notes: NodeId,
    pub ok: NodeId,
    pub cancel: NodeId,
    pub help: NodeId,
}

impl DialogFixture {
    pub fn new() -> Self {
        let mut doc = MemoryDocument::new();
        let body = doc.body();

        let name_label = doc.append_element(body, "label", &[("for", "name")]);
        doc.append_text(name_label, "Name");
        let name = doc.append_element(
            body,
            "input",
            &[("id", "name"), ("type", "text"), ("data-access-key", "n")],
        );
        let notes = doc.append_element(body, "textarea", &[("id", "notes")]);

        let ok = doc.append_element(
            body,
            "button",
            &[
                ("class", "dlg-callback-ok dlg-default-action"),
                ("data-access-key", "o"),
            ],
        );
        doc.append_text(ok, "OK");
        let cancel = doc.append_element(
            body,
            "button",
            &[("class", "dlg-callback-cancel"), ("data-access-key", "c")],
        );
        doc.append_text(cancel, "Cancel");
        let help = doc.append_element(body, "button", &[("class", "dlg-callback-help")]);
        doc.append_text(help, "Help");

        Self {
            doc,
            name_label,
            name,
            notes,
            ok,
            cancel,
            help,
        }
    }
}

impl Default for DialogFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Tab headers and panels: `<ul>` of `<li>` headers and a `<div>` of
/// `<section>` panels, `count` of each.
pub fn append_tabs(doc: &mut MemoryDocument, count: usize) -> (NodeId, NodeId) {
    let body = doc.body();
    let headers = doc.append_element(body, "ul", &[("class", "tabs")]);
    let contents = doc.append_element(body, "div", &[("class", "tab-contents")]);
    for i in 0..count {
        let li = doc.append_element(headers, "li", &[]);
        doc.append_text(li, &format!("Page {}", i + 1));
        doc.append_element(contents, "section", &[]);
    }
    (headers, contents)
}

/// A shared, ordered log of observable events.
pub type EventLog = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An attribute write on the document.
    SetAttribute { node: NodeId, name: String, value: String },
    /// A note pushed by test code, e.g. from an observer.
    Note(String),
}

/// A [`MemoryDocument`] that logs every attribute write into an [`EventLog`].
pub struct RecordingDocument {
    pub inner: MemoryDocument,
    pub log: EventLog,
}

impl RecordingDocument {
    pub fn new(inner: MemoryDocument) -> Self {
        Self {
            inner,
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }
}

impl Document for RecordingDocument {
    fn elements(&self) -> Vec<NodeId> {
        self.inner.elements()
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.inner.tag_name(node)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.inner.attribute(node, name)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.log.borrow_mut().push(Event::SetAttribute {
            node,
            name: name.to_string(),
            value: value.to_string(),
        });
        self.inner.set_attribute(node, name, value);
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.inner.parent(node)
    }

    fn child_nodes(&self, node: NodeId) -> Vec<NodeId> {
        self.inner.child_nodes(node)
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        self.inner.text(node)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.inner.set_text(node, text);
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.inner.create_element(tag)
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.inner.create_text(text)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.inner.append_child(parent, child);
    }

    fn insert_after(&mut self, reference: NodeId, node: NodeId) {
        self.inner.insert_after(reference, node);
    }

    fn active_element(&self) -> Option<NodeId> {
        self.inner.active_element()
    }

    fn focus(&mut self, node: NodeId) {
        self.inner.focus(node);
    }

    fn click(&mut self, node: NodeId) {
        self.inner.click(node);
    }
}
