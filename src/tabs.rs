//! Tab interface: exclusive selection of a tab header and its panel.
//!
//! Tab headers are the element children of one container and panels the
//! element children of another; they pair up by index.

use crate::dom::{Document, NodeId};
use crate::error::ControlsError;
use crate::shortcuts::TabDirection;
use dlg_ui_config::{MarkupConfig, TabConfig};
use std::fmt;

/// Observer called with `(new_index, old_index)` before a switch is shown.
pub type SwitchCallback = Box<dyn FnMut(usize, usize)>;

/// Runtime options for attaching a tab interface.
pub struct TabOptions {
    pub tab_element: NodeId,
    pub tab_content_element: NodeId,
    pub start_index: usize,
    pub on_switch: Option<SwitchCallback>,
    pub init_shortcuts: bool,
}

impl TabOptions {
    pub fn new(tab_element: NodeId, tab_content_element: NodeId) -> Self {
        Self::from_config(tab_element, tab_content_element, &TabConfig::default())
    }

    pub fn from_config(tab_element: NodeId, tab_content_element: NodeId, config: &TabConfig) -> Self {
        Self {
            tab_element,
            tab_content_element,
            start_index: config.start_index,
            on_switch: None,
            init_shortcuts: config.init_shortcuts,
        }
    }

    pub fn start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    pub fn on_switch(mut self, callback: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_switch = Some(Box::new(callback));
        self
    }

    pub fn init_shortcuts(mut self, enabled: bool) -> Self {
        self.init_shortcuts = enabled;
        self
    }
}

impl fmt::Debug for TabOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabOptions")
            .field("tab_element", &self.tab_element)
            .field("tab_content_element", &self.tab_content_element)
            .field("start_index", &self.start_index)
            .field("on_switch", &self.on_switch.is_some())
            .field("init_shortcuts", &self.init_shortcuts)
            .finish()
    }
}

/// Step `current` by `delta`, wrapping in both directions.
///
/// `count` must be non-zero.
pub fn cycle_index(current: usize, delta: isize, count: usize) -> usize {
    let count = count as isize;
    (current as isize + delta).rem_euclid(count) as usize
}

pub struct TabInterface {
    tabs: Vec<NodeId>,
    panels: Vec<NodeId>,
    current: usize,
    on_switch: Option<SwitchCallback>,
    shortcuts: bool,
    selected_class: String,
    content_selected_class: String,
}

impl fmt::Debug for TabInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabInterface")
            .field("tabs", &self.tabs)
            .field("panels", &self.panels)
            .field("current", &self.current)
            .field("on_switch", &self.on_switch.is_some())
            .field("shortcuts", &self.shortcuts)
            .finish()
    }
}

impl TabInterface {
    /// Collect tabs and panels and show the start tab.
    ///
    /// The observer is not called for the initial selection.
    pub fn new<D: Document + ?Sized>(
        doc: &mut D,
        options: TabOptions,
        markup: &MarkupConfig,
    ) -> Result<Self, ControlsError> {
        let tabs = doc.children(options.tab_element);
        let panels = doc.children(options.tab_content_element);
        if tabs.is_empty() {
            return Err(ControlsError::EmptyTabContainer {
                container: options.tab_element,
            });
        }
        if options.start_index >= tabs.len() {
            return Err(ControlsError::InvalidTabIndex {
                index: options.start_index,
                count: tabs.len(),
            });
        }
        if panels.len() != tabs.len() {
            log::warn!(
                "Tab interface has {} tabs but {} panels",
                tabs.len(),
                panels.len()
            );
        }

        let interface = Self {
            tabs,
            panels,
            current: options.start_index,
            on_switch: options.on_switch,
            shortcuts: options.init_shortcuts,
            selected_class: markup.tab_selected_class.clone(),
            content_selected_class: markup.tab_content_selected_class.clone(),
        };
        interface.view_tab(doc, interface.current);
        log::info!(
            "Tab interface with {} tabs, starting at {}",
            interface.tabs.len(),
            interface.current
        );
        Ok(interface)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tabs(&self) -> &[NodeId] {
        &self.tabs
    }

    pub fn panels(&self) -> &[NodeId] {
        &self.panels
    }

    pub fn shortcuts_enabled(&self) -> bool {
        self.shortcuts
    }

    /// Index of a tab header, if `node` is one.
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.tabs.iter().position(|&tab| tab == node)
    }

    /// Switch to `index`: notify the observer, then show the tab.
    pub fn switch_to<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        index: usize,
    ) -> Result<(), ControlsError> {
        if index >= self.tabs.len() {
            return Err(ControlsError::InvalidTabIndex {
                index,
                count: self.tabs.len(),
            });
        }
        let old = self.current;
        if let Some(callback) = self.on_switch.as_mut() {
            callback(index, old);
        }
        self.view_tab(doc, index);
        self.current = index;
        log::debug!("Switched tab {} -> {}", old, index);
        Ok(())
    }

    /// Move one tab in `direction`, wrapping around. Returns the new index.
    pub fn cycle<D: Document + ?Sized>(&mut self, doc: &mut D, direction: TabDirection) -> usize {
        let next = cycle_index(self.current, direction.delta(), self.tabs.len());
        if let Err(e) = self.switch_to(doc, next) {
            log::warn!("{}", e);
        }
        self.current
    }

    fn view_tab<D: Document + ?Sized>(&self, doc: &mut D, index: usize) {
        for &tab in &self.tabs {
            doc.remove_class(tab, &self.selected_class);
        }
        for &panel in &self.panels {
            doc.remove_class(panel, &self.content_selected_class);
        }
        if let Some(&tab) = self.tabs.get(index) {
            doc.add_class(tab, &self.selected_class);
        }
        if let Some(&panel) = self.panels.get(index) {
            doc.add_class(panel, &self.content_selected_class);
        }
    }
}
