//! Tab navigation.
//!
//! Exactly one panel is visible after [`TabController::show_tab`] is called
//! with a known name. Controls respond to clicks and to left/right arrow keys,
//! which move focus cyclically and activate the newly focused tab.

use crate::dom::{Document, NodeId};
use crate::session::{EventHandler, Key, PageContext, PageEvent};

/// Class marking tab controls.
pub const CONTROL_CLASS: &str = "tab-button";
/// Class marking tab panels.
pub const PANEL_CLASS: &str = "tab-content";
/// Attribute on a control naming its panel.
pub const TAB_ATTRIBUTE: &str = "data-tab";
/// Class added to the active panel and control.
pub const ACTIVE_CLASS: &str = "active";

/// Controller over the page's tab controls and panels.
#[derive(Debug, Clone, Default)]
pub struct TabController {
    controls: Vec<NodeId>,
    panels: Vec<NodeId>,
}

impl TabController {
    /// Collect controls and panels from the document, in document order.
    #[must_use]
    pub fn discover(doc: &Document) -> Self {
        Self {
            controls: doc.elements_by_class(CONTROL_CLASS),
            panels: doc.elements_by_class(PANEL_CLASS),
        }
    }

    /// Tab control nodes in order.
    pub fn controls(&self) -> &[NodeId] {
        &self.controls
    }

    /// Names of every control, in order.
    pub fn tab_names(&self, doc: &Document) -> Vec<String> {
        self.controls
            .iter()
            .filter_map(|&c| doc.attribute(c, TAB_ATTRIBUTE))
            .map(str::to_string)
            .collect()
    }

    /// The control whose `data-tab` equals `name`.
    pub fn control_for(&self, doc: &Document, name: &str) -> Option<NodeId> {
        self.controls
            .iter()
            .copied()
            .find(|&c| doc.attribute(c, TAB_ATTRIBUTE) == Some(name))
    }

    /// Show the tab called `name`, hiding every other one.
    ///
    /// Unknown names leave every panel and control inactive.
    pub fn show_tab(&self, doc: &mut Document, name: &str) {
        for &panel in &self.panels {
            doc.remove_class(panel, ACTIVE_CLASS);
            doc.set_attribute(panel, "hidden", "");
        }
        for &control in &self.controls {
            doc.remove_class(control, ACTIVE_CLASS);
            doc.set_attribute(control, "aria-selected", "false");
        }

        let panel = self
            .panels
            .iter()
            .copied()
            .find(|&p| doc.attribute(p, "id") == Some(name));
        if let Some(panel) = panel {
            doc.add_class(panel, ACTIVE_CLASS);
            doc.remove_attribute(panel, "hidden");
        }

        if let Some(control) = self.control_for(doc, name) {
            doc.add_class(control, ACTIVE_CLASS);
            doc.set_attribute(control, "aria-selected", "true");
        }
    }

    /// Name of the currently active panel.
    pub fn active_tab(&self, doc: &Document) -> Option<String> {
        self.panels
            .iter()
            .find(|&&p| doc.has_class(p, ACTIVE_CLASS))
            .and_then(|&p| doc.attribute(p, "id"))
            .map(str::to_string)
    }

    /// Name of the first panel the markup leaves visible.
    pub fn initial_tab(&self, doc: &Document) -> Option<String> {
        self.panels
            .iter()
            .find(|&&p| !doc.has_attribute(p, "hidden"))
            .and_then(|&p| doc.attribute(p, "id"))
            .map(str::to_string)
    }

    fn select(&self, doc: &mut Document, control: NodeId) {
        let Some(name) = doc.attribute(control, TAB_ATTRIBUTE).map(str::to_string) else {
            return;
        };
        doc.focus(control);
        self.show_tab(doc, &name);
    }

    /// Index of the control next to `index` in the direction of `key`, wrapping.
    fn adjacent(&self, index: usize, key: &Key) -> Option<usize> {
        let len = self.controls.len();
        if len == 0 {
            return None;
        }
        match key {
            Key::ArrowLeft => Some(if index == 0 { len - 1 } else { index - 1 }),
            Key::ArrowRight => Some((index + 1) % len),
            Key::Other(_) => None,
        }
    }
}

impl EventHandler for TabController {
    fn handle(&self, _ctx: &PageContext, doc: &mut Document, event: &PageEvent) {
        match event {
            PageEvent::Click(target) if self.controls.contains(target) => {
                self.select(doc, *target);
            }
            PageEvent::KeyDown(key) => {
                let Some(focused) = doc.active_element() else {
                    return;
                };
                let Some(index) = self.controls.iter().position(|&c| c == focused) else {
                    return;
                };
                if let Some(next) = self.adjacent(index, key) {
                    self.select(doc, self.controls[next]);
                }
            }
            _ => {}
        }
    }
}
