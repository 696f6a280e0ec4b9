use crate::shared::dom;
use contracts::tabs::{TabId, TabSurface, TabSwitchError};
use web_sys::{Document, Element};

/// Tab buttons (`.tab-button[data-tab-id]`) and the content container of the
/// current document.
pub struct DomTabSurface {
    document: Document,
    container_id: String,
}

impl DomTabSurface {
    pub const BUTTON_CLASS: &'static str = "tab-button";
    pub const TAB_ID_ATTR: &'static str = "data-tab-id";
    pub const CONTENT_CLASS: &'static str = "tab-content";
    pub const ACTIVE_CLASS: &'static str = "active";

    /// `None` outside a browser document.
    pub fn new(container_id: impl Into<String>) -> Option<Self> {
        Some(Self {
            document: dom::document()?,
            container_id: container_id.into(),
        })
    }

    fn container(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.container_id)
    }

    fn buttons(&self) -> Vec<Element> {
        dom::query_all(&format!(".{}", Self::BUTTON_CLASS))
    }

    /// Matches on the attribute value, so ids never end up inside a selector.
    fn button_for(&self, id: &TabId) -> Option<Element> {
        self.buttons().into_iter().find(|button| {
            button.get_attribute(Self::TAB_ID_ATTR).as_deref() == Some(id.as_str())
        })
    }
}

impl TabSurface for DomTabSurface {
    type Content = Element;

    fn container_name(&self) -> &str {
        &self.container_id
    }

    fn has_container(&self) -> bool {
        self.container().is_some()
    }

    fn has_button(&self, id: &TabId) -> bool {
        self.button_for(id).is_some()
    }

    fn active_tab(&self) -> Option<TabId> {
        self.buttons()
            .into_iter()
            .find(|button| button.class_list().contains(Self::ACTIVE_CLASS))
            .and_then(|button| button.get_attribute(Self::TAB_ID_ATTR))
            .map(TabId::from)
    }

    /// Creates the detached `div.tab-content#id`; the document is untouched.
    fn prepare_content(&self, id: &TabId, markup: &str) -> Result<Element, TabSwitchError> {
        let node = self
            .document
            .create_element("div")
            .map_err(|err| TabSwitchError::Mount {
                tab: id.to_string(),
                reason: format!("{:?}", err),
            })?;
        node.set_id(id.as_str());
        node.set_class_name(Self::CONTENT_CLASS);
        node.set_inner_html(markup);
        Ok(node)
    }

    fn clear_active(&mut self) {
        for button in self.buttons() {
            let _ = button.class_list().remove_1(Self::ACTIVE_CLASS);
            let _ = button.set_attribute("aria-selected", "false");
        }
    }

    fn mark_active(&mut self, id: &TabId) {
        if let Some(button) = self.button_for(id) {
            let _ = button.class_list().add_1(Self::ACTIVE_CLASS);
            let _ = button.set_attribute("aria-selected", "true");
        }
    }

    fn mount_content(&mut self, content: Element) -> Result<(), TabSwitchError> {
        let container = self
            .container()
            .ok_or_else(|| TabSwitchError::MissingContainer(self.container_id.clone()))?;
        // One call swaps every old child for the new node.
        container.replace_children_with_node_1(&content);
        Ok(())
    }
}
