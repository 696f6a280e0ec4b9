use super::registry::{TabId, TabRegistry};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabSwitchError {
    #[error("unknown tab '{0}'")]
    UnknownTab(String),

    #[error("no tab button is bound to '{0}'")]
    MissingButton(String),

    #[error("tab content container '{0}' is not in the document")]
    MissingContainer(String),

    #[error("could not mount tab '{tab}': {reason}")]
    Mount { tab: String, reason: String },
}

impl TabSwitchError {
    /// Both the registry miss and the button miss mean "no such tab".
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::UnknownTab(_) | Self::MissingButton(_))
    }
}

/// The place tabs are shown: a set of buttons plus one content container.
///
/// The `&self` methods must not mutate anything; [`TabSwitcher`] calls all of
/// them, including [`prepare_content`](Self::prepare_content), before the
/// first mutating call.
pub trait TabSurface {
    /// Detached content node, built ahead of the switch.
    type Content;

    /// Name of the container, used in error reports.
    fn container_name(&self) -> &str;

    fn has_container(&self) -> bool;

    fn has_button(&self, id: &TabId) -> bool;

    /// Tab of the button currently carrying the active marker.
    fn active_tab(&self) -> Option<TabId>;

    /// Builds the node for `id` without attaching it anywhere.
    fn prepare_content(&self, id: &TabId, markup: &str) -> Result<Self::Content, TabSwitchError>;

    /// Removes the active marker from every tab button.
    fn clear_active(&mut self);

    fn mark_active(&mut self, id: &TabId);

    /// Replaces everything inside the container with `content` in one step.
    /// On error the container must be left as it was.
    fn mount_content(&mut self, content: Self::Content) -> Result<(), TabSwitchError>;
}

/// Shows one registered tab at a time on a [`TabSurface`].
#[derive(Debug, Clone)]
pub struct TabSwitcher {
    registry: Arc<TabRegistry>,
}

impl TabSwitcher {
    pub fn new(registry: Arc<TabRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    /// Resolves a requested id (e.g. from the URL) to a registered one,
    /// falling back to `default`, then to the first declared tab.
    pub fn resolve_initial(&self, requested: Option<&str>, default: &str) -> TabId {
        requested
            .and_then(|id| self.registry.entry(id))
            .or_else(|| self.registry.entry(default))
            .unwrap_or_else(|| self.registry.first())
            .id
            .clone()
    }

    /// Makes `id` the active tab.
    ///
    /// Nothing on the surface changes unless the id is registered, the
    /// container exists, a button is bound to the id and its content could be
    /// built. A failed mount restores the previous active marker.
    pub fn switch_to<S: TabSurface>(&self, surface: &mut S, id: &str) -> Result<TabId, TabSwitchError> {
        let entry = self
            .registry
            .entry(id)
            .ok_or_else(|| TabSwitchError::UnknownTab(id.to_string()))?;

        if !surface.has_container() {
            return Err(TabSwitchError::MissingContainer(
                surface.container_name().to_string(),
            ));
        }
        if !surface.has_button(&entry.id) {
            return Err(TabSwitchError::MissingButton(id.to_string()));
        }

        let content = surface.prepare_content(&entry.id, &entry.markup)?;
        let previous = surface.active_tab();

        surface.clear_active();
        surface.mark_active(&entry.id);
        if let Err(err) = surface.mount_content(content) {
            surface.clear_active();
            if let Some(previous) = previous {
                surface.mark_active(&previous);
            }
            return Err(err);
        }

        Ok(entry.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Button {
        tab: TabId,
        active: bool,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Mounted {
        id: TabId,
        class: &'static str,
        markup: String,
    }

    /// In-memory page: buttons with an active flag and a container's children.
    #[derive(Debug, Clone, PartialEq)]
    struct FakePage {
        buttons: Vec<Button>,
        container: Option<Vec<Mounted>>,
        fail_prepare: bool,
        fail_mount: bool,
    }

    impl FakePage {
        fn new(ids: &[&str]) -> Self {
            Self {
                buttons: ids
                    .iter()
                    .map(|id| Button {
                        tab: TabId::from(*id),
                        active: false,
                    })
                    .collect(),
                container: Some(Vec::new()),
                fail_prepare: false,
                fail_mount: false,
            }
        }

        fn active_buttons(&self) -> Vec<&str> {
            self.buttons
                .iter()
                .filter(|b| b.active)
                .map(|b| b.tab.as_str())
                .collect()
        }

        fn children(&self) -> &[Mounted] {
            self.container.as_deref().unwrap_or(&[])
        }
    }

    impl TabSurface for FakePage {
        type Content = Mounted;

        fn container_name(&self) -> &str {
            "tab-content-container"
        }

        fn has_container(&self) -> bool {
            self.container.is_some()
        }

        fn has_button(&self, id: &TabId) -> bool {
            self.buttons.iter().any(|b| &b.tab == id)
        }

        fn active_tab(&self) -> Option<TabId> {
            self.buttons.iter().find(|b| b.active).map(|b| b.tab.clone())
        }

        fn prepare_content(&self, id: &TabId, markup: &str) -> Result<Mounted, TabSwitchError> {
            if self.fail_prepare {
                return Err(TabSwitchError::Mount {
                    tab: id.to_string(),
                    reason: "createElement failed".into(),
                });
            }
            Ok(Mounted {
                id: id.clone(),
                class: "tab-content",
                markup: markup.to_string(),
            })
        }

        fn clear_active(&mut self) {
            for button in &mut self.buttons {
                button.active = false;
            }
        }

        fn mark_active(&mut self, id: &TabId) {
            for button in self.buttons.iter_mut().filter(|b| &b.tab == id) {
                button.active = true;
            }
        }

        fn mount_content(&mut self, content: Mounted) -> Result<(), TabSwitchError> {
            if self.fail_mount {
                return Err(TabSwitchError::Mount {
                    tab: content.id.to_string(),
                    reason: "replaceChildren failed".into(),
                });
            }
            if let Some(children) = self.container.as_mut() {
                children.clear();
                children.push(content);
            }
            Ok(())
        }
    }

    fn switcher() -> TabSwitcher {
        let registry = TabRegistry::builder()
            .tab("Overview", "Overview", "<p>O</p>")
            .tab("Apply", "Apply", "<p>A</p>")
            .build()
            .unwrap();
        TabSwitcher::new(Arc::new(registry))
    }

    fn assert_exclusive(page: &FakePage, expected: &str) {
        assert_eq!(page.active_buttons(), vec![expected]);
        assert_eq!(page.children().len(), 1);
        assert_eq!(page.children()[0].id.as_str(), expected);
    }

    #[test]
    fn test_switch_from_overview_to_apply() {
        let switcher = switcher();
        let mut page = FakePage::new(&["Overview", "Apply"]);
        switcher.switch_to(&mut page, "Overview").unwrap();
        assert_exclusive(&page, "Overview");
        assert_eq!(page.children()[0].markup, "<p>O</p>");

        let active = switcher.switch_to(&mut page, "Apply").unwrap();

        assert_eq!(active.as_str(), "Apply");
        assert_exclusive(&page, "Apply");
        assert_eq!(page.children()[0].markup, "<p>A</p>");
        assert_eq!(page.children()[0].class, "tab-content");
    }

    #[test]
    fn test_unknown_tab_leaves_page_untouched() {
        let switcher = switcher();
        let mut page = FakePage::new(&["Overview", "Apply"]);
        switcher.switch_to(&mut page, "Overview").unwrap();
        let before = page.clone();

        let err = switcher.switch_to(&mut page, "Nonexistent").unwrap_err();

        assert_eq!(err, TabSwitchError::UnknownTab("Nonexistent".into()));
        assert!(err.is_lookup());
        assert_eq!(page, before);
    }

    #[test]
    fn test_repeated_switch_is_idempotent() {
        let switcher = switcher();
        let mut page = FakePage::new(&["Overview", "Apply"]);
        switcher.switch_to(&mut page, "Apply").unwrap();
        let once = page.clone();

        switcher.switch_to(&mut page, "Apply").unwrap();

        assert_eq!(page, once);
        assert_exclusive(&page, "Apply");
    }

    #[test]
    fn test_every_sequence_keeps_one_active_tab() {
        let switcher = switcher();
        let mut page = FakePage::new(&["Overview", "Apply"]);
        for id in ["Apply", "Overview", "Overview", "Apply", "Overview"] {
            switcher.switch_to(&mut page, id).unwrap();
            assert_exclusive(&page, id);
            assert_eq!(
                page.children()[0].markup,
                switcher.registry().fragment(id).unwrap()
            );
        }
    }

    #[test]
    fn test_missing_button_is_a_lookup_error() {
        let switcher = switcher();
        let mut page = FakePage::new(&["Overview"]);
        switcher.switch_to(&mut page, "Overview").unwrap();
        let before = page.clone();

        let err = switcher.switch_to(&mut page, "Apply").unwrap_err();

        assert_eq!(err, TabSwitchError::MissingButton("Apply".into()));
        assert!(err.is_lookup());
        assert_eq!(page, before);
    }

    #[test]
    fn test_missing_container_fails_before_mutation() {
        let switcher = switcher();
        let mut page = FakePage::new(&["Overview", "Apply"]);
        page.buttons[0].active = true;
        page.container = None;
        let before = page.clone();

        let err = switcher.switch_to(&mut page, "Apply").unwrap_err();

        assert_eq!(
            err,
            TabSwitchError::MissingContainer("tab-content-container".into())
        );
        assert!(!err.is_lookup());
        assert_eq!(page, before);
    }

    #[test]
    fn test_failed_mount_restores_previous_tab() {
        let switcher = switcher();
        let mut page = FakePage::new(&["Overview", "Apply"]);
        switcher.switch_to(&mut page, "Overview").unwrap();
        page.fail_mount = true;
        let before = page.clone();

        let err = switcher.switch_to(&mut page, "Apply").unwrap_err();

        assert!(matches!(err, TabSwitchError::Mount { ref tab, .. } if tab == "Apply"));
        assert!(!err.is_lookup());
        assert_eq!(page, before);
        assert_exclusive(&page, "Overview");
    }

    #[test]
    fn test_failed_prepare_mutates_nothing() {
        let switcher = switcher();
        let mut page = FakePage::new(&["Overview", "Apply"]);
        switcher.switch_to(&mut page, "Overview").unwrap();
        page.fail_prepare = true;
        let before = page.clone();

        let err = switcher.switch_to(&mut page, "Apply").unwrap_err();

        assert!(matches!(err, TabSwitchError::Mount { .. }));
        assert_eq!(page, before);
    }

    #[test]
    fn test_failed_first_mount_leaves_no_active_tab() {
        let switcher = switcher();
        let mut page = FakePage::new(&["Overview", "Apply"]);
        page.fail_mount = true;

        assert!(switcher.switch_to(&mut page, "Apply").is_err());

        assert!(page.active_buttons().is_empty());
        assert!(page.children().is_empty());
    }

    #[test]
    fn test_resolve_initial_falls_back() {
        let switcher = switcher();
        assert_eq!(switcher.resolve_initial(Some("Apply"), "Overview").as_str(), "Apply");
        assert_eq!(switcher.resolve_initial(Some("Nope"), "Overview").as_str(), "Overview");
        assert_eq!(switcher.resolve_initial(None, "Missing").as_str(), "Overview");
    }
}
