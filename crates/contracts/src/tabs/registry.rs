use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Identifier linking a tab button to its content fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TabId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TabId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TabId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One registered tab: its id, the button label and the markup shown when active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub id: TabId,
    pub label: String,
    pub markup: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("tab '{0}' is registered twice")]
    DuplicateTab(TabId),

    #[error("tab id must not be empty")]
    EmptyId,

    #[error("registry has no tabs")]
    Empty,
}

/// Immutable mapping from tab id to content fragment.
///
/// Lookup is by id; `entries()` keeps declaration order so buttons render
/// in a stable order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRegistry {
    entries: Vec<TabEntry>,
    index: HashMap<TabId, usize>,
}

impl TabRegistry {
    pub fn builder() -> TabRegistryBuilder {
        TabRegistryBuilder::default()
    }

    /// Markup registered for `id`, unmodified.
    pub fn fragment(&self, id: &str) -> Option<&str> {
        self.entry(id).map(|entry| entry.markup.as_str())
    }

    pub fn entry(&self, id: &str) -> Option<&TabEntry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn entries(&self) -> &[TabEntry] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &TabId> {
        self.entries.iter().map(|entry| &entry.id)
    }

    /// First declared tab; a built registry always has one.
    pub fn first(&self) -> &TabEntry {
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct TabRegistryBuilder {
    entries: Vec<TabEntry>,
}

impl TabRegistryBuilder {
    pub fn tab(
        mut self,
        id: impl Into<TabId>,
        label: impl Into<String>,
        markup: impl Into<String>,
    ) -> Self {
        self.entries.push(TabEntry {
            id: id.into(),
            label: label.into(),
            markup: markup.into(),
        });
        self
    }

    pub fn build(self) -> Result<TabRegistry, RegistryError> {
        if self.entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut index = HashMap::with_capacity(self.entries.len());
        for (pos, entry) in self.entries.iter().enumerate() {
            if entry.id.as_str().is_empty() {
                return Err(RegistryError::EmptyId);
            }
            if index.insert(entry.id.clone(), pos).is_some() {
                return Err(RegistryError::DuplicateTab(entry.id.clone()));
            }
        }

        Ok(TabRegistry {
            entries: self.entries,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TabRegistry {
        TabRegistry::builder()
            .tab("Overview", "Overview", "<p>O</p>")
            .tab("Apply", "Apply now", "<p>A</p>")
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_returns_markup_verbatim() {
        let registry = sample();
        assert_eq!(registry.fragment("Overview"), Some("<p>O</p>"));
        assert_eq!(registry.fragment("Apply"), Some("<p>A</p>"));
        assert_eq!(registry.fragment("apply"), None);
        assert_eq!(registry.entry("Apply").unwrap().label, "Apply now");
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let registry = sample();
        let ids: Vec<&str> = registry.ids().map(TabId::as_str).collect();
        assert_eq!(ids, vec!["Overview", "Apply"]);
        assert_eq!(registry.first().id.as_str(), "Overview");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let err = TabRegistry::builder()
            .tab("Overview", "Overview", "a")
            .tab("Overview", "Again", "b")
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateTab(TabId::from("Overview")));
    }

    #[test]
    fn test_empty_registry_is_rejected() {
        assert_eq!(TabRegistry::builder().build().unwrap_err(), RegistryError::Empty);
        assert_eq!(
            TabRegistry::builder().tab("", "x", "y").build().unwrap_err(),
            RegistryError::EmptyId
        );
    }
}
