use contracts::tabs::{RegistryError, TabRegistry};

const OVERVIEW_HTML: &str = include_str!("fragments/overview.html");
const APPLY_HTML: &str = include_str!("fragments/apply.html");

/// Tabs of the job-details page: the description and the application form.
pub fn career_tab_registry() -> Result<TabRegistry, RegistryError> {
    TabRegistry::builder()
        .tab("Overview", "Overview", OVERVIEW_HTML)
        .tab("Apply", "Application", APPLY_HTML)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_holds_both_fragments() {
        let registry = career_tab_registry().unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.fragment("Overview").unwrap().contains("Job description"));
        assert!(registry.fragment("Apply").unwrap().contains("Submit Application"));
    }

    #[test]
    fn test_fragments_carry_no_inline_handlers() {
        let registry = career_tab_registry().unwrap();
        for entry in registry.entries() {
            assert!(!entry.markup.contains("onchange="), "{}", entry.id);
            assert!(!entry.markup.contains("onclick="), "{}", entry.id);
        }
    }
}
