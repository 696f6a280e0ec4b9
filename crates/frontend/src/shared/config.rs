//! Site configuration, compiled in from `site.toml` and shared via context.

use contracts::shared::SiteConfig;
use leptos::prelude::*;
use std::sync::Arc;

const SITE_TOML: &str = include_str!("../../site.toml");

/// Parses the embedded config, falling back to defaults when it is invalid.
pub fn load_site_config() -> SiteConfig {
    match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{}; using default site config", err);
            SiteConfig::default()
        }
    }
}

/// Shared handle to the loaded config.
#[derive(Clone)]
pub struct ConfigContext(pub Arc<SiteConfig>);

pub fn provide_site_config(config: SiteConfig) {
    provide_context(ConfigContext(Arc::new(config)));
}

/// Config from context, or the defaults when no provider is mounted.
pub fn use_site_config() -> Arc<SiteConfig> {
    use_context::<ConfigContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Arc::new(SiteConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::from_toml_str(SITE_TOML).unwrap();
        assert_eq!(config.careers.default_tab, "Overview");
        assert_eq!(config.theme.storage_key, "color-theme");
    }
}
