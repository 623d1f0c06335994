//! Provider metadata and resource registry

use crate::{LazyStringResource, ProviderConfig, ProviderError};
use lazy_domain::traits::IdentitySource;
use lazy_reconciler::SystemIdentity;
use tracing::info;

/// Name and version the provider reports to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    /// Provider type name
    pub type_name: String,

    /// Provider version
    pub version: String,
}

/// The provider: one resource type, no data sources, nothing to configure
#[derive(Debug, Clone)]
pub struct LazyProvider {
    config: ProviderConfig,
}

impl LazyProvider {
    /// Create a provider from validated configuration
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        config.validate()?;
        info!(
            "Initialized provider {} version {}",
            config.type_name, config.version
        );
        Ok(Self { config })
    }

    /// Get the provider configuration
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Name and version for the host
    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: self.config.type_name.clone(),
            version: self.config.version.clone(),
        }
    }

    /// Type names of all resources this provider serves
    pub fn resource_types(&self) -> Vec<String> {
        vec![self.string_type_name()]
    }

    /// Look up a resource by type name, using the system identity source
    pub fn resource(&self, type_name: &str) -> Result<LazyStringResource<SystemIdentity>, ProviderError> {
        if type_name != self.string_type_name() {
            return Err(ProviderError::UnknownResource(type_name.to_string()));
        }
        Ok(self.string_resource_with(SystemIdentity::new(self.config.reconciler)))
    }

    /// Build the string resource around a custom identity source
    pub fn string_resource_with<I: IdentitySource>(&self, identity: I) -> LazyStringResource<I> {
        LazyStringResource::new(&self.config.type_name, identity)
    }

    fn string_type_name(&self) -> String {
        format!("{}_string", self.config.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    #[test]
    fn test_metadata() {
        let provider = LazyProvider::new(ProviderConfig::test_config()).unwrap();
        let metadata = provider.metadata();
        assert_eq!(metadata.type_name, "lazy");
        assert_eq!(metadata.version, "test");
    }

    #[test]
    fn test_resource_registry() {
        let provider = LazyProvider::new(ProviderConfig::default()).unwrap();
        assert_eq!(provider.resource_types(), vec!["lazy_string".to_string()]);

        let resource = provider.resource("lazy_string").unwrap();
        assert_eq!(resource.type_name(), "lazy_string");
    }

    #[test]
    fn test_unknown_resource() {
        let provider = LazyProvider::new(ProviderConfig::default()).unwrap();
        match provider.resource("lazy_number") {
            Err(ProviderError::UnknownResource(name)) => assert_eq!(name, "lazy_number"),
            other => panic!("Expected UnknownResource, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_type_name() {
        let config = ProviderConfig {
            type_name: "idle".to_string(),
            ..ProviderConfig::default()
        };
        let provider = LazyProvider::new(config).unwrap();
        assert!(provider.resource("idle_string").is_ok());
        assert!(provider.resource("lazy_string").is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ProviderConfig {
            type_name: String::new(),
            ..ProviderConfig::default()
        };
        assert!(matches!(
            LazyProvider::new(config),
            Err(ProviderError::Config(ConfigError::Invalid { .. }))
        ));
    }
}
