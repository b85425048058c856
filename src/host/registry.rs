use std::collections::HashMap;

use tracing::{debug, info};

use crate::{
    error::{RegistryError, Result},
    filters::VideoFilter,
    host::{HostContext, Properties, Settings},
};

/// Kind of source a descriptor registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Filter,
}

/// What a source produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFlags {
    Video,
}

/// Creates a filter instance from an already defaulted settings snapshot
pub type CreateFn = fn(&HostContext<'_>, &Settings) -> Result<Box<dyn VideoFilter>>;

/// Describes the properties panel of a source
pub type PropertiesFn = fn() -> Properties;

/// Registers a source's defaults on a settings snapshot
pub type DefaultsFn = fn(&mut Settings);

/// Descriptor a module hands to the host for one source type
#[derive(Clone)]
pub struct SourceInfo {
    /// Unique identifier
    pub id: &'static str,

    pub kind: SourceKind,

    pub output_flags: OutputFlags,

    /// Display name
    pub name: &'static str,

    pub create: CreateFn,

    pub properties: PropertiesFn,

    pub defaults: DefaultsFn,
}

impl std::fmt::Debug for SourceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceInfo")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("output_flags", &self.output_flags)
            .field("name", &self.name)
            .finish()
    }
}

/// Registry of source types known to the host
///
/// Modules register into a registry passed to them explicitly at load time;
/// there is no process-wide instance.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    sources: HashMap<&'static str, SourceInfo>,
}

impl SourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source type
    ///
    /// Fails if another source already uses the same id.
    pub fn register(&mut self, info: SourceInfo) -> Result<()> {
        if self.sources.contains_key(info.id) {
            return Err(RegistryError::Duplicate { id: info.id.to_string() }.into());
        }

        info!("Registered source '{}' ({})", info.id, info.name);
        self.sources.insert(info.id, info);
        Ok(())
    }

    /// Get a source descriptor by id
    pub fn get(&self, id: &str) -> Option<&SourceInfo> {
        self.sources.get(id)
    }

    fn require(&self, id: &str) -> Result<&SourceInfo> {
        self.get(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_string() }.into())
    }

    /// Build a settings snapshot holding only the source's defaults
    pub fn defaults_for(&self, id: &str) -> Result<Settings> {
        let info = self.require(id)?;
        let mut settings = Settings::new();
        (info.defaults)(&mut settings);
        Ok(settings)
    }

    /// Describe the source's properties panel
    pub fn properties_for(&self, id: &str) -> Result<Properties> {
        Ok((self.require(id)?.properties)())
    }

    /// Instantiate a source
    ///
    /// The source's defaults are layered under `settings` before the
    /// descriptor's create entry point runs.
    pub fn create(
        &self,
        id: &str,
        host: &HostContext<'_>,
        settings: &Settings,
    ) -> Result<Box<dyn VideoFilter>> {
        let info = self.require(id)?;

        let mut settings = settings.clone();
        (info.defaults)(&mut settings);

        debug!("Creating source '{}' with {} user settings", id, settings.len());
        (info.create)(host, &settings)
    }

    pub fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;

    fn no_create(_: &HostContext<'_>, _: &Settings) -> Result<Box<dyn VideoFilter>> {
        Err(FilterError::generic("not constructible"))
    }

    fn test_info(id: &'static str) -> SourceInfo {
        SourceInfo {
            id,
            kind: SourceKind::Filter,
            output_flags: OutputFlags::Video,
            name: "Test Filter",
            create: no_create,
            properties: Properties::new,
            defaults: |settings| settings.set_default_int("level", 3),
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SourceRegistry::new();
        assert!(registry.is_empty());

        registry.register(test_info("test_filter")).unwrap();

        assert!(registry.has_source("test_filter"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("test_filter").unwrap().name, "Test Filter");
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = SourceRegistry::new();
        registry.register(test_info("test_filter")).unwrap();

        let err = registry.register(test_info("test_filter")).unwrap_err();
        assert!(matches!(err, FilterError::Registry(RegistryError::Duplicate { .. })));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_defaults_for() {
        let mut registry = SourceRegistry::new();
        registry.register(test_info("test_filter")).unwrap();

        let settings = registry.defaults_for("test_filter").unwrap();
        assert_eq!(settings.get_int("level"), 3);
        assert!(!settings.has_user_value("level"));

        assert!(registry.defaults_for("missing").is_err());
    }
}
