//! # OBS ASCII Filter
//!
//! An ASCII art video filter for OBS-style rendering hosts.
//!
//! The filter is a thin adapter: it registers a source descriptor with the
//! host, turns settings snapshots into effect uniforms every frame, and
//! leaves the pixel work to an external effect file (`ASCII_obs.effect`)
//! found in the module's data directory.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use obs_ascii_filter::{
//!     config::PluginConfig,
//!     filters::ascii::SOURCE_ID,
//!     host::{headless::{HeadlessGraphics, HeadlessSource}, HostContext, Settings, SourceRegistry},
//! };
//!
//! # fn main() -> obs_ascii_filter::Result<()> {
//! let mut registry = SourceRegistry::new();
//! obs_ascii_filter::module_load(&mut registry);
//!
//! let graphics = HeadlessGraphics::new();
//! let config = PluginConfig::with_data_dir("data");
//! let host = HostContext::new(&graphics, &config);
//!
//! let mut filter = registry.create(SOURCE_ID, &host, &Settings::new())?;
//! filter.video_render(&mut HeadlessSource::with_target(1920, 1080));
//! println!("{}x{}", filter.width(), filter.height());
//! filter.destroy(&graphics);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`host`] - The host surface: graphics, filter context, settings, registry
//! - [`filters`] - The [`VideoFilter`](filters::VideoFilter) trait and the ASCII filter
//! - [`config`] - Plugin configuration

pub mod config;
pub mod error;
pub mod filters;
pub mod host;

// Re-export commonly used types for convenience
pub use crate::{
    config::PluginConfig,
    error::{FilterError, Result},
    filters::{AsciiFilter, VideoFilter},
    host::{HostContext, Settings, SourceRegistry},
};

/// Module description reported to the host
pub const MODULE_DESCRIPTION: &str = "OBS ASCII plugin";

/// Register this module's sources with the host
///
/// Called once per registry during host initialization. Returns false if the
/// registry refused a descriptor.
pub fn module_load(registry: &mut SourceRegistry) -> bool {
    match registry.register(filters::ascii::source_info()) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Module load failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ascii::{DISPLAY_NAME, SOURCE_ID};
    use crate::host::{OutputFlags, SourceKind};

    #[test]
    fn test_module_load_registers_filter() {
        let mut registry = SourceRegistry::new();
        assert!(module_load(&mut registry));

        let info = registry.get(SOURCE_ID).unwrap();
        assert_eq!(info.name, DISPLAY_NAME);
        assert_eq!(info.kind, SourceKind::Filter);
        assert_eq!(info.output_flags, OutputFlags::Video);
        assert_eq!(registry.properties_for(SOURCE_ID).unwrap().len(), 13);
    }

    #[test]
    fn test_module_load_twice_on_same_registry() {
        let mut registry = SourceRegistry::new();
        assert!(module_load(&mut registry));
        assert!(!module_load(&mut registry));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_unknown_source() {
        let registry = SourceRegistry::new();
        let graphics = host::headless::HeadlessGraphics::new();
        let config = PluginConfig::default();
        let host = HostContext::new(&graphics, &config);

        let err = registry.create(SOURCE_ID, &host, &Settings::new()).err().unwrap();
        assert!(matches!(
            err,
            FilterError::Registry(error::RegistryError::NotFound { .. })
        ));
        assert_eq!(graphics.enter_count(), 0);
    }
}
