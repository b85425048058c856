//! # Host Surface
//!
//! The pieces of the rendering host a filter is written against: the
//! graphics subsystem, the per-attachment filter context, settings
//! snapshots, property descriptions and the source registry.
//!
//! A real host supplies its own implementations of [`Graphics`] and
//! [`FilterContext`]; [`headless`] provides in-process ones.

pub mod graphics;
pub mod headless;
pub mod properties;
pub mod registry;
pub mod settings;
pub mod source;

pub use graphics::{Effect, Graphics, GraphicsGuard, ParamHandle, Vec3};
pub use properties::{Properties, Property, PropertyKind};
pub use registry::{OutputFlags, SourceInfo, SourceKind, SourceRegistry};
pub use settings::{SettingValue, Settings};
pub use source::{ColorFormat, FilterContext, RenderMode};

use crate::config::PluginConfig;

/// What the host hands a module when creating one of its sources
#[derive(Clone, Copy)]
pub struct HostContext<'a> {
    /// Graphics subsystem used for effect creation and release
    pub graphics: &'a dyn Graphics,

    /// Module configuration, used to resolve module data files
    pub config: &'a PluginConfig,
}

impl<'a> HostContext<'a> {
    pub fn new(graphics: &'a dyn Graphics, config: &'a PluginConfig) -> Self {
        Self { graphics, config }
    }
}
