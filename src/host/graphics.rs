//! Graphics subsystem surface: effect programs, uniform handles and the
//! scoped graphics context.

use std::path::Path;

use crate::error::{Result, ShaderError};

/// Opaque handle to a named uniform of a compiled effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamHandle(pub(crate) usize);

impl ParamHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Three-component float vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A compiled effect program
///
/// Uniforms are addressed through handles resolved once by name. Writes are
/// staged on the effect and consumed by the next draw that uses it.
pub trait Effect {
    /// Look up a uniform by name
    fn param_by_name(&self, name: &str) -> Option<ParamHandle>;

    fn set_int(&mut self, param: ParamHandle, value: i32);

    fn set_bool(&mut self, param: ParamHandle, value: bool);

    fn set_float(&mut self, param: ParamHandle, value: f32);

    fn set_vec3(&mut self, param: ParamHandle, value: Vec3);
}

/// The host's graphics subsystem
///
/// Resource creation and destruction must happen between `enter` and
/// `leave`. Use [`GraphicsGuard`] rather than calling these directly.
pub trait Graphics {
    fn enter(&self);

    fn leave(&self);

    /// Compile an effect program from a file
    ///
    /// On failure the error string carries the compiler diagnostics.
    fn create_effect_from_file(&self, path: &Path) -> std::result::Result<Box<dyn Effect>, String>;

    /// Release an effect program
    fn destroy_effect(&self, effect: Box<dyn Effect>) {
        drop(effect);
    }
}

/// Holds the graphics context for its lifetime and leaves it on drop
pub struct GraphicsGuard<'a> {
    graphics: &'a dyn Graphics,
}

impl<'a> GraphicsGuard<'a> {
    pub fn enter(graphics: &'a dyn Graphics) -> Self {
        graphics.enter();
        Self { graphics }
    }

    /// Compile an effect while the context is held
    pub fn create_effect(&self, path: &Path) -> Result<Box<dyn Effect>> {
        self.graphics.create_effect_from_file(path).map_err(|diagnostics| {
            ShaderError::LoadFailed {
                path: path.display().to_string(),
                diagnostics,
            }
            .into()
        })
    }

    /// Release an effect while the context is held
    pub fn destroy_effect(&self, effect: Box<dyn Effect>) {
        self.graphics.destroy_effect(effect);
    }
}

impl Drop for GraphicsGuard<'_> {
    fn drop(&mut self) {
        self.graphics.leave();
    }
}
