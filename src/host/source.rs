use crate::host::graphics::Effect;

/// Color format requested for the filter's intermediate target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Rgba,
}

/// Whether the host may skip the intermediate texture and render directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    AllowDirectRendering,
}

/// The host-side context of one filter attachment
///
/// Gives a filter access to its upstream target and brackets the draw of
/// each frame.
pub trait FilterContext {
    /// Base size of the upstream target, if the filter has one
    fn target_base_size(&self) -> Option<(u32, u32)>;

    /// Start processing a frame
    ///
    /// Returns false when the upstream target has nothing to render this
    /// frame. The caller must then skip the frame without calling
    /// [`FilterContext::process_filter_end`].
    fn process_filter_begin(&mut self, format: ColorFormat, mode: RenderMode) -> bool;

    /// Draw the frame through the given effect
    ///
    /// A zero width or height means the target's own size.
    fn process_filter_end(&mut self, effect: &dyn Effect, width: u32, height: u32);
}
