use crate::host::{FilterContext, Graphics, Settings};

/// Instance callbacks of a video filter attachment
///
/// The host drives every method from its graphics thread and never calls
/// two of them concurrently for the same instance, so implementations need
/// no internal locking.
pub trait VideoFilter {
    /// Replace the instance's configuration with a new settings snapshot
    ///
    /// This is a full overwrite: every recognized key is read again, falling
    /// back to defaults or zero values for keys the snapshot lacks.
    fn update(&mut self, settings: &Settings);

    /// Called once per host scheduling tick
    fn video_tick(&mut self, seconds: f32) {
        let _ = seconds;
    }

    /// Draw the filtered frame for the attachment
    fn video_render(&mut self, ctx: &mut dyn FilterContext);

    /// Output width reported to downstream compositing
    fn width(&self) -> u32;

    /// Output height reported to downstream compositing
    fn height(&self) -> u32;

    /// Release the instance's graphics resources
    ///
    /// Consumes the instance, so a filter is destroyed at most once.
    fn destroy(self: Box<Self>, graphics: &dyn Graphics);
}
