use tracing::{debug, info, trace, warn};

use crate::{
    error::Result,
    filters::VideoFilter,
    host::{
        ColorFormat, Effect, FilterContext, Graphics, GraphicsGuard, HostContext, OutputFlags,
        RenderMode, Settings, SourceInfo, SourceKind,
    },
};

use super::{AsciiSettings, AsciiUniforms, UniformSlot, DISPLAY_NAME, SOURCE_ID};

/// Output size for an upstream size and a font-size divisor
///
/// The divisor is clamped to at least 1.0 and the result truncated.
pub fn scaled_dimensions(width: u32, height: u32, scale_factor: f32) -> (u32, u32) {
    let scale = scale_factor.max(1.0);
    ((width as f32 / scale) as u32, (height as f32 / scale) as u32)
}

/// One ASCII filter attachment
pub struct AsciiFilter {
    effect: Box<dyn Effect>,
    uniforms: AsciiUniforms,
    settings: AsciiSettings,
    output_width: u32,
    output_height: u32,
}

impl AsciiFilter {
    /// Compile the effect, resolve its uniforms and apply `settings`
    ///
    /// Fails with a shader error when the effect cannot be compiled. The
    /// graphics context is left again on both paths.
    pub fn create(host: &HostContext<'_>, settings: &Settings) -> Result<Self> {
        let path = host.config.effect_path();

        let effect = {
            let graphics = GraphicsGuard::enter(host.graphics);
            graphics.create_effect(&path)
        }
        .map_err(|e| {
            warn!("ASCII filter not created: {}", e);
            e
        })?;

        let uniforms = AsciiUniforms::resolve(effect.as_ref());
        for slot in uniforms.missing() {
            warn!("Effect {:?} does not declare uniform '{}'", path, slot.name());
        }

        let mut filter = Self {
            effect,
            uniforms,
            settings: AsciiSettings::unset(),
            output_width: 0,
            output_height: 0,
        };
        filter.update(settings);

        info!("Created ASCII filter using {:?}", path);
        Ok(filter)
    }

    /// Current configuration
    pub fn settings(&self) -> &AsciiSettings {
        &self.settings
    }

    pub fn uniforms(&self) -> &AsciiUniforms {
        &self.uniforms
    }

    fn push_settings(&mut self) {
        let effect = self.effect.as_mut();
        let uniforms = &self.uniforms;
        let s = &self.settings;

        uniforms.set_int(effect, UniformSlot::Spacing, s.spacing);
        uniforms.set_bool(effect, UniformSlot::Font, s.font_5x5);
        uniforms.set_int(effect, UniformSlot::ColorMode, s.color_mode);
        uniforms.set_bool(effect, UniformSlot::InvertBrightness, s.invert_brightness);
        uniforms.set_bool(effect, UniformSlot::Dithering, s.dither_enabled);
        uniforms.set_float(effect, UniformSlot::DitherIntensity, s.dither_intensity);
        uniforms.set_vec3(effect, UniformSlot::BackgroundColor, s.background_color);
        uniforms.set_bool(effect, UniformSlot::CalcBackgroundColor, s.auto_background_color);
        uniforms.set_float(effect, UniformSlot::CharColorScale, s.char_color_scale);
        uniforms.set_float(effect, UniformSlot::BgColorScale, s.bg_color_scale);
    }
}

impl VideoFilter for AsciiFilter {
    fn update(&mut self, settings: &Settings) {
        self.settings = AsciiSettings::from_settings(settings);
        debug!("ASCII filter settings: {:?}", self.settings);
    }

    fn video_render(&mut self, ctx: &mut dyn FilterContext) {
        if !ctx.process_filter_begin(ColorFormat::Rgba, RenderMode::AllowDirectRendering) {
            trace!("Upstream has no frame, skipping ASCII render");
            return;
        }

        self.push_settings();

        self.settings.scale_factor = self.settings.effective_scale_factor();
        let (width, height) = ctx.target_base_size().unwrap_or((0, 0));
        let (out_w, out_h) = scaled_dimensions(width, height, self.settings.scale_factor);
        self.output_width = out_w;
        self.output_height = out_h;

        let effect = self.effect.as_mut();
        self.uniforms.set_float(effect, UniformSlot::ScreenWidth, out_w as f32);
        self.uniforms.set_float(effect, UniformSlot::ScreenHeight, out_h as f32);

        ctx.process_filter_end(self.effect.as_ref(), 0, 0);
    }

    fn width(&self) -> u32 {
        self.output_width
    }

    fn height(&self) -> u32 {
        self.output_height
    }

    fn destroy(self: Box<Self>, graphics: &dyn Graphics) {
        let guard = GraphicsGuard::enter(graphics);
        guard.destroy_effect(self.effect);
        info!("Destroyed ASCII filter");
    }
}

fn create_source(host: &HostContext<'_>, settings: &Settings) -> Result<Box<dyn VideoFilter>> {
    Ok(Box::new(AsciiFilter::create(host, settings)?))
}

/// Descriptor registering the ASCII filter with a host
pub fn source_info() -> SourceInfo {
    SourceInfo {
        id: SOURCE_ID,
        kind: SourceKind::Filter,
        output_flags: OutputFlags::Video,
        name: DISPLAY_NAME,
        create: create_source,
        properties: AsciiSettings::properties,
        defaults: AsciiSettings::write_defaults,
    }
}
