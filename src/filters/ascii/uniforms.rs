use crate::host::{Effect, ParamHandle, Vec3};

/// Uniforms the ASCII effect exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformSlot {
    Spacing,
    Font,
    ColorMode,
    InvertBrightness,
    Dithering,
    DitherIntensity,
    ScreenWidth,
    ScreenHeight,
    BackgroundColor,
    CalcBackgroundColor,
    CharColorScale,
    BgColorScale,
}

impl UniformSlot {
    pub const ALL: [UniformSlot; 12] = [
        UniformSlot::Spacing,
        UniformSlot::Font,
        UniformSlot::ColorMode,
        UniformSlot::InvertBrightness,
        UniformSlot::Dithering,
        UniformSlot::DitherIntensity,
        UniformSlot::ScreenWidth,
        UniformSlot::ScreenHeight,
        UniformSlot::BackgroundColor,
        UniformSlot::CalcBackgroundColor,
        UniformSlot::CharColorScale,
        UniformSlot::BgColorScale,
    ];

    /// Uniform name in the effect source
    pub const fn name(self) -> &'static str {
        match self {
            UniformSlot::Spacing => "Ascii_spacing",
            UniformSlot::Font => "Ascii_font",
            UniformSlot::ColorMode => "Ascii_font_color_mode",
            UniformSlot::InvertBrightness => "Ascii_invert_brightness",
            UniformSlot::Dithering => "Ascii_dithering",
            UniformSlot::DitherIntensity => "Ascii_dithering_intensity",
            UniformSlot::ScreenWidth => "screen_width",
            UniformSlot::ScreenHeight => "screen_height",
            UniformSlot::BackgroundColor => "Ascii_background_color",
            UniformSlot::CalcBackgroundColor => "calc_bg_color",
            UniformSlot::CharColorScale => "char_color_scale",
            UniformSlot::BgColorScale => "bg_color_scale",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Uniform handles resolved once from a compiled effect
///
/// A slot the effect does not declare has no handle; writes to it are
/// dropped.
#[derive(Debug, Clone, Copy)]
pub struct AsciiUniforms {
    handles: [Option<ParamHandle>; 12],
}

impl AsciiUniforms {
    pub fn resolve(effect: &dyn Effect) -> Self {
        let mut handles = [None; 12];
        for slot in UniformSlot::ALL {
            handles[slot.index()] = effect.param_by_name(slot.name());
        }
        Self { handles }
    }

    pub fn get(&self, slot: UniformSlot) -> Option<ParamHandle> {
        self.handles[slot.index()]
    }

    /// Slots the effect did not declare
    pub fn missing(&self) -> Vec<UniformSlot> {
        UniformSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot).is_none())
            .collect()
    }

    pub fn set_int(&self, effect: &mut dyn Effect, slot: UniformSlot, value: i32) {
        if let Some(param) = self.get(slot) {
            effect.set_int(param, value);
        }
    }

    pub fn set_bool(&self, effect: &mut dyn Effect, slot: UniformSlot, value: bool) {
        if let Some(param) = self.get(slot) {
            effect.set_bool(param, value);
        }
    }

    pub fn set_float(&self, effect: &mut dyn Effect, slot: UniformSlot, value: f32) {
        if let Some(param) = self.get(slot) {
            effect.set_float(param, value);
        }
    }

    pub fn set_vec3(&self, effect: &mut dyn Effect, slot: UniformSlot, value: Vec3) {
        if let Some(param) = self.get(slot) {
            effect.set_vec3(param, value);
        }
    }
}
