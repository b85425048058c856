//! # ASCII Filter
//!
//! Renders the upstream frame as ASCII art through an external effect
//! program. The filter itself only marshals settings into the effect's
//! uniforms and sizes its output by the font-size divisor.

mod filter;
mod settings;
mod uniforms;

pub use filter::{scaled_dimensions, source_info, AsciiFilter};
pub use settings::AsciiSettings;
pub use uniforms::{AsciiUniforms, UniformSlot};

/// Source id registered with the host
pub const SOURCE_ID: &str = "standalone_ascii_filter";

/// Display name shown by the host
pub const DISPLAY_NAME: &str = "ASCII Filter";

// Settings keys
pub const SPACING: &str = "Ascii_spacing";
pub const FONT_5X5: &str = "Ascii_font";
pub const COLOR_MODE: &str = "Ascii_font_color_mode";
pub const INVERT_BRIGHTNESS: &str = "Ascii_invert_brightness";
pub const DITHERING: &str = "Ascii_dithering";
pub const DITHER_INTENSITY: &str = "Ascii_dithering_intensity";
pub const FONT_SIZE: &str = "font_size";
pub const BG_COLOR_R: &str = "bg_color_r";
pub const BG_COLOR_G: &str = "bg_color_g";
pub const BG_COLOR_B: &str = "bg_color_b";
pub const CALC_BG_COLOR: &str = "calc_bg_color";
pub const CHAR_COLOR_SCALE: &str = "char_color_scale";
pub const BG_COLOR_SCALE: &str = "bg_color_scale";

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;

    /// Effect source declaring every uniform the filter resolves
    pub const EFFECT_SOURCE: &str = "\
uniform float4x4 ViewProj;
uniform texture2d image;

uniform int Ascii_spacing;
uniform bool Ascii_font;
uniform int Ascii_font_color_mode;
uniform bool Ascii_invert_brightness;
uniform bool Ascii_dithering;
uniform float Ascii_dithering_intensity;
uniform float screen_width;
uniform float screen_height;
uniform float3 Ascii_background_color;
uniform bool calc_bg_color;
uniform float char_color_scale;
uniform float bg_color_scale;

technique Draw
{
    pass
    {
        vertex_shader = VSDefault(v_in);
        pixel_shader  = PSAscii(v_in);
    }
}
";

    pub fn write_effect(dir: &Path, source: &str) {
        std::fs::write(dir.join(crate::config::DEFAULT_EFFECT_FILE), source).unwrap();
    }
}
