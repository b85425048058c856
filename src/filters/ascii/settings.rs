use crate::host::{Properties, Settings, Vec3};

use super::{
    BG_COLOR_B, BG_COLOR_G, BG_COLOR_R, BG_COLOR_SCALE, CALC_BG_COLOR, CHAR_COLOR_SCALE,
    COLOR_MODE, DITHERING, DITHER_INTENSITY, FONT_5X5, FONT_SIZE, INVERT_BRIGHTNESS, SPACING,
};

/// Typed configuration of one ASCII filter instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsciiSettings {
    /// Gap between character cells, 0-5
    pub spacing: i32,

    /// 5x5 glyphs when set, 3x5 otherwise
    pub font_5x5: bool,

    /// Glyph color mode, 0-2
    pub color_mode: i32,

    pub invert_brightness: bool,

    pub dither_enabled: bool,

    /// 0.0-4.0
    pub dither_intensity: f32,

    /// Font size divisor applied to the upstream size, 1.0-20.0
    pub scale_factor: f32,

    pub background_color: Vec3,

    /// Let the effect compute the background color
    pub auto_background_color: bool,

    /// 0.0-2.0
    pub char_color_scale: f32,

    /// 0.0-2.0
    pub bg_color_scale: f32,
}

impl Default for AsciiSettings {
    fn default() -> Self {
        Self {
            spacing: 1,
            font_5x5: true,
            color_mode: 2,
            invert_brightness: false,
            dither_enabled: false,
            dither_intensity: 1.0,
            scale_factor: 1.0,
            background_color: Vec3::new(0.0, 0.0, 0.0),
            auto_background_color: false,
            char_color_scale: 1.0,
            bg_color_scale: 1.0,
        }
    }
}

impl AsciiSettings {
    /// State of an instance before any settings have been applied
    pub(crate) fn unset() -> Self {
        Self {
            spacing: 0,
            font_5x5: false,
            color_mode: 0,
            invert_brightness: false,
            dither_enabled: false,
            dither_intensity: 0.0,
            scale_factor: 1.0,
            background_color: Vec3::default(),
            auto_background_color: false,
            char_color_scale: 0.0,
            bg_color_scale: 0.0,
        }
    }

    /// Read every recognized key from a snapshot
    ///
    /// Values are cast to the attribute type without range checks; the
    /// property panel already constrains them.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            spacing: settings.get_int(SPACING) as i32,
            font_5x5: settings.get_bool(FONT_5X5),
            color_mode: settings.get_int(COLOR_MODE) as i32,
            invert_brightness: settings.get_bool(INVERT_BRIGHTNESS),
            dither_enabled: settings.get_bool(DITHERING),
            dither_intensity: settings.get_double(DITHER_INTENSITY) as f32,
            scale_factor: settings.get_double(FONT_SIZE) as f32,
            background_color: Vec3::new(
                settings.get_double(BG_COLOR_R) as f32,
                settings.get_double(BG_COLOR_G) as f32,
                settings.get_double(BG_COLOR_B) as f32,
            ),
            auto_background_color: settings.get_bool(CALC_BG_COLOR),
            char_color_scale: settings.get_double(CHAR_COLOR_SCALE) as f32,
            bg_color_scale: settings.get_double(BG_COLOR_SCALE) as f32,
        }
    }

    /// Register the default value of every key
    pub fn write_defaults(settings: &mut Settings) {
        let d = Self::default();
        settings.set_default_int(SPACING, d.spacing as i64);
        settings.set_default_bool(FONT_5X5, d.font_5x5);
        settings.set_default_int(COLOR_MODE, d.color_mode as i64);
        settings.set_default_bool(INVERT_BRIGHTNESS, d.invert_brightness);
        settings.set_default_bool(DITHERING, d.dither_enabled);
        settings.set_default_double(DITHER_INTENSITY, d.dither_intensity as f64);
        settings.set_default_double(FONT_SIZE, d.scale_factor as f64);
        settings.set_default_double(BG_COLOR_R, d.background_color.x as f64);
        settings.set_default_double(BG_COLOR_G, d.background_color.y as f64);
        settings.set_default_double(BG_COLOR_B, d.background_color.z as f64);
        settings.set_default_bool(CALC_BG_COLOR, d.auto_background_color);
        settings.set_default_double(CHAR_COLOR_SCALE, d.char_color_scale as f64);
        settings.set_default_double(BG_COLOR_SCALE, d.bg_color_scale as f64);
    }

    /// Describe the property panel
    pub fn properties() -> Properties {
        let mut props = Properties::new();

        props.add_int(SPACING, "Character spacing", 0, 5, 1);
        props.add_bool(FONT_5X5, "Character size (off = 3x5, on = 5x5)");
        props.add_int(COLOR_MODE, "Color Mode", 0, 2, 1);
        props.add_bool(INVERT_BRIGHTNESS, "Invert brightness");
        props.add_bool(DITHERING, "Dithering");
        props.add_float(DITHER_INTENSITY, "Dithering Intensity", 0.0, 4.0, 0.1);
        props.add_float(FONT_SIZE, "Font size", 1.0, 20.0, 0.1);
        props.add_float(BG_COLOR_R, "Background Color (red)", 0.0, 1.0, 0.01);
        props.add_float(BG_COLOR_G, "Background Color (green)", 0.0, 1.0, 0.01);
        props.add_float(BG_COLOR_B, "Background Color (blue)", 0.0, 1.0, 0.01);
        props.add_bool(CALC_BG_COLOR, "Calculate background color");
        props.add_float(CHAR_COLOR_SCALE, "Character brightness scaling", 0.0, 2.0, 0.01);
        props.add_float(BG_COLOR_SCALE, "Background brightness scaling", 0.0, 2.0, 0.01);

        props
    }

    /// Divisor actually applied to the upstream size
    pub fn effective_scale_factor(&self) -> f32 {
        self.scale_factor.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::PropertyKind;

    #[test]
    fn test_defaults_roundtrip() {
        let mut settings = Settings::new();
        AsciiSettings::write_defaults(&mut settings);

        let applied = AsciiSettings::from_settings(&settings);
        assert_eq!(applied, AsciiSettings::default());

        assert_eq!(applied.spacing, 1);
        assert!(applied.font_5x5);
        assert_eq!(applied.color_mode, 2);
        assert_eq!(applied.dither_intensity, 1.0);
        assert_eq!(applied.scale_factor, 1.0);
        assert_eq!(applied.background_color, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(applied.char_color_scale, 1.0);
        assert_eq!(applied.bg_color_scale, 1.0);
    }

    #[test]
    fn test_every_key_is_read() {
        let settings = Settings::new()
            .with(SPACING, 4i64)
            .with(FONT_5X5, false)
            .with(COLOR_MODE, 0i64)
            .with(INVERT_BRIGHTNESS, true)
            .with(DITHERING, true)
            .with(DITHER_INTENSITY, 2.5)
            .with(FONT_SIZE, 12.0)
            .with(BG_COLOR_R, 0.25)
            .with(BG_COLOR_G, 0.5)
            .with(BG_COLOR_B, 0.75)
            .with(CALC_BG_COLOR, true)
            .with(CHAR_COLOR_SCALE, 1.5)
            .with(BG_COLOR_SCALE, 0.5);

        let applied = AsciiSettings::from_settings(&settings);
        assert_eq!(
            applied,
            AsciiSettings {
                spacing: 4,
                font_5x5: false,
                color_mode: 0,
                invert_brightness: true,
                dither_enabled: true,
                dither_intensity: 2.5,
                scale_factor: 12.0,
                background_color: Vec3::new(0.25, 0.5, 0.75),
                auto_background_color: true,
                char_color_scale: 1.5,
                bg_color_scale: 0.5,
            }
        );
    }

    #[test]
    fn test_absent_keys_read_as_zero() {
        let applied = AsciiSettings::from_settings(&Settings::new().with(SPACING, 3i64));

        assert_eq!(applied.spacing, 3);
        assert!(!applied.font_5x5);
        assert_eq!(applied.color_mode, 0);
        assert_eq!(applied.scale_factor, 0.0);
        assert_eq!(applied.char_color_scale, 0.0);
    }

    #[test]
    fn test_no_range_coercion() {
        let applied = AsciiSettings::from_settings(
            &Settings::new().with(SPACING, 9i64).with(FONT_SIZE, 0.5),
        );
        assert_eq!(applied.spacing, 9);
        assert_eq!(applied.scale_factor, 0.5);
    }

    #[test]
    fn test_effective_scale_factor() {
        let cases = [(0.0, 1.0), (0.5, 1.0), (1.0, 1.0), (20.0, 20.0)];
        for (input, expected) in cases {
            let settings = AsciiSettings {
                scale_factor: input,
                ..AsciiSettings::default()
            };
            assert_eq!(settings.effective_scale_factor(), expected, "input {}", input);
        }
    }

    #[test]
    fn test_properties_cover_every_key() {
        let props = AsciiSettings::properties();
        assert_eq!(props.len(), 13);

        let mut settings = Settings::new();
        AsciiSettings::write_defaults(&mut settings);
        for prop in props.iter() {
            assert!(settings.contains(&prop.name), "no default for {}", prop.name);
        }

        assert_eq!(
            props.get(FONT_SIZE).unwrap().kind,
            PropertyKind::Float { min: 1.0, max: 20.0, step: 0.1 }
        );
        assert_eq!(
            props.get(SPACING).unwrap().kind,
            PropertyKind::Int { min: 0, max: 5, step: 1 }
        );
    }
}
