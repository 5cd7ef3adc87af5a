//! Film grain synthesis preset.
//!
//! Wire format:
//! `sfx_add_grain <preset>,<blend mode>,<opacity>,<scale>,<color grain>,<brightness>,<contrast>,<gamma>,<hue>,<saturation>`
//! with the five trailing adjust-colors amounts percent-scaled.

use crate::fmt::{format_g, format_pct};
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_add_grain";

pub(crate) const SCRIPT: &str = r#"
sfx_add_grain :
  fx_emulate_grain $1,$2,$3,$4,$5,$6,$7,$8,$9,$10
"#;

/// Emulated grain stocks, in wire-index order.
pub const GRAIN_PRESETS: [&str; 5] = [
    "ORWO NP20",
    "Kodak TMAX 400",
    "Kodak TMAX 3200",
    "Kodak TRI-X 1600",
    "unknown",
];

/// Grain blend modes, in wire-index order.
pub const GRAIN_BLEND_MODES: [&str; 6] = [
    "alpha",
    "grain merge",
    "hard light",
    "overlay",
    "soft light",
    "grain only",
];

/// Parameters of the film grain preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddGrainParams {
    /// Index into [`GRAIN_PRESETS`].
    pub preset: i32,
    /// Index into [`GRAIN_BLEND_MODES`].
    pub blend_mode: i32,
    /// Grain opacity in `[0, 1]`.
    pub opacity: f32,
    /// Grain scale in `[30, 100]`.
    pub scale: f32,
    /// `0` = monochrome grain, `1` = color grain.
    pub color_grain: i32,
    /// Brightness amount in `[-1, 1]`.
    pub brightness: f32,
    /// Contrast amount in `[-1, 1]`.
    pub contrast: f32,
    /// Gamma amount in `[-1, 1]`.
    pub gamma: f32,
    /// Hue shift in `[-1, 1]`.
    pub hue: f32,
    /// Saturation amount in `[-1, 1]`.
    pub saturation: f32,
}

impl Default for AddGrainParams {
    fn default() -> Self {
        Self {
            preset: 0,
            blend_mode: 1,
            opacity: 0.2,
            scale: 100.0,
            color_grain: 0,
            brightness: 0.0,
            contrast: 0.0,
            gamma: 0.0,
            hue: 0.0,
            saturation: 0.0,
        }
    }
}

impl AddGrainParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            preset: self.preset.clamp(0, GRAIN_PRESETS.len() as i32 - 1),
            blend_mode: self.blend_mode.clamp(0, GRAIN_BLEND_MODES.len() as i32 - 1),
            opacity: self.opacity.clamp(0.0, 1.0),
            scale: self.scale.clamp(30.0, 100.0),
            color_grain: self.color_grain.clamp(0, 1),
            brightness: self.brightness.clamp(-1.0, 1.0),
            contrast: self.contrast.clamp(-1.0, 1.0),
            gamma: self.gamma.clamp(-1.0, 1.0),
            hue: self.hue.clamp(-1.0, 1.0),
            saturation: self.saturation.clamp(-1.0, 1.0),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let preset = s.int()?;
        s.sep()?;
        let blend_mode = s.int()?;
        s.sep()?;
        let opacity = s.float()?;
        s.sep()?;
        let scale = s.float()?;
        s.sep()?;
        let color_grain = s.int()?;
        s.sep()?;
        let brightness = s.pct()?;
        s.sep()?;
        let contrast = s.pct()?;
        s.sep()?;
        let gamma = s.pct()?;
        s.sep()?;
        let hue = s.pct()?;
        s.sep()?;
        let saturation = s.pct()?;
        Some(
            Self {
                preset,
                blend_mode,
                opacity,
                scale,
                color_grain,
                brightness,
                contrast,
                gamma,
                hue,
                saturation,
            }
            .clamped(),
        )
    }

    pub(crate) fn command(&self) -> String {
        format!(
            "{COMMAND} {},{},{},{},{},{},{},{},{},{}",
            self.preset,
            self.blend_mode,
            format_g(f64::from(self.opacity)),
            format_g(f64::from(self.scale)),
            self.color_grain,
            format_pct(self.brightness),
            format_pct(self.contrast),
            format_pct(self.gamma),
            format_pct(self.hue),
            format_pct(self.saturation)
        )
    }
}
