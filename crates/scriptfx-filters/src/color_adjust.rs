//! Basic color adjustments preset.
//!
//! Wire format: `sfx_adjust_colors <brightness>,<contrast>,<gamma>,<hue>,<saturation>`,
//! all percent-scaled.

use crate::fmt::format_pct;
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_adjust_colors";

pub(crate) const SCRIPT: &str = r#"
sfx_adjust_colors :
  adjust_colors $1,$2,$3,$4,$5,0,255
"#;

/// Parameters of the basic color adjustments preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAdjustParams {
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

impl Default for ColorAdjustParams {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            gamma: 0.0,
            hue: 0.0,
            saturation: 0.0,
        }
    }
}

impl ColorAdjustParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            brightness: self.brightness.clamp(-1.0, 1.0),
            contrast: self.contrast.clamp(-1.0, 1.0),
            gamma: self.gamma.clamp(-1.0, 1.0),
            hue: self.hue.clamp(-1.0, 1.0),
            saturation: self.saturation.clamp(-1.0, 1.0),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
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
            "{COMMAND} {},{},{},{},{}",
            format_pct(self.brightness),
            format_pct(self.contrast),
            format_pct(self.gamma),
            format_pct(self.hue),
            format_pct(self.saturation)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let p = ColorAdjustParams {
            brightness: 0.1,
            contrast: -0.2,
            gamma: 0.3,
            hue: -0.4,
            saturation: 0.5,
        };
        assert_eq!(ColorAdjustParams::parse(&p.command()), Some(p));
    }

    #[test]
    fn default_is_identity() {
        let p = ColorAdjustParams::default();
        assert_eq!(p.command(), "sfx_adjust_colors 0,0,0,0,0");
    }

    #[test]
    fn wrong_field_count_fails() {
        assert_eq!(ColorAdjustParams::parse("sfx_adjust_colors 1,2,3,4"), None);
    }
}
