//! Light glow preset.
//!
//! Wire format:
//! `sfx_light_glow <density>,<amplitude>,<blend mode>,<opacity>,<channel>`
//! with density percent-scaled on the wire.

use crate::channels::clamp_channel;
use crate::fmt::{format_g, format_pct};
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_light_glow";

pub(crate) const SCRIPT: &str = r#"
_sfx_light_glow :
  mode=${arg\ 1+$3,burn,dodge,freeze,grainmerge,hardlight,interpolation,lighten,multiply,overlay,reflect,softlight,stamp,value}
  repeat $!
    +gradient_norm. >=. {100-$1}% distance. 1 ^. $2 *. -1 n. 0,255 blend $mode,$4
  mv. 0 done

sfx_light_glow :
  apply_channels "_sfx_light_glow $1,$2,$3,$4",$5
"#;

/// Glow blend modes, in wire-index order.
pub const GLOW_BLEND_MODES: [&str; 13] = [
    "burn",
    "dodge",
    "freeze",
    "grain merge",
    "hard light",
    "interpolation",
    "lighten",
    "multiply",
    "overlay",
    "reflect",
    "soft light",
    "stamp",
    "value",
];

/// Parameters of the light glow preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightGlowParams {
    /// Glow density in `[0, 1]` (percent-scaled on the wire).
    pub density: f32,
    /// Glow amplitude in `[0, 2]`.
    pub amplitude: f32,
    /// Index into [`GLOW_BLEND_MODES`].
    pub blend_mode: i32,
    /// Glow opacity in `[0, 1]`.
    pub opacity: f32,
    /// Target channel index.
    pub channel: i32,
}

impl Default for LightGlowParams {
    fn default() -> Self {
        Self {
            density: 0.3,
            amplitude: 0.5,
            blend_mode: 8,
            opacity: 0.8,
            channel: 0,
        }
    }
}

impl LightGlowParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            density: self.density.clamp(0.0, 1.0),
            amplitude: self.amplitude.clamp(0.0, 2.0),
            blend_mode: self.blend_mode.clamp(0, GLOW_BLEND_MODES.len() as i32 - 1),
            opacity: self.opacity.clamp(0.0, 1.0),
            channel: clamp_channel(self.channel),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let density = s.pct()?;
        s.sep()?;
        let amplitude = s.float()?;
        s.sep()?;
        let blend_mode = s.int()?;
        s.sep()?;
        let opacity = s.float()?;
        s.sep()?;
        let channel = s.int()?;
        Some(
            Self {
                density,
                amplitude,
                blend_mode,
                opacity,
                channel,
            }
            .clamped(),
        )
    }

    pub(crate) fn command(&self) -> String {
        format!(
            "{COMMAND} {},{},{},{},{}",
            format_pct(self.density),
            format_g(f64::from(self.amplitude)),
            self.blend_mode,
            format_g(f64::from(self.opacity)),
            self.channel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_scales_density() {
        assert_eq!(
            LightGlowParams::default().command(),
            "sfx_light_glow 30,0.5,8,0.8,0"
        );
    }

    #[test]
    fn roundtrip() {
        let p = LightGlowParams {
            density: 0.75,
            amplitude: 1.5,
            blend_mode: 2,
            opacity: 0.4,
            channel: 24,
        };
        assert_eq!(LightGlowParams::parse(&p.command()), Some(p));
    }

    #[test]
    fn blend_mode_clamps_to_table() {
        let p = LightGlowParams::parse("sfx_light_glow 30,0.5,99,0.8,0").expect("well-formed");
        assert_eq!(p.blend_mode, GLOW_BLEND_MODES.len() as i32 - 1);
    }
}
