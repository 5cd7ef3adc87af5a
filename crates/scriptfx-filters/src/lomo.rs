//! Lomography look preset.

use crate::fmt::format_g;
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_lomo";

pub(crate) const SCRIPT: &str = r#"
sfx_lomo :
  remove_opacity repeat $! l[$>] to_rgb
    +gaussian {125-125*$1+25}%,{125-125*$1+25}% n. 0,1 *
    s c
    f[0] '255*atan((i-128)/128)'
    f[1] '255*tan((i-128)/128)'
    f[2] '255*atan((i-128)/255)'
    a c
    sharpen 1
    normalize 0,255
  endl done
"#;

/// Parameters of the lomo preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LomoParams {
    /// Vignette size in `[0, 1]`.
    pub vignette_size: f32,
}

impl Default for LomoParams {
    fn default() -> Self {
        Self { vignette_size: 0.2 }
    }
}

impl LomoParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            vignette_size: self.vignette_size.clamp(0.0, 1.0),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let vignette_size = s.float()?;
        Some(Self { vignette_size }.clamped())
    }

    pub(crate) fn command(&self) -> String {
        format!("{COMMAND} {}", format_g(f64::from(self.vignette_size)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let p = LomoParams { vignette_size: 0.5 };
        assert_eq!(LomoParams::parse(&p.command()), Some(p));
    }

    #[test]
    fn vignette_clamps() {
        let p = LomoParams::parse("sfx_lomo -3").expect("well-formed");
        assert_eq!(p.vignette_size, 0.0);
    }
}
