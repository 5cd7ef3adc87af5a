//! Sepia toning preset.
//!
//! Wire format: `sfx_sepia <brightness>,<contrast>,<gamma>` with all three
//! amounts percent-scaled (`[-100, 100]` on the wire, `[-1, 1]` in the
//! parameter struct).

use crate::fmt::format_pct;
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_sepia";

pub(crate) const SCRIPT: &str = r#"
sfx_sepia :
  sepia adjust_colors $1,$2,$3,0,0,0,255
"#;

/// Parameters of the sepia preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SepiaParams {
    /// Brightness amount in `[-1, 1]`.
    pub brightness: f32,
    /// Contrast amount in `[-1, 1]`.
    pub contrast: f32,
    /// Gamma amount in `[-1, 1]`.
    pub gamma: f32,
}

impl Default for SepiaParams {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            gamma: 0.0,
        }
    }
}

impl SepiaParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            brightness: self.brightness.clamp(-1.0, 1.0),
            contrast: self.contrast.clamp(-1.0, 1.0),
            gamma: self.gamma.clamp(-1.0, 1.0),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let brightness = s.pct()?;
        s.sep()?;
        let contrast = s.pct()?;
        s.sep()?;
        let gamma = s.pct()?;
        Some(
            Self {
                brightness,
                contrast,
                gamma,
            }
            .clamped(),
        )
    }

    pub(crate) fn command(&self) -> String {
        format!(
            "{COMMAND} {},{},{}",
            format_pct(self.brightness),
            format_pct(self.contrast),
            format_pct(self.gamma)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_percent_scaled() {
        let p = SepiaParams {
            brightness: 0.5,
            contrast: -0.3,
            gamma: 0.0,
        };
        assert_eq!(p.command(), "sfx_sepia 50,-30,0");
    }

    #[test]
    fn roundtrip() {
        let p = SepiaParams {
            brightness: 0.25,
            contrast: -1.0,
            gamma: 0.75,
        };
        assert_eq!(SepiaParams::parse(&p.command()), Some(p));
    }

    #[test]
    fn out_of_range_clamps_to_bound() {
        let p = SepiaParams::parse("sfx_sepia 150,-200,0").expect("well-formed");
        assert_eq!(p.brightness, 1.0);
        assert_eq!(p.contrast, -1.0);
    }

    #[test]
    fn short_field_count_fails() {
        assert_eq!(SepiaParams::parse("sfx_sepia 50,-30"), None);
    }
}
