//! Shadow lifting preset.

use crate::fmt::format_g;
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_pop_shadows";

pub(crate) const SCRIPT: &str = r#"
sfx_pop_shadows :
  split_opacity local[0]
    .x2
    luminance.. negate.. imM={-2,[im,iM]} blur.. $2% normalize.. $imM
    blend[0,1] overlay,$1
    max
  endlocal
"#;

/// Parameters of the shadow lifting preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopShadowsParams {
    /// Effect strength in `[0, 1]`.
    pub strength: f32,
    /// Blur scale in `[0, 20]`.
    pub scale: f32,
}

impl Default for PopShadowsParams {
    fn default() -> Self {
        Self {
            strength: 0.75,
            scale: 5.0,
        }
    }
}

impl PopShadowsParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            strength: self.strength.clamp(0.0, 1.0),
            scale: self.scale.clamp(0.0, 20.0),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let strength = s.float()?;
        s.sep()?;
        let scale = s.float()?;
        Some(Self { strength, scale }.clamped())
    }

    pub(crate) fn command(&self) -> String {
        format!(
            "{COMMAND} {},{}",
            format_g(f64::from(self.strength)),
            format_g(f64::from(self.scale))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let p = PopShadowsParams {
            strength: 0.5,
            scale: 12.0,
        };
        assert_eq!(PopShadowsParams::parse(&p.command()), Some(p));
    }

    #[test]
    fn default_command() {
        assert_eq!(
            PopShadowsParams::default().command(),
            "sfx_pop_shadows 0.75,5"
        );
    }
}
