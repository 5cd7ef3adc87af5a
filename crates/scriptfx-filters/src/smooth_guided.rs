//! Guided-filter smoothing preset.
//!
//! Wire format: `sfx_smooth_guided <radius>,<smoothness>,<iterations>,<channel>`.

use crate::channels::clamp_channel;
use crate::fmt::format_g;
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_smooth_guided";

pub(crate) const SCRIPT: &str = r#"
sfx_smooth_guided :
  apply_channels "repeat $3 guided $1,{512*$2} done",$4
"#;

/// Parameters of the guided smoothing preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothGuidedParams {
    /// Filter radius in `[0, 100]`.
    pub radius: f32,
    /// Smoothness in `[0, 1]`.
    pub smoothness: f32,
    /// Iteration count in `[1, 10]`.
    pub iterations: i32,
    /// Target channel index.
    pub channel: i32,
}

impl Default for SmoothGuidedParams {
    fn default() -> Self {
        Self {
            radius: 5.0,
            smoothness: 0.05,
            iterations: 1,
            channel: 0,
        }
    }
}

impl SmoothGuidedParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            radius: self.radius.clamp(0.0, 100.0),
            smoothness: self.smoothness.clamp(0.0, 1.0),
            iterations: self.iterations.clamp(1, 10),
            channel: clamp_channel(self.channel),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let radius = s.float()?;
        s.sep()?;
        let smoothness = s.float()?;
        s.sep()?;
        let iterations = s.int()?;
        s.sep()?;
        let channel = s.int()?;
        Some(
            Self {
                radius,
                smoothness,
                iterations,
                channel,
            }
            .clamped(),
        )
    }

    pub(crate) fn command(&self) -> String {
        format!(
            "{COMMAND} {},{},{},{}",
            format_g(f64::from(self.radius)),
            format_g(f64::from(self.smoothness)),
            self.iterations,
            self.channel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let p = SmoothGuidedParams {
            radius: 10.0,
            smoothness: 0.25,
            iterations: 5,
            channel: 2,
        };
        assert_eq!(SmoothGuidedParams::parse(&p.command()), Some(p));
    }

    #[test]
    fn iterations_clamp_low() {
        let p = SmoothGuidedParams::parse("sfx_smooth_guided 5,0.05,0,0").expect("well-formed");
        assert_eq!(p.iterations, 1);
    }
}
