//! Bilateral smoothing preset.
//!
//! Wire format: `sfx_smooth_bilateral <spatial scale>,<value scale>,<iterations>,<channel>`.

use crate::channels::clamp_channel;
use crate::fmt::format_g;
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_smooth_bilateral";

pub(crate) const SCRIPT: &str = r#"
sfx_smooth_bilateral :
  apply_channels "repeat $3 bilateral $1,{255*$2} done",$4
"#;

/// Parameters of the bilateral smoothing preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothBilateralParams {
    /// Spatial standard deviation in `[0, 100]`.
    pub spatial_scale: f32,
    /// Value standard deviation in `[0, 1]`.
    pub value_scale: f32,
    /// Iteration count in `[1, 10]`.
    pub iterations: i32,
    /// Target channel index.
    pub channel: i32,
}

impl Default for SmoothBilateralParams {
    fn default() -> Self {
        Self {
            spatial_scale: 5.0,
            value_scale: 0.02,
            iterations: 2,
            channel: 0,
        }
    }
}

impl SmoothBilateralParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            spatial_scale: self.spatial_scale.clamp(0.0, 100.0),
            value_scale: self.value_scale.clamp(0.0, 1.0),
            iterations: self.iterations.clamp(1, 10),
            channel: clamp_channel(self.channel),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let spatial_scale = s.float()?;
        s.sep()?;
        let value_scale = s.float()?;
        s.sep()?;
        let iterations = s.int()?;
        s.sep()?;
        let channel = s.int()?;
        Some(
            Self {
                spatial_scale,
                value_scale,
                iterations,
                channel,
            }
            .clamped(),
        )
    }

    pub(crate) fn command(&self) -> String {
        format!(
            "{COMMAND} {},{},{},{}",
            format_g(f64::from(self.spatial_scale)),
            format_g(f64::from(self.value_scale)),
            self.iterations,
            self.channel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command() {
        assert_eq!(
            SmoothBilateralParams::default().command(),
            "sfx_smooth_bilateral 5,0.02,2,0"
        );
    }

    #[test]
    fn roundtrip() {
        let p = SmoothBilateralParams {
            spatial_scale: 25.0,
            value_scale: 0.1,
            iterations: 3,
            channel: 11,
        };
        assert_eq!(SmoothBilateralParams::parse(&p.command()), Some(p));
    }
}
