//! Inverse-diffusion sharpening preset.
//!
//! Wire format: `sfx_sharpen_inverse_diffusion <amplitude>,<iterations>,<channel>`.

use crate::channels::clamp_channel;
use crate::fmt::format_g;
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_sharpen_inverse_diffusion";

pub(crate) const SCRIPT: &str = r#"
sfx_sharpen_inverse_diffusion :
  ac "apply_parallel_overlap \"repeat $2 sharpen $1 done\",24,0",$3,0
"#;

/// Parameters of the inverse-diffusion sharpening preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharpenDiffusionParams {
    /// Sharpening amplitude in `[1, 300]`.
    pub amplitude: f32,
    /// Iteration count in `[1, 10]`.
    pub iterations: i32,
    /// Target channel index.
    pub channel: i32,
}

impl Default for SharpenDiffusionParams {
    fn default() -> Self {
        Self {
            amplitude: 50.0,
            iterations: 2,
            channel: 11,
        }
    }
}

impl SharpenDiffusionParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            amplitude: self.amplitude.clamp(1.0, 300.0),
            iterations: self.iterations.clamp(1, 10),
            channel: clamp_channel(self.channel),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let amplitude = s.float()?;
        s.sep()?;
        let iterations = s.int()?;
        s.sep()?;
        let channel = s.int()?;
        Some(
            Self {
                amplitude,
                iterations,
                channel,
            }
            .clamped(),
        )
    }

    pub(crate) fn command(&self) -> String {
        format!(
            "{COMMAND} {},{},{}",
            format_g(f64::from(self.amplitude)),
            self.iterations,
            self.channel
        )
    }
}
