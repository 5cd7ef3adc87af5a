//! Gold-Meinel deconvolution sharpening preset.
//!
//! Wire format:
//! `sfx_sharpen_gold_meinel <sigma>,<iterations>,<acceleration>,<blur>,<channel>`.

use crate::channels::clamp_channel;
use crate::fmt::format_g;
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_sharpen_gold_meinel";

pub(crate) const SCRIPT: &str = r#"
sfx_sharpen_gold_meinel :
  ac "apply_parallel_overlap \"deblur_goldmeinel $1,$2,$3,$4\",24,0",$5,0
"#;

/// Parameters of the Gold-Meinel sharpening preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharpenGmParams {
    /// Gaussian kernel sigma in `[0.5, 10]`.
    pub sigma: f32,
    /// Iteration count in `[1, 15]`.
    pub iterations: i32,
    /// Convergence acceleration in `[1, 3]`.
    pub acceleration: f32,
    /// Blur kernel selector, `0` = exponential, `1` = gaussian.
    pub blur: i32,
    /// Target channel index.
    pub channel: i32,
}

impl Default for SharpenGmParams {
    fn default() -> Self {
        Self {
            sigma: 1.0,
            iterations: 5,
            acceleration: 1.0,
            blur: 1,
            channel: 11,
        }
    }
}

impl SharpenGmParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            sigma: self.sigma.clamp(0.5, 10.0),
            iterations: self.iterations.clamp(1, 15),
            acceleration: self.acceleration.clamp(1.0, 3.0),
            blur: self.blur.clamp(0, 1),
            channel: clamp_channel(self.channel),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let sigma = s.float()?;
        s.sep()?;
        let iterations = s.int()?;
        s.sep()?;
        let acceleration = s.float()?;
        s.sep()?;
        let blur = s.int()?;
        s.sep()?;
        let channel = s.int()?;
        Some(
            Self {
                sigma,
                iterations,
                acceleration,
                blur,
                channel,
            }
            .clamped(),
        )
    }

    pub(crate) fn command(&self) -> String {
        format!(
            "{COMMAND} {},{},{},{},{}",
            format_g(f64::from(self.sigma)),
            self.iterations,
            format_g(f64::from(self.acceleration)),
            self.blur,
            self.channel
        )
    }
}
