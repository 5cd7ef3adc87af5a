//! "Freaky details" local-contrast preset.
//!
//! Wire format: `sfx_freaky_details <amplitude>,<scale>,<iterations>,<channel>`.

use crate::channels::clamp_channel;
use crate::fmt::format_g;
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_freaky_details";

pub(crate) const SCRIPT: &str = r#"
_sfx_freaky_details :
  repeat $! l[$>]
    repeat $3
      . +-. 255 *. -1
      repeat $1 bilateral. $2,{1.5*$2} done
      blend[-2,-1] vividlight blend overlay
    done
  endl done

sfx_freaky_details :
  ac "_sfx_freaky_details $1,$2,$3",$4,0
"#;

/// Parameters of the freaky details preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreakyDetailsParams {
    /// Effect amplitude in `[1, 5]`.
    pub amplitude: i32,
    /// Spatial scale in `[1, 100]`.
    pub scale: f32,
    /// Iteration count in `[1, 4]`.
    pub iterations: i32,
    /// Target channel index.
    pub channel: i32,
}

impl Default for FreakyDetailsParams {
    fn default() -> Self {
        Self {
            amplitude: 2,
            scale: 10.0,
            iterations: 1,
            channel: 11,
        }
    }
}

impl FreakyDetailsParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            amplitude: self.amplitude.clamp(1, 5),
            scale: self.scale.clamp(1.0, 100.0),
            iterations: self.iterations.clamp(1, 4),
            channel: clamp_channel(self.channel),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let amplitude = s.int()?;
        s.sep()?;
        let scale = s.float()?;
        s.sep()?;
        let iterations = s.int()?;
        s.sep()?;
        let channel = s.int()?;
        Some(
            Self {
                amplitude,
                scale,
                iterations,
                channel,
            }
            .clamped(),
        )
    }

    pub(crate) fn command(&self) -> String {
        format!(
            "{COMMAND} {},{},{},{}",
            self.amplitude,
            format_g(f64::from(self.scale)),
            self.iterations,
            self.channel
        )
    }
}
