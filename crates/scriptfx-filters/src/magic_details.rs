//! "Magic details" detail-enhancement preset.
//!
//! Wire format:
//! `sfx_magic_details <amplitude>,<spatial scale>,<value scale>,<edges>,<smoothness>,<channel>`.

use crate::channels::clamp_channel;
use crate::fmt::format_g;
use crate::scan::FieldScanner;

pub(crate) const COMMAND: &str = "sfx_magic_details";

pub(crate) const SCRIPT: &str = r#"
_sfx_magic_details :
  repeat $! l[$>]
    +bilateral $2,$3
    +gradient_norm.. +. 1
    pow. {$4>=0?3.1-$4:-3.1-$4}
    b. $5 n. 1,{1+$1}
    -... .. *[-3,-1] + c 0,255
  endl done

sfx_magic_details :
  ac "_sfx_magic_details ${1-5}",$6,0
"#;

/// Parameters of the magic details preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagicDetailsParams {
    /// Effect amplitude in `[0, 30]`.
    pub amplitude: f32,
    /// Bilateral spatial scale in `[0, 10]`.
    pub spatial_scale: f32,
    /// Bilateral value scale in `[0, 20]`.
    pub value_scale: f32,
    /// Edge sensitivity in `[-3, 3]`.
    pub edges: f32,
    /// Smoothness in `[0, 20]`.
    pub smoothness: f32,
    /// Target channel index.
    pub channel: i32,
}

impl Default for MagicDetailsParams {
    fn default() -> Self {
        Self {
            amplitude: 6.0,
            spatial_scale: 3.0,
            value_scale: 15.0,
            edges: -0.5,
            smoothness: 2.0,
            channel: 27,
        }
    }
}

impl MagicDetailsParams {
    pub(crate) fn clamped(self) -> Self {
        Self {
            amplitude: self.amplitude.clamp(0.0, 30.0),
            spatial_scale: self.spatial_scale.clamp(0.0, 10.0),
            value_scale: self.value_scale.clamp(0.0, 20.0),
            edges: self.edges.clamp(-3.0, 3.0),
            smoothness: self.smoothness.clamp(0.0, 20.0),
            channel: clamp_channel(self.channel),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let amplitude = s.float()?;
        s.sep()?;
        let spatial_scale = s.float()?;
        s.sep()?;
        let value_scale = s.float()?;
        s.sep()?;
        let edges = s.float()?;
        s.sep()?;
        let smoothness = s.float()?;
        s.sep()?;
        let channel = s.int()?;
        Some(
            Self {
                amplitude,
                spatial_scale,
                value_scale,
                edges,
                smoothness,
                channel,
            }
            .clamped(),
        )
    }

    pub(crate) fn command(&self) -> String {
        format!(
            "{COMMAND} {},{},{},{},{},{}",
            format_g(f64::from(self.amplitude)),
            format_g(f64::from(self.spatial_scale)),
            format_g(f64::from(self.value_scale)),
            format_g(f64::from(self.edges)),
            format_g(f64::from(self.smoothness)),
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
            MagicDetailsParams::default().command(),
            "sfx_magic_details 6,3,15,-0.5,2,27"
        );
    }

    #[test]
    fn roundtrip() {
        let p = MagicDetailsParams {
            amplitude: 12.5,
            spatial_scale: 1.0,
            value_scale: 8.0,
            edges: 1.5,
            smoothness: 0.0,
            channel: 26,
        };
        assert_eq!(MagicDetailsParams::parse(&p.command()), Some(p));
    }

    #[test]
    fn edges_clamp_both_ways() {
        let p = MagicDetailsParams::parse("sfx_magic_details 6,3,15,-9,2,27").expect("well-formed");
        assert_eq!(p.edges, -3.0);
    }
}
