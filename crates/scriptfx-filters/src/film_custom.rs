//! Film emulation from user-provided lookup-table files.
//!
//! Same wire shape as the built-in variant, except the quoted first field
//! is a filesystem path (up to 1023 bytes) into the scanned
//! [`StockCatalog`](crate::stock::StockCatalog). With no stocks installed
//! the variant encodes an empty command and decodes back to its default.

use crate::fmt::{format_g, format_pct};
use crate::scan::FieldScanner;
use crate::stock::StockCatalog;

pub(crate) const COMMAND: &str = "sfx_custom_film";

pub(crate) const SCRIPT: &str = r#"
sfx_custom_film :
  input_cube "$1"
  repeat {$!-1}
    if {$8%2} balance_gamma[$>] , fi
    if {$2<1} +map_clut[$>] . j[$>] .,0,0,0,0,{$2} rm.
    else map_clut[$>] .
    fi
  done
  rm.
  adjust_colors $3,$4,$5,$6,$7,0,255
  if {$8>1} repeat $! l[$>] split_opacity n[0] 0,255 a c endl done fi
"#;

const MAX_FILM_LEN: usize = 1023;

/// Parameters of the custom film emulation preset.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomFilmParams {
    /// Path of the lookup-table file, empty when no stock is selected.
    pub film: String,
    /// Blend strength of the lookup in `[0, 1]`.
    pub strength: f32,
    /// Brightness amount in `[-1, 1]`.
    pub brightness: f32,
    /// Contrast amount in `[-1, 1]`.
    pub contrast: f32,
    /// Gamma amount in `[-1, 1]`.
    pub gamma: f32,
    /// Hue shift in `[-1, 1]`.
    pub hue: f32,
    /// Saturation amount in `[-1, 1]`.
    pub saturation: f32,
    /// Index into [`NORMALIZE_MODES`](crate::NORMALIZE_MODES).
    pub normalize: i32,
}

impl Default for CustomFilmParams {
    fn default() -> Self {
        Self {
            film: String::new(),
            strength: 1.0,
            brightness: 0.0,
            contrast: 0.0,
            gamma: 0.0,
            hue: 0.0,
            saturation: 0.0,
            normalize: 0,
        }
    }
}

impl CustomFilmParams {
    /// Default parameters pointing at the first stock of a scanned catalog.
    pub fn default_with(catalog: &StockCatalog) -> Self {
        let film = catalog
            .first()
            .map(|stock| stock.value.clone())
            .unwrap_or_default();
        Self {
            film,
            ..Self::default()
        }
    }

    pub(crate) fn clamped(self) -> Self {
        Self {
            film: self.film,
            strength: self.strength.clamp(0.0, 1.0),
            brightness: self.brightness.clamp(-1.0, 1.0),
            contrast: self.contrast.clamp(-1.0, 1.0),
            gamma: self.gamma.clamp(-1.0, 1.0),
            hue: self.hue.clamp(-1.0, 1.0),
            saturation: self.saturation.clamp(-1.0, 1.0),
            normalize: self
                .normalize
                .clamp(0, crate::film_emulation::NORMALIZE_MODES.len() as i32 - 1),
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut s = FieldScanner::new(raw, COMMAND)?;
        let film = s.quoted(MAX_FILM_LEN)?.to_string();
        s.sep()?;
        let strength = s.float()?;
        s.sep()?;
        let brightness = s.pct()?;
        s.sep()?;
        let contrast = s.pct()?;
        s.sep()?;
        let gamma = s.pct()?;
        s.sep()?;
        let hue = s.pct()?;
        s.sep()?;
        let saturation = s.pct()?;
        s.sep()?;
        let normalize = s.int()?;
        Some(
            Self {
                film,
                strength,
                brightness,
                contrast,
                gamma,
                hue,
                saturation,
                normalize,
            }
            .clamped(),
        )
    }

    pub(crate) fn command(&self) -> String {
        if self.film.is_empty() {
            return String::new();
        }
        format!(
            "{COMMAND} \"{}\",{},{},{},{},{},{},{}",
            self.film,
            format_g(f64::from(self.strength)),
            format_pct(self.brightness),
            format_pct(self.contrast),
            format_pct(self.gamma),
            format_pct(self.hue),
            format_pct(self.saturation),
            self.normalize
        )
    }
}
