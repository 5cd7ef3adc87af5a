//! # scriptfx-filters
//!
//! The filter preset catalog: a fixed, ordered set of preset families,
//! each with a typed parameter struct, a serializer to the script engine's
//! command syntax, and a clamping decoder for previously stored
//! configurations.
//!
//! The catalog is a closed sum type — [`FilterKind`] names the families,
//! [`FilterParams`] carries their payloads — with one source file per
//! family. Persisted state is the fixed-layout [`StoredPreset`] record;
//! see [`blob`] for the byte-compatibility contract and [`registry`] for
//! the decode fallbacks (unknown tag → no-op, malformed string → variant
//! default, out-of-range field → clamped).
//!
//! ## Wire format
//!
//! Every variant serializes to a single line,
//! `<command name> <comma separated fields>`, with C-locale `%g` float
//! formatting ([`fmt::format_g`]) and adjust-colors amounts percent-scaled
//! on the wire. The scripts the commands refer to are contributed per
//! variant and concatenated by [`registry::script_library`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blob;
pub mod channels;
pub mod film;
pub mod fmt;
pub mod registry;
pub mod scan;
pub mod stock;

mod add_grain;
mod color_adjust;
mod equalize_shadow;
mod expert;
mod film_custom;
mod film_emulation;
mod freaky_details;
mod light_glow;
mod lomo;
mod magic_details;
mod pop_shadows;
mod sepia;
mod sharpen_diffusion;
mod sharpen_gold_meinel;
mod sharpen_richardson_lucy;
mod smooth_bilateral;
mod smooth_guided;

pub use add_grain::{AddGrainParams, GRAIN_BLEND_MODES, GRAIN_PRESETS};
pub use blob::{StoredPreset, COMMAND_CAPACITY, MAX_COMMAND_LEN};
pub use channels::{channel_label, clamp_channel, CHANNEL_LABELS};
pub use color_adjust::ColorAdjustParams;
pub use equalize_shadow::EqualizeShadowParams;
pub use expert::ExpertParams;
pub use film::{default_film, find_film, FilmPreset, FILM_PRESETS};
pub use film_custom::CustomFilmParams;
pub use film_emulation::{FilmEmulationParams, NORMALIZE_MODES};
pub use freaky_details::FreakyDetailsParams;
pub use light_glow::{LightGlowParams, GLOW_BLEND_MODES};
pub use lomo::LomoParams;
pub use magic_details::MagicDetailsParams;
pub use pop_shadows::PopShadowsParams;
pub use registry::{script_library, FilterKind, FilterParams};
pub use sepia::SepiaParams;
pub use sharpen_diffusion::SharpenDiffusionParams;
pub use sharpen_gold_meinel::SharpenGmParams;
pub use sharpen_richardson_lucy::SharpenRlParams;
pub use smooth_bilateral::SmoothBilateralParams;
pub use smooth_guided::SmoothGuidedParams;
pub use stock::{default_stock_dir, humanize, FilmStock, StockCatalog, STOCK_DIR_ENV};
