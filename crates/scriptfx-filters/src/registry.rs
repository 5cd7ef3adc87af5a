//! The filter catalog: variant tags, typed parameters, and dispatch.
//!
//! Every preset family is one case of a closed sum type. [`FilterKind`]
//! carries the persisted tag (explicit discriminants — stored records
//! reference variants by tag, never by display position, so the selector
//! ordering in [`FilterKind::CATALOG`] can change without breaking old
//! edits). [`FilterParams`] carries the per-variant payload and routes
//! encode/decode/default to the variant modules.
//!
//! Decoding never fails: an unknown tag rehydrates as the no-op variant,
//! a malformed command string as the owning variant's default, and every
//! scanned field is clamped into its documented range.

use crate::add_grain::{self, AddGrainParams};
use crate::blob::StoredPreset;
use crate::color_adjust::{self, ColorAdjustParams};
use crate::equalize_shadow::{self, EqualizeShadowParams};
use crate::expert::ExpertParams;
use crate::film_custom::{self, CustomFilmParams};
use crate::film_emulation::{self, FilmEmulationParams};
use crate::freaky_details::{self, FreakyDetailsParams};
use crate::light_glow::{self, LightGlowParams};
use crate::lomo::{self, LomoParams};
use crate::magic_details::{self, MagicDetailsParams};
use crate::pop_shadows::{self, PopShadowsParams};
use crate::sepia::{self, SepiaParams};
use crate::sharpen_diffusion::{self, SharpenDiffusionParams};
use crate::sharpen_gold_meinel::{self, SharpenGmParams};
use crate::sharpen_richardson_lucy::{self, SharpenRlParams};
use crate::smooth_bilateral::{self, SmoothBilateralParams};
use crate::smooth_guided::{self, SmoothGuidedParams};

/// One preset family. The discriminant is the persisted tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FilterKind {
    /// No filtering, image passes through.
    None = 0,
    /// Raw script command entered by the user.
    ExpertMode = 1,
    /// Sepia toning.
    Sepia = 2,
    /// Film emulation from the built-in stock catalog.
    FilmEmulation = 3,
    /// Film emulation from user lookup-table files.
    CustomFilmEmulation = 4,
    /// Freaky details local contrast.
    FreakyDetails = 5,
    /// Richardson-Lucy deconvolution sharpening.
    SharpenRichardsonLucy = 6,
    /// Gold-Meinel deconvolution sharpening.
    SharpenGoldMeinel = 7,
    /// Inverse-diffusion sharpening.
    SharpenInverseDiffusion = 8,
    /// Magic details enhancement.
    MagicDetails = 9,
    /// Basic color adjustments.
    BasicColorAdjustments = 10,
    /// Shadow equalization.
    EqualizeShadow = 11,
    /// Film grain synthesis.
    AddGrain = 12,
    /// Shadow lifting.
    PopShadows = 13,
    /// Bilateral smoothing.
    SmoothBilateral = 14,
    /// Guided-filter smoothing.
    SmoothGuided = 15,
    /// Light glow.
    LightGlow = 16,
    /// Lomography look.
    Lomo = 17,
}

impl FilterKind {
    /// Selector display order. This is UI ordering only; persisted state
    /// references variants by tag.
    pub const CATALOG: [FilterKind; 18] = [
        FilterKind::None,
        FilterKind::BasicColorAdjustments,
        FilterKind::SharpenRichardsonLucy,
        FilterKind::SharpenGoldMeinel,
        FilterKind::SharpenInverseDiffusion,
        FilterKind::SmoothBilateral,
        FilterKind::SmoothGuided,
        FilterKind::FreakyDetails,
        FilterKind::MagicDetails,
        FilterKind::EqualizeShadow,
        FilterKind::PopShadows,
        FilterKind::LightGlow,
        FilterKind::Sepia,
        FilterKind::FilmEmulation,
        FilterKind::CustomFilmEmulation,
        FilterKind::AddGrain,
        FilterKind::Lomo,
        FilterKind::ExpertMode,
    ];

    /// The persisted tag value.
    #[inline]
    pub fn tag(self) -> u32 {
        self as u32
    }

    /// Resolves a persisted tag; unknown tags yield `None`.
    pub fn from_tag(tag: u32) -> Option<Self> {
        FilterKind::CATALOG.into_iter().find(|k| k.tag() == tag)
    }

    /// Maps a selector index (into [`Self::CATALOG`]) to a variant.
    pub fn select(index: usize) -> Option<Self> {
        FilterKind::CATALOG.get(index).copied()
    }

    /// Position of this variant in the selector ordering.
    pub fn catalog_index(self) -> usize {
        FilterKind::CATALOG
            .iter()
            .position(|&k| k == self)
            .unwrap_or(0)
    }

    /// Human-readable selector label.
    pub fn label(self) -> &'static str {
        match self {
            FilterKind::None => "none",
            FilterKind::ExpertMode => "expert mode",
            FilterKind::Sepia => "sepia",
            FilterKind::FilmEmulation => "film emulation",
            FilterKind::CustomFilmEmulation => "custom film emulation",
            FilterKind::FreakyDetails => "freaky details",
            FilterKind::SharpenRichardsonLucy => "sharpen (Richardson-Lucy)",
            FilterKind::SharpenGoldMeinel => "sharpen (Gold-Meinel)",
            FilterKind::SharpenInverseDiffusion => "sharpen (inverse diffusion)",
            FilterKind::MagicDetails => "magic details",
            FilterKind::BasicColorAdjustments => "basic color adjustments",
            FilterKind::EqualizeShadow => "equalize shadow",
            FilterKind::AddGrain => "add film grain",
            FilterKind::PopShadows => "pop shadows",
            FilterKind::SmoothBilateral => "smooth (bilateral)",
            FilterKind::SmoothGuided => "smooth (guided)",
            FilterKind::LightGlow => "light glow",
            FilterKind::Lomo => "lomo",
        }
    }

    /// The variant's contribution to the engine's script library; empty
    /// for variants that need no auxiliary definitions.
    pub fn variant_script(self) -> &'static str {
        match self {
            FilterKind::None | FilterKind::ExpertMode => "",
            FilterKind::Sepia => sepia::SCRIPT,
            FilterKind::FilmEmulation => film_emulation::SCRIPT,
            FilterKind::CustomFilmEmulation => film_custom::SCRIPT,
            FilterKind::FreakyDetails => freaky_details::SCRIPT,
            FilterKind::SharpenRichardsonLucy => sharpen_richardson_lucy::SCRIPT,
            FilterKind::SharpenGoldMeinel => sharpen_gold_meinel::SCRIPT,
            FilterKind::SharpenInverseDiffusion => sharpen_diffusion::SCRIPT,
            FilterKind::MagicDetails => magic_details::SCRIPT,
            FilterKind::BasicColorAdjustments => color_adjust::SCRIPT,
            FilterKind::EqualizeShadow => equalize_shadow::SCRIPT,
            FilterKind::AddGrain => add_grain::SCRIPT,
            FilterKind::PopShadows => pop_shadows::SCRIPT,
            FilterKind::SmoothBilateral => smooth_bilateral::SCRIPT,
            FilterKind::SmoothGuided => smooth_guided::SCRIPT,
            FilterKind::LightGlow => light_glow::SCRIPT,
            FilterKind::Lomo => lomo::SCRIPT,
        }
    }
}

/// Typed parameters of the active filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterParams {
    /// No filtering.
    None,
    /// Raw script command.
    ExpertMode(ExpertParams),
    /// Sepia toning.
    Sepia(SepiaParams),
    /// Built-in film emulation.
    FilmEmulation(FilmEmulationParams),
    /// User lookup-table film emulation.
    CustomFilmEmulation(CustomFilmParams),
    /// Freaky details.
    FreakyDetails(FreakyDetailsParams),
    /// Richardson-Lucy sharpening.
    SharpenRichardsonLucy(SharpenRlParams),
    /// Gold-Meinel sharpening.
    SharpenGoldMeinel(SharpenGmParams),
    /// Inverse-diffusion sharpening.
    SharpenInverseDiffusion(SharpenDiffusionParams),
    /// Magic details.
    MagicDetails(MagicDetailsParams),
    /// Basic color adjustments.
    BasicColorAdjustments(ColorAdjustParams),
    /// Shadow equalization.
    EqualizeShadow(EqualizeShadowParams),
    /// Film grain.
    AddGrain(AddGrainParams),
    /// Shadow lifting.
    PopShadows(PopShadowsParams),
    /// Bilateral smoothing.
    SmoothBilateral(SmoothBilateralParams),
    /// Guided smoothing.
    SmoothGuided(SmoothGuidedParams),
    /// Light glow.
    LightGlow(LightGlowParams),
    /// Lomography look.
    Lomo(LomoParams),
}

impl FilterParams {
    /// The variant this parameter set belongs to.
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterParams::None => FilterKind::None,
            FilterParams::ExpertMode(_) => FilterKind::ExpertMode,
            FilterParams::Sepia(_) => FilterKind::Sepia,
            FilterParams::FilmEmulation(_) => FilterKind::FilmEmulation,
            FilterParams::CustomFilmEmulation(_) => FilterKind::CustomFilmEmulation,
            FilterParams::FreakyDetails(_) => FilterKind::FreakyDetails,
            FilterParams::SharpenRichardsonLucy(_) => FilterKind::SharpenRichardsonLucy,
            FilterParams::SharpenGoldMeinel(_) => FilterKind::SharpenGoldMeinel,
            FilterParams::SharpenInverseDiffusion(_) => FilterKind::SharpenInverseDiffusion,
            FilterParams::MagicDetails(_) => FilterKind::MagicDetails,
            FilterParams::BasicColorAdjustments(_) => FilterKind::BasicColorAdjustments,
            FilterParams::EqualizeShadow(_) => FilterKind::EqualizeShadow,
            FilterParams::AddGrain(_) => FilterKind::AddGrain,
            FilterParams::PopShadows(_) => FilterKind::PopShadows,
            FilterParams::SmoothBilateral(_) => FilterKind::SmoothBilateral,
            FilterParams::SmoothGuided(_) => FilterKind::SmoothGuided,
            FilterParams::LightGlow(_) => FilterKind::LightGlow,
            FilterParams::Lomo(_) => FilterKind::Lomo,
        }
    }

    /// The built-in default parameter set for a variant.
    pub fn default_for(kind: FilterKind) -> Self {
        match kind {
            FilterKind::None => FilterParams::None,
            FilterKind::ExpertMode => FilterParams::ExpertMode(ExpertParams::default()),
            FilterKind::Sepia => FilterParams::Sepia(SepiaParams::default()),
            FilterKind::FilmEmulation => {
                FilterParams::FilmEmulation(FilmEmulationParams::default())
            }
            FilterKind::CustomFilmEmulation => {
                FilterParams::CustomFilmEmulation(CustomFilmParams::default())
            }
            FilterKind::FreakyDetails => FilterParams::FreakyDetails(FreakyDetailsParams::default()),
            FilterKind::SharpenRichardsonLucy => {
                FilterParams::SharpenRichardsonLucy(SharpenRlParams::default())
            }
            FilterKind::SharpenGoldMeinel => {
                FilterParams::SharpenGoldMeinel(SharpenGmParams::default())
            }
            FilterKind::SharpenInverseDiffusion => {
                FilterParams::SharpenInverseDiffusion(SharpenDiffusionParams::default())
            }
            FilterKind::MagicDetails => FilterParams::MagicDetails(MagicDetailsParams::default()),
            FilterKind::BasicColorAdjustments => {
                FilterParams::BasicColorAdjustments(ColorAdjustParams::default())
            }
            FilterKind::EqualizeShadow => {
                FilterParams::EqualizeShadow(EqualizeShadowParams::default())
            }
            FilterKind::AddGrain => FilterParams::AddGrain(AddGrainParams::default()),
            FilterKind::PopShadows => FilterParams::PopShadows(PopShadowsParams::default()),
            FilterKind::SmoothBilateral => {
                FilterParams::SmoothBilateral(SmoothBilateralParams::default())
            }
            FilterKind::SmoothGuided => FilterParams::SmoothGuided(SmoothGuidedParams::default()),
            FilterKind::LightGlow => FilterParams::LightGlow(LightGlowParams::default()),
            FilterKind::Lomo => FilterParams::Lomo(LomoParams::default()),
        }
    }

    /// The command string handed to the script engine.
    pub fn command(&self) -> String {
        match self {
            FilterParams::None => String::new(),
            FilterParams::ExpertMode(p) => p.command(),
            FilterParams::Sepia(p) => p.command(),
            FilterParams::FilmEmulation(p) => p.command(),
            FilterParams::CustomFilmEmulation(p) => p.command(),
            FilterParams::FreakyDetails(p) => p.command(),
            FilterParams::SharpenRichardsonLucy(p) => p.command(),
            FilterParams::SharpenGoldMeinel(p) => p.command(),
            FilterParams::SharpenInverseDiffusion(p) => p.command(),
            FilterParams::MagicDetails(p) => p.command(),
            FilterParams::BasicColorAdjustments(p) => p.command(),
            FilterParams::EqualizeShadow(p) => p.command(),
            FilterParams::AddGrain(p) => p.command(),
            FilterParams::PopShadows(p) => p.command(),
            FilterParams::SmoothBilateral(p) => p.command(),
            FilterParams::SmoothGuided(p) => p.command(),
            FilterParams::LightGlow(p) => p.command(),
            FilterParams::Lomo(p) => p.command(),
        }
    }

    /// Serializes to the persisted record.
    pub fn encode(&self) -> StoredPreset {
        StoredPreset::new(self.kind().tag(), &self.command())
    }

    /// Rehydrates a persisted record.
    ///
    /// An unknown tag yields the no-op variant; a command string that does
    /// not match the variant's expected shape yields that variant's
    /// default; every scanned field is clamped.
    pub fn decode(stored: &StoredPreset) -> Self {
        let Some(kind) = FilterKind::from_tag(stored.tag()) else {
            return FilterParams::None;
        };
        let raw = stored.command();
        match kind {
            FilterKind::None => FilterParams::None,
            FilterKind::ExpertMode => FilterParams::ExpertMode(ExpertParams::parse(raw)),
            FilterKind::Sepia => SepiaParams::parse(raw)
                .map(FilterParams::Sepia)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::FilmEmulation => FilmEmulationParams::parse(raw)
                .map(FilterParams::FilmEmulation)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::CustomFilmEmulation => CustomFilmParams::parse(raw)
                .map(FilterParams::CustomFilmEmulation)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::FreakyDetails => FreakyDetailsParams::parse(raw)
                .map(FilterParams::FreakyDetails)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::SharpenRichardsonLucy => SharpenRlParams::parse(raw)
                .map(FilterParams::SharpenRichardsonLucy)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::SharpenGoldMeinel => SharpenGmParams::parse(raw)
                .map(FilterParams::SharpenGoldMeinel)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::SharpenInverseDiffusion => SharpenDiffusionParams::parse(raw)
                .map(FilterParams::SharpenInverseDiffusion)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::MagicDetails => MagicDetailsParams::parse(raw)
                .map(FilterParams::MagicDetails)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::BasicColorAdjustments => ColorAdjustParams::parse(raw)
                .map(FilterParams::BasicColorAdjustments)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::EqualizeShadow => EqualizeShadowParams::parse(raw)
                .map(FilterParams::EqualizeShadow)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::AddGrain => AddGrainParams::parse(raw)
                .map(FilterParams::AddGrain)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::PopShadows => PopShadowsParams::parse(raw)
                .map(FilterParams::PopShadows)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::SmoothBilateral => SmoothBilateralParams::parse(raw)
                .map(FilterParams::SmoothBilateral)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::SmoothGuided => SmoothGuidedParams::parse(raw)
                .map(FilterParams::SmoothGuided)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::LightGlow => LightGlowParams::parse(raw)
                .map(FilterParams::LightGlow)
                .unwrap_or_else(|| Self::default_for(kind)),
            FilterKind::Lomo => LomoParams::parse(raw)
                .map(FilterParams::Lomo)
                .unwrap_or_else(|| Self::default_for(kind)),
        }
    }

    /// Parameters to show when the user switches the selector to `kind`:
    /// the stored configuration when it already targets that variant,
    /// otherwise the variant default. A variant switch is not always a
    /// reset.
    pub fn for_selection(kind: FilterKind, stored: &StoredPreset) -> Self {
        if stored.tag() == kind.tag() {
            Self::decode(stored)
        } else {
            Self::default_for(kind)
        }
    }
}

/// Concatenates every variant's script contribution, in catalog order.
///
/// Pure and stateless; callers that invoke the engine repeatedly cache the
/// result (see `scriptfx-pipeline`), but rebuilding it yields the same
/// blob.
pub fn script_library() -> String {
    let mut library = String::new();
    for kind in FilterKind::CATALOG {
        library.push_str(kind.variant_script());
    }
    library
}
