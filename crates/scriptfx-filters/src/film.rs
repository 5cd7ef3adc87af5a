//! The built-in film emulation catalog.
//!
//! A static ordered table of (command id, display label) pairs, grouped the
//! way the script library's color lookup tables are shipped. Built once at
//! compile time and read-only forever; the film-emulation variant stores
//! the command id in its serialized form, never the display label or a
//! table index.

/// One built-in film stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilmPreset {
    /// Identifier passed to the script library's `clut` command.
    pub id: &'static str,
    /// Human-readable label for selector UIs.
    pub label: &'static str,
}

const fn film(id: &'static str, label: &'static str) -> FilmPreset {
    FilmPreset { id, label }
}

/// Every built-in film stock, in catalog order.
pub static FILM_PRESETS: &[FilmPreset] = &[
    // black and white
    film("agfa_apx_25", "Agfa APX 25"),
    film("agfa_apx_100", "Agfa APX 100"),
    film("fuji_neopan_1600_-", "Fuji Neopan 1600 -"),
    film("fuji_neopan_1600", "Fuji Neopan 1600"),
    film("fuji_neopan_1600_+", "Fuji Neopan 1600 +"),
    film("fuji_neopan_1600_++", "Fuji Neopan 1600 ++"),
    film("fuji_neopan_acros_100", "Fuji Neopan Acros 100"),
    film("ilford_delta_100", "Ilford Delta 100"),
    film("ilford_delta_400", "Ilford Delta 400"),
    film("ilford_delta_3200", "Ilford Delta 3200"),
    film("ilford_fp4_plus_125", "Ilford FP4 plus 125"),
    film("ilford_hp5_plus_400", "Ilford HP5 plus 400"),
    film("ilford_hps_800", "Ilford HPS 800"),
    film("ilford_pan_f_plus_50", "Ilford Pan F plus 50"),
    film("ilford_xp2", "Ilford XP2"),
    film("kodak_bw_400_cn", "Kodak BW 400 CN"),
    film("kodak_hie_(hs_infra)", "Kodak hie (hs infra)"),
    film("kodak_t-max_100", "Kodak T-Max 100"),
    film("kodak_t-max_400", "Kodak T-Max 400"),
    film("kodak_t-max_3200", "Kodak T-Max 3200"),
    film("kodak_tri-x_400_-", "Kodak Tri-X 400 -"),
    film("kodak_tri-x_400", "Kodak Tri-X 400"),
    film("kodak_tri-x_400_+", "Kodak Tri-X 400 +"),
    film("kodak_tri-x_400_++", "Kodak Tri-X 400 ++"),
    film("polaroid_664", "Polaroid 664"),
    film("polaroid_667", "Polaroid 667"),
    film("polaroid_672", "Polaroid 672"),
    film("rollei_ir_400", "Rollei IR 400"),
    film("rollei_ortho_25", "Rollei Ortho 25"),
    film("rollei_retro_100_tonal", "Rollei Retro 100 tonal"),
    film("rollei_retro_80s", "Rollei Retro 80s"),
    // Fuji X-Trans
    film("fuji_xtrans_ii_astia_v2", "Fuji X-Trans II Astia"),
    film("fuji_xtrans_ii_classic_chrome_v1", "Fuji X-Trans II Classic Chrome"),
    film("fuji_xtrans_ii_pro_neg_hi_v2", "Fuji X-Trans II Pro Neg hi"),
    film("fuji_xtrans_ii_pro_neg_std_v2", "Fuji X-Trans II Pro Neg std"),
    film("fuji_xtrans_ii_provia_v2", "Fuji X-Trans II Provia"),
    film("fuji_xtrans_ii_velvia_v2", "Fuji X-Trans II Velvia"),
    // instant consumer
    film("polaroid_px-100uv+_cold_--", "Polaroid PX-100uv+ cold --"),
    film("polaroid_px-100uv+_cold_-", "Polaroid PX-100uv+ cold -"),
    film("polaroid_px-100uv+_cold", "Polaroid PX-100uv+ cold"),
    film("polaroid_px-100uv+_cold_+", "Polaroid PX-100uv+ cold +"),
    film("polaroid_px-100uv+_cold_++", "Polaroid PX-100uv+ cold ++"),
    film("polaroid_px-100uv+_cold_+++", "Polaroid PX-100uv+ cold +++"),
    film("polaroid_px-100uv+_warm_--", "Polaroid PX-100uv+ warm --"),
    film("polaroid_px-100uv+_warm_-", "Polaroid PX-100uv+ warm -"),
    film("polaroid_px-100uv+_warm", "Polaroid PX-100uv+ warm"),
    film("polaroid_px-100uv+_warm_+", "Polaroid PX-100uv+ warm +"),
    film("polaroid_px-100uv+_warm_++", "Polaroid PX-100uv+ warm ++"),
    film("polaroid_px-100uv+_warm_+++", "Polaroid PX-100uv+ warm +++"),
    film("polaroid_px-680_--", "Polaroid PX-680 --"),
    film("polaroid_px-680_-", "Polaroid PX-680 -"),
    film("polaroid_px-680", "Polaroid PX-680"),
    film("polaroid_px-680_+", "Polaroid PX-680 +"),
    film("polaroid_px-680_++", "Polaroid PX-680 ++"),
    film("polaroid_px-680_cold_--", "Polaroid PX-680 cold --"),
    film("polaroid_px-680_cold_-", "Polaroid PX-680 cold -"),
    film("polaroid_px-680_cold", "Polaroid PX-680 cold"),
    film("polaroid_px-680_cold_+", "Polaroid PX-680 cold +"),
    film("polaroid_px-680_cold_++", "Polaroid PX-680 cold ++"),
    film("polaroid_px-680_cold_++_alt", "Polaroid PX-680 cold ++ alt"),
    film("polaroid_px-680_warm_--", "Polaroid PX-680 warm --"),
    film("polaroid_px-680_warm_-", "Polaroid PX-680 warm -"),
    film("polaroid_px-680_warm", "Polaroid PX-680 warm"),
    film("polaroid_px-680_warm_+", "Polaroid PX-680 warm +"),
    film("polaroid_px-680_warm_++", "Polaroid PX-680 warm ++"),
    film("polaroid_px-70_--", "Polaroid PX-70 --"),
    film("polaroid_px-70_-", "Polaroid PX-70 -"),
    film("polaroid_px-70", "Polaroid PX-70"),
    film("polaroid_px-70_+", "Polaroid PX-70 +"),
    film("polaroid_px-70_++", "Polaroid PX-70 ++"),
    film("polaroid_px-70_+++", "Polaroid PX-70 +++"),
    film("polaroid_px-70_cold_--", "Polaroid PX-70 cold --"),
    film("polaroid_px-70_cold_-", "Polaroid PX-70 cold -"),
    film("polaroid_px-70_cold", "Polaroid PX-70 cold"),
    film("polaroid_px-70_cold_+", "Polaroid PX-70 cold +"),
    film("polaroid_px-70_cold_++", "Polaroid PX-70 cold ++"),
    film("polaroid_px-70_warm_--", "Polaroid PX-70 warm --"),
    film("polaroid_px-70_warm_-", "Polaroid PX-70 warm -"),
    film("polaroid_px-70_warm", "Polaroid PX-70 warm"),
    film("polaroid_px-70_warm_+", "Polaroid PX-70 warm +"),
    film("polaroid_px-70_warm_++", "Polaroid PX-70 warm ++"),
    film("polaroid_time_zero_(expired)_---", "Polaroid time zero (expired) ---"),
    film("polaroid_time_zero_(expired)_--", "Polaroid time zero (expired) --"),
    film("polaroid_time_zero_(expired)_-", "Polaroid time zero (expired) -"),
    film("polaroid_time_zero_(expired)", "Polaroid time zero (expired)"),
    film("polaroid_time_zero_(expired)_+", "Polaroid time zero (expired) +"),
    film("polaroid_time_zero_(expired)_++", "Polaroid time zero (expired) ++"),
    film("polaroid_time_zero_(expired)_cold_---", "Polaroid time zero (expired) cold ---"),
    film("polaroid_time_zero_(expired)_cold_--", "Polaroid time zero (expired) cold --"),
    film("polaroid_time_zero_(expired)_cold_-", "Polaroid time zero (expired) cold -"),
    film("polaroid_time_zero_(expired)_cold", "Polaroid time zero (expired) cold"),
    // instant pro
    film("fuji_fp-100c_--", "Fuji FP-100c --"),
    film("fuji_fp-100c_-", "Fuji FP-100c -"),
    film("fuji_fp-100c", "Fuji FP-100c"),
    film("fuji_fp-100c_+", "Fuji FP-100c +"),
    film("fuji_fp-100c_++", "Fuji FP-100c ++"),
    film("fuji_fp-100c_++_alt", "Fuji FP-100c ++ alt"),
    film("fuji_fp-100c_+++", "Fuji FP-100c +++"),
    film("fuji_fp-100c_cool_--", "Fuji FP-100c cool --"),
    film("fuji_fp-100c_cool_-", "Fuji FP-100c cool -"),
    film("fuji_fp-100c_cool", "Fuji FP-100c cool"),
    film("fuji_fp-100c_cool_+", "Fuji FP-100c cool +"),
    film("fuji_fp-100c_cool_++", "Fuji FP-100c cool ++"),
    film("fuji_fp-100c_negative_--", "Fuji FP-100c negative --"),
    film("fuji_fp-100c_negative_-", "Fuji FP-100c negative -"),
    film("fuji_fp-100c_negative", "Fuji FP-100c negative"),
    film("fuji_fp-100c_negative_+", "Fuji FP-100c negative +"),
    film("fuji_fp-100c_negative_++", "Fuji FP-100c negative ++"),
    film("fuji_fp-100c_negative_++_alt", "Fuji FP-100c negative ++ alt"),
    film("fuji_fp-100c_negative_+++", "Fuji FP-100c negative +++"),
    film("fuji_fp-3000b_--", "Fuji FP-3000b --"),
    film("fuji_fp-3000b_-", "Fuji FP-3000b -"),
    film("fuji_fp-3000b", "Fuji FP-3000b"),
    film("fuji_fp-3000b_+", "Fuji FP-3000b +"),
    film("fuji_fp-3000b_++", "Fuji FP-3000b ++"),
    film("fuji_fp-3000b_+++", "Fuji FP-3000b +++"),
    film("fuji_fp-3000b_hc", "Fuji FP-3000b hc"),
    film("fuji_fp-3000b_negative_--", "Fuji FP-3000b negative --"),
    film("fuji_fp-3000b_negative_-", "Fuji FP-3000b negative -"),
    film("fuji_fp-3000b_negative", "Fuji FP-3000b negative"),
    film("fuji_fp-3000b_negative_+", "Fuji FP-3000b negative +"),
    film("fuji_fp-3000b_negative_++", "Fuji FP-3000b negative ++"),
    film("fuji_fp-3000b_negative_+++", "Fuji FP-3000b negative +++"),
    film("fuji_fp-3000b_negative_early", "Fuji FP-3000b negative early"),
    film("polaroid_665_-", "Polaroid 665 -"),
    film("polaroid_665_--", "Polaroid 665 --"),
    film("polaroid_665", "Polaroid 665"),
    film("polaroid_665_+", "Polaroid 665 +"),
    film("polaroid_665_++", "Polaroid 665 ++"),
    film("polaroid_665_negative", "Polaroid 665 negative"),
    film("polaroid_665_negative_+", "Polaroid 665 negative +"),
    film("polaroid_665_negative_-", "Polaroid 665 negative -"),
    film("polaroid_665_negative_hc", "Polaroid 665 negative hc"),
    film("polaroid_669_--", "Polaroid 669 --"),
    film("polaroid_669_-", "Polaroid 669 -"),
    film("polaroid_669", "Polaroid 669"),
    film("polaroid_669_+", "Polaroid 669 +"),
    film("polaroid_669_++", "Polaroid 669 ++"),
    film("polaroid_669_+++", "Polaroid 669 +++"),
    film("polaroid_669_cold_--", "Polaroid 669 cold --"),
    film("polaroid_669_cold_-", "Polaroid 669 cold -"),
    film("polaroid_669_cold", "Polaroid 669 cold"),
    film("polaroid_669_cold_+", "Polaroid 669 cold +"),
    film("polaroid_690_--", "Polaroid 690 --"),
    film("polaroid_690_-", "Polaroid 690 -"),
    film("polaroid_690", "Polaroid 690"),
    film("polaroid_690_+", "Polaroid 690 +"),
    film("polaroid_690_++", "Polaroid 690 ++"),
    film("polaroid_690_cold_--", "Polaroid 690 cold --"),
    film("polaroid_690_cold_-", "Polaroid 690 cold -"),
    film("polaroid_690_cold", "Polaroid 690 cold"),
    film("polaroid_690_cold_+", "Polaroid 690 cold +"),
    film("polaroid_690_cold_++", "Polaroid 690 cold ++"),
    film("polaroid_690_warm_--", "Polaroid 690 warm --"),
    film("polaroid_690_warm_-", "Polaroid 690 warm -"),
    film("polaroid_690_warm", "Polaroid 690 warm"),
    film("polaroid_690_warm_+", "Polaroid 690 warm +"),
    film("polaroid_690_warm_++", "Polaroid 690 warm ++"),
    // negative color
    film("agfa_ultra_color_100", "Agfa Ultra color 100"),
    film("agfa_vista_200", "Agfa Vista 200"),
    film("fuji_superia_200", "Fuji Superia 200"),
    film("fuji_superia_hg_1600", "Fuji Superia hg 1600"),
    film("fuji_superia_reala_100", "Fuji Superia Reala 100"),
    film("fuji_superia_x-tra_800", "Fuji Superia X-Tra 800"),
    film("kodak_elite_100_xpro", "Kodak Elite 100 XPRO"),
    film("kodak_elite_color_200", "Kodak Elite Color 200"),
    film("kodak_elite_color_400", "Kodak Elite Color 400"),
    film("kodak_portra_160_nc_-", "Kodak Portra 160 NC -"),
    film("kodak_portra_160_nc", "Kodak Portra 160 NC"),
    film("kodak_portra_160_nc_+", "Kodak Portra 160 NC +"),
    film("kodak_portra_160_nc_++", "Kodak Portra 160 NC ++"),
    film("kodak_portra_160_vc_-", "Kodak Portra 160 VC -"),
    film("kodak_portra_160_vc", "Kodak Portra 160 VC"),
    film("kodak_portra_160_vc_+", "Kodak Portra 160 VC +"),
    film("kodak_portra_160_vc_++", "Kodak Portra 160 VC ++"),
    film("lomography_redscale_100", "Lomography Redscale 100"),
    // negative new
    film("fuji_160c_-", "Fuji 160C -"),
    film("fuji_160c", "Fuji 160C"),
    film("fuji_160c_+", "Fuji 160C +"),
    film("fuji_160c_++", "Fuji 160C ++"),
    film("fuji_400h_-", "Fuji 400H -"),
    film("fuji_400h", "Fuji 400H"),
    film("fuji_400h_+", "Fuji 400H +"),
    film("fuji_400h_++", "Fuji 400H ++"),
    film("fuji_800z_-", "Fuji 800Z -"),
    film("fuji_800z", "Fuji 800Z"),
    film("fuji_800z_+", "Fuji 800Z +"),
    film("fuji_800z_++", "Fuji 800Z ++"),
    film("fuji_800z_-", "Fuji 800Z -"),
    film("fuji_ilford_hp5_-", "Fuji Ilford HP5 -"),
    film("fuji_ilford_hp5", "Fuji Ilford HP5"),
    film("fuji_ilford_hp5_+", "Fuji Ilford HP5 +"),
    film("fuji_ilford_hp5_++", "Fuji Ilford HP5 ++"),
    film("kodak_portra_160_-", "Kodak Portra 160 -"),
    film("kodak_portra_160", "Kodak Portra 160"),
    film("kodak_portra_160_+", "Kodak Portra 160 +"),
    film("kodak_portra_160_++", "Kodak Portra 160 ++"),
    film("kodak_portra_400_-", "Kodak Portra 400 -"),
    film("kodak_portra_400", "Kodak Portra 400"),
    film("kodak_portra_400_+", "Kodak Portra 400 +"),
    film("kodak_portra_400_++", "Kodak Portra 400 ++"),
    film("kodak_portra_800_-", "Kodak Portra 800 -"),
    film("kodak_portra_800", "Kodak Portra 800"),
    film("kodak_portra_800_+", "Kodak Portra 800 +"),
    film("kodak_portra_800_++", "Kodak Portra 800 ++"),
    film("kodak_tmax_3200_-", "Kodak T-Max 3200 -"),
    film("kodak_tmax_3200", "Kodak T-Max 3200"),
    film("kodak_tmax_3200_+", "Kodak T-Max 3200 +"),
    film("kodak_tmax_3200_++", "Kodak T-Max 3200 ++"),
    film("kodak_tri-x_400_-", "Kodak Tri-X 400 -"),
    film("kodak_tri-x_400", "Kodak Tri-X 400"),
    film("kodak_tri-x_400_+", "Kodak Tri-X 400 +"),
    film("kodak_tri-x_400_++", "Kodak Tri-X 400 ++"),
    // negative old
    film("fuji_ilford_delta_3200_-", "Fuji Ilford Delta 3200 -"),
    film("fuji_ilford_delta_3200", "Fuji Ilford Delta 3200"),
    film("fuji_ilford_delta_3200_+", "Fuji Ilford Delta 3200 +"),
    film("fuji_ilford_delta_3200_++", "Fuji Ilford Delta 3200 ++"),
    film("fuji_superia_100_-", "Fuji Superia 100 -"),
    film("fuji_superia_100", "Fuji Superia 100"),
    film("fuji_superia_100_+", "Fuji Superia 100 +"),
    film("fuji_superia_100_++", "Fuji Superia 100 ++"),
    film("fuji_superia_400_-", "Fuji Superia 400 -"),
    film("fuji_superia_400", "Fuji Superia 400"),
    film("fuji_superia_400_+", "Fuji Superia 400 +"),
    film("fuji_superia_400_++", "Fuji Superia 400 ++"),
    film("fuji_superia_800_-", "Fuji Superia 800 -"),
    film("fuji_superia_800", "Fuji Superia 800"),
    film("fuji_superia_800_+", "Fuji Superia 800 +"),
    film("fuji_superia_800_++", "Fuji Superia 800 ++"),
    film("fuji_superia_1600_-", "Fuji Superia 1600 -"),
    film("fuji_superia_1600", "Fuji Superia 1600"),
    film("fuji_superia_1600_+", "Fuji Superia 1600 +"),
    film("fuji_superia_1600_++", "Fuji Superia 1600 ++"),
    film("kodak_portra_160_nc_-", "Kodak Portra 160 NC -"),
    film("kodak_portra_160_nc", "Kodak Portra 160 NC"),
    film("kodak_portra_160_nc_+", "Kodak Portra 160 NC +"),
    film("kodak_portra_160_nc_++", "Kodak Portra 160 NC ++"),
    film("kodak_portra_160_vc_-", "Kodak Portra 160 VC -"),
    film("kodak_portra_160_vc", "Kodak Portra 160 VC"),
    film("kodak_portra_160_vc_+", "Kodak Portra 160 VC +"),
    film("kodak_portra_160_vc_++", "Kodak Portra 160 VC ++"),
    film("kodak_portra_400_nc_-", "Kodak Portra 400 NC -"),
    film("kodak_portra_400_nc", "Kodak Portra 400 NC"),
    film("kodak_portra_400_nc_+", "Kodak Portra 400 NC +"),
    film("kodak_portra_400_nc_++", "Kodak Portra 400 NC ++"),
    film("kodak_portra_400_uc_-", "Kodak Portra 400 UC -"),
    film("kodak_portra_400_uc", "Kodak Portra 400 UC"),
    film("kodak_portra_400_uc_+", "Kodak Portra 400 UC +"),
    film("kodak_portra_400_uc_++", "Kodak Portra 400 UC ++"),
    film("kodak_portra_400_vc_-", "Kodak Portra 400 VC -"),
    film("kodak_portra_400_vc", "Kodak Portra 400 VC"),
    film("kodak_portra_400_vc_+", "Kodak Portra 400 VC +"),
    film("kodak_portra_400_vc_++", "Kodak Portra 400 VC ++"),
    // Picture FX
    film("analogfx_anno_1870_color", "AnalogFX anno 1870 color"),
    film("analogfx_old_style_i", "AnalogFX old style I"),
    film("analogfx_old_style_ii", "AnalogFX old style II"),
    film("analogfx_old_style_iii", "AnalogFX old style III"),
    film("analogfx_sepia_color", "AnalogFX sepia color"),
    film("analogfx_soft_sepia_i", "AnalogFX soft sepia I"),
    film("analogfx_soft_sepia_ii", "AnalogFX soft sepia II"),
    film("goldfx_bright_spring_breeze", "GoldFX bright spring breeze"),
    film("goldfx_bright_summer_heat", "GoldFX bright summer heat"),
    film("goldfx_hot_summer_heat", "GoldFX hot summer heat"),
    film("goldfx_perfect_sunset_01min", "GoldFX perfect sunset 1min"),
    film("goldfx_perfect_sunset_05min", "GoldFX perfect sunset 5min"),
    film("goldfx_perfect_sunset_10min", "GoldFX perfect sunset 10min"),
    film("goldfx_spring_breeze", "GoldFX spring breeze"),
    film("goldfx_summer_heat", "GoldFX summer heat"),
    film("technicalfx_backlight_filter", "TechnicalFX backlight filter"),
    film("zilverfx_b_w_solarization", "ZiverFX bw solarization"),
    film("zilverfx_infrared", "ZiverFX infrared"),
    film("zilverfx_vintage_b_w", "ZiverFX vintage bw"),
    // film print
    film("fuji3510_constlclip", "Fuji 3510 constlclip"),
    film("fuji3510_constlmap", "Fuji 3510 constlmap"),
    film("fuji3510_cuspclip", "Fuji 3510 cuspclip"),
    film("fuji3513_constlclip", "Fuji 3513 constlclip"),
    film("fuji3513_constlmap", "Fuji 3513 constlmap"),
    film("fuji3513_cuspclip", "Fuji 3513 cuspclip"),
    film("kodak2383_constlclip", "Kodak 2383 constlclip"),
    film("kodak2383_constlmap", "Kodak 2383 constlmap"),
    film("kodak2383_cuspclip", "Kodak 2383 cuspclip"),
    film("kodak2393_constlclip", "Kodak 2393 constlclip"),
    film("kodak2393_constlmap", "Kodak 2393 constlmap"),
    film("kodak2393_cuspclip", "Kodak 2393 cuspclip"),
    // slide color
    film("agfa_precisa_100", "Agfa Precisa 100"),
    film("fuji_astia_100f", "Fuji Astia 100f"),
    film("fuji_fp_100c", "Fuji FP-100c"),
    film("fuji_provia_100f", "Fuji Provia 100F"),
    film("fuji_provia_400f", "Fuji Provia 400F"),
    film("fuji_provia_400x", "Fuji Provia 400X"),
    film("fuji_sensia_100", "Fuji Sensia 100"),
    film("fuji_superia_200_xpro", "Fuji Superia 200 XPRO"),
    film("fuji_velvia_50", "Fuji Velvia 50"),
    film("generic_fuji_astia_100", "generic Fuji Astia 100"),
    film("generic_fuji_provia_100", "generic Fuji Provia 100"),
    film("generic_fuji_velvia_100", "generic Fuji Aelvia 100"),
    film("generic_kodachrome_64", "generic Kodachrome 64"),
    film("generic_kodak_ektachrome_100_vs", "generic Kodak Ektachrome 100 VS"),
    film("kodak_e-100_gx_ektachrome_100", "Kodak E-100 GX Ektachrome 100"),
    film("kodak_ektachrome_100_vs", "Kodak Ektachrome 100 VS"),
    film("kodak_elite_chrome_200", "Kodak Elite Chrome 200"),
    film("kodak_elite_chrome_400", "Kodak Elite Chrome 400"),
    film("kodak_elite_extracolor_100", "Kodak Elite Extracolor 100"),
    film("kodak_kodachrome_200", "Kodak Kodachrome 200"),
    film("kodak_kodachrome_25", "Kodak Kodachrome 25"),
    film("kodak_kodachrome_64", "Kodak Kodachrome 64"),
    film("lomography_x-pro_slide_200", "Lomography X-Pro Slide 200"),
    film("polaroid_polachrome", "Polaroid Polachrome"),
    // various
    film("60's", "60's"),
    film("60's_faded", "60's faded"),
    film("60's_faded_alt", "60's faded alt"),
    film("alien_green", "alien green"),
    film("black_and_white", "black and white"),
    film("bleach_bypass", "bleach bypass"),
    film("blue_mono", "blue mono"),
    film("color_rich", "color rich"),
    film("faded", "faded"),
    film("faded_alt", "faded alt"),
    film("faded_analog", "faded analog"),
    film("faded_extreme", "faded extreme"),
    film("faded_vivid", "faded vivid"),
    film("expired_fade", "expired fade"),
    film("expired_polaroid", "expired Polaroid"),
    film("extreme", "extreme"),
    film("fade", "fade"),
    film("faux_infrared", "faux infrared"),
    film("golden", "golden"),
    film("golden_bright", "golden bright"),
    film("golden_fade", "golden fade"),
    film("golden_mono", "golden mono"),
    film("golden_vibrant", "golden vibrant"),
    film("green_mono", "green mono"),
    film("hong_kong", "hong kong"),
    film("light_blown", "light blown"),
    film("lomo", "lomo"),
    film("mono_tinted", "mono tinted"),
    film("muted_fade", "muted fade"),
    film("mute_shift", "mute shift"),
    film("natural_vivid", "natural vivid"),
    film("nostalgic", "nostalgic"),
    film("orange_tone", "orange tone"),
    film("pink_fade", "pink fade"),
    film("purple", "purple"),
    film("retro", "retro"),
    film("rotate_muted", "rotate muted"),
    film("rotate_vibrant", "rotate vibrant"),
    film("rotated", "rotated"),
    film("rotated_crush", "rotated crush"),
    film("smooth_cromeish", "smooth cromeish"),
    film("smooth_fade", "smooth fade"),
    film("soft_fade", "soft fade"),
    film("solarized_color", "solarized color"),
    film("solarized_color2", "solarized color2"),
    film("summer", "summer"),
    film("summer_alt", "summer alt"),
    film("sunny", "sunny"),
    film("sunny_alt", "sunny alt"),
    film("sunny_rich", "sunny rich"),
    film("sunny_warm", "sunny warm"),
    film("super_warm", "super warm"),
    film("super_warm_rich", "super warm rich"),
    film("sutro_fx", "Sutro FX"),
    film("vibrant", "vibrant"),
    film("vibrant_alien", "vibrant alien"),
    film("vibrant_contrast", "vibrant contrast"),
    film("vibrant_cromeish", "vibrant cromeish"),
    film("vintage", "vintage"),
    film("vintage_alt", "vintage alt"),
    film("vintage_brighter", "vintage brighter"),
    film("warm", "warm"),
    film("warm_highlight", "warm highlight"),
    film("warm_yellow", "warm yellow"),
];

/// Looks up a built-in stock by its command id.
pub fn find_film(id: &str) -> Option<&'static FilmPreset> {
    FILM_PRESETS.iter().find(|f| f.id == id)
}

/// The catalog's default stock id.
pub fn default_film() -> &'static str {
    FILM_PRESETS[0].id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_populated() {
        assert_eq!(FILM_PRESETS.len(), 372);
        assert_eq!(default_film(), "agfa_apx_25");
    }

    #[test]
    fn lookup_by_id() {
        let f = find_film("kodak_tri-x_400").expect("catalog entry");
        assert_eq!(f.label, "Kodak Tri-X 400");
        assert!(find_film("no_such_film").is_none());
    }
}
