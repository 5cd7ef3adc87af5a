//! Integration tests for the scriptfx crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the preset registry, the pixel adapter, and the processor.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use scriptfx_core::{FrameView, ScriptImage};
    use scriptfx_filters::{
        FilterKind, FilterParams, SepiaParams, StockCatalog, StoredPreset,
    };
    use scriptfx_pipeline::{Processor, RenderIntent, ScriptEngine, ScriptError};

    /// Hands the input image back untouched.
    struct IdentityEngine;

    impl ScriptEngine for IdentityEngine {
        fn run(
            &self,
            _library: &str,
            _command: &str,
            input: ScriptImage,
        ) -> Result<Vec<ScriptImage>, ScriptError> {
            Ok(vec![input])
        }
    }

    /// Fails unless the command is empty, recording nothing.
    struct StrictEngine;

    impl ScriptEngine for StrictEngine {
        fn run(
            &self,
            library: &str,
            command: &str,
            input: ScriptImage,
        ) -> Result<Vec<ScriptImage>, ScriptError> {
            // a command must always come with the library that defines it
            if !command.is_empty() {
                let name = command.split_whitespace().next().unwrap_or("");
                if !library.contains(name) {
                    return Err(ScriptError::Execution(format!("unknown command {name}")));
                }
            }
            Ok(vec![input])
        }
    }

    fn frame(width: u32, height: u32, channels: u32) -> Vec<f32> {
        let n = (width * height * channels) as usize;
        (0..n).map(|i| ((i * 7) % 29) as f32 / 28.0).collect()
    }

    #[test]
    fn every_default_command_is_defined_by_the_library() {
        let input = frame(4, 4, 4);
        let mut output = vec![0.0_f32; input.len()];
        let proc = Processor::new(StrictEngine);
        for kind in FilterKind::CATALOG {
            if kind == FilterKind::CustomFilmEmulation {
                continue; // empty stock catalog encodes an empty command
            }
            let stored = FilterParams::default_for(kind).encode();
            proc.process(&stored, &input, &mut output, 4, 4, 4, RenderIntent::Export, false)
                .expect("valid buffers");
            // StrictEngine returned the image, so output is not passthrough-black
            assert!(output.iter().any(|&v| v != 0.0), "variant {kind:?}");
        }
    }

    #[test]
    fn stored_records_roundtrip_through_wire_bytes() {
        for kind in FilterKind::CATALOG {
            let stored = FilterParams::default_for(kind).encode();
            let bytes = stored.to_bytes();
            let back = StoredPreset::from_bytes(&bytes).expect("exact wire size");
            assert_eq!(stored, back);
            assert_eq!(FilterParams::decode(&back), FilterParams::default_for(kind));
        }
    }

    #[test]
    fn sepia_percent_scaling_on_the_wire() {
        let stored = FilterParams::Sepia(SepiaParams {
            brightness: 0.5,
            contrast: -0.3,
            gamma: 0.0,
        })
        .encode();
        assert_eq!(stored.command(), "sfx_sepia 50,-30,0");
        assert!(stored.command().contains("50"));
        assert!(stored.command().contains("-30"));
    }

    #[test]
    fn freaky_details_garbage_decodes_to_default() {
        let stored = StoredPreset::new(
            FilterKind::FreakyDetails.tag(),
            "sfx_freaky_details amplitude=6",
        );
        let params = FilterParams::decode(&stored);
        match params {
            FilterParams::FreakyDetails(p) => {
                assert_eq!(p.amplitude, 2);
                assert_eq!(p.scale, 10.0);
                assert_eq!(p.iterations, 1);
                assert_eq!(p.channel, 11);
            }
            other => panic!("expected freaky details, got {other:?}"),
        }
    }

    #[test]
    fn channel_overflow_clamps_to_catalog_max() {
        let stored = StoredPreset::new(
            FilterKind::FreakyDetails.tag(),
            "sfx_freaky_details 2,10,1,999",
        );
        match FilterParams::decode(&stored) {
            FilterParams::FreakyDetails(p) => assert_eq!(p.channel, 32),
            other => panic!("expected freaky details, got {other:?}"),
        }
    }

    #[test]
    fn processed_frame_matches_input_through_identity_engine() {
        let input = frame(6, 5, 4);
        let mut output = vec![0.0_f32; input.len()];
        let proc = Processor::new(IdentityEngine);
        let stored = FilterParams::default_for(FilterKind::Lomo).encode();
        proc.process(&stored, &input, &mut output, 6, 5, 4, RenderIntent::Interactive, true)
            .expect("valid buffers");
        let src = FrameView::new(&input, 6, 5, 4).expect("valid layout");
        let dst = FrameView::new(&output, 6, 5, 4).expect("valid layout");
        for y in 0..5 {
            for x in 0..6 {
                for c in 0..3 {
                    assert_abs_diff_eq!(
                        src.pixel(x, y)[c],
                        dst.pixel(x, y)[c],
                        epsilon = 1e-5
                    );
                }
                // mask display carried alpha through
                assert_eq!(src.pixel(x, y)[3], dst.pixel(x, y)[3]);
            }
        }
    }

    #[test]
    fn custom_stock_scan_feeds_the_custom_variant() {
        use scriptfx_filters::CustomFilmParams;

        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("portra_400.cube"), b"").expect("write");
        std::fs::write(dir.path().join("ektar_100.cube"), b"").expect("write");

        let catalog = StockCatalog::scan(dir.path());
        assert_eq!(catalog.len(), 2);

        let params = CustomFilmParams::default_with(&catalog);
        assert!(params.film.ends_with("ektar_100.cube"), "sorted by label");

        let stored = FilterParams::CustomFilmEmulation(params.clone()).encode();
        assert_eq!(
            FilterParams::decode(&stored),
            FilterParams::CustomFilmEmulation(params)
        );
    }

    #[test]
    fn selector_switch_keeps_stored_params_only_for_matching_variant() {
        let stored = FilterParams::Sepia(SepiaParams {
            brightness: 0.25,
            contrast: 0.0,
            gamma: -0.5,
        })
        .encode();

        // switching to sepia restores the stored values
        match FilterParams::for_selection(FilterKind::Sepia, &stored) {
            FilterParams::Sepia(p) => assert_eq!(p.brightness, 0.25),
            other => panic!("expected sepia, got {other:?}"),
        }
        // switching anywhere else resets to that variant's default
        assert_eq!(
            FilterParams::for_selection(FilterKind::AddGrain, &stored),
            FilterParams::default_for(FilterKind::AddGrain)
        );
    }

    #[test]
    fn oversized_expert_command_is_truncated_not_overflowed() {
        use scriptfx_filters::{ExpertParams, MAX_COMMAND_LEN};

        let huge = "blur 2 ".repeat(400);
        let stored = FilterParams::ExpertMode(ExpertParams {
            command: huge.clone(),
        })
        .encode();
        assert_eq!(stored.command().len(), MAX_COMMAND_LEN);
        assert!(huge.starts_with(stored.command()));
    }
}
