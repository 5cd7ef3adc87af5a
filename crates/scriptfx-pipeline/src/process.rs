//! The per-call processing entry point.
//!
//! One invocation per pipeline stage evaluation: rehydrate the stored
//! preset, adapt the input buffer, run the engine once, adapt the result
//! back. Every failure mode degrades to "unchanged image" — the host
//! pipeline never sees an error from a filter evaluation, only from
//! handing over wrongly-sized buffers.

use std::sync::OnceLock;

use scriptfx_core::{copy_alpha, from_script, to_script, FrameView, FrameViewMut, Result};
use scriptfx_filters::{script_library, FilterParams, StoredPreset};

use crate::engine::ScriptEngine;

/// What the host is rendering when it evaluates the filter.
///
/// Engine failures are reported on user-facing intents and silently
/// swallowed for background work, so a batch export never spams the
/// notification surface with one warning per image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderIntent {
    /// The main interactive view.
    Interactive,
    /// The navigation/preview rendering.
    Preview,
    /// A thumbnail rendering.
    Thumbnail,
    /// A background export.
    Export,
}

impl RenderIntent {
    /// Whether a failure during this rendering should reach the user.
    #[inline]
    pub fn is_user_facing(self) -> bool {
        matches!(self, RenderIntent::Interactive | RenderIntent::Preview)
    }
}

/// Owns a script engine and drives filter evaluations through it.
pub struct Processor<E> {
    engine: E,
    library: OnceLock<String>,
}

impl<E: ScriptEngine> Processor<E> {
    /// Wraps an engine.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            library: OnceLock::new(),
        }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The combined script library, built on first use and shared by all
    /// subsequent calls.
    pub fn library(&self) -> &str {
        self.library.get_or_init(script_library)
    }

    /// Evaluates the stored preset over one frame.
    ///
    /// `input` and `output` are distinct, pre-allocated host buffers of
    /// `width * height * channels` floats. On return, `output` holds the
    /// filtered frame; if the engine failed or produced nothing, it holds
    /// an exact copy of `input`.
    ///
    /// # Errors
    ///
    /// Only buffer-shape errors from wrapping `input`/`output`; engine
    /// failures are absorbed (see [`RenderIntent`]).
    #[allow(clippy::too_many_arguments)]
    pub fn process(
        &self,
        preset: &StoredPreset,
        input: &[f32],
        output: &mut [f32],
        width: u32,
        height: u32,
        channels: u32,
        intent: RenderIntent,
        mask_display: bool,
    ) -> Result<()> {
        let src = FrameView::new(input, width, height, channels)?;
        let mut dst = FrameViewMut::new(output, width, height, channels)?;

        let params = FilterParams::decode(preset);
        let command = params.command();
        tracing::debug!("running filter {:?}: {command}", params.kind());

        let images = match self.engine.run(self.library(), &command, to_script(&src)) {
            Ok(images) => images,
            Err(err) => {
                if intent.is_user_facing() {
                    tracing::warn!("script engine error: {err}");
                } else {
                    tracing::debug!("script engine error (suppressed): {err}");
                }
                Vec::new()
            }
        };

        match images.first() {
            None => dst.copy_from(&src)?,
            Some(image) => from_script(image, &mut dst),
        }

        if mask_display {
            copy_alpha(&src, &mut dst);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScriptError;
    use approx::assert_abs_diff_eq;
    use scriptfx_core::ScriptImage;
    use scriptfx_filters::FilterKind;

    /// Hands the input image back untouched.
    struct IdentityEngine;

    impl ScriptEngine for IdentityEngine {
        fn run(
            &self,
            _library: &str,
            _command: &str,
            input: ScriptImage,
        ) -> std::result::Result<Vec<ScriptImage>, ScriptError> {
            Ok(vec![input])
        }
    }

    /// Always fails.
    struct FailingEngine;

    impl ScriptEngine for FailingEngine {
        fn run(
            &self,
            _library: &str,
            _command: &str,
            _input: ScriptImage,
        ) -> std::result::Result<Vec<ScriptImage>, ScriptError> {
            Err(ScriptError::Execution("unknown command".to_string()))
        }
    }

    /// Returns a smaller image than it was given.
    struct ShrinkingEngine;

    impl ScriptEngine for ShrinkingEngine {
        fn run(
            &self,
            _library: &str,
            _command: &str,
            input: ScriptImage,
        ) -> std::result::Result<Vec<ScriptImage>, ScriptError> {
            let w = input.width() / 2;
            let h = input.height() / 2;
            let mut out = ScriptImage::new(w, h, 3);
            for y in 0..h {
                for x in 0..w {
                    for c in 0..3 {
                        out.set(x, y, c, input.at(x, y, c));
                    }
                }
            }
            Ok(vec![out])
        }
    }

    /// Returns no image at all.
    struct SwallowingEngine;

    impl ScriptEngine for SwallowingEngine {
        fn run(
            &self,
            _library: &str,
            _command: &str,
            _input: ScriptImage,
        ) -> std::result::Result<Vec<ScriptImage>, ScriptError> {
            Ok(Vec::new())
        }
    }

    fn frame(width: u32, height: u32, channels: u32) -> Vec<f32> {
        let n = (width * height * channels) as usize;
        (0..n).map(|i| (i % 13) as f32 / 12.0).collect()
    }

    fn sepia_preset() -> StoredPreset {
        FilterParams::default_for(FilterKind::Sepia).encode()
    }

    #[test]
    fn identity_engine_roundtrips_pixels() {
        let input = frame(4, 4, 4);
        let mut output = vec![0.0_f32; input.len()];
        let proc = Processor::new(IdentityEngine);
        proc.process(&sepia_preset(), &input, &mut output, 4, 4, 4, RenderIntent::Export, false)
            .expect("valid buffers");
        for (i, (&a, &b)) in input.iter().zip(output.iter()).enumerate() {
            if i % 4 == 3 {
                continue; // alpha is not carried without mask display
            }
            assert_abs_diff_eq!(a, b, epsilon = 1e-5);
        }
    }

    #[test]
    fn engine_failure_passes_through_exactly() {
        let input = frame(4, 4, 4);
        let mut output = vec![0.5_f32; input.len()];
        let proc = Processor::new(FailingEngine);
        proc.process(&sepia_preset(), &input, &mut output, 4, 4, 4, RenderIntent::Export, false)
            .expect("valid buffers");
        assert_eq!(input, output);
    }

    #[test]
    fn empty_result_passes_through_exactly() {
        let input = frame(3, 5, 4);
        let mut output = vec![0.0_f32; input.len()];
        let proc = Processor::new(SwallowingEngine);
        proc.process(&sepia_preset(), &input, &mut output, 3, 5, 4, RenderIntent::Interactive, false)
            .expect("valid buffers");
        assert_eq!(input, output);
    }

    #[test]
    fn shrunk_result_blacks_out_uncovered_region() {
        let input = frame(4, 4, 4);
        let mut output = vec![0.5_f32; input.len()];
        let proc = Processor::new(ShrinkingEngine);
        proc.process(&sepia_preset(), &input, &mut output, 4, 4, 4, RenderIntent::Preview, false)
            .expect("valid buffers");
        let dst = FrameView::new(&output, 4, 4, 4).expect("valid layout");
        // outside the 2x2 covered corner, color channels are exactly zero
        for &(x, y) in &[(2, 0), (3, 3), (0, 2)] {
            assert_eq!(&dst.pixel(x, y)[..3], &[0.0, 0.0, 0.0]);
        }
        // inside the corner, data survived
        assert_abs_diff_eq!(dst.pixel(1, 1)[0], input[(1 * 4 + 1) * 4], epsilon = 1e-5);
    }

    #[test]
    fn mask_display_restores_alpha() {
        let input = frame(4, 4, 4);
        let mut output = vec![0.0_f32; input.len()];
        let proc = Processor::new(ShrinkingEngine);
        proc.process(&sepia_preset(), &input, &mut output, 4, 4, 4, RenderIntent::Interactive, true)
            .expect("valid buffers");
        let src = FrameView::new(&input, 4, 4, 4).expect("valid layout");
        let dst = FrameView::new(&output, 4, 4, 4).expect("valid layout");
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(dst.pixel(x, y)[3], src.pixel(x, y)[3]);
            }
        }
    }

    #[test]
    fn buffer_shape_errors_surface() {
        let input = frame(4, 4, 4);
        let mut output = vec![0.0_f32; 7];
        let proc = Processor::new(IdentityEngine);
        assert!(proc
            .process(&sepia_preset(), &input, &mut output, 4, 4, 4, RenderIntent::Export, false)
            .is_err());
    }

    #[test]
    fn only_interactive_and_preview_are_user_facing() {
        assert!(RenderIntent::Interactive.is_user_facing());
        assert!(RenderIntent::Preview.is_user_facing());
        assert!(!RenderIntent::Thumbnail.is_user_facing());
        assert!(!RenderIntent::Export.is_user_facing());
    }

    #[test]
    fn library_is_built_once_and_stable() {
        let proc = Processor::new(IdentityEngine);
        let a = proc.library().to_string();
        let b = proc.library().to_string();
        assert_eq!(a, b);
        assert!(a.contains("sfx_sepia :"));
    }
}
