//! Conversion between host frames and script-engine images.
//!
//! Two directions, deliberately asymmetric:
//!
//! - [`to_script`] always produces a 3-plane image of exactly the frame's
//!   dimensions, scaling `[0, 1]` host values to the engine's `[0, 255]`
//!   range. It cannot fail.
//! - [`from_script`] copies the engine's result back, scaling `[0, 255]`
//!   to `[0, 1]`. The engine may have resized the image or dropped
//!   channels; any destination pixel the result does not cover, and any
//!   color channel the result does not carry, is written as `0.0`. The
//!   blacked-out region is intentional — it makes an engine that silently
//!   shrank the image visible instead of leaving stale input pixels in
//!   place.
//!
//! The "engine returned nothing at all" case is handled one level up via
//! [`FrameViewMut::copy_from`](crate::FrameViewMut::copy_from): a fully
//! absent result passes the input through unchanged, it does not black the
//! frame out.
//!
//! Alpha (channel 3 and beyond) is never read or written here; the host's
//! mask-display mode copies it explicitly via [`copy_alpha`].

use crate::{FrameView, FrameViewMut, ScriptImage};

/// Packs the first three channels of a host frame into a fresh 3-plane
/// script image, scaling `[0, 1]` to `[0, 255]`.
pub fn to_script(frame: &FrameView<'_>) -> ScriptImage {
    let (width, height) = (frame.width(), frame.height());
    let mut img = ScriptImage::new(width, height, 3);
    for y in 0..height {
        for x in 0..width {
            let pixel = frame.pixel(x, y);
            img.set(x, y, 0, pixel[0] * 255.0);
            img.set(x, y, 1, pixel[1] * 255.0);
            img.set(x, y, 2, pixel[2] * 255.0);
        }
    }
    img
}

/// Unpacks a script image into the host frame, scaling `[0, 255]` to
/// `[0, 1]`.
///
/// Destination pixels outside the image's bounds, and color channels beyond
/// its spectrum, are written as `0.0`. Channels past the first three are
/// left untouched.
pub fn from_script(img: &ScriptImage, frame: &mut FrameViewMut<'_>) {
    let covered_w = frame.width().min(img.width());
    let covered_h = frame.height().min(img.height());
    let spectrum = img.spectrum();

    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let inside = x < covered_w && y < covered_h;
            let pixel = frame.pixel_mut(x, y);
            for c in 0..3 {
                pixel[c as usize] = if inside && c < spectrum {
                    img.at(x, y, c) / 255.0
                } else {
                    0.0
                };
            }
        }
    }
}

/// Copies the alpha channel (channel 3) from `src` to `dst`.
///
/// Used when the host displays a blend mask and the engine's RGB result must
/// keep the original alpha. Does nothing when either frame has no fourth
/// channel or the frames disagree on dimensions.
pub fn copy_alpha(src: &FrameView<'_>, dst: &mut FrameViewMut<'_>) {
    if src.channels() < 4 || dst.channels() < 4 {
        return;
    }
    if src.width() != dst.width() || src.height() != dst.height() {
        return;
    }
    for y in 0..src.height() {
        for x in 0..src.width() {
            dst.pixel_mut(x, y)[3] = src.pixel(x, y)[3];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn frame_data(width: u32, height: u32, channels: u32) -> Vec<f32> {
        let n = (width * height * channels) as usize;
        (0..n).map(|i| (i % 17) as f32 / 16.0).collect()
    }

    #[test]
    fn roundtrip_within_quantization() {
        let data = frame_data(5, 4, 4);
        let mut out = vec![0.0_f32; data.len()];
        let src = FrameView::new(&data, 5, 4, 4).expect("valid layout");
        let img = to_script(&src);
        let mut dst = FrameViewMut::new(&mut out, 5, 4, 4).expect("valid layout");
        from_script(&img, &mut dst);
        for y in 0..4 {
            for x in 0..5 {
                let a = src.pixel(x, y);
                let b = dst.pixel_mut(x, y);
                for c in 0..3 {
                    assert_abs_diff_eq!(a[c], b[c], epsilon = 1.0 / 255.0);
                }
            }
        }
    }

    #[test]
    fn scales_to_byte_range() {
        let data = vec![1.0_f32; 1 * 1 * 3];
        let src = FrameView::new(&data, 1, 1, 3).expect("valid layout");
        let img = to_script(&src);
        assert_eq!(img.at(0, 0, 0), 255.0);
    }

    #[test]
    fn shrunk_result_zero_fills_uncovered_pixels() {
        let mut out = vec![0.9_f32; 4 * 4 * 4];
        let img = ScriptImage::from_planes(2, 2, 3, vec![255.0; 2 * 2 * 3]);
        let mut dst = FrameViewMut::new(&mut out, 4, 4, 4).expect("valid layout");
        from_script(&img, &mut dst);
        // covered quadrant carries data
        assert_eq!(dst.pixel_mut(1, 1)[0], 1.0);
        // everything outside the returned bounds is exactly zero
        for &(x, y) in &[(2, 0), (3, 3), (0, 2), (3, 1)] {
            let px = dst.pixel_mut(x, y);
            assert_eq!(&px[..3], &[0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn narrow_spectrum_zero_fills_missing_channels() {
        let mut out = vec![0.9_f32; 2 * 2 * 4];
        let img = ScriptImage::from_planes(2, 2, 1, vec![127.5; 4]);
        let mut dst = FrameViewMut::new(&mut out, 2, 2, 4).expect("valid layout");
        from_script(&img, &mut dst);
        let px = dst.pixel_mut(0, 0);
        assert_abs_diff_eq!(px[0], 0.5, epsilon = 1e-6);
        assert_eq!(px[1], 0.0);
        assert_eq!(px[2], 0.0);
    }

    #[test]
    fn alpha_is_never_touched_by_unpack() {
        let mut out = vec![0.7_f32; 2 * 2 * 4];
        let img = ScriptImage::new(1, 1, 3);
        let mut dst = FrameViewMut::new(&mut out, 2, 2, 4).expect("valid layout");
        from_script(&img, &mut dst);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(dst.pixel_mut(x, y)[3], 0.7);
            }
        }
    }

    #[test]
    fn copy_alpha_moves_only_channel_three() {
        let src_data: Vec<f32> = (0..2 * 2 * 4).map(|i| i as f32 / 16.0).collect();
        let mut out = vec![0.0_f32; 2 * 2 * 4];
        let src = FrameView::new(&src_data, 2, 2, 4).expect("valid layout");
        let mut dst = FrameViewMut::new(&mut out, 2, 2, 4).expect("valid layout");
        copy_alpha(&src, &mut dst);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(dst.pixel_mut(x, y)[3], src.pixel(x, y)[3]);
                assert_eq!(dst.pixel_mut(x, y)[0], 0.0);
            }
        }
    }

    #[test]
    fn copy_alpha_noop_without_fourth_channel() {
        let src_data = vec![0.5_f32; 2 * 2 * 3];
        let mut out = vec![0.0_f32; 2 * 2 * 3];
        let src = FrameView::new(&src_data, 2, 2, 3).expect("valid layout");
        let mut dst = FrameViewMut::new(&mut out, 2, 2, 3).expect("valid layout");
        copy_alpha(&src, &mut dst);
        assert!(out.iter().all(|&v| v == 0.0));
    }
}
