//! The shared color-channel selector.
//!
//! Many variants take a "channel" argument selecting which color-space
//! sub-channel the effect applies to. It is a closed enumeration of named
//! entries, validated by index clamping — never by name lookup — so that a
//! stored value from a newer catalog degrades to the nearest valid entry
//! instead of failing to decode. Clamp bounds always derive from the list
//! length, not from a literal.

/// Display labels for the channel selector, in wire-index order.
pub const CHANNEL_LABELS: [&str; 33] = [
    "all",
    "RGBA (all)",
    "RGB (all)",
    "RGB (red)",
    "RGB (green)",
    "RGB (blue)",
    "RGBA (alpha)",
    "linear RGB (all)",
    "linear RGB (red)",
    "linear RGB (green)",
    "linear RGB (blue)",
    "YCbCr (luminance)",
    "YCbCr (blue-red chrominances)",
    "YCbCr (blue chrominance)",
    "YCbCr (red chrominance)",
    "Lab (lightness)",
    "Lab (ab-chrominances)",
    "Lab (a-chrominance)",
    "Lab (b-chrominance)",
    "Lch (ch-chrominances)",
    "Lch (c-chrominance)",
    "Lch (h-chrominance)",
    "HSV (hue)",
    "HSV (saturation)",
    "HSV (value)",
    "HSI (intensity)",
    "HSL (lightness)",
    "CMYK (cyan)",
    "CMYK (magenta)",
    "CMYK (yellow)",
    "CMYK (key)",
    "YIQ (luma)",
    "YIQ (chromas)",
];

/// Clamps a decoded channel index into the valid range.
#[inline]
pub fn clamp_channel(index: i32) -> i32 {
    index.clamp(0, CHANNEL_LABELS.len() as i32 - 1)
}

/// Label for a channel index; out-of-range indices are clamped first.
pub fn channel_label(index: i32) -> &'static str {
    CHANNEL_LABELS[clamp_channel(index) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_uses_list_length() {
        assert_eq!(clamp_channel(999), CHANNEL_LABELS.len() as i32 - 1);
        assert_eq!(clamp_channel(999), 32);
        assert_eq!(clamp_channel(-5), 0);
        assert_eq!(clamp_channel(11), 11);
    }

    #[test]
    fn labels_resolve() {
        assert_eq!(channel_label(0), "all");
        assert_eq!(channel_label(11), "YCbCr (luminance)");
        assert_eq!(channel_label(999), "YIQ (chromas)");
    }
}
