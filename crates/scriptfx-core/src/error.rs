//! Error types for scriptfx-core operations.
//!
//! The only failures this crate can surface are structural: a host buffer
//! whose length disagrees with its declared dimensions, or a frame with too
//! few channels to carry RGB data. Everything downstream of a successfully
//! constructed view is infallible by design (the filter module degrades to
//! pass-through rather than erroring, see `scriptfx-pipeline`).

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while wrapping host pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer length does not match `width * height * channels`.
    #[error("buffer of {actual} samples does not match {width}x{height}x{channels} ({expected} samples)")]
    BufferSizeMismatch {
        /// Declared frame width in pixels
        width: u32,
        /// Declared frame height in pixels
        height: u32,
        /// Declared channels per pixel
        channels: u32,
        /// Sample count implied by the dimensions
        expected: usize,
        /// Sample count actually provided
        actual: usize,
    },

    /// Frame has fewer than the three channels the adapter reads.
    #[error("frame with {channels} channels, at least 3 required")]
    TooFewChannels {
        /// Channels per pixel that were declared
        channels: u32,
    },

    /// Two frames that must share dimensions do not.
    #[error("frame dimensions {src_width}x{src_height}x{src_channels} do not match {dst_width}x{dst_height}x{dst_channels}")]
    DimensionMismatch {
        /// Source frame width
        src_width: u32,
        /// Source frame height
        src_height: u32,
        /// Source frame channels
        src_channels: u32,
        /// Destination frame width
        dst_width: u32,
        /// Destination frame height
        dst_height: u32,
        /// Destination frame channels
        dst_channels: u32,
    },
}
