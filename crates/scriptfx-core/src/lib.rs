//! # scriptfx-core
//!
//! Core buffer types and the pixel adapter for the scriptfx filter module.
//!
//! A host photo pipeline evaluates filters over row-major, interleaved
//! `f32` buffers with values in `[0, 1]`; the external script engine works
//! on planar images in `[0, 255]`. This crate owns the boundary between
//! the two worlds:
//!
//! - [`FrameView`] / [`FrameViewMut`] — zero-copy views over host buffers
//! - [`ScriptImage`] — the owned planar container handed to the engine
//! - [`adapter`] — the pack/unpack conversions, including the zero-fill
//!   policy for engine results that do not cover the full frame
//!
//! ## Crate structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies:
//!
//! ```text
//! scriptfx-core (this crate)
//!    ^
//!    |
//!    +-- scriptfx-filters (preset registry)
//!    +-- scriptfx-pipeline (dispatch + engine boundary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapter;
pub mod error;
pub mod frame;
pub mod script_image;

pub use adapter::{copy_alpha, from_script, to_script};
pub use error::{Error, Result};
pub use frame::{FrameView, FrameViewMut};
pub use script_image::ScriptImage;
