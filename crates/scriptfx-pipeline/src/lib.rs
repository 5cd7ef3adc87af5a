//! # scriptfx-pipeline
//!
//! The processing entry point of the scriptfx filter module: given a
//! stored preset and one host frame, build the command string, feed the
//! adapted image through the external script engine, and write the result
//! back — degrading to pass-through whenever the engine fails or returns
//! nothing.
//!
//! Single-threaded and synchronous by design: the host calls
//! [`Processor::process`] once per pipeline stage evaluation on whatever
//! thread it likes; the only state shared between calls is the read-only
//! script library, built lazily on first use.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod engine;
pub mod process;

pub use engine::{ScriptEngine, ScriptError};
pub use process::{Processor, RenderIntent};
