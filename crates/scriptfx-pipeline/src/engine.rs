//! The script engine collaborator boundary.
//!
//! The actual interpreter is a black box owned by the embedder: it takes
//! the concatenated script library, one command line, and one input image,
//! and gives back zero or more result images. The trait below is all this
//! crate knows about it. Execution failure is an ordinary value here —
//! the processor reports and degrades, it never propagates an engine error
//! to the host.

use scriptfx_core::ScriptImage;
use thiserror::Error;

/// Error raised by a script engine run.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The interpreter rejected or aborted the script.
    #[error("script execution failed: {0}")]
    Execution(String),
}

/// An external script interpreter.
///
/// One call per pipeline evaluation, blocking, on the caller's thread.
/// Implementations may resize the image, change its channel count, return
/// several images, or return none at all; the processor tolerates every
/// shape.
pub trait ScriptEngine {
    /// Runs `command` against `input` with `library` providing auxiliary
    /// command definitions.
    fn run(
        &self,
        library: &str,
        command: &str,
        input: ScriptImage,
    ) -> Result<Vec<ScriptImage>, ScriptError>;
}

impl<E: ScriptEngine + ?Sized> ScriptEngine for &E {
    fn run(
        &self,
        library: &str,
        command: &str,
        input: ScriptImage,
    ) -> Result<Vec<ScriptImage>, ScriptError> {
        (**self).run(library, command, input)
    }
}
