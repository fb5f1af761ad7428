//! The caret placeholder seam.
//!
//! Generated markup can contain a token marking where the editor cursor
//! should land. The token itself is owned by the host editor, so profiles
//! obtain it through the [`CursorSource`] trait rather than hardcoding it.

/// Supplies the caret placeholder token inserted into generated markup.
pub trait CursorSource {
    /// The token marking where the editor cursor should land.
    fn caret_placeholder(&self) -> &str;
}

/// A cursor source that never emits a placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCursor;

impl CursorSource for NoCursor {
    fn caret_placeholder(&self) -> &str {
        ""
    }
}
