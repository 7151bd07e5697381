//! SVG document traversal and rewriting.

/// Two-phase rewrite of path elements into grouped replacements.
pub mod rewrite;
/// Presentation attribute resolution and fill-rule overrides.
pub mod style;
/// Namespace recognition and element serialization.
pub mod writer;
