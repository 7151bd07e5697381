//! Bitmap tracing through the external `potrace` binary.

/// Thresholding and the `potrace` process adapter.
pub mod potrace;
