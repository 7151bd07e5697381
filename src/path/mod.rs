//! Path data normalization, splitting and winding classification.

/// Winding direction and anchor point extraction.
pub mod orient;
/// Splitting normalized path data at move-to commands.
pub mod split;
