pub use kurbo::{BezPath, PathEl, Point};

/// Namespace URI of SVG elements.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Value written to `fill-rule` when a group carries holes.
pub const EVEN_ODD: &str = "evenodd";
