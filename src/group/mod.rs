//! Assigning holes to the outer contours that contain them.

/// Point-in-polygon tests and pluggable hole ownership policies.
pub mod containment;
/// Building outer + holes groups from a split path.
pub mod grouper;
