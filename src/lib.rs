//! sketchpath turns traced SVG paths into per-contour paths with explicit fill rules.
//!
//! Bitmap tracers emit a glyph like "O" or "A" as one `path` whose `d` holds several closed
//! subpaths: outer contours wound one way and holes wound the other. Downstream tools that animate
//! or fill subpaths one by one lose the cutouts. This crate rewrites such documents so that every
//! outer contour becomes its own `path`, carrying the holes it contains and `fill-rule="evenodd"`.
//!
//! # Pipeline overview
//!
//! 1. **Collect**: parse the markup (read-only) and capture each `path` with its resolved style.
//! 2. **Split**: normalize `d` to absolute commands and cut it at every move-to.
//! 3. **Classify**: shoelace signed area; negative means hole.
//! 4. **Group**: a [`ContainmentResolver`] hands each hole to an outer whose anchor polygon
//!    contains the hole's centroid. Unclaimed holes stay on their own.
//! 5. **Emit**: splice replacement elements into the original text at the original positions.
//!
//! Everything outside replaced `path` elements is copied byte for byte, so declarations and
//! namespaces survive untouched.
#![forbid(unsafe_code)]

mod config;
mod document;
mod foundation;
mod group;
mod path;
mod pipeline;
mod trace;

pub use config::GroupingConfig;
pub use document::rewrite::{
    EmittedPath, GroupingStats, IdWrapper, PathJob, Replacement, RewritePlan, apply_rewrite,
    collect_path_jobs, emit_group, plan_rewrite, plan_rewrite_with,
};
pub use document::style::{STYLE_ATTRIBUTES, StyleAttributes};
pub use document::writer::{
    WriterConfig, escape_attribute, qualified_tag, sibling_tag, write_empty_element, write_end_tag,
    write_start_tag,
};
pub use foundation::core::{BezPath, EVEN_ODD, PathEl, Point, SVG_NAMESPACE};
pub use foundation::error::{SketchError, SketchResult};
pub use group::containment::{
    ContainmentPolicy, ContainmentResolver, FirstMatch, SmallestEnclosing, centroid, encloses,
    point_in_polygon,
};
pub use group::grouper::{Group, group_subpaths};
pub use path::orient::{SubpathKind, anchor_points, classify_points, signed_area};
pub use path::split::{PathDataError, Subpath, parse_path_data, split_path_data, split_subpaths};
pub use pipeline::{GroupedSvg, group_svg, group_svg_file, group_svg_with, write_output};
pub use trace::potrace::{
    TraceOptions, encode_bmp, is_potrace_on_path, threshold_image, trace_bitmap, trace_image,
};
