use std::path::Path;

use anyhow::Context as _;

use crate::{
    config::GroupingConfig,
    document::rewrite::{GroupingStats, apply_rewrite, plan_rewrite_with},
    foundation::error::{SketchError, SketchResult},
    group::containment::ContainmentResolver,
};

/// A rewritten document and what happened to it.
#[derive(Clone, Debug)]
pub struct GroupedSvg {
    pub svg: String,
    pub stats: GroupingStats,
}

/// Rewrite every multi-subpath `path` element of an SVG document into one element per outer
/// contour (plus its holes), with `fill-rule="evenodd"` wherever holes are present.
///
/// Either the whole document is rewritten or an error is returned; there is no partial output.
#[tracing::instrument(skip(bytes, config), fields(len = bytes.len()))]
pub fn group_svg(bytes: &[u8], config: &GroupingConfig) -> SketchResult<GroupedSvg> {
    group_svg_with(bytes, config, &config.containment)
}

/// Like [`group_svg`], with a caller-supplied containment resolver.
pub fn group_svg_with(
    bytes: &[u8],
    config: &GroupingConfig,
    resolver: &dyn ContainmentResolver,
) -> SketchResult<GroupedSvg> {
    let source = std::str::from_utf8(bytes)
        .map_err(|e| SketchError::document(format!("input is not valid UTF-8: {e}")))?;

    let plan = plan_rewrite_with(source, config, resolver)?;
    let svg = apply_rewrite(source, &plan)?;

    tracing::debug!(
        rewritten = plan.stats.paths_rewritten,
        emitted = plan.stats.emitted_paths,
        orphans = plan.stats.orphan_holes,
        "grouped svg document"
    );

    Ok(GroupedSvg {
        svg,
        stats: plan.stats,
    })
}

/// Read `in_path`, group it and write the result to `out_path`.
///
/// The output file is only created once grouping has succeeded.
pub fn group_svg_file(
    in_path: &Path,
    out_path: &Path,
    config: &GroupingConfig,
) -> SketchResult<GroupingStats> {
    let bytes =
        std::fs::read(in_path).with_context(|| format!("read svg '{}'", in_path.display()))?;
    let grouped = group_svg(&bytes, config)?;
    write_output(out_path, grouped.svg.as_bytes())?;
    Ok(grouped.stats)
}

pub fn write_output(path: &Path, bytes: &[u8]) -> SketchResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}
