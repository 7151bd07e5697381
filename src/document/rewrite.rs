use std::ops::Range;

use rayon::prelude::*;
use roxmltree::{Document, Node};

use crate::{
    config::GroupingConfig,
    document::{
        style::StyleAttributes,
        writer::{
            WriterConfig, qualified_tag, sibling_tag, write_empty_element, write_end_tag,
            write_start_tag,
        },
    },
    foundation::error::{SketchError, SketchResult},
    group::{
        containment::ContainmentResolver,
        grouper::{Group, group_subpaths},
    },
    path::split::split_path_data,
};

/// A path element captured during the read-only pass, detached from the parsed tree.
#[derive(Clone, Debug, PartialEq)]
pub struct PathJob {
    /// Byte range of the whole element in the source text.
    pub range: Range<usize>,
    /// Qualified tag name as written in the source.
    pub tag: String,
    /// Human-readable identity used in errors and logs.
    pub label: String,
    pub id: Option<String>,
    pub d: String,
    pub style: StyleAttributes,
    /// Local namespace declarations and every other attribute, by source-qualified name, copied
    /// onto each replacement.
    pub passthrough: Vec<(String, String)>,
    /// Markup between the start and end tags, verbatim.
    pub content: Option<String>,
}

/// One replacement path element.
#[derive(Clone, Debug, PartialEq)]
pub struct EmittedPath {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub holes: usize,
    pub orphan: bool,
    /// Child markup moved over from the original element.
    pub content: Option<String>,
}

impl EmittedPath {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn d(&self) -> &str {
        self.attribute("d").unwrap_or_default()
    }

    pub fn write_to(&self, out: &mut String) {
        let attributes = self
            .attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()));
        match &self.content {
            Some(content) => {
                write_start_tag(out, &self.tag, attributes);
                out.push_str(content);
                write_end_tag(out, &self.tag);
            }
            None => write_empty_element(out, &self.tag, attributes),
        }
    }
}

/// Group element that takes over the `id` of a path split into several replacements.
#[derive(Clone, Debug, PartialEq)]
pub struct IdWrapper {
    pub tag: String,
    pub id: String,
}

/// Replace the element at `range` with `paths`, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Replacement {
    pub range: Range<usize>,
    pub element: String,
    pub wrapper: Option<IdWrapper>,
    pub paths: Vec<EmittedPath>,
}

/// Counters for one rewrite. Everything except `paths_seen` covers rewritten elements only.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupingStats {
    pub paths_seen: usize,
    pub paths_rewritten: usize,
    pub subpaths: usize,
    pub outers: usize,
    pub holes: usize,
    pub claimed_holes: usize,
    pub orphan_holes: usize,
    pub emitted_paths: usize,
}

impl GroupingStats {
    fn absorb(&mut self, groups: &[Group]) {
        self.paths_rewritten += 1;
        for g in groups {
            self.subpaths += g.subpath_count();
            self.holes += g.holes.len();
            self.claimed_holes += g.holes.len();
            if g.orphan {
                self.holes += 1;
                self.orphan_holes += 1;
            } else {
                self.outers += 1;
            }
        }
        self.emitted_paths += groups.len();
    }
}

/// All rewrite instructions for one document, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RewritePlan {
    pub replacements: Vec<Replacement>,
    pub stats: GroupingStats,
}

/// Read-only pass: capture every SVG `path` element that has a `d` attribute.
///
/// Paths nested inside another path are skipped so replacement ranges never overlap.
pub fn collect_path_jobs(doc: &Document<'_>, source: &str, writer: &WriterConfig) -> Vec<PathJob> {
    doc.descendants()
        .filter(|n| writer.is_svg_element(*n, "path"))
        .filter(|n| {
            !n.ancestors()
                .skip(1)
                .any(|a| writer.is_svg_element(a, "path"))
        })
        .filter_map(|node| {
            let d = node.attribute("d")?;
            let range = node.range();
            Some(PathJob {
                tag: qualified_tag(source, &range).to_string(),
                label: element_label(doc, node),
                id: node.attribute("id").map(str::to_string),
                d: d.to_string(),
                style: StyleAttributes::resolve(node, writer),
                passthrough: passthrough_attributes(node, source),
                content: inner_markup(node, source).map(str::to_string),
                range,
            })
        })
        .collect()
}

fn element_label(doc: &Document<'_>, node: Node<'_, '_>) -> String {
    let name = node.tag_name().name();
    match node.attribute("id") {
        Some(id) => format!("{name}#{id}"),
        None => {
            let pos = doc.text_pos_at(node.range().start);
            format!("{name} at {}:{}", pos.row, pos.col)
        }
    }
}

/// Namespace declarations made on `node` itself, then every attribute except `d`, `id` and the
/// resolved style attributes, named as written in `source`.
fn passthrough_attributes(node: Node<'_, '_>, source: &str) -> Vec<(String, String)> {
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|p| p.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();

    let declarations = node
        .namespaces()
        .filter(|ns| ns.name() != Some("xml"))
        .filter(|ns| !inherited.contains(&(ns.name(), ns.uri())))
        .map(|ns| {
            let name = match ns.name() {
                Some(prefix) => format!("xmlns:{prefix}"),
                None => "xmlns".to_string(),
            };
            (name, ns.uri().to_string())
        });

    let attributes = node
        .attributes()
        .filter(|a| {
            a.namespace().is_some()
                || !(matches!(a.name(), "d" | "id") || StyleAttributes::is_recognized(a.name()))
        })
        .map(|a| {
            let name = source.get(a.range_qname()).unwrap_or(a.name());
            (name.to_string(), a.value().to_string())
        });

    declarations.chain(attributes).collect()
}

fn inner_markup<'s>(node: Node<'_, '_>, source: &'s str) -> Option<&'s str> {
    let first = node.first_child()?;
    let last = node.last_child()?;
    source.get(first.range().start..last.range().end)
}

/// Build the replacement element for one group.
///
/// Holes force `fill-rule="evenodd"`; hole-free groups keep whatever fill rule they resolved to.
pub fn emit_group(
    group: &Group,
    tag: &str,
    style: &StyleAttributes,
    passthrough: &[(String, String)],
) -> EmittedPath {
    let mut style = style.clone();
    if group.has_holes() {
        style.force_even_odd();
    }

    let mut attributes = Vec::with_capacity(1 + style.len() + passthrough.len());
    attributes.push(("d".to_string(), group.to_path_data()));
    attributes.extend(style.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    attributes.extend(passthrough.iter().cloned());

    EmittedPath {
        tag: tag.to_string(),
        attributes,
        holes: group.holes.len(),
        orphan: group.orphan,
        content: None,
    }
}

struct ElementPlan {
    groups: Vec<Group>,
    replacement: Option<Replacement>,
}

fn plan_job(job: &PathJob, resolver: &dyn ContainmentResolver) -> SketchResult<ElementPlan> {
    let subpaths =
        split_path_data(&job.d).map_err(|e| SketchError::path_data(&job.label, e.to_string()))?;

    if subpaths.len() <= 1 {
        return Ok(ElementPlan {
            groups: Vec::new(),
            replacement: None,
        });
    }

    let subpath_count = subpaths.len();
    let groups = group_subpaths(subpaths, resolver);
    let mut paths: Vec<EmittedPath> = groups
        .iter()
        .map(|g| emit_group(g, &job.tag, &job.style, &job.passthrough))
        .collect();

    if let Some(first) = paths.first_mut() {
        first.content.clone_from(&job.content);
    }

    // The id stays on a lone replacement and otherwise moves to a wrapping group.
    let wrapper = match (&job.id, paths.as_mut_slice()) {
        (Some(id), [only]) => {
            only.attributes.insert(0, ("id".to_string(), id.clone()));
            None
        }
        (Some(id), _) => Some(IdWrapper {
            tag: sibling_tag(&job.tag, "g"),
            id: id.clone(),
        }),
        (None, _) => None,
    };

    tracing::debug!(
        element = %job.label,
        subpaths = subpath_count,
        groups = groups.len(),
        "split path element"
    );

    Ok(ElementPlan {
        replacement: Some(Replacement {
            range: job.range.clone(),
            element: job.label.clone(),
            wrapper,
            paths,
        }),
        groups,
    })
}

/// Parse `source` and compute the rewrite plan using the configured containment policy.
pub fn plan_rewrite(source: &str, config: &GroupingConfig) -> SketchResult<RewritePlan> {
    plan_rewrite_with(source, config, &config.containment)
}

/// Like [`plan_rewrite`], with a caller-supplied containment resolver.
pub fn plan_rewrite_with(
    source: &str,
    config: &GroupingConfig,
    resolver: &dyn ContainmentResolver,
) -> SketchResult<RewritePlan> {
    config.validate()?;
    let doc = config.writer.parse(source)?;
    let jobs = collect_path_jobs(&doc, source, &config.writer);
    drop(doc);

    let element_plans: Vec<ElementPlan> = if config.parallel {
        let pool = build_thread_pool(config.threads)?;
        pool.install(|| {
            jobs.par_iter()
                .map(|job| plan_job(job, resolver))
                .collect::<SketchResult<Vec<_>>>()
        })?
    } else {
        jobs.iter()
            .map(|job| plan_job(job, resolver))
            .collect::<SketchResult<Vec<_>>>()?
    };

    let mut plan = RewritePlan {
        stats: GroupingStats {
            paths_seen: jobs.len(),
            ..GroupingStats::default()
        },
        ..RewritePlan::default()
    };
    for element in element_plans {
        if let Some(replacement) = element.replacement {
            plan.stats.absorb(&element.groups);
            plan.replacements.push(replacement);
        }
    }
    Ok(plan)
}

fn build_thread_pool(threads: Option<usize>) -> SketchResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SketchError::validation(format!("failed to build rayon thread pool: {e}")))
}

/// Apply pass: splice every replacement into `source`, copying everything else verbatim.
///
/// Consecutive replacement elements are separated by a newline plus the indentation of the
/// original element. Wrapped replacements are indented one more level inside their group.
pub fn apply_rewrite(source: &str, plan: &RewritePlan) -> SketchResult<String> {
    let mut out = String::with_capacity(source.len() + source.len() / 4);
    let mut cursor = 0usize;

    for r in &plan.replacements {
        let before = source.get(cursor..r.range.start).ok_or_else(|| {
            SketchError::document(format!("replacement for {} is out of order", r.element))
        })?;
        out.push_str(before);

        let indent = line_indent(source, r.range.start);
        match &r.wrapper {
            Some(wrapper) => {
                write_start_tag(&mut out, &wrapper.tag, [("id", wrapper.id.as_str())]);
                for path in &r.paths {
                    out.push('\n');
                    out.push_str(indent);
                    out.push_str("  ");
                    path.write_to(&mut out);
                }
                out.push('\n');
                out.push_str(indent);
                write_end_tag(&mut out, &wrapper.tag);
            }
            None => {
                for (i, path) in r.paths.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                        out.push_str(indent);
                    }
                    path.write_to(&mut out);
                }
            }
        }
        cursor = r.range.end;
    }

    let rest = source
        .get(cursor..)
        .ok_or_else(|| SketchError::document("replacement range exceeds document"))?;
    out.push_str(rest);
    Ok(out)
}

fn line_indent(source: &str, start: usize) -> &str {
    let head = source.get(..start).unwrap_or_default();
    let line_start = head.rfind('\n').map_or(0, |i| i + 1);
    let prefix = &head[line_start..];
    if prefix.chars().all(char::is_whitespace) {
        prefix
    } else {
        ""
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/rewrite.rs"]
mod tests;
