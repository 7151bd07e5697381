use crate::{
    foundation::core::{BezPath, PathEl, Point},
    path::orient::{SubpathKind, anchor_points, classify_points, signed_area},
};

/// Path data that could not be turned into absolute drawing commands.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PathDataError(String);

/// One contour of a larger path, held in absolute coordinates.
///
/// A subpath always starts with a move-to. Its anchor points (segment start points plus the final
/// end point) are computed once at construction and drive both orientation and containment.
#[derive(Clone, Debug, PartialEq)]
pub struct Subpath {
    index: usize,
    path: BezPath,
    points: Vec<Point>,
}

impl Subpath {
    fn new(index: usize, path: BezPath) -> Self {
        let points = anchor_points(path.elements());
        Self {
            index,
            path,
            points,
        }
    }

    /// Position of this subpath in the split order of its source path.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    pub fn kind(&self) -> SubpathKind {
        classify_points(&self.points)
    }

    pub fn is_hole(&self) -> bool {
        self.kind() == SubpathKind::Hole
    }

    /// Absolute command string for this subpath alone.
    pub fn to_svg(&self) -> String {
        self.path.to_svg()
    }
}

/// Parse `d` attribute data into absolute, explicit commands.
///
/// Relative commands, shorthand curves and arcs are normalized by `kurbo`, so later splits never
/// carry relative offsets across subpath boundaries.
pub fn parse_path_data(d: &str) -> Result<BezPath, PathDataError> {
    let body = d.trim_start();
    if !body.is_empty() && !body.starts_with(['M', 'm']) {
        return Err(PathDataError(
            "path data must begin with a move-to command".to_string(),
        ));
    }
    let path = BezPath::from_svg(d).map_err(|e| PathDataError(e.to_string()))?;
    match path.elements().first() {
        None | Some(PathEl::MoveTo(_)) => Ok(path),
        Some(_) => Err(PathDataError(
            "path data must begin with a move-to command".to_string(),
        )),
    }
}

/// Split a normalized path at every move-to, in left-to-right order.
pub fn split_subpaths(path: &BezPath) -> Vec<Subpath> {
    let mut out = Vec::new();
    let mut current: Vec<PathEl> = Vec::new();

    for el in path.elements() {
        if matches!(el, PathEl::MoveTo(_)) && !current.is_empty() {
            let index = out.len();
            out.push(Subpath::new(
                index,
                BezPath::from_vec(std::mem::take(&mut current)),
            ));
        }
        current.push(*el);
    }

    if !current.is_empty() {
        let index = out.len();
        out.push(Subpath::new(index, BezPath::from_vec(current)));
    }

    out
}

/// Parse and split in one step.
pub fn split_path_data(d: &str) -> Result<Vec<Subpath>, PathDataError> {
    parse_path_data(d).map(|path| split_subpaths(&path))
}

#[cfg(test)]
#[path = "../../tests/unit/path/split.rs"]
mod tests;
