use crate::foundation::core::{PathEl, Point};

/// Winding class of a subpath.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubpathKind {
    /// Filled contour (non-negative signed area).
    Outer,
    /// Cutout wound opposite to its container (negative signed area).
    Hole,
}

/// Anchor points of a single subpath: the start point of every drawn segment, followed by the end
/// point of the last one.
///
/// A close-path that returns from a point other than the subpath start counts as a line segment.
/// A subpath that only moves has no anchor points.
pub fn anchor_points(elements: &[PathEl]) -> Vec<Point> {
    let mut points = Vec::with_capacity(elements.len() + 1);
    let mut start: Option<Point> = None;
    let mut current: Option<Point> = None;
    let mut last_end: Option<Point> = None;

    for el in elements {
        match *el {
            PathEl::MoveTo(p) => {
                start = Some(p);
                current = Some(p);
            }
            PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
                if let Some(c) = current {
                    points.push(c);
                }
                current = Some(p);
                last_end = Some(p);
            }
            PathEl::ClosePath => {
                if let (Some(s), Some(c)) = (start, current) {
                    if c != s {
                        points.push(c);
                        last_end = Some(s);
                    }
                    current = Some(s);
                }
            }
        }
    }

    points.extend(last_end);
    points
}

/// Shoelace area over the ring `points`, closing it back to the first point.
///
/// Positive for counter-clockwise rings in a y-up frame (clockwise on screen, where y grows
/// downwards).
pub fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    0.5 * twice
}

pub fn classify_points(points: &[Point]) -> SubpathKind {
    if points.len() < 2 {
        return SubpathKind::Outer;
    }
    if signed_area(points) < 0.0 {
        SubpathKind::Hole
    } else {
        SubpathKind::Outer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/orient.rs"]
mod tests;
