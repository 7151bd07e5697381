use crate::{foundation::core::Point, path::split::Subpath};

/// Unweighted mean of `points`.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Even-odd ray casting: a horizontal ray from `p` towards +x crosses the ring an odd number of
/// times iff `p` is inside. The ring is closed implicitly.
pub fn point_in_polygon(p: Point, ring: &[Point]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether the centroid of `hole` lies inside the anchor ring of `outer`.
pub fn encloses(outer: &Subpath, hole: &Subpath) -> bool {
    centroid(hole.points()).is_some_and(|c| point_in_polygon(c, outer.points()))
}

/// Decides which outer contour owns each hole.
///
/// `resolve` returns one entry per hole (same order as `holes`) holding the index into `outers`
/// of its owner, or `None` when no outer claims it.
pub trait ContainmentResolver: Send + Sync {
    fn resolve(&self, outers: &[Subpath], holes: &[Subpath]) -> Vec<Option<usize>>;
}

/// Outers are scanned in split order and each claims every still-unclaimed hole whose centroid it
/// contains. Nested outers can lose their holes to an enclosing outer that comes first.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMatch;

impl ContainmentResolver for FirstMatch {
    fn resolve(&self, outers: &[Subpath], holes: &[Subpath]) -> Vec<Option<usize>> {
        let mut owners = vec![None; holes.len()];
        for (oi, outer) in outers.iter().enumerate() {
            for (hi, hole) in holes.iter().enumerate() {
                if owners[hi].is_none() && encloses(outer, hole) {
                    owners[hi] = Some(oi);
                }
            }
        }
        owners
    }
}

/// Each hole goes to the containing outer with the smallest absolute area; ties keep the earlier
/// outer.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmallestEnclosing;

impl ContainmentResolver for SmallestEnclosing {
    fn resolve(&self, outers: &[Subpath], holes: &[Subpath]) -> Vec<Option<usize>> {
        let areas: Vec<f64> = outers.iter().map(|o| o.signed_area().abs()).collect();
        holes
            .iter()
            .map(|hole| {
                let mut best: Option<usize> = None;
                for (oi, outer) in outers.iter().enumerate() {
                    if !encloses(outer, hole) {
                        continue;
                    }
                    if best.is_none_or(|b| areas[oi] < areas[b]) {
                        best = Some(oi);
                    }
                }
                best
            })
            .collect()
    }
}

/// Serializable selector for the built-in resolvers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainmentPolicy {
    #[default]
    FirstMatch,
    SmallestEnclosing,
}

impl ContainmentResolver for ContainmentPolicy {
    fn resolve(&self, outers: &[Subpath], holes: &[Subpath]) -> Vec<Option<usize>> {
        match self {
            Self::FirstMatch => FirstMatch.resolve(outers, holes),
            Self::SmallestEnclosing => SmallestEnclosing.resolve(outers, holes),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/group/containment.rs"]
mod tests;
