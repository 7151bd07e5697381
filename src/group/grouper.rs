use crate::{group::containment::ContainmentResolver, path::split::Subpath};

/// One emitted contour set: an outer subpath and the holes it owns, in claim order.
///
/// Orphan groups carry an unclaimed hole in `outer` and never own holes themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub outer: Subpath,
    pub holes: Vec<Subpath>,
    pub orphan: bool,
}

impl Group {
    fn new(outer: Subpath) -> Self {
        Self {
            outer,
            holes: Vec::new(),
            orphan: false,
        }
    }

    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    pub fn subpath_count(&self) -> usize {
        1 + self.holes.len()
    }

    /// Outer commands followed by each owned hole's commands.
    pub fn to_path_data(&self) -> String {
        let mut d = self.outer.to_svg();
        for hole in &self.holes {
            d.push(' ');
            d.push_str(&hole.to_svg());
        }
        d
    }
}

/// Classify `subpaths`, hand holes to their owners via `resolver` and build the groups.
///
/// Outer groups come first in split order; unclaimed holes follow as standalone groups, also in
/// split order. Every input subpath ends up in exactly one group.
pub fn group_subpaths(subpaths: Vec<Subpath>, resolver: &dyn ContainmentResolver) -> Vec<Group> {
    let (holes, outers): (Vec<Subpath>, Vec<Subpath>) =
        subpaths.into_iter().partition(Subpath::is_hole);

    let owners = resolver.resolve(&outers, &holes);
    let mut groups: Vec<Group> = outers.into_iter().map(Group::new).collect();
    let mut orphans = Vec::new();

    for (hi, hole) in holes.into_iter().enumerate() {
        let owner = owners.get(hi).copied().flatten();
        match owner.and_then(|oi| groups.get_mut(oi)) {
            Some(group) => group.holes.push(hole),
            None => {
                tracing::debug!(
                    subpath = hole.index(),
                    area = hole.signed_area(),
                    "hole is not enclosed by any outer contour; emitting it on its own"
                );
                orphans.push(Group {
                    orphan: true,
                    ..Group::new(hole)
                });
            }
        }
    }

    groups.extend(orphans);
    groups
}

#[cfg(test)]
#[path = "../../tests/unit/group/grouper.rs"]
mod tests;
