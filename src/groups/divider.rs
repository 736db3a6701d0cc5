use std::fmt;

use clap::ValueEnum;
use tracing::debug;

use crate::groups::Group;
use crate::objects::Polygon;

/// How polygons are split into materials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DivisionMode {
    /// One material per UV island.
    #[default]
    PerUvGroup,
    /// One material per polygon.
    PerPolygon,
}

impl DivisionMode {
    pub fn divide(self, polygons: &[Polygon]) -> Vec<Group> {
        match self {
            DivisionMode::PerUvGroup => divide_per_uv(polygons),
            DivisionMode::PerPolygon => divide_per_polygon(polygons),
        }
    }
}

impl fmt::Display for DivisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionMode::PerUvGroup => write!(f, "per UV group"),
            DivisionMode::PerPolygon => write!(f, "per polygon"),
        }
    }
}

/// Partitions polygons into groups connected through shared (position, uv) keys.
///
/// Polygons are visited in order. Each one lands in the first live group it
/// touches; any later group it also touches is folded into that landing group.
/// A polygon touching nothing opens a new group at the end of the list. Dead
/// groups are pruned at the end, so group order follows the first polygon of
/// each island.
pub fn divide_per_uv(polygons: &[Polygon]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut merges = 0usize;

    for (index, polygon) in polygons.iter().enumerate() {
        let mut landing: Option<usize> = None;

        for g in 0..groups.len() {
            if !groups[g].belongs(polygon) {
                continue;
            }

            match landing {
                None => {
                    groups[g].add_polygon(index, polygon);
                    landing = Some(g);
                }

                Some(l) => {
                    let mut donor = std::mem::take(&mut groups[g]);
                    groups[l].join(&mut donor);
                    merges += 1;
                }
            }
        }

        if landing.is_none() {
            groups.push(Group::with_polygon(index, polygon));
        }
    }

    groups.retain(|g| !g.is_empty());

    debug!(
        "Divided {} polygons into {} UV groups ({} merges)",
        polygons.len(),
        groups.len(),
        merges
    );

    return groups;
}

pub fn divide_per_polygon(polygons: &[Polygon]) -> Vec<Group> {
    return polygons
        .iter()
        .enumerate()
        .map(|(index, polygon)| Group::with_polygon(index, polygon))
        .collect();
}
