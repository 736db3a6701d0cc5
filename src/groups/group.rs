use std::collections::HashSet;

use crate::objects::{Polygon, VertexKey};

/// Polygons joined by shared vertex keys.
///
/// `vertices` always holds exactly the keys of the polygons listed in
/// `polygons`. A group without polygons is dead and gets pruned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    /// Indices into the polygon list, in the order they were absorbed.
    pub polygons: Vec<usize>,
    pub vertices: HashSet<VertexKey>,
}

impl Group {
    pub fn new() -> Self {
        return Group {
            polygons: Vec::new(),
            vertices: HashSet::new(),
        };
    }

    pub fn with_polygon(index: usize, polygon: &Polygon) -> Self {
        let mut group = Group::new();
        group.add_polygon(index, polygon);
        return group;
    }

    /// Whether `polygon` shares at least one vertex key with this group.
    pub fn belongs(&self, polygon: &Polygon) -> bool {
        return polygon.iter().any(|v| self.vertices.contains(&v.key()));
    }

    pub fn add_polygon(&mut self, index: usize, polygon: &Polygon) {
        self.polygons.push(index);
        self.vertices.extend(polygon.iter().map(|v| v.key()));
    }

    /// Moves everything `other` holds into this group, leaving `other` dead.
    pub fn join(&mut self, other: &mut Group) {
        self.polygons.append(&mut other.polygons);
        self.vertices.extend(other.vertices.drain());
    }

    pub fn is_empty(&self) -> bool {
        return self.polygons.is_empty();
    }

    pub fn len(&self) -> usize {
        return self.polygons.len();
    }
}
