use std::fmt;

/// One `pos/uv/normal` entry of a face line, indices kept verbatim (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexRef {
    pub position: u32,
    pub uv: u32,
    pub normal: u32,
}

impl VertexRef {
    pub fn new(position: u32, uv: u32, normal: u32) -> Self {
        return VertexRef {
            position,
            uv,
            normal,
        };
    }

    /// Identity used for grouping. The normal index is ignored.
    pub fn key(&self) -> VertexKey {
        return VertexKey {
            position: self.position,
            uv: self.uv,
        };
    }
}

impl fmt::Display for VertexRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.position, self.uv, self.normal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey {
    pub position: u32,
    pub uv: u32,
}

pub type Polygon = Vec<VertexRef>;
