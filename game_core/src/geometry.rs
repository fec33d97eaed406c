use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    /// Inclusive overlap of the horizontal extents
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && other.min.x <= self.max.x
    }
}
