use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box centered on an owner's offset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Boundaries {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Boundaries {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let mut boundaries = Self::default();
        boundaries.update(center, size);
        boundaries
    }

    pub fn update(&mut self, center: Vec2, size: Vec2) {
        let half = size * 0.5;
        self.left = center.x - half.x;
        self.top = center.y - half.y;
        self.right = center.x + half.x;
        self.bottom = center.y + half.y;
        self.width = size.x;
        self.height = size.y;
    }

    /// True when the vertical spans touch or overlap
    pub fn overlaps_vertically(&self, other: &Boundaries) -> bool {
        self.bottom >= other.top && self.top <= other.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_centered_on_offset() {
        let b = Boundaries::from_center_size(Vec2::new(400.0, 300.0), Vec2::new(16.0, 128.0));
        assert_eq!(b.left, 392.0);
        assert_eq!(b.right, 408.0);
        assert_eq!(b.top, 236.0);
        assert_eq!(b.bottom, 364.0);
        assert_eq!(b.right - b.left, b.width, "Width must match the edges");
        assert_eq!(b.bottom - b.top, b.height, "Height must match the edges");
    }

    #[test]
    fn test_vertical_overlap_includes_touching_edges() {
        let paddle = Boundaries::from_center_size(Vec2::new(0.0, 100.0), Vec2::new(16.0, 100.0));
        let touching = Boundaries::from_center_size(Vec2::new(0.0, 158.0), Vec2::new(16.0, 16.0));
        let clear = Boundaries::from_center_size(Vec2::new(0.0, 159.0), Vec2::new(16.0, 16.0));

        assert!(touching.overlaps_vertically(&paddle));
        assert!(!clear.overlaps_vertically(&paddle));
    }
}
