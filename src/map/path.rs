// src/map/path.rs

use crate::map::Coord;

/// The walker's descending path: at most one entry per row, rows increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    points: Vec<Coord>,
}

impl Path {
    pub fn new() -> Self {
        Path { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point. Points that do not descend past the last row are ignored.
    pub fn push(&mut self, point: Coord) {
        if self.points.last().map_or(true, |last| point.y > last.y) {
            self.points.push(point);
        }
    }

    /// The walker column recorded for `row`, if any.
    pub fn column_at(&self, row: i32) -> Option<i32> {
        self.points
            .binary_search_by_key(&row, |p| p.y)
            .ok()
            .map(|i| self.points[i].x)
    }

    /// The column for `row`, or the last column recorded above it.
    pub fn column_at_or_above(&self, row: i32) -> Option<i32> {
        let end = self.points.partition_point(|p| p.y <= row);
        end.checked_sub(1).map(|i| self.points[i].x)
    }

    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(points: &[(i32, i32)]) -> Path {
        let mut path = Path::new();
        for &p in points {
            path.push(p.into());
        }
        path
    }

    #[test]
    fn test_push_rejects_non_descending_points() {
        let path = path_of(&[(5, 0), (6, 0), (4, 1), (3, 1), (7, 3)]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.points()[1], Coord::new(4, 1));
    }

    #[test]
    fn test_column_lookup() {
        let path = path_of(&[(5, 0), (4, 1), (7, 3)]);
        assert_eq!(path.column_at(1), Some(4));
        assert_eq!(path.column_at(2), None);
        assert_eq!(path.column_at_or_above(2), Some(4));
        assert_eq!(path.column_at_or_above(9), Some(7));
        assert_eq!(path.column_at_or_above(-1), None);
    }
}
