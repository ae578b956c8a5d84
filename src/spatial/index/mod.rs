//! Particle Index - two 1-D occupancy projections over the domain
//!
//! `columns[x]` holds every particle whose floor(x) maps to bin `x`,
//! `rows[y]` every particle whose floor(y) maps to bin `y`. This is NOT a
//! 2-D cell grid: neighbours are particles sharing a column OR a row.
//!
//! Lifecycle: rebuilt from scratch once per frame before any query, never
//! mutated incrementally. Buckets keep their allocations across rebuilds.

use crate::core::Vec2;
use crate::domain::ParticleId;

mod indexing;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleIndex {
    columns: Vec<Vec<ParticleId>>, // indexed by X bin
    rows: Vec<Vec<ParticleId>>,    // indexed by Y bin
    len: usize,
}

impl ParticleIndex {
    pub fn new(width: u32, height: u32) -> Self {
        let mut index = Self::default();
        index.rebuild(width, height);
        index
    }

    /// Drop every entry and size the buckets for a `width` x `height` domain.
    pub fn rebuild(&mut self, width: u32, height: u32) {
        // Zero-sized domains are rejected upstream; keep one bucket so clamping stays valid
        let width = width.max(1) as usize;
        let height = height.max(1) as usize;

        self.columns.resize_with(width, Vec::new);
        self.columns.truncate(width);
        self.rows.resize_with(height, Vec::new);
        self.rows.truncate(height);

        for bucket in self.columns.iter_mut() {
            bucket.clear();
        }
        for bucket in self.rows.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Rebuild and insert every position in order (id = slice index).
    pub fn rebuild_from<I>(&mut self, width: u32, height: u32, positions: I)
    where
        I: IntoIterator<Item = Vec2>,
    {
        self.rebuild(width, height);
        for (id, position) in positions.into_iter().enumerate() {
            self.insert(id, position);
        }
    }

    /// Slot a particle into its column and row.
    pub fn insert(&mut self, id: ParticleId, position: Vec2) {
        let (x, y) = self.bin_of(position);
        self.columns[x].push(id);
        self.rows[y].push(id);
        self.len += 1;
    }

    /// Particles sharing X bin `x` (clamped)
    pub fn column(&self, x: usize) -> &[ParticleId] {
        &self.columns[self.clamp_column(x)]
    }

    /// Particles sharing Y bin `y` (clamped)
    pub fn row(&self, y: usize) -> &[ParticleId] {
        &self.rows[self.clamp_row(y)]
    }

    /// Number of inserted particles
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns.len(), self.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_lands_in_floor_bins() {
        let mut index = ParticleIndex::new(16, 8);
        index.insert(0, Vec2::new(3.7, 5.2));
        assert_eq!(index.column(3), &[0]);
        assert_eq!(index.row(5), &[0]);
        assert!(index.column(4).is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn out_of_range_positions_clamp_into_edge_buckets() {
        let mut index = ParticleIndex::new(16, 8);
        index.insert(0, Vec2::new(-3.0, -1.0));
        index.insert(1, Vec2::new(16.0, 8.0));
        index.insert(2, Vec2::new(1000.0, f32::NAN));

        assert_eq!(index.column(0), &[0]);
        assert_eq!(index.row(0), &[0, 2]);
        assert_eq!(index.column(15), &[1, 2]);
        assert_eq!(index.row(7), &[1]);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let positions = vec![
            Vec2::new(1.0, 1.0),
            Vec2::new(1.5, 6.0),
            Vec2::new(9.9, 1.2),
            Vec2::new(16.0, 8.0),
        ];
        let mut a = ParticleIndex::new(16, 8);
        a.rebuild_from(16, 8, positions.iter().copied());
        let first = a.clone();
        a.rebuild_from(16, 8, positions.iter().copied());
        assert_eq!(a, first);

        let mut b = ParticleIndex::new(4, 4);
        b.rebuild_from(16, 8, positions.iter().copied());
        assert_eq!(b, first);
    }

    #[test]
    fn rebuild_clears_previous_frame() {
        let mut index = ParticleIndex::new(8, 8);
        index.insert(0, Vec2::new(2.0, 2.0));
        index.rebuild(8, 8);
        assert!(index.is_empty());
        assert!(index.column(2).is_empty());
        assert!(index.row(2).is_empty());
    }

    #[test]
    fn rebuild_resizes_buckets() {
        let mut index = ParticleIndex::new(8, 8);
        index.rebuild(32, 4);
        assert_eq!(index.dimensions(), (32, 4));
    }
}
