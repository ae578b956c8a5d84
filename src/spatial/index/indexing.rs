use super::*;

impl ParticleIndex {
    // === Bin conversion ===

    /// Clamped (column, row) bin for a position. Never out of range:
    /// negatives and NaN map to 0, anything past the edge to the last bin.
    #[inline]
    pub fn bin_of(&self, position: Vec2) -> (usize, usize) {
        (
            clamp_bin(position.x, self.columns.len()),
            clamp_bin(position.y, self.rows.len()),
        )
    }

    #[inline]
    pub(super) fn clamp_column(&self, x: usize) -> usize {
        x.min(self.columns.len() - 1)
    }

    #[inline]
    pub(super) fn clamp_row(&self, y: usize) -> usize {
        y.min(self.rows.len() - 1)
    }
}

#[inline]
fn clamp_bin(coord: f32, len: usize) -> usize {
    let last = len.saturating_sub(1);
    // `as` saturates: NaN -> 0, negatives -> 0, huge -> usize::MAX
    (coord.floor() as usize).min(last)
}

#[cfg(test)]
mod tests {
    use super::clamp_bin;

    #[test]
    fn clamp_bin_edges() {
        assert_eq!(clamp_bin(0.0, 10), 0);
        assert_eq!(clamp_bin(9.999, 10), 9);
        assert_eq!(clamp_bin(10.0, 10), 9);
        assert_eq!(clamp_bin(-0.5, 10), 0);
        assert_eq!(clamp_bin(f32::INFINITY, 10), 9);
        assert_eq!(clamp_bin(f32::NAN, 10), 0);
    }
}
