//! Grid-line overlay for debugging

use super::UniformGrid;
use crate::types::Vec2;

/// A drawing surface supplied by the caller. Only straight lines are needed.
pub trait DebugCanvas {
    fn line(&mut self, from: Vec2, to: Vec2);
}

impl DebugCanvas for Vec<(Vec2, Vec2)> {
    fn line(&mut self, from: Vec2, to: Vec2) {
        self.push((from, to));
    }
}

impl UniformGrid {
    /// Draw the cell boundaries: vertical lines at every multiple of the
    /// cell size up to the width, then horizontal lines up to the height.
    /// Has no effect on queries.
    pub fn draw_grid<C: DebugCanvas + ?Sized>(&self, canvas: &mut C) {
        let (width, height) = (self.width(), self.height());

        for x in boundaries(self.cell_size(), width) {
            canvas.line(Vec2::new(x, 0.0), Vec2::new(x, height));
        }
        for y in boundaries(self.cell_size(), height) {
            canvas.line(Vec2::new(0.0, y), Vec2::new(width, y));
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn boundaries(step: f32, extent: f32) -> impl Iterator<Item = f32> {
    (0_u32..)
        .map(move |i| i as f32 * step)
        .take_while(move |&v| v <= extent)
}
