/// Explicit state of a constructive wall walk: a position along the wall
/// plus the stride to the next probe position.
///
/// Positions are visited monotonically from the wall's starting corner, so
/// the first admissible position is always the one closest to that corner;
/// this is what makes generator output reproducible. [`WallCursor::reject`]
/// skips to the next probe position, [`WallCursor::accept`] commits a
/// placement of the given length and advances past it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallCursor {
    pos: i64,
    max_pos: i64,
    step: i64,
    reversed: bool,
}

impl WallCursor {
    /// Walk from the wall's starting corner towards `max_pos`.
    pub fn forward(max_pos: i64, step: i64) -> Self {
        Self::forward_from(0, max_pos, step)
    }

    /// Walk forward from an arbitrary start position.
    pub fn forward_from(start: i64, max_pos: i64, step: i64) -> Self {
        debug_assert!(step > 0);
        WallCursor {
            pos: i64::max(start, 0),
            max_pos,
            step,
            reversed: false,
        }
    }

    /// Walk from the wall's far corner back towards the starting corner.
    pub fn reverse(max_pos: i64, step: i64) -> Self {
        debug_assert!(step > 0);
        WallCursor {
            pos: max_pos,
            max_pos,
            step,
            reversed: true,
        }
    }

    /// The current probe position, or `None` once the wall is exhausted.
    pub fn current(&self) -> Option<i64> {
        (0 <= self.pos && self.pos <= self.max_pos).then_some(self.pos)
    }

    /// Skip to the next probe position after a failed placement attempt.
    pub fn reject(&mut self) {
        self.advance(self.step);
    }

    /// Commit a placement of `len` at the current position and move past it.
    pub fn accept(&mut self, len: i64) {
        self.advance(len);
    }

    fn advance(&mut self, by: i64) {
        if self.reversed {
            self.pos -= by;
        } else {
            self.pos += by;
        }
    }
}
