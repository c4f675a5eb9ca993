//! Grid coordinates and text rendering
//!
//! `+y` points up (north). Rendering puts the largest `y` on the first line.

use std::fmt;

/// Cell on an unbounded grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Coordinate { x, y }
    }

    /// Coordinate displaced by `(dx, dy)`
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Coordinate::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan_distance(self, other: Coordinate) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Bounds {
    /// Smallest box containing every coordinate, `None` when empty
    pub fn enclosing<'a, I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut iter = coordinates.into_iter();
        let first = *iter.next()?;
        let mut bounds = Bounds { min: first, max: first };
        for c in iter {
            bounds.min.x = bounds.min.x.min(c.x);
            bounds.min.y = bounds.min.y.min(c.y);
            bounds.max.x = bounds.max.x.max(c.x);
            bounds.max.y = bounds.max.y.max(c.y);
        }
        Some(bounds)
    }

    pub fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y) + 1
    }

    /// Render one string per cell, top row first, rows joined by `\n`
    pub fn render<F>(&self, mut cell: F) -> String
    where
        F: FnMut(Coordinate) -> &'static str,
    {
        let mut rows = Vec::with_capacity(self.height() as usize);
        for y in (self.min.y..=self.max.y).rev() {
            let row: String = (self.min.x..=self.max.x)
                .map(|x| cell(Coordinate::new(x, y)))
                .collect();
            rows.push(row);
        }
        rows.join("\n")
    }
}
