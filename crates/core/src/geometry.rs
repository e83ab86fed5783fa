//! Axis-aligned primitives and tolerance-aware predicates shared by every layout stage.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    /// Builds a rectangle without checking it. Callers guarantee `max >= min` on both axes.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    pub fn try_new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, GeometryError> {
        Self::new(min_x, min_y, max_x, max_y).validated()
    }

    /// Returns the rectangle unchanged when every bound is finite and ordered.
    pub fn validated(self) -> Result<Self, GeometryError> {
        let finite = [self.min_x, self.min_y, self.max_x, self.max_y].iter().all(|v| v.is_finite());
        if !finite || self.max_x < self.min_x || self.max_y < self.min_y {
            return Err(GeometryError::InvalidRect { rect: self });
        }
        Ok(self)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }

    /// Strict interior overlap. Rectangles that only share a boundary do not intersect.
    pub fn intersects(&self, other: &Self, epsilon: f64) -> bool {
        !(self.max_x <= other.min_x + epsilon
            || self.min_x >= other.max_x - epsilon
            || self.max_y <= other.min_y + epsilon
            || self.min_y >= other.max_y - epsilon)
    }

    /// True when `other` sits directly across `side` of `self`: the boundaries coincide
    /// within `epsilon` and the perpendicular extents share more than `epsilon`.
    pub fn touches(&self, other: &Self, side: Side, epsilon: f64) -> bool {
        match side {
            Side::North => {
                (self.max_y - other.min_y).abs() <= epsilon
                    && overlap_1d(self.min_x, self.max_x, other.min_x, other.max_x) > epsilon
            }
            Side::South => {
                (self.min_y - other.max_y).abs() <= epsilon
                    && overlap_1d(self.min_x, self.max_x, other.min_x, other.max_x) > epsilon
            }
            Side::East => {
                (self.max_x - other.min_x).abs() <= epsilon
                    && overlap_1d(self.min_y, self.max_y, other.min_y, other.max_y) > epsilon
            }
            Side::West => {
                (self.min_x - other.max_x).abs() <= epsilon
                    && overlap_1d(self.min_y, self.max_y, other.min_y, other.max_y) > epsilon
            }
        }
    }

    /// Smallest rectangle enclosing every input, or `None` for an empty input.
    pub fn bounding<I>(rects: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        rects.into_iter().reduce(|acc, rect| Self {
            min_x: acc.min_x.min(rect.min_x),
            min_y: acc.min_y.min(rect.min_y),
            max_x: acc.max_x.max(rect.max_x),
            max_y: acc.max_y.max(rect.max_y),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    /// Index order used by per-room neighbor arrays.
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    /// Order in which corridor-facing sides are reported; doors go on the first one.
    pub const CORRIDOR_PRIORITY: [Side; 4] = [Side::East, Side::West, Side::North, Side::South];

    pub const fn index(self) -> usize {
        match self {
            Side::North => 0,
            Side::South => 1,
            Side::East => 2,
            Side::West => 3,
        }
    }

    pub const fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }

    /// North and south walls run along x, east and west walls along y.
    pub const fn runs_along(self) -> Axis {
        match self {
            Side::North | Side::South => Axis::X,
            Side::East | Side::West => Axis::Y,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::North => "north",
            Side::South => "south",
            Side::East => "east",
            Side::West => "west",
        }
    }
}

pub fn overlap_1d(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

/// Rounds `value` to the nearest multiple of `grid`, ties to even.
pub fn snap(value: f64, grid: f64) -> f64 {
    (value / grid).round_ties_even() * grid
}
