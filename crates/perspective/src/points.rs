//! Point names and the fixed coordinate table.
//!
//! - `PointName`: the alphabet `a..d`, with explicit text forms (`a`, `$a$`).
//! - `CoordTable`: immutable name → coordinate mapping, built once and shared
//!   by reference.

use nalgebra::Vector2;
use std::fmt;

/// One of the four named points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointName {
    A,
    B,
    C,
    D,
}

impl PointName {
    pub const ALL: [PointName; 4] = [PointName::A, PointName::B, PointName::C, PointName::D];

    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
        }
    }

    /// Inline-math label placed into the template, e.g. `$a$`.
    pub fn math_label(self) -> String {
        format!("${}$", self.as_char())
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Immutable coordinate table, indexed by `PointName`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordTable {
    coords: [Vector2<f64>; 4],
}

impl CoordTable {
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> Self {
        Self {
            coords: [a, b, c, d],
        }
    }

    /// The table drawn by the static template.
    pub fn standard() -> Self {
        Self::new(
            Vector2::new(2.0, 1.0),
            Vector2::new(3.0, 2.0),
            Vector2::new(2.1, 2.1),
            Vector2::new(3.9, 1.1),
        )
    }

    #[inline]
    pub fn get(&self, name: PointName) -> Vector2<f64> {
        self.coords[name.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointName, Vector2<f64>)> + '_ {
        PointName::ALL.into_iter().map(move |n| (n, self.get(n)))
    }
}

impl Default for CoordTable {
    fn default() -> Self {
        Self::standard()
    }
}
