//! Left/right of a directed segment.
//!
//! For `P` and `F→T`: `cross = (P−F) × (T−F)`. Negative is `Left`; zero
//! (collinear, including `-0.0`) and positive are `Right`.

use nalgebra::Vector2;
use std::fmt;

use crate::parallelogram_area;

/// Side of a point relative to a directed segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Single-letter code used in file names.
    #[inline]
    pub fn code(self) -> char {
        match self {
            Side::Left => 'l',
            Side::Right => 'r',
        }
    }

    #[inline]
    pub fn flipped(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

/// Directed segment `from → to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(from: Vector2<f64>, to: Vector2<f64>) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// `(p − from) × (to − from)`.
    #[inline]
    pub fn cross(&self, p: Vector2<f64>) -> f64 {
        parallelogram_area(p - self.from, self.to - self.from)
    }
}

/// Classify `p` against the directed segment `seg`.
#[inline]
pub fn classify(p: Vector2<f64>, seg: &Segment) -> Side {
    if seg.cross(p) < 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn unit_square_sides() {
        let seg = Segment::new(vector![0.0, 0.0], vector![1.0, 0.0]);
        // above the x-axis: (0,1)×(1,0) = -1
        assert_eq!(classify(vector![0.0, 1.0], &seg), Side::Left);
        assert_eq!(classify(vector![0.5, -1.0], &seg), Side::Right);
    }

    #[test]
    fn collinear_is_right_both_ways() {
        let seg = Segment::new(vector![1.0, 1.0], vector![2.0, 2.0]);
        let p = vector![0.0, 0.0];
        assert_eq!(seg.cross(p), 0.0);
        assert_eq!(classify(p, &seg), Side::Right);
        assert_eq!(classify(p, &seg.reversed()), Side::Right);
        // p on the segment itself
        assert_eq!(classify(vector![1.5, 1.5], &seg), Side::Right);
    }

    #[test]
    fn negative_zero_is_right() {
        let seg = Segment::new(vector![0.0, 0.0], vector![0.0, 0.0]);
        assert_eq!(classify(vector![-0.0, 3.0], &seg), Side::Right);
    }

    #[test]
    fn codes_and_flip() {
        assert_eq!(Side::Left.code(), 'l');
        assert_eq!(Side::Right.code(), 'r');
        assert_eq!(Side::Left.flipped(), Side::Right);
        assert_eq!(Side::Right.flipped().flipped(), Side::Right);
        assert_eq!(Side::Left.to_string(), "left");
    }

    #[test]
    fn classify_randomized_seeded_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..256 {
            let mut pt = || vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            let (p, f, t) = (pt(), pt(), pt());
            let seg = Segment::new(f, t);
            assert_eq!(classify(p, &seg), classify(p, &seg));
            let expected = (p - f).x * (t - f).y - (p - f).y * (t - f).x;
            assert_eq!(classify(p, &seg) == Side::Left, expected < 0.0);
        }
    }

    fn int_point() -> impl Strategy<Value = Vector2<f64>> {
        (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| vector![x as f64, y as f64])
    }

    proptest! {
        // Integer coordinates keep the cross product exact.
        #[test]
        fn reversal_flips_non_collinear(p in int_point(), f in int_point(), t in int_point()) {
            prop_assume!(f != t);
            let seg = Segment::new(f, t);
            let fwd = classify(p, &seg);
            let back = classify(p, &seg.reversed());
            if seg.cross(p) == 0.0 {
                prop_assert_eq!(fwd, Side::Right);
                prop_assert_eq!(back, Side::Right);
            } else {
                prop_assert_eq!(back, fwd.flipped());
            }
        }

        #[test]
        fn collinear_points_never_left(f in int_point(), t in int_point(), k in -20i32..20) {
            prop_assume!(f != t);
            let p = f + (t - f) * k as f64;
            prop_assert_eq!(classify(p, &Segment::new(f, t)), Side::Right);
        }
    }
}
