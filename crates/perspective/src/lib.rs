//! Side-classified TikZ configurations of four points and two segments.
//!
//! Four named points `a..d` sit at fixed coordinates. A configuration binds
//! them to the roles `(x, y, z, w)`; the segments are `x→y` and `z→w`. Each
//! point is classified left/right of the opposite segment and the four
//! results name the rendered `.tex` file (`rllr.tex`, …).
//!
//! Layout
//! - `points`: point names and the immutable coordinate table.
//! - `side`: cross-product side test on directed segments.
//! - `template`: the static TikZ document and placeholder substitution.
//! - `config`: configurations, classification, artifacts and the driver.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   `api` or `prelude` re-exports in callers.

pub mod api;
pub mod config;
pub mod points;
pub mod side;
pub mod template;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::config::{
        drive, process, Artifact, Classification, ConfigError, Configuration, WriteError,
    };
    pub use crate::points::{CoordTable, PointName};
    pub use crate::side::{classify, Segment, Side};
    pub use crate::template::{render, Role};
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
