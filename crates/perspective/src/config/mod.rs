//! Configurations: role bindings, classification, artifacts and the driver.
//!
//! A configuration `(x, y, z, w)` names the points of segment `x→y` and
//! segment `z→w`. Processing classifies
//! - `A`: `x` against `z→w`, `B`: `y` against `z→w`,
//! - `C`: `z` against `x→y`, `D`: `w` against `x→y`,
//!
//! and writes the rendered template to `<ABCD codes>.tex`.
//!
//! Code cross-refs: `side::classify`, `template::render`, `points::CoordTable`

mod process;
mod types;

pub use process::{drive, process, Artifact, Classification, WriteError};
pub use types::{ConfigError, Configuration};
