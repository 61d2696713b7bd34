//! Curated internal API (UNSTABLE).
//!
//! This is not a public API. It is a convenience surface for the CLI and
//! one-off scripts; breaking changes are allowed.

pub use crate::config::{
    drive, process, Artifact, Classification, ConfigError, Configuration, WriteError,
};
pub use crate::points::{CoordTable, PointName};
pub use crate::side::{classify, Segment, Side};
pub use crate::template::{render, Role, TEMPLATE};

use std::path::{Path, PathBuf};

/// Generate both diagrams for the standard table from `abcd` into `dir`.
/// Pre: `dir` is creatable/writable.
/// Post: returns `[dir/rllr.tex, dir/lrrl.tex]`.
pub fn generate_standard(dir: &Path) -> Result<Vec<PathBuf>, WriteError> {
    drive(&Configuration::IDENTITY, &CoordTable::standard(), dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generate_standard_writes_expected_names() {
        let dir = tempdir().unwrap();
        let paths = generate_standard(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["rllr.tex", "lrrl.tex"]);
    }
}
