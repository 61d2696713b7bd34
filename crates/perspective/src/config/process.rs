use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::types::Configuration;
use crate::points::CoordTable;
use crate::side::{classify, Segment, Side};
use crate::template::{render, Role};

/// Sides `(A, B, C, D)` of a configuration's four points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub sides: [Side; 4],
}

impl Classification {
    pub fn of(conf: &Configuration, table: &CoordTable) -> Self {
        let [a, b, c, d] = conf.names().map(|n| table.get(n));
        let cd = Segment::new(c, d);
        let ab = Segment::new(a, b);
        Self {
            sides: [
                classify(a, &cd),
                classify(b, &cd),
                classify(c, &ab),
                classify(d, &ab),
            ],
        }
    }

    /// Four-letter code over `{l, r}`, position `i` taken from `sides[i]`.
    pub fn code(&self) -> String {
        let mut buf = ['r'; 4];
        for (slot, side) in buf.iter_mut().zip(self.sides) {
            *slot = side.code();
        }
        buf.iter().collect()
    }

    pub fn file_name(&self) -> String {
        format!("{}.tex", self.code())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// A rendered document and the file name it is written under.
#[derive(Clone, Debug, PartialEq)]
pub struct Artifact {
    pub conf: Configuration,
    pub classification: Classification,
    pub contents: String,
}

impl Artifact {
    pub fn file_name(&self) -> String {
        self.classification.file_name()
    }

    /// Write into `dir` (created if missing), truncating any existing file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, WriteError> {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|source| WriteError {
                path: dir.to_path_buf(),
                op: "creating output dir",
                source,
            })?;
        }
        let path = dir.join(self.file_name());
        fs::write(&path, &self.contents).map_err(|source| WriteError {
            path: path.clone(),
            op: "writing",
            source,
        })?;
        Ok(path)
    }
}

/// Classify and render `conf` without touching the filesystem.
pub fn process(conf: &Configuration, table: &CoordTable) -> Artifact {
    Artifact {
        conf: *conf,
        classification: Classification::of(conf, table),
        contents: render(Role::ALL.map(|r| conf.get(r))),
    }
}

/// Write `base` and `base.swapped()` into `dir`; returns the paths in that order.
pub fn drive(
    base: &Configuration,
    table: &CoordTable,
    dir: &Path,
) -> Result<Vec<PathBuf>, WriteError> {
    [*base, base.swapped()]
        .iter()
        .map(|conf| process(conf, table).write_to(dir))
        .collect()
}

/// I/O failure while emitting an artifact.
#[derive(Debug)]
pub struct WriteError {
    pub path: PathBuf,
    pub op: &'static str,
    pub source: io::Error,
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.op, self.path.display(), self.source)
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
