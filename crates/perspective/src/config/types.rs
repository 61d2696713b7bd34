use std::fmt;
use std::str::FromStr;

use crate::points::PointName;
use crate::template::Role;

/// Four distinct point names bound to the roles `(x, y, z, w)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Configuration {
    names: [PointName; 4],
}

impl Configuration {
    /// `abcd`: every point bound to its own role.
    pub const IDENTITY: Configuration = Configuration {
        names: PointName::ALL,
    };

    pub fn new(names: [PointName; 4]) -> Result<Self, ConfigError> {
        for (i, n) in names.iter().enumerate() {
            if names[..i].contains(n) {
                return Err(ConfigError::Duplicate { name: *n });
            }
        }
        Ok(Self { names })
    }

    #[inline]
    pub fn names(&self) -> [PointName; 4] {
        self.names
    }

    #[inline]
    pub fn get(&self, role: Role) -> PointName {
        self.names[role as usize]
    }

    /// Exchange the names bound to `(x, z)` and to `(y, w)`: `abcd` → `cdab`.
    pub fn swapped(&self) -> Self {
        let [x, y, z, w] = self.names;
        Self {
            names: [z, w, x, y],
        }
    }

    /// All 24 configurations in lexicographic order.
    pub fn all() -> Vec<Configuration> {
        let mut out = Vec::with_capacity(24);
        for x in PointName::ALL {
            for y in PointName::ALL {
                for z in PointName::ALL {
                    for w in PointName::ALL {
                        if let Ok(conf) = Configuration::new([x, y, z, w]) {
                            out.push(conf);
                        }
                    }
                }
            }
        }
        out
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.names {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

impl FromStr for Configuration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let chars: [char; 4] = chars
            .try_into()
            .map_err(|_| ConfigError::Length { got: s.chars().count() })?;
        let mut names = [PointName::A; 4];
        for (slot, ch) in names.iter_mut().zip(chars) {
            *slot = PointName::from_char(ch).ok_or(ConfigError::UnknownPoint { ch })?;
        }
        Self::new(names)
    }
}

/// Invalid configuration string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Length { got: usize },
    UnknownPoint { ch: char },
    Duplicate { name: PointName },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { got } => {
                write!(f, "configuration needs exactly 4 point names, got {got}")
            }
            Self::UnknownPoint { ch } => write!(f, "unknown point name {ch:?} (expected a..d)"),
            Self::Duplicate { name } => write!(f, "point {name} appears more than once"),
        }
    }
}

impl std::error::Error for ConfigError {}
