use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Color tone values, in cycling order.
pub const COLORS: &[&str] = &["warm", "cool", "greyscale"];

/// People count values, in cycling order.
pub const PEOPLE: &[&str] = &["many", "few", "none"];

/// Time of day values, in cycling order.
pub const TIMES: &[&str] = &["night", "day", "dawn/dusk"];

/// One of the fixed tag dimensions a wallpaper is tagged along.
///
/// Each category maps to exactly one column of the `wallpapers` table and
/// owns an ordered set of known values. The first value is also the column's
/// schema default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Color,
    People,
    Time,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Color, Self::People, Self::Time];

    /// Column name in the `wallpapers` table.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::People => "people",
            Self::Time => "time",
        }
    }

    /// The ordered set of known values for this category.
    #[must_use]
    pub const fn values(self) -> &'static [&'static str] {
        match self {
            Self::Color => COLORS,
            Self::People => PEOPLE,
            Self::Time => TIMES,
        }
    }

    #[must_use]
    pub const fn default_value(self) -> &'static str {
        self.values()[0]
    }

    /// Position of `value` in this category's value set, if it is a known value.
    #[must_use]
    pub fn position(self, value: &str) -> Option<usize> {
        self.values().iter().position(|v| *v == value)
    }

    /// The value that follows `current`, wrapping at the end of the set.
    ///
    /// A missing or unrecognised `current` counts as the first value, so the
    /// result is the second value of the set.
    #[must_use]
    pub fn next_value(self, current: Option<&str>) -> &'static str {
        let values = self.values();
        let index = current.and_then(|v| self.position(v)).unwrap_or(0);
        values[(index + 1) % values.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(Self::Color),
            "people" => Ok(Self::People),
            "time" => Ok(Self::Time),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}
