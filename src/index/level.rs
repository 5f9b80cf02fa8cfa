use crate::error::KihonzuError;
use crate::index::constants::{BASE_LEVEL, SHEET_HEIGHT, SHEET_WIDTH};
use std::fmt;
use std::str::FromStr;

/// Map information level (地図情報レベル) of the national base map.
///
/// The level is the scale denominator; each level-5000 sheet is split into
/// `divisions() x divisions()` sheets of the finer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    L5000,
    L2500,
    L1250,
    L1000,
    L500,
    L250,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::L5000,
        Level::L2500,
        Level::L1250,
        Level::L1000,
        Level::L500,
        Level::L250,
    ];

    pub fn denominator(&self) -> u32 {
        match self {
            Level::L5000 => 5000,
            Level::L2500 => 2500,
            Level::L1250 => 1250,
            Level::L1000 => 1000,
            Level::L500 => 500,
            Level::L250 => 250,
        }
    }

    /// Sheets per side of a level-5000 sheet at this level.
    pub fn divisions(&self) -> u32 {
        BASE_LEVEL / self.denominator()
    }

    /// East-west extent of one sheet in metres.
    pub fn tile_width(&self) -> f64 {
        SHEET_WIDTH / self.divisions() as f64
    }

    /// North-south extent of one sheet in metres.
    pub fn tile_height(&self) -> f64 {
        SHEET_HEIGHT / self.divisions() as f64
    }
}

impl TryFrom<u32> for Level {
    type Error = KihonzuError;

    fn try_from(denominator: u32) -> Result<Self, Self::Error> {
        Level::ALL
            .into_iter()
            .find(|level| level.denominator() == denominator)
            .ok_or(KihonzuError::InvalidLevel(denominator))
    }
}

impl FromStr for Level {
    type Err = KihonzuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let denominator: u32 = text
            .parse()
            .map_err(|_| KihonzuError::UnparsableLevel(text.to_string()))?;
        Level::try_from(denominator)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.denominator())
    }
}
