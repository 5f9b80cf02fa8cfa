use crate::error::KihonzuError;
use crate::index::constants::{JGD2011_EPSG, MAX_ZONE, ZONE_BLOCK_ROWS};
use std::fmt;

/// A zone of the Japanese Plane Rectangular Coordinate System (I-XIX).
///
/// # Example
///
/// ```
/// use kihonzu_grid::Zone;
///
/// # fn main() -> Result<(), kihonzu_grid::KihonzuError> {
/// let zone = Zone::new(9)?;
/// assert_eq!(zone.epsg(), 6677);
/// assert_eq!(zone.block_rows(), 26);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Zone(u8);

impl Zone {
    pub fn new(number: u8) -> Result<Self, KihonzuError> {
        if (1..=MAX_ZONE).contains(&number) {
            Ok(Self(number))
        } else {
            Err(KihonzuError::InvalidZone(number))
        }
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// EPSG code of JGD2011 / Japan Plane Rectangular CS for this zone.
    pub fn epsg(&self) -> u32 {
        JGD2011_EPSG + self.0 as u32
    }

    /// Number of block rows ('A' onwards) the zone is partitioned into.
    pub fn block_rows(&self) -> u8 {
        ZONE_BLOCK_ROWS[(self.0 - 1) as usize]
    }
}

impl TryFrom<u8> for Zone {
    type Error = KihonzuError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Zone::new(number)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
