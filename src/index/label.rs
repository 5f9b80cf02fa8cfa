use crate::error::KihonzuError;
use crate::index::constants::{
    BLOCK_HEIGHT_KM, BLOCK_ORIGIN_NORTH_KM, BLOCK_ORIGIN_WEST_KM, BLOCK_WIDTH_KM,
};
use geo_types::{Coord, Rect, coord};
use std::fmt;
use std::str::FromStr;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the position of an uppercase ASCII letter in the alphabet ('A' is 0).
pub fn alphabet_index(c: char) -> Result<u8, KihonzuError> {
    ALPHABET
        .iter()
        .position(|&letter| letter as char == c)
        .map(|i| i as u8)
        .ok_or_else(|| KihonzuError::InvalidBlockLabel(c.to_string()))
}

/// Returns the uppercase letter at `index` in the alphabet.
pub fn alphabet_letter(index: u8) -> Result<char, KihonzuError> {
    ALPHABET
        .get(index as usize)
        .map(|&letter| letter as char)
        .ok_or_else(|| KihonzuError::InvalidTileIndex(format!("no letter for index {}", index)))
}

/// A block (区画) label such as `"LD"`.
///
/// The first letter counts block rows north to south, the second block
/// columns west to east. Each block covers 40 km x 30 km of its zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockLabel {
    row: u8,
    col: u8,
}

impl BlockLabel {
    pub fn from_indices(row: u8, col: u8) -> Result<Self, KihonzuError> {
        alphabet_letter(row)
            .and(alphabet_letter(col))
            .map_err(|_| KihonzuError::InvalidBlockLabel(format!("row {} col {}", row, col)))?;
        Ok(Self { row, col })
    }

    /// Parses a two letter label.
    ///
    /// # Example
    /// ```
    /// use kihonzu_grid::BlockLabel;
    ///
    /// # fn main() -> Result<(), kihonzu_grid::KihonzuError> {
    /// let label = BlockLabel::parse("BB")?;
    /// assert_eq!((label.row(), label.col()), (1, 1));
    /// assert!(BlockLabel::parse("b1").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(s: &str) -> Result<Self, KihonzuError> {
        let invalid = || KihonzuError::InvalidBlockLabel(s.to_string());
        let mut chars = s.chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let row = alphabet_index(r).map_err(|_| invalid())?;
        let col = alphabet_index(c).map_err(|_| invalid())?;
        Ok(Self { row, col })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// North-west corner of the block in the zone's projected frame (metres).
    ///
    /// # Example
    /// ```
    /// use kihonzu_grid::BlockLabel;
    ///
    /// # fn main() -> Result<(), kihonzu_grid::KihonzuError> {
    /// let origin = BlockLabel::parse("AA")?.origin();
    /// assert_eq!((origin.x, origin.y), (-160000.0, 300000.0));
    /// # Ok(())
    /// # }
    /// ```
    pub fn origin(&self) -> Coord<f64> {
        let x = (BLOCK_ORIGIN_WEST_KM + self.col as f64 * BLOCK_WIDTH_KM) * 1000.0;
        let y = (BLOCK_ORIGIN_NORTH_KM - self.row as f64 * BLOCK_HEIGHT_KM) * 1000.0;
        coord! { x: x, y: y }
    }

    /// Full extent of the block.
    pub fn bounds(&self) -> Rect<f64> {
        let nw = self.origin();
        Rect::new(
            nw,
            coord! {
                x: nw.x + BLOCK_WIDTH_KM * 1000.0,
                y: nw.y - BLOCK_HEIGHT_KM * 1000.0
            },
        )
    }
}

impl FromStr for BlockLabel {
    type Err = KihonzuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockLabel::parse(s)
    }
}

impl fmt::Display for BlockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Both indices were checked against the alphabet on construction.
        let row = ALPHABET[self.row as usize] as char;
        let col = ALPHABET[self.col as usize] as char;
        write!(f, "{}{}", row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_index() -> Result<(), KihonzuError> {
        assert_eq!(alphabet_index('A')?, 0);
        assert_eq!(alphabet_index('Z')?, 25);
        assert!(alphabet_index('a').is_err());
        assert!(alphabet_index('@').is_err());
        assert!(alphabet_index('[').is_err());
        Ok(())
    }

    #[test]
    fn test_alphabet_letter() -> Result<(), KihonzuError> {
        assert_eq!(alphabet_letter(0)?, 'A');
        assert_eq!(alphabet_letter(19)?, 'T');
        assert!(alphabet_letter(26).is_err());
        Ok(())
    }

    #[test]
    fn test_origin_aa() -> Result<(), KihonzuError> {
        let origin = BlockLabel::parse("AA")?.origin();
        assert_eq!(origin.x, -160000.0);
        assert_eq!(origin.y, 300000.0);
        Ok(())
    }

    #[test]
    fn test_origin_bb() -> Result<(), KihonzuError> {
        let origin = BlockLabel::parse("BB")?.origin();
        assert_eq!(origin.x, -120000.0);
        assert_eq!(origin.y, 270000.0);
        Ok(())
    }

    #[test]
    fn test_origin_last_zone_nine_row() -> Result<(), KihonzuError> {
        let origin = BlockLabel::parse("ZH")?.origin();
        assert_eq!(origin.x, 120000.0);
        assert_eq!(origin.y, -450000.0);
        Ok(())
    }

    #[test]
    fn test_bounds() -> Result<(), KihonzuError> {
        let bounds = BlockLabel::parse("AA")?.bounds();
        assert_eq!(bounds.min(), coord! { x: -160000.0, y: 270000.0 });
        assert_eq!(bounds.max(), coord! { x: -120000.0, y: 300000.0 });
        Ok(())
    }

    #[test]
    fn test_parse_rejects_bad_labels() {
        for bad in ["", "A", "ABC", "aA", "A1", "Aあ", "1A"] {
            assert!(
                matches!(BlockLabel::parse(bad), Err(KihonzuError::InvalidBlockLabel(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_from_indices_and_display() -> Result<(), KihonzuError> {
        let label = BlockLabel::from_indices(11, 3)?;
        assert_eq!(label.to_string(), "LD");
        assert_eq!("LD".parse::<BlockLabel>()?, label);
        assert!(BlockLabel::from_indices(26, 0).is_err());
        Ok(())
    }
}
