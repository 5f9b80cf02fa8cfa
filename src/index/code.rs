use crate::error::KihonzuError;
use crate::index::constants::SHEETS_PER_SIDE;
use crate::index::label::{BlockLabel, alphabet_letter};
use crate::index::level::Level;
use crate::index::zone::Zone;

/// Position of a sheet inside its block.
///
/// `row5000`/`col5000` select one of the 10 x 10 level-5000 sheets,
/// `sub_row`/`sub_col` the finer sheet inside it (both 0 at level 5000).
/// Rows count north to south, columns west to east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileIndex {
    pub row5000: u8,
    pub col5000: u8,
    pub sub_row: u8,
    pub sub_col: u8,
}

impl TileIndex {
    pub fn new(row5000: u8, col5000: u8, sub_row: u8, sub_col: u8) -> Self {
        Self {
            row5000,
            col5000,
            sub_row,
            sub_col,
        }
    }

    fn validate(&self, level: Level) -> Result<(), KihonzuError> {
        if self.row5000 >= SHEETS_PER_SIDE || self.col5000 >= SHEETS_PER_SIDE {
            return Err(KihonzuError::InvalidTileIndex(format!(
                "level-5000 sheet ({}, {}) outside 0..{}",
                self.row5000, self.col5000, SHEETS_PER_SIDE
            )));
        }
        let div = level.divisions();
        if self.sub_row as u32 >= div || self.sub_col as u32 >= div {
            return Err(KihonzuError::InvalidTileIndex(format!(
                "sub sheet ({}, {}) outside 0..{} for level {}",
                self.sub_row, self.sub_col, div, level
            )));
        }
        Ok(())
    }
}

/// Builds the sheet code (図郭番号) for a sheet at `level`.
///
/// Every code starts with the level-5000 code: the two digit zone, the
/// block label, then the level-5000 row and column digits. Finer levels
/// append a suffix:
///
/// | level | suffix                                  |
/// |-------|-----------------------------------------|
/// | 2500  | `2 * sub_row + sub_col + 1` (1-4)       |
/// | 1250  | `sub_row + 1`, `sub_col + 1` (11-44)    |
/// | 1000  | `sub_row` digit, `'A' + sub_col`        |
/// | 500   | `sub_row`, `sub_col` digits (00-99)     |
/// | 250   | `'A' + sub_row`, `'A' + sub_col` (AA-TT)|
///
/// # Example
/// ```
/// use kihonzu_grid::{BlockLabel, Level, TileIndex, Zone, format_code};
///
/// # fn main() -> Result<(), kihonzu_grid::KihonzuError> {
/// let zone = Zone::new(9)?;
/// let label = BlockLabel::parse("AA")?;
/// let code = format_code(zone, label, TileIndex::default(), Level::L5000)?;
/// assert_eq!(code, "09AA00");
///
/// let code = format_code(zone, label, TileIndex::new(3, 7, 1, 2), Level::L1000)?;
/// assert_eq!(code, "09AA371C");
/// # Ok(())
/// # }
/// ```
pub fn format_code(
    zone: Zone,
    label: BlockLabel,
    index: TileIndex,
    level: Level,
) -> Result<String, KihonzuError> {
    index.validate(level)?;

    let mut code = format!(
        "{:02}{}{}{}",
        zone.number(),
        label,
        index.row5000,
        index.col5000
    );
    code.push_str(&level_suffix(index, level)?);
    Ok(code)
}

fn level_suffix(index: TileIndex, level: Level) -> Result<String, KihonzuError> {
    let TileIndex {
        sub_row, sub_col, ..
    } = index;

    let suffix = match level {
        Level::L5000 => String::new(),
        Level::L2500 => (2 * sub_row + sub_col + 1).to_string(),
        Level::L1250 => format!("{}{}", sub_row + 1, sub_col + 1),
        Level::L1000 => format!("{}{}", sub_row, alphabet_letter(sub_col)?),
        Level::L500 => format!("{}{}", sub_row, sub_col),
        Level::L250 => format!("{}{}", alphabet_letter(sub_row)?, alphabet_letter(sub_col)?),
    };
    Ok(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn code(level: Level, index: TileIndex) -> Result<String, KihonzuError> {
        format_code(Zone::new(9)?, BlockLabel::parse("AA")?, index, level)
    }

    #[test]
    fn test_level_5000_code() -> Result<(), KihonzuError> {
        assert_eq!(code(Level::L5000, TileIndex::default())?, "09AA00");
        assert_eq!(code(Level::L5000, TileIndex::new(4, 2, 0, 0))?, "09AA42");
        Ok(())
    }

    #[test]
    fn test_zone_is_zero_padded() -> Result<(), KihonzuError> {
        let c = format_code(
            Zone::new(12)?,
            BlockLabel::parse("KC")?,
            TileIndex::new(9, 9, 0, 0),
            Level::L5000,
        )?;
        assert_eq!(c, "12KC99");
        Ok(())
    }

    #[test]
    fn test_level_2500_suffix() -> Result<(), KihonzuError> {
        assert_eq!(code(Level::L2500, TileIndex::new(0, 0, 0, 0))?, "09AA001");
        assert_eq!(code(Level::L2500, TileIndex::new(0, 0, 0, 1))?, "09AA002");
        assert_eq!(code(Level::L2500, TileIndex::new(0, 0, 1, 0))?, "09AA003");
        assert_eq!(code(Level::L2500, TileIndex::new(0, 0, 1, 1))?, "09AA004");
        Ok(())
    }

    #[test]
    fn test_level_1250_suffix() -> Result<(), KihonzuError> {
        assert_eq!(code(Level::L1250, TileIndex::new(0, 0, 0, 0))?, "09AA0011");
        assert_eq!(code(Level::L1250, TileIndex::new(0, 0, 3, 1))?, "09AA0042");
        Ok(())
    }

    #[test]
    fn test_level_1000_suffix() -> Result<(), KihonzuError> {
        assert_eq!(code(Level::L1000, TileIndex::new(0, 0, 0, 0))?, "09AA000A");
        assert_eq!(code(Level::L1000, TileIndex::new(0, 0, 4, 4))?, "09AA004E");
        Ok(())
    }

    #[test]
    fn test_level_500_suffix() -> Result<(), KihonzuError> {
        assert_eq!(code(Level::L500, TileIndex::new(5, 6, 7, 8))?, "09AA5678");
        Ok(())
    }

    #[test]
    fn test_level_250_suffix() -> Result<(), KihonzuError> {
        assert_eq!(code(Level::L250, TileIndex::new(0, 0, 0, 0))?, "09AA00AA");
        assert_eq!(code(Level::L250, TileIndex::new(0, 0, 19, 19))?, "09AA00TT");
        assert_eq!(code(Level::L250, TileIndex::new(0, 0, 1, 2))?, "09AA00BC");
        Ok(())
    }

    #[test]
    fn test_out_of_range_indices_rejected() {
        assert!(matches!(
            code(Level::L5000, TileIndex::new(10, 0, 0, 0)),
            Err(KihonzuError::InvalidTileIndex(_))
        ));
        assert!(matches!(
            code(Level::L5000, TileIndex::new(0, 0, 1, 0)),
            Err(KihonzuError::InvalidTileIndex(_))
        ));
        assert!(matches!(
            code(Level::L2500, TileIndex::new(0, 0, 0, 2)),
            Err(KihonzuError::InvalidTileIndex(_))
        ));
        assert!(matches!(
            code(Level::L250, TileIndex::new(0, 0, 20, 0)),
            Err(KihonzuError::InvalidTileIndex(_))
        ));
    }

    #[test]
    fn test_suffixes_unique_within_sheet() -> Result<(), KihonzuError> {
        for level in Level::ALL {
            let div = level.divisions() as u8;
            let mut seen = HashSet::new();
            for sub_row in 0..div {
                for sub_col in 0..div {
                    let c = code(level, TileIndex::new(0, 0, sub_row, sub_col))?;
                    assert!(seen.insert(c), "duplicate code at level {}", level);
                }
            }
            assert_eq!(seen.len(), (div as usize) * (div as usize));
        }
        Ok(())
    }
}
