use crate::error::KihonzuError;
use crate::index::code::{TileIndex, format_code};
use crate::index::constants::{SHEET_HEIGHT, SHEET_WIDTH, SHEETS_PER_SIDE};
use crate::index::label::BlockLabel;
use crate::index::level::Level;
use crate::index::zone::Zone;
use crate::tile::Tile;
use geo_types::{Rect, coord};

/// Enumerates every sheet of `level` inside one block.
///
/// The block is first cut into 10 x 10 level-5000 sheets, then each of those
/// into `div x div` sheets where `div = 5000 / level`. Sheets are returned in
/// level-5000 row, level-5000 column, sub row, sub column order, rows running
/// north to south and columns west to east.
pub fn subdivide_block(
    zone: Zone,
    label: BlockLabel,
    level: Level,
) -> Result<Vec<Tile>, KihonzuError> {
    let origin = label.origin();
    let div = level.divisions() as u8;
    let dx = level.tile_width();
    let dy = level.tile_height();

    let per_side = SHEETS_PER_SIDE as usize * div as usize;
    let mut tiles = Vec::with_capacity(per_side * per_side);

    for row5000 in 0..SHEETS_PER_SIDE {
        for col5000 in 0..SHEETS_PER_SIDE {
            let sheet_x = origin.x + col5000 as f64 * SHEET_WIDTH;
            let sheet_y = origin.y - row5000 as f64 * SHEET_HEIGHT;

            for sub_row in 0..div {
                let north = sheet_y - sub_row as f64 * dy;
                let south = sheet_y - (sub_row as f64 + 1.0) * dy;

                for sub_col in 0..div {
                    let west = sheet_x + sub_col as f64 * dx;
                    let east = sheet_x + (sub_col as f64 + 1.0) * dx;

                    let index = TileIndex::new(row5000, col5000, sub_row, sub_col);
                    let code = format_code(zone, label, index, level)?;
                    // Rect::new orders the corners into min/max.
                    let rect = Rect::new(
                        coord! { x: west, y: north },
                        coord! { x: east, y: south },
                    );
                    tiles.push(Tile::new(code, rect));
                }
            }
        }
    }

    Ok(tiles)
}
