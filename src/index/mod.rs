pub mod code;
pub mod constants;
pub mod label;
pub mod level;
mod subdivide;
pub mod zone;

pub use code::{TileIndex, format_code};
pub use constants::{
    BASE_LEVEL, BLOCK_COLUMNS, JGD2011_EPSG, MAX_ZONE, SHEET_HEIGHT, SHEET_WIDTH,
    SHEETS_PER_SIDE, ZONE_BLOCK_ROWS,
};
pub use label::{BlockLabel, alphabet_index, alphabet_letter};
pub use level::Level;
pub use subdivide::subdivide_block;
pub use zone::Zone;
