//! # kihonzu-grid
//!
//! Sheet grids (図郭) of Japan's national base map for the Japanese Plane
//! Rectangular Coordinate System.
//!
//! A zone is partitioned into 40 km x 30 km blocks labelled `AA`, `AB`, ...;
//! each block into 10 x 10 level-5000 sheets; each of those into the sheets of
//! the requested map information level.
//!
//! ### 1. `TileGrid` - a whole zone
//!
//! ```
//! use kihonzu_grid::{Level, TileGrid, Zone};
//!
//! # fn main() -> Result<(), kihonzu_grid::KihonzuError> {
//! let grid = TileGrid::assemble(Zone::new(9)?, Level::L5000)?;
//! let first = &grid.tiles()[0];
//! assert_eq!(first.code, "09AA00");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `subdivide_block` / `format_code` - a single block or sheet
//!
//! ```
//! use kihonzu_grid::{BlockLabel, Level, TileIndex, Zone, format_code, subdivide_block};
//!
//! # fn main() -> Result<(), kihonzu_grid::KihonzuError> {
//! let zone = Zone::new(9)?;
//! let label = BlockLabel::parse("LD")?;
//! let tiles = subdivide_block(zone, label, Level::L250)?;
//! assert_eq!(tiles.len(), 40_000);
//!
//! let code = format_code(zone, label, TileIndex::new(1, 8, 0, 1), Level::L2500)?;
//! assert_eq!(code, "09LD182");
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Land filtering and output
//!
//! ```no_run
//! use kihonzu_grid::{
//!     Level, OutputFormat, TileGrid, Zone, jgd2011_to_zone, load_boundary, write_grid,
//! };
//!
//! # fn main() -> Result<(), kihonzu_grid::KihonzuError> {
//! let zone = Zone::new(9)?;
//! let boundary = load_boundary("data/jgd_latlon2rect_6668.geojson", zone)?;
//! let boundary = jgd2011_to_zone(&boundary, zone)?;
//!
//! let land = TileGrid::assemble_par(zone, Level::L500)?.intersecting(&boundary);
//! write_grid(&land, "out", OutputFormat::GeoParquet)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod coord;
pub mod error;
pub mod geom;
pub mod grid;
pub mod index;
pub mod io;
pub mod tile;

pub use config::RunConfig;
pub use coord::{Coordinate, jgd2011_point_to_zone, jgd2011_to_zone};
pub use error::KihonzuError;
pub use geom::{load_boundary, parse_boundary};
pub use grid::{ProgressObserver, TileGrid, TileGridBuilder, block_labels};
pub use index::{
    BLOCK_COLUMNS, BlockLabel, Level, MAX_ZONE, TileIndex, Zone, alphabet_index,
    alphabet_letter, format_code, subdivide_block,
};
pub use io::{
    GeometryFormat, GridToGeoParquet, OutputFormat, TilesToArrow, TilesToCsv, output_file_name,
    write_geoparquet, write_grid,
};
pub use tile::Tile;

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), KihonzuError> {
        let zone = Zone::new(9)?;
        let boundary = parse_boundary(
            "POLYGON((-6700 -35600, -6500 -35600, -6500 -35400, -6700 -35600))",
            zone,
        )?;

        let grid = TileGrid::builder()
            .zone(9)
            .level(Level::L1000)
            .parallel(true)
            .build()?;
        assert_eq!(grid.len(), 208 * 100 * 25);

        let land = grid.intersecting(&boundary);
        assert!(!land.is_empty());
        for tile in land.iter() {
            assert!(tile.code.starts_with("09LD18"), "{}", tile.code);
            assert_eq!(tile.code.len(), 8);
        }
        Ok(())
    }

    #[test]
    fn test_documented_origins_and_codes() -> Result<(), KihonzuError> {
        let aa = BlockLabel::parse("AA")?.origin();
        assert_eq!((aa.x, aa.y), (-160000.0, 300000.0));
        let bb = BlockLabel::parse("BB")?.origin();
        assert_eq!((bb.x, bb.y), (-120000.0, 270000.0));

        let zone = Zone::new(9)?;
        let label = BlockLabel::parse("AA")?;
        assert_eq!(
            format_code(zone, label, TileIndex::default(), Level::L5000)?,
            "09AA00"
        );
        assert!(format_code(zone, label, TileIndex::new(0, 0, 0, 1), Level::L2500)?.ends_with('2'));
        assert!(format_code(zone, label, TileIndex::default(), Level::L250)?.ends_with("AA"));
        Ok(())
    }

    #[test]
    fn test_invalid_level_rejected() {
        for bad in [0, 100, 2000, 10000, 5001] {
            assert_eq!(Level::try_from(bad), Err(KihonzuError::InvalidLevel(bad)));
        }
    }

    #[test]
    fn test_codes_unique_at_every_level_for_a_block_row() -> Result<(), KihonzuError> {
        let zone = Zone::new(5)?;
        for level in Level::ALL {
            let mut seen = HashSet::new();
            for col in 0..BLOCK_COLUMNS {
                for tile in subdivide_block(zone, BlockLabel::from_indices(0, col)?, level)? {
                    assert!(seen.insert(tile.code), "duplicate at level {}", level);
                }
            }
        }
        Ok(())
    }
}
