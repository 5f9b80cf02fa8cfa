use crate::grid::TileGrid;
use crate::tile::Tile;
use geo::{BoundingRect, Intersects};
use geo_types::MultiPolygon;
use log::info;
use rayon::prelude::*;

impl TileGrid {
    /// Keeps the sheets whose extent intersects `boundary`.
    ///
    /// `boundary` must be in the grid's plane rectangular frame. Sheets that
    /// only touch the boundary along an edge or corner are kept. Order is
    /// preserved.
    pub fn intersecting(&self, boundary: &MultiPolygon<f64>) -> TileGrid {
        let tiles: Vec<Tile> = match boundary.bounding_rect() {
            Some(envelope) => self
                .tiles()
                .par_iter()
                .filter(|tile| tile.rect.intersects(&envelope) && boundary.intersects(&tile.rect))
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        info!(
            "{} of {} sheets intersect the boundary",
            tiles.len(),
            self.len()
        );
        TileGrid::from_parts(tiles, self.zone(), self.level())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::KihonzuError;
    use crate::grid::TileGrid;
    use crate::index::{Level, Zone};
    use geo_types::{MultiPolygon, Rect, coord, polygon};
    use std::collections::HashMap;

    fn square(x: f64, y: f64, half: f64) -> MultiPolygon<f64> {
        let rect = Rect::new(
            coord! { x: x - half, y: y - half },
            coord! { x: x + half, y: y + half },
        );
        MultiPolygon::new(vec![rect.to_polygon()])
    }

    #[test]
    fn test_point_like_boundary_selects_one_sheet() -> Result<(), KihonzuError> {
        // Around Tokyo Station in zone IX.
        let grid = TileGrid::assemble(Zone::new(9)?, Level::L5000)?;
        let land = grid.intersecting(&square(-6600.0, -35500.0, 10.0));

        assert_eq!(land.len(), 1);
        assert_eq!(land.tiles()[0].code, "09LD18");
        assert_eq!(land.zone(), grid.zone());
        assert_eq!(land.level(), Level::L5000);
        Ok(())
    }

    #[test]
    fn test_touching_sheets_are_kept() -> Result<(), KihonzuError> {
        let grid = TileGrid::assemble(Zone::new(9)?, Level::L5000)?;
        // Exactly the extent of sheet 09AA55.
        let boundary = MultiPolygon::new(vec![polygon![
            (x: -140000.0, y: 285000.0),
            (x: -136000.0, y: 285000.0),
            (x: -136000.0, y: 282000.0),
            (x: -140000.0, y: 282000.0),
            (x: -140000.0, y: 285000.0),
        ]]);

        let land = grid.intersecting(&boundary);
        let codes: Vec<&str> = land.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(
            codes,
            [
                "09AA44", "09AA45", "09AA46", "09AA54", "09AA55", "09AA56", "09AA64", "09AA65",
                "09AA66"
            ]
        );
        Ok(())
    }

    #[test]
    fn test_boundary_outside_grid() -> Result<(), KihonzuError> {
        let grid = TileGrid::assemble(Zone::new(1)?, Level::L5000)?;
        let land = grid.intersecting(&square(5_000_000.0, 5_000_000.0, 100.0));
        assert!(land.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_boundary() -> Result<(), KihonzuError> {
        let grid = TileGrid::assemble(Zone::new(1)?, Level::L5000)?;
        let land = grid.intersecting(&MultiPolygon::new(vec![]));
        assert!(land.is_empty());
        Ok(())
    }

    #[test]
    fn test_filter_preserves_order() -> Result<(), KihonzuError> {
        let grid = TileGrid::assemble(Zone::new(9)?, Level::L5000)?;
        let land = grid.intersecting(&square(0.0, 0.0, 50_000.0));
        let order: HashMap<&str, usize> = grid
            .iter()
            .enumerate()
            .map(|(i, t)| (t.code.as_str(), i))
            .collect();
        let positions: Vec<usize> = land
            .iter()
            .filter_map(|t| order.get(t.code.as_str()).copied())
            .collect();
        assert_eq!(positions.len(), land.len());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        Ok(())
    }
}
