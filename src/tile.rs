use geo_types::{Polygon, Rect};

/// A single sheet (図郭) of the national base map.
///
/// Each `Tile` pairs the official sheet code with its axis-aligned extent in
/// the zone's plane rectangular coordinates (x = easting, y = northing, metres).
///
/// # Example
///
/// ```
/// use kihonzu_grid::{BlockLabel, Level, Zone, subdivide_block};
///
/// # fn main() -> Result<(), kihonzu_grid::KihonzuError> {
/// let tiles = subdivide_block(Zone::new(9)?, BlockLabel::parse("AA")?, Level::L5000)?;
/// let first = &tiles[0];
/// assert_eq!(first.code, "09AA00");
/// assert_eq!(first.max_y(), 300000.0);
///
/// // Convert the sheet to a polygon for GIS operations
/// let polygon = first.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Sheet code, e.g. `"09LD18"` at level 5000
    pub code: String,
    /// Sheet extent in plane rectangular coordinates
    pub rect: Rect<f64>,
}

impl Tile {
    pub(crate) fn new(code: String, rect: Rect<f64>) -> Self {
        Self { code, rect }
    }

    pub fn min_x(&self) -> f64 {
        self.rect.min().x
    }

    pub fn min_y(&self) -> f64 {
        self.rect.min().y
    }

    pub fn max_x(&self) -> f64 {
        self.rect.max().x
    }

    pub fn max_y(&self) -> f64 {
        self.rect.max().y
    }

    /// Area of the sheet in square metres.
    pub fn area(&self) -> f64 {
        self.rect.width() * self.rect.height()
    }

    /// Converts this sheet to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.rect.to_polygon()
    }
}
