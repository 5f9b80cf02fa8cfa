use crate::error::KihonzuError;
use crate::index::{JGD2011_EPSG, Zone};
use geo::MapCoords;
use geo_types::{MultiPolygon, Point, coord};
use proj::Proj;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`.
/// This allows functions to accept either type.
pub trait Coordinate {
    /// Returns the x-coordinate (easting or longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (northing or latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

fn jgd2011_to_zone_proj(zone: Zone) -> Result<Proj, KihonzuError> {
    let from = format!("EPSG:{}", JGD2011_EPSG);
    let to = format!("EPSG:{}", zone.epsg());
    Proj::new_known_crs(&from, &to, None).map_err(|e| KihonzuError::ProjectionError(e.to_string()))
}

/// Projects a JGD2011 longitude/latitude into the zone's plane rectangular
/// frame, returned as (easting, northing).
pub fn jgd2011_point_to_zone<C: Coordinate>(
    coord: &C,
    zone: Zone,
) -> Result<Point<f64>, KihonzuError> {
    let proj = jgd2011_to_zone_proj(zone)?;
    let (easting, northing) = proj
        .convert((coord.x(), coord.y()))
        .map_err(|e| KihonzuError::ProjectionError(e.to_string()))?;
    Ok(Point::new(easting, northing))
}

/// Projects a JGD2011 longitude/latitude boundary into the zone's plane
/// rectangular frame.
pub fn jgd2011_to_zone(
    boundary: &MultiPolygon<f64>,
    zone: Zone,
) -> Result<MultiPolygon<f64>, KihonzuError> {
    let proj = jgd2011_to_zone_proj(zone)?;
    let proj = &proj;
    boundary.try_map_coords(|c| {
        let (x, y) = proj
            .convert((c.x, c.y))
            .map_err(|e| KihonzuError::ProjectionError(e.to_string()))?;
        Ok::<_, KihonzuError>(coord! { x: x, y: y })
    })
}
