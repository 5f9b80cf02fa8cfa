use crate::error::KihonzuError;
use crate::index::Zone;
use crate::tile::Tile;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Output format for sheet geometries in CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    #[default]
    Wkt,
    /// GeoJSON format
    GeoJson,
}

#[derive(Serialize)]
struct TileRecord<'a> {
    code: &'a str,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    epsg: u32,
    geometry: String,
}

fn polygon_to_wkt(polygon: &geo_types::Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &geo_types::Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

/// Trait for writing collections of [`Tile`]s to CSV.
///
/// Every row carries the EPSG code of `zone`, the frame its coordinates are in.
pub trait TilesToCsv {
    fn to_csv(
        &self,
        path: impl AsRef<Path>,
        zone: Zone,
        format: GeometryFormat,
    ) -> Result<(), KihonzuError>;
}

impl TilesToCsv for [Tile] {
    fn to_csv(
        &self,
        path: impl AsRef<Path>,
        zone: Zone,
        format: GeometryFormat,
    ) -> Result<(), KihonzuError> {
        let epsg = zone.epsg();
        let file = File::create(path).map_err(|e| KihonzuError::IoError(e.to_string()))?;
        let mut writer = csv::Writer::from_writer(file);

        for tile in self {
            let polygon = tile.to_polygon();
            let geometry = match format {
                GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
            };
            writer
                .serialize(TileRecord {
                    code: &tile.code,
                    min_x: tile.min_x(),
                    min_y: tile.min_y(),
                    max_x: tile.max_x(),
                    max_y: tile.max_y(),
                    epsg,
                    geometry,
                })
                .map_err(|e| KihonzuError::CsvError(e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| KihonzuError::CsvError(e.to_string()))?;
        Ok(())
    }
}

impl TilesToCsv for Vec<Tile> {
    fn to_csv(
        &self,
        path: impl AsRef<Path>,
        zone: Zone,
        format: GeometryFormat,
    ) -> Result<(), KihonzuError> {
        self.as_slice().to_csv(path, zone, format)
    }
}
