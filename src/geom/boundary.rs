use crate::error::KihonzuError;
use crate::index::Zone;
use geo_types::{Geometry, MultiPolygon, Polygon};
use geojson::{Feature, GeoJson};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use wkt::Wkt;

/// Feature property holding the plane rectangular zone number.
pub const ZONE_PROPERTY: &str = "Zone";

/// Reads the land boundary of `zone` from a GeoJSON or WKT file.
///
/// Coordinates are expected in JGD2011 longitude/latitude (EPSG:6668). For a
/// FeatureCollection only features whose `Zone` property equals the zone
/// number are kept; a single geometry, feature or WKT is taken as it is.
pub fn load_boundary(
    path: impl AsRef<Path>,
    zone: Zone,
) -> Result<MultiPolygon<f64>, KihonzuError> {
    let path = path.as_ref();
    info!("Reading land boundary from '{}'", path.display());
    let text = fs::read_to_string(path)
        .map_err(|e| KihonzuError::IoError(format!("{}: {}", path.display(), e)))?;
    parse_boundary(&text, zone)
}

/// Same as [`load_boundary`] for an in-memory document.
pub fn parse_boundary(text: &str, zone: Zone) -> Result<MultiPolygon<f64>, KihonzuError> {
    let trimmed = text.trim();
    let mut polygons = Vec::new();

    if trimmed.starts_with('{') {
        let geojson: GeoJson = trimmed
            .parse()
            .map_err(|e: geojson::Error| KihonzuError::GeometryParseError(e.to_string()))?;

        match geojson {
            GeoJson::FeatureCollection(collection) => {
                let total = collection.features.len();
                let mut matched = 0;
                for feature in collection.features {
                    if !in_zone(&feature, zone) {
                        continue;
                    }
                    matched += 1;
                    if let Some(geom) = feature.geometry {
                        collect_polygons(to_geo(geom)?, &mut polygons);
                    }
                }
                debug!("{} of {} features belong to zone {}", matched, total, zone);
            }
            GeoJson::Feature(feature) => {
                if let Some(geom) = feature.geometry {
                    collect_polygons(to_geo(geom)?, &mut polygons);
                }
            }
            GeoJson::Geometry(geom) => collect_polygons(to_geo(geom)?, &mut polygons),
        }
    } else {
        collect_polygons(parse_wkt(trimmed)?, &mut polygons);
    }

    if polygons.is_empty() {
        return Err(KihonzuError::GeometryParseError(format!(
            "No boundary polygons found for zone {}",
            zone
        )));
    }
    Ok(MultiPolygon::new(polygons))
}

fn parse_wkt(s: &str) -> Result<Geometry<f64>, KihonzuError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| KihonzuError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        KihonzuError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

fn to_geo(geom: geojson::Geometry) -> Result<Geometry<f64>, KihonzuError> {
    Geometry::try_from(geom).map_err(|e| KihonzuError::GeometryParseError(e.to_string()))
}

fn in_zone(feature: &Feature, zone: Zone) -> bool {
    match feature.property(ZONE_PROPERTY) {
        Some(Value::Number(n)) => n.as_u64() == Some(zone.number() as u64),
        Some(Value::String(s)) => s.trim().parse::<u8>().ok() == Some(zone.number()),
        _ => false,
    }
}

fn collect_polygons(geom: Geometry<f64>, out: &mut Vec<Polygon<f64>>) {
    match geom {
        Geometry::Polygon(poly) => out.push(poly),
        Geometry::MultiPolygon(mp) => out.extend(mp.0),
        Geometry::Rect(rect) => out.push(rect.to_polygon()),
        Geometry::GeometryCollection(gc) => {
            for g in gc.0 {
                collect_polygons(g, out);
            }
        }
        _ => debug!("Ignoring non-areal boundary geometry"),
    }
}
