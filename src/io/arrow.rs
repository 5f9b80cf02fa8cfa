use crate::error::KihonzuError;
use crate::grid::TileGrid;
use crate::index::{Level, Zone};
use crate::tile::Tile;
use arrow_array::{Float64Array, RecordBatch, StringArray, UInt8Array, UInt32Array};
use arrow_schema::{DataType, Field, Schema};
use geoarrow_array::IntoArrow;
use geoarrow_array::array::PolygonArray;
use geoarrow_array::builder::PolygonBuilder;
use geoarrow_schema::{Crs, Dimension, Metadata, PolygonType};
use rayon::prelude::*;
use std::sync::Arc;

fn zone_metadata(zone: Zone) -> Arc<Metadata> {
    let crs = Crs::from_authority_code(format!("EPSG:{}", zone.epsg()));
    Arc::new(Metadata::new(crs, None))
}

/// Trait for converting collections of [`Tile`]s to Arrow arrays.
///
/// Implemented for `[Tile]` and `Vec<Tile>`. Tiles carry no zone of their own,
/// so the caller supplies it for the CRS metadata.
pub trait TilesToArrow {
    /// Converts sheet extents to an Arrow PolygonArray.
    fn to_arrow_polygons(&self, zone: Zone) -> PolygonArray;
    /// Converts sheets to a RecordBatch with code, zone, level, extent and geometry.
    fn to_record_batch(&self, zone: Zone, level: Level) -> Result<RecordBatch, KihonzuError>;
}

impl TilesToArrow for [Tile] {
    fn to_arrow_polygons(&self, zone: Zone) -> PolygonArray {
        let poly = PolygonType::new(Dimension::XY, zone_metadata(zone));
        let polygons: Vec<_> = self.par_iter().map(Tile::to_polygon).collect();
        PolygonBuilder::from_polygons(&polygons, poly).finish()
    }

    fn to_record_batch(&self, zone: Zone, level: Level) -> Result<RecordBatch, KihonzuError> {
        let polygon_array = self.to_arrow_polygons(zone);
        let codes: StringArray = self.iter().map(|t| Some(t.code.as_str())).collect();
        let zones: UInt8Array = self.iter().map(|_| Some(zone.number())).collect();
        let levels: UInt32Array = self.iter().map(|_| Some(level.denominator())).collect();
        let min_xs: Float64Array = self.iter().map(|t| Some(t.min_x())).collect();
        let min_ys: Float64Array = self.iter().map(|t| Some(t.min_y())).collect();
        let max_xs: Float64Array = self.iter().map(|t| Some(t.max_x())).collect();
        let max_ys: Float64Array = self.iter().map(|t| Some(t.max_y())).collect();

        let geometry_field = polygon_array.extension_type().to_field("geometry", false);
        let schema = Schema::new(vec![
            Field::new("code", DataType::Utf8, false),
            Field::new("zone", DataType::UInt8, false),
            Field::new("level", DataType::UInt32, false),
            Field::new("min_x", DataType::Float64, false),
            Field::new("min_y", DataType::Float64, false),
            Field::new("max_x", DataType::Float64, false),
            Field::new("max_y", DataType::Float64, false),
            geometry_field,
        ]);

        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(codes),
                Arc::new(zones),
                Arc::new(levels),
                Arc::new(min_xs),
                Arc::new(min_ys),
                Arc::new(max_xs),
                Arc::new(max_ys),
                Arc::new(polygon_array.into_arrow()),
            ],
        )
        .map_err(|e| KihonzuError::IoError(e.to_string()))
    }
}

impl TilesToArrow for Vec<Tile> {
    fn to_arrow_polygons(&self, zone: Zone) -> PolygonArray {
        self.as_slice().to_arrow_polygons(zone)
    }

    fn to_record_batch(&self, zone: Zone, level: Level) -> Result<RecordBatch, KihonzuError> {
        self.as_slice().to_record_batch(zone, level)
    }
}

impl TileGrid {
    /// Converts this grid to an Arrow RecordBatch tagged with the zone's CRS.
    pub fn to_record_batch(&self) -> Result<RecordBatch, KihonzuError> {
        self.tiles().to_record_batch(self.zone(), self.level())
    }
}
