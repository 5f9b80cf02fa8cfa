pub mod arrow;
pub mod csv;
pub mod parquet;

pub use arrow::TilesToArrow;
pub use csv::{GeometryFormat, TilesToCsv};
pub use parquet::{GridToGeoParquet, write_geoparquet};

use crate::error::KihonzuError;
use crate::grid::TileGrid;
use crate::index::{Level, Zone};
use log::info;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File format written by [`write_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// GeoParquet with WKB geometry and the zone's EPSG code in its metadata
    #[default]
    GeoParquet,
    /// CSV with a WKT geometry column and an `epsg` column
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::GeoParquet => "parquet",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = KihonzuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parquet" | "geoparquet" => Ok(OutputFormat::GeoParquet),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(KihonzuError::ConfigError(format!(
                "Unknown output format '{}' (expected parquet or csv)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// File name for a grid, e.g. `Zone9_level500.parquet`.
pub fn output_file_name(zone: Zone, level: Level, format: OutputFormat) -> String {
    format!("Zone{}_level{}.{}", zone, level, format.extension())
}

/// Writes `grid` into `output_dir`, creating the directory if needed.
///
/// Returns the path of the written file.
pub fn write_grid(
    grid: &TileGrid,
    output_dir: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<PathBuf, KihonzuError> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)
        .map_err(|e| KihonzuError::IoError(format!("{}: {}", output_dir.display(), e)))?;

    let path = output_dir.join(output_file_name(grid.zone(), grid.level(), format));
    match format {
        OutputFormat::GeoParquet => grid.to_geoparquet(&path)?,
        OutputFormat::Csv => grid.tiles().to_csv(&path, grid.zone(), GeometryFormat::Wkt)?,
    }

    info!("Wrote {} sheets to '{}'", grid.len(), path.display());
    Ok(path)
}
