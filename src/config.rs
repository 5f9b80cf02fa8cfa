use crate::error::KihonzuError;
use crate::io::OutputFormat;
use std::env;
use std::path::PathBuf;

/// Land boundary used when `KIHONZU_BOUNDARY` is not set.
pub const DEFAULT_BOUNDARY_PATH: &str = "./data/jgd_latlon2rect_6668.geojson";

pub const BOUNDARY_ENV: &str = "KIHONZU_BOUNDARY";
pub const FORMAT_ENV: &str = "KIHONZU_FORMAT";
pub const PARALLEL_ENV: &str = "KIHONZU_PARALLEL";
pub const PROGRESS_ENV: &str = "KIHONZU_PROGRESS";

/// Settings for a grid generation run that are not part of the command line.
///
/// # Example
/// ```
/// use kihonzu_grid::{OutputFormat, RunConfig};
///
/// let config = RunConfig::new()
///     .boundary_path("zones.geojson")
///     .format(OutputFormat::Csv)
///     .parallel(false);
/// assert!(config.progress);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// GeoJSON or WKT land boundary in JGD2011 longitude/latitude
    pub boundary_path: PathBuf,
    pub format: OutputFormat,
    /// Subdivide blocks on the rayon pool
    pub parallel: bool,
    /// Show a progress bar while blocks are generated
    pub progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            boundary_path: PathBuf::from(DEFAULT_BOUNDARY_PATH),
            format: OutputFormat::default(),
            parallel: true,
            progress: true,
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boundary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.boundary_path = path.into();
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, KihonzuError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    /// for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, KihonzuError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(BOUNDARY_ENV).filter(|p| !p.trim().is_empty()) {
            config.boundary_path = PathBuf::from(path);
        }
        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format.parse()?;
        }
        if let Some(value) = lookup(PARALLEL_ENV) {
            config.parallel = parse_bool(PARALLEL_ENV, &value)?;
        }
        if let Some(value) = lookup(PROGRESS_ENV) {
            config.progress = parse_bool(PROGRESS_ENV, &value)?;
        }

        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, KihonzuError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(KihonzuError::ConfigError(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() -> Result<(), KihonzuError> {
        let config = RunConfig::from_lookup(lookup(&[]))?;
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.boundary_path, PathBuf::from(DEFAULT_BOUNDARY_PATH));
        assert_eq!(config.format, OutputFormat::GeoParquet);
        assert!(config.parallel);
        assert!(config.progress);
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<(), KihonzuError> {
        let config = RunConfig::from_lookup(lookup(&[
            (BOUNDARY_ENV, "/tmp/land.wkt"),
            (FORMAT_ENV, "csv"),
            (PARALLEL_ENV, "false"),
            (PROGRESS_ENV, "0"),
        ]))?;
        assert_eq!(config.boundary_path, PathBuf::from("/tmp/land.wkt"));
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(!config.parallel);
        assert!(!config.progress);
        Ok(())
    }

    #[test]
    fn test_blank_boundary_keeps_default() -> Result<(), KihonzuError> {
        let config = RunConfig::from_lookup(lookup(&[(BOUNDARY_ENV, "  ")]))?;
        assert_eq!(config.boundary_path, PathBuf::from(DEFAULT_BOUNDARY_PATH));
        Ok(())
    }

    #[test]
    fn test_invalid_values() {
        let result = RunConfig::from_lookup(lookup(&[(PARALLEL_ENV, "maybe")]));
        assert!(matches!(result, Err(KihonzuError::ConfigError(_))));

        let result = RunConfig::from_lookup(lookup(&[(FORMAT_ENV, "shp")]));
        assert!(matches!(result, Err(KihonzuError::ConfigError(_))));
    }
}
