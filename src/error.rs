/// Error type for kihonzu-grid operations.
#[derive(Debug, Clone, PartialEq)]
pub enum KihonzuError {
    /// The zone is outside the plane rectangular system range (1-19).
    InvalidZone(u8),
    /// The map information level is not one of 5000, 2500, 1250, 1000, 500, 250.
    InvalidLevel(u32),
    /// The map information level text is not a number.
    UnparsableLevel(String),
    /// The block label is not two uppercase ASCII letters.
    InvalidBlockLabel(String),
    /// A level-5000 or sub-level index is out of range for the requested level.
    InvalidTileIndex(String),
    /// A required builder parameter was not supplied.
    MissingParameter(&'static str),
    /// Coordinate projection failed (JGD2011 to plane rectangular).
    ProjectionError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// File I/O or serialization error.
    IoError(String),
    /// CSV writing error.
    CsvError(String),
    /// An environment or `.env` setting could not be interpreted.
    ConfigError(String),
}

impl std::fmt::Display for KihonzuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KihonzuError::InvalidZone(z) => write!(f, "Invalid zone: {} (expected 1-19)", z),
            KihonzuError::InvalidLevel(l) => write!(
                f,
                "Invalid map information level: {} (expected 5000, 2500, 1250, 1000, 500 or 250)",
                l
            ),
            KihonzuError::UnparsableLevel(text) => write!(
                f,
                "Invalid map information level: '{}' (expected 5000, 2500, 1250, 1000, 500 or 250)",
                text
            ),
            KihonzuError::InvalidBlockLabel(label) => {
                write!(f, "Invalid block label: '{}'", label)
            }
            KihonzuError::InvalidTileIndex(msg) => write!(f, "Invalid tile index: {}", msg),
            KihonzuError::MissingParameter(name) => write!(f, "Missing parameter: {}", name),
            KihonzuError::ProjectionError(msg) => write!(f, "Projection error: {}", msg),
            KihonzuError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            KihonzuError::IoError(msg) => write!(f, "IO error: {}", msg),
            KihonzuError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            KihonzuError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for KihonzuError {}
