/// Map information level whose sheets make up the 10 x 10 partition of a block
pub const BASE_LEVEL: u32 = 5000;

/// East-west extent of a level-5000 sheet in metres
pub const SHEET_WIDTH: f64 = 4000.0;

/// North-south extent of a level-5000 sheet in metres
pub const SHEET_HEIGHT: f64 = 3000.0;

/// Level-5000 sheets along each side of a block
pub const SHEETS_PER_SIDE: u8 = 10;

/// East-west extent of a block in kilometres
pub(crate) const BLOCK_WIDTH_KM: f64 = 40.0;

/// North-south extent of a block in kilometres
pub(crate) const BLOCK_HEIGHT_KM: f64 = 30.0;

/// Northing of the top edge of row 'A' in kilometres
pub(crate) const BLOCK_ORIGIN_NORTH_KM: f64 = 300.0;

/// Easting of the west edge of column 'A' in kilometres
pub(crate) const BLOCK_ORIGIN_WEST_KM: f64 = -160.0;

/// Block columns in every zone ('A'..='H')
pub const BLOCK_COLUMNS: u8 = 8;

/// Highest plane rectangular coordinate system zone
pub const MAX_ZONE: u8 = 19;

/// Block rows per zone, indexed by `zone - 1`.
///
/// Zone IX runs down to the Izu islands and needs rows up to 'Z'.
pub const ZONE_BLOCK_ROWS: [u8; MAX_ZONE as usize] = [
    20, 20, 20, 20, 20, 20, 20, 20, 26, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20,
];

/// EPSG code of JGD2011 geographic coordinates
pub const JGD2011_EPSG: u32 = 6668;
