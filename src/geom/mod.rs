pub mod boundary;
pub mod filter;

pub use boundary::{ZONE_PROPERTY, load_boundary, parse_boundary};
