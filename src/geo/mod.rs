//! Geographic data: the `Geo` value type and the static zone table.

mod types;
mod zones;

pub use types::Geo;
pub use zones::lookup as lookup_zone;
