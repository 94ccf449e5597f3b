#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `geocodec-core`.

pub mod binary;
pub mod error;
pub mod geo_interop;
pub mod geojson;
pub mod geometry;
pub mod parse;
pub mod twkb;
pub mod types;
pub mod wkb;
pub mod wkt;
pub mod zigzag;

pub use error::{GeoCodecError, Result};
pub use geometry::{
    Coord, Geometry, GeometryCollection, GeometryInfo, Header, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Tin, Triangle,
};
pub use parse::{ParseInput, MAX_NESTING_DEPTH};
pub use types::{Dimensions, GeometryKind};

/// Convenience re-exports.
///
/// ```rust
/// use geocodec_core::prelude::*;
///
/// let line = Geometry::parse("LINESTRING(1 2,3 4)").unwrap();
/// assert_eq!(line.kind(), GeometryKind::LineString);
/// ```
pub mod prelude {
    pub use crate::error::{GeoCodecError, Result};
    pub use crate::geojson::{GeoJsonOptions, ToGeoJson};
    pub use crate::geometry::{
        Coord, Geometry, GeometryCollection, GeometryInfo, Header, LineString, MultiLineString,
        MultiPoint, MultiPolygon, Point, Polygon, Tin, Triangle,
    };
    pub use crate::twkb::{ToTwkb, TwkbOptions};
    pub use crate::types::{Dimensions, GeometryKind};
    pub use crate::wkb::{ToWkb, WkbFlavor};
    pub use crate::wkt::ToWkt;
}
