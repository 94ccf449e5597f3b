//! Format-agnostic entry points.
//!
//! [`Geometry::parse`] accepts either WKT/EWKT text or WKB/EWKB bytes and
//! picks the codec from the input's type. TWKB and GeoJSON are never guessed
//! at and have their own entry points.

use log::{debug, trace};
use serde_json::Value;

use crate::error::{GeoCodecError, Result};
use crate::geometry::{Geometry, GeometryInfo};
use crate::types::Dimensions;
use crate::{geojson, twkb, wkb, wkt};

/// Deepest nesting of geometries inside collections any reader accepts.
pub const MAX_NESTING_DEPTH: usize = 64;

pub(crate) fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_NESTING_DEPTH {
        debug!("geometry nesting limit of {MAX_NESTING_DEPTH} exceeded");
        return Err(GeoCodecError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }
    Ok(())
}

/// Fail unless `child` has the coordinate layout of the collection it sits
/// in. `position` locates the child in the input.
pub(crate) fn check_child_dimensions(
    parent: Dimensions,
    child: &Geometry,
    position: usize,
) -> Result<()> {
    let found = child.dimensions();
    if found == parent {
        return Ok(());
    }
    debug!("{found:?} {} inside a {parent:?} collection", child.kind());
    let keyword = child.kind().wkt_keyword();
    Err(GeoCodecError::Format {
        message: "mixed coordinate dimensions",
        position,
        context: match found.wkt_suffix() {
            Some(suffix) => format!("{keyword} {suffix}"),
            None => keyword.to_string(),
        },
    })
}

/// Input accepted by [`Geometry::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseInput<'a> {
    /// WKT, optionally with an `SRID=n;` prefix.
    Text(&'a str),
    /// WKB or EWKB.
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for ParseInput<'a> {
    fn from(value: &'a str) -> Self {
        ParseInput::Text(value)
    }
}

impl<'a> From<&'a String> for ParseInput<'a> {
    fn from(value: &'a String) -> Self {
        ParseInput::Text(value)
    }
}

impl<'a> From<&'a [u8]> for ParseInput<'a> {
    fn from(value: &'a [u8]) -> Self {
        ParseInput::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for ParseInput<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        ParseInput::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ParseInput<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        ParseInput::Bytes(value)
    }
}

impl Geometry {
    /// Parse WKT/EWKT text or WKB/EWKB bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use geocodec_core::prelude::*;
    ///
    /// let point = Geometry::parse("SRID=4326;POINT(1 2)").unwrap();
    /// assert_eq!(point.srid(), 4326);
    ///
    /// let wkb = point.to_ewkb().unwrap();
    /// assert_eq!(Geometry::parse(&wkb).unwrap(), point);
    /// ```
    pub fn parse<'a>(input: impl Into<ParseInput<'a>>) -> Result<Self> {
        match input.into() {
            ParseInput::Text(text) => Self::parse_wkt(text),
            ParseInput::Bytes(bytes) => Self::parse_wkb(bytes),
        }
    }

    /// Parse WKT or EWKT text.
    pub fn parse_wkt(text: &str) -> Result<Self> {
        trace!("dispatching WKT input");
        wkt::parse(text)
    }

    /// Parse WKB or EWKB bytes in either byte order.
    pub fn parse_wkb(bytes: &[u8]) -> Result<Self> {
        trace!("dispatching WKB input, type field {:02x?}", bytes.get(1..5));
        wkb::parse(bytes)
    }

    /// Parse TWKB bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use geocodec_core::prelude::*;
    ///
    /// let bytes = [0xa1, 0x00, 0xc0, 0x9a, 0x0c, 0x80, 0xb5, 0x18];
    /// let point = Geometry::parse_twkb(&bytes).unwrap();
    /// assert_eq!(point.to_wkt(), "POINT(1 2)");
    /// ```
    pub fn parse_twkb(bytes: &[u8]) -> Result<Self> {
        trace!("dispatching TWKB input, type byte {:02x?}", bytes.first());
        twkb::parse(bytes)
    }

    /// Build a geometry from a parsed GeoJSON geometry object.
    pub fn parse_geojson(value: &Value) -> Result<Self> {
        trace!(
            "dispatching GeoJSON input of type {:?}",
            value.get("type").and_then(Value::as_str)
        );
        geojson::parse(value)
    }

    /// Parse GeoJSON text.
    pub fn parse_geojson_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::parse_geojson(&value)
    }
}
