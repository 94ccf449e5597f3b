//! GeoJSON geometry objects over [`serde_json::Value`].
//!
//! GeoJSON has no Triangle or Tin, so they are written as `Polygon` and
//! `MultiPolygon`. It has no M either: M values are dropped on output and a
//! four-element position is read as XYZM. The SRID travels in the legacy
//! named `crs` member.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Number, Value};

use crate::error::{GeoCodecError, Result};
use crate::geometry::{
    dispatch, Coord, Geometry, GeometryCollection, GeometryInfo, Header, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Tin, Triangle,
};
use crate::parse::{check_child_dimensions, check_depth};
use crate::types::{Dimensions, GeometryKind};

static SHORT_CRS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^EPSG:(\d+)$").expect("short CRS pattern is valid"));

static LONG_CRS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^urn:ogc:def:crs:EPSG::(\d+)$").expect("long CRS pattern is valid")
});

/// Controls the `crs` member written by [`ToGeoJson::to_geojson`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoJsonOptions {
    /// `"EPSG:<srid>"`.
    pub short_crs: bool,
    /// `"urn:ogc:def:crs:EPSG::<srid>"`; ignored when `short_crs` is set.
    pub long_crs: bool,
}

impl GeoJsonOptions {
    pub fn short_crs() -> Self {
        Self {
            short_crs: true,
            long_crs: false,
        }
    }

    pub fn long_crs() -> Self {
        Self {
            short_crs: false,
            long_crs: true,
        }
    }

    fn crs_name(&self, srid: u32) -> Option<String> {
        if srid == 0 {
            None
        } else if self.short_crs {
            Some(format!("EPSG:{srid}"))
        } else if self.long_crs {
            Some(format!("urn:ogc:def:crs:EPSG::{srid}"))
        } else {
            None
        }
    }
}

/// Integral values are emitted as JSON integers, so `1.0` prints as `1`.
fn number(value: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        Value::from(value as i64)
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

fn position(coord: &Coord, dims: Dimensions) -> Value {
    let mut out = vec![number(coord.x), number(coord.y)];
    if dims.has_z {
        out.push(number(coord.z.unwrap_or(f64::NAN)));
    }
    Value::Array(out)
}

fn positions(coords: &[Coord], dims: Dimensions) -> Value {
    coords.iter().map(|c| position(c, dims)).collect()
}

fn polygon_rings<'r>(rings: impl Iterator<Item = &'r Vec<Coord>>, dims: Dimensions) -> Value {
    rings.map(|ring| positions(ring, dims)).collect()
}

/// Serialize to a GeoJSON geometry object.
pub trait ToGeoJson: GeometryInfo {
    /// GeoJSON `type` and `coordinates` (or `geometries`) members.
    #[doc(hidden)]
    fn geojson_body(&self) -> (&'static str, &'static str, Value);

    /// # Example
    ///
    /// ```
    /// use geocodec_core::prelude::*;
    /// use serde_json::json;
    ///
    /// let point = Point::new(1.0, 2.0).with_srid(4326);
    /// assert_eq!(
    ///     point.to_geojson(&GeoJsonOptions::short_crs()),
    ///     json!({
    ///         "type": "Point",
    ///         "coordinates": [1, 2],
    ///         "crs": { "type": "name", "properties": { "name": "EPSG:4326" } }
    ///     })
    /// );
    /// ```
    fn to_geojson(&self, options: &GeoJsonOptions) -> Value {
        let (type_name, member, body) = self.geojson_body();
        let mut object = Map::new();
        object.insert("type".to_owned(), Value::from(type_name));
        object.insert(member.to_owned(), body);
        if let Some(name) = options.crs_name(self.srid()) {
            object.insert(
                "crs".to_owned(),
                json!({ "type": "name", "properties": { "name": name } }),
            );
        }
        Value::Object(object)
    }

    fn to_geojson_string(&self, options: &GeoJsonOptions) -> String {
        self.to_geojson(options).to_string()
    }
}

impl ToGeoJson for Point {
    fn geojson_body(&self) -> (&'static str, &'static str, Value) {
        let coordinates = match &self.coord {
            Some(coord) => position(coord, self.dimensions()),
            None => Value::Array(Vec::new()),
        };
        ("Point", "coordinates", coordinates)
    }
}

impl ToGeoJson for LineString {
    fn geojson_body(&self) -> (&'static str, &'static str, Value) {
        ("LineString", "coordinates", positions(&self.points, self.dimensions()))
    }
}

impl ToGeoJson for Polygon {
    fn geojson_body(&self) -> (&'static str, &'static str, Value) {
        ("Polygon", "coordinates", polygon_rings(self.rings(), self.dimensions()))
    }
}

impl ToGeoJson for MultiPoint {
    fn geojson_body(&self) -> (&'static str, &'static str, Value) {
        let dims = self.dimensions();
        let coordinates = self
            .points
            .iter()
            .map(|point| match &point.coord {
                Some(coord) => position(coord, dims),
                None => Value::Array(Vec::new()),
            })
            .collect();
        ("MultiPoint", "coordinates", coordinates)
    }
}

impl ToGeoJson for MultiLineString {
    fn geojson_body(&self) -> (&'static str, &'static str, Value) {
        let dims = self.dimensions();
        let coordinates = self
            .line_strings
            .iter()
            .map(|ls| positions(&ls.points, dims))
            .collect();
        ("MultiLineString", "coordinates", coordinates)
    }
}

impl ToGeoJson for MultiPolygon {
    fn geojson_body(&self) -> (&'static str, &'static str, Value) {
        let dims = self.dimensions();
        let coordinates = self
            .polygons
            .iter()
            .map(|polygon| polygon_rings(polygon.rings(), dims))
            .collect();
        ("MultiPolygon", "coordinates", coordinates)
    }
}

impl ToGeoJson for GeometryCollection {
    fn geojson_body(&self) -> (&'static str, &'static str, Value) {
        let no_crs = GeoJsonOptions::default();
        let geometries = self
            .geometries
            .iter()
            .map(|child| child.to_geojson(&no_crs))
            .collect();
        ("GeometryCollection", "geometries", geometries)
    }
}

impl ToGeoJson for Triangle {
    fn geojson_body(&self) -> (&'static str, &'static str, Value) {
        let rings = (!self.is_empty()).then_some(&self.exterior_ring);
        ("Polygon", "coordinates", polygon_rings(rings.into_iter(), self.dimensions()))
    }
}

impl ToGeoJson for Tin {
    fn geojson_body(&self) -> (&'static str, &'static str, Value) {
        let dims = self.dimensions();
        let coordinates = self
            .triangles
            .iter()
            .map(|triangle| {
                let rings = (!triangle.is_empty()).then_some(&triangle.exterior_ring);
                polygon_rings(rings.into_iter(), dims)
            })
            .collect();
        ("MultiPolygon", "coordinates", coordinates)
    }
}

impl ToGeoJson for Geometry {
    fn geojson_body(&self) -> (&'static str, &'static str, Value) {
        dispatch!(self, g => g.geojson_body())
    }
}

fn as_array<'v>(value: &'v Value, what: &str) -> Result<&'v Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| GeoCodecError::invalid(format!("{what} must be an array")))
}

/// Layout of the first position found `levels` arrays below `coordinates`.
fn infer_dimensions(coordinates: &Value, levels: usize) -> Dimensions {
    let mut current = coordinates;
    for _ in 0..levels {
        match current.as_array().and_then(|items| items.first()) {
            Some(first) => current = first,
            None => return Dimensions::XY,
        }
    }
    match current.as_array().map(Vec::len) {
        Some(3) => Dimensions::XYZ,
        Some(n) if n >= 4 => Dimensions::XYZM,
        _ => Dimensions::XY,
    }
}

fn read_position(value: &Value, dims: Dimensions) -> Result<Coord> {
    let items = as_array(value, "position")?;
    if items.len() < dims.count() {
        return Err(GeoCodecError::invalid(format!(
            "position needs {} numbers, got {}",
            dims.count(),
            items.len()
        )));
    }
    let ordinates = items[..dims.count()]
        .iter()
        .map(|item| {
            item.as_f64()
                .ok_or_else(|| GeoCodecError::invalid(format!("{item} is not a number")))
        })
        .collect::<Result<Vec<f64>>>()?;
    Ok(Coord::from_ordinates(&ordinates, dims))
}

fn read_positions(value: &Value, dims: Dimensions) -> Result<Vec<Coord>> {
    as_array(value, "position list")?
        .iter()
        .map(|item| read_position(item, dims))
        .collect()
}

fn read_rings(value: &Value, dims: Dimensions) -> Result<Vec<Vec<Coord>>> {
    as_array(value, "ring list")?
        .iter()
        .map(|ring| read_positions(ring, dims))
        .collect()
}

fn read_polygon(value: &Value, header: Header) -> Result<Polygon> {
    let mut rings = read_rings(value, header.dimensions())?.into_iter();
    Ok(Polygon {
        header,
        exterior_ring: rings.next().unwrap_or_default(),
        interior_rings: rings.collect(),
    })
}

/// SRID from a named `crs` member; anything unrecognized means no SRID.
fn crs_srid(object: &Map<String, Value>) -> u32 {
    let Some(crs) = object.get("crs") else {
        return 0;
    };
    if crs.get("type").and_then(Value::as_str) != Some("name") {
        debug!("ignoring GeoJSON crs that is not of type \"name\"");
        return 0;
    }
    let Some(name) = crs.pointer("/properties/name").and_then(Value::as_str) else {
        debug!("ignoring GeoJSON crs without a name");
        return 0;
    };
    let srid = [&*SHORT_CRS, &*LONG_CRS]
        .iter()
        .find_map(|pattern| pattern.captures(name))
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok());
    srid.unwrap_or_else(|| {
        debug!("ignoring unrecognized GeoJSON crs name {name:?}");
        0
    })
}

fn read_geometry(value: &Value, depth: usize) -> Result<Geometry> {
    check_depth(depth)?;
    let object = value
        .as_object()
        .ok_or_else(|| GeoCodecError::invalid("GeoJSON geometry must be an object"))?;
    let type_name = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| GeoCodecError::invalid("GeoJSON geometry needs a string \"type\""))?;
    let kind = GeometryKind::from_geojson_type(type_name).ok_or_else(|| {
        debug!("rejecting unsupported GeoJSON geometry type {type_name}");
        GeoCodecError::unsupported(type_name)
    })?;

    if kind == GeometryKind::GeometryCollection {
        let mut geometries = as_array(
            object
                .get("geometries")
                .ok_or_else(|| GeoCodecError::invalid("GeometryCollection needs \"geometries\""))?,
            "geometries",
        )?
        .iter()
        .map(|child| read_geometry(child, depth + 1))
        .collect::<Result<Vec<_>>>()?;
        // empty members carry no arity, so the first non-empty one decides
        let dims = geometries
            .iter()
            .find(|child| !child.is_empty())
            .map(GeometryInfo::dimensions)
            .unwrap_or_default();
        for (index, child) in geometries.iter_mut().enumerate() {
            if child.is_empty() {
                child.conform(dims);
            } else {
                check_child_dimensions(dims, child, index)?;
            }
        }
        return Ok(Geometry::GeometryCollection(GeometryCollection {
            header: Header::new(0, dims),
            geometries,
        }));
    }

    let coordinates = object
        .get("coordinates")
        .ok_or_else(|| GeoCodecError::invalid(format!("{type_name} needs \"coordinates\"")))?;
    let levels = match kind {
        GeometryKind::Point => 0,
        GeometryKind::LineString | GeometryKind::MultiPoint => 1,
        GeometryKind::Polygon | GeometryKind::MultiLineString => 2,
        _ => 3,
    };
    let dims = infer_dimensions(coordinates, levels);
    let header = Header::new(0, dims);

    let geometry = match kind {
        GeometryKind::Point => {
            let empty = as_array(coordinates, "coordinates")?.is_empty();
            Geometry::Point(Point {
                header,
                coord: if empty {
                    None
                } else {
                    Some(read_position(coordinates, dims)?)
                },
            })
        }
        GeometryKind::LineString => Geometry::LineString(LineString {
            header,
            points: read_positions(coordinates, dims)?,
        }),
        GeometryKind::Polygon => Geometry::Polygon(read_polygon(coordinates, header)?),
        GeometryKind::MultiPoint => {
            let points = as_array(coordinates, "coordinates")?
                .iter()
                .map(|item| {
                    let empty = item.as_array().is_some_and(Vec::is_empty);
                    Ok(Point {
                        header,
                        coord: if empty {
                            None
                        } else {
                            Some(read_position(item, dims)?)
                        },
                    })
                })
                .collect::<Result<_>>()?;
            Geometry::MultiPoint(MultiPoint { header, points })
        }
        GeometryKind::MultiLineString => {
            let line_strings = read_rings(coordinates, dims)?
                .into_iter()
                .map(|points| LineString { header, points })
                .collect();
            Geometry::MultiLineString(MultiLineString {
                header,
                line_strings,
            })
        }
        _ => {
            let polygons = as_array(coordinates, "coordinates")?
                .iter()
                .map(|polygon| read_polygon(polygon, header))
                .collect::<Result<_>>()?;
            Geometry::MultiPolygon(MultiPolygon { header, polygons })
        }
    };
    Ok(geometry)
}

/// Parse a GeoJSON geometry object; the SRID comes from its `crs` member.
pub(crate) fn parse(value: &Value) -> Result<Geometry> {
    let mut geometry = read_geometry(value, 0)?;
    if let Some(object) = value.as_object() {
        geometry.set_srid(crs_srid(object));
    }
    Ok(geometry)
}
