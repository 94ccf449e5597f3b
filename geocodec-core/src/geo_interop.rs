//! Conversions to and from [`geo`] geometries.
//!
//! `geo` is strictly two-dimensional and has no SRID, so Z, M and the SRID are
//! dropped on the way out and absent on the way in. An empty point travels as
//! a NaN/NaN point, matching how PostGIS encodes it in WKB.

use crate::error::{GeoCodecError, Result};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, GeometryInfo, Header, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Triangle,
};

fn to_geo_coord(coord: &Coord) -> geo::Coord<f64> {
    geo::coord! { x: coord.x, y: coord.y }
}

fn to_geo_line(coords: &[Coord]) -> geo::LineString<f64> {
    geo::LineString(coords.iter().map(to_geo_coord).collect())
}

fn to_geo_point(point: &Point) -> geo::Point<f64> {
    match &point.coord {
        Some(coord) => geo::Point(to_geo_coord(coord)),
        None => geo::Point::new(f64::NAN, f64::NAN),
    }
}

fn to_geo_polygon(polygon: &Polygon) -> geo::Polygon<f64> {
    let mut rings = polygon.rings().map(|ring| to_geo_line(ring));
    let exterior = rings.next().unwrap_or_else(|| geo::LineString(Vec::new()));
    geo::Polygon::new(exterior, rings.collect())
}

fn to_geo_triangle(triangle: &Triangle) -> Result<geo::Triangle<f64>> {
    match triangle.exterior_ring.as_slice() {
        [a, b, c, ..] => Ok(geo::Triangle::new(
            to_geo_coord(a),
            to_geo_coord(b),
            to_geo_coord(c),
        )),
        ring => Err(GeoCodecError::invalid(format!(
            "triangle needs 3 vertices, got {}",
            ring.len()
        ))),
    }
}

impl TryFrom<&Geometry> for geo::Geometry<f64> {
    type Error = GeoCodecError;

    fn try_from(geometry: &Geometry) -> Result<Self> {
        Ok(match geometry {
            Geometry::Point(point) => geo::Geometry::Point(to_geo_point(point)),
            Geometry::LineString(ls) => geo::Geometry::LineString(to_geo_line(&ls.points)),
            Geometry::Polygon(polygon) => geo::Geometry::Polygon(to_geo_polygon(polygon)),
            Geometry::MultiPoint(mp) => geo::Geometry::MultiPoint(geo::MultiPoint(
                mp.points.iter().map(to_geo_point).collect(),
            )),
            Geometry::MultiLineString(mls) => geo::Geometry::MultiLineString(geo::MultiLineString(
                mls.line_strings
                    .iter()
                    .map(|ls| to_geo_line(&ls.points))
                    .collect(),
            )),
            Geometry::MultiPolygon(mp) => geo::Geometry::MultiPolygon(geo::MultiPolygon(
                mp.polygons.iter().map(to_geo_polygon).collect(),
            )),
            Geometry::GeometryCollection(gc) => {
                geo::Geometry::GeometryCollection(geo::GeometryCollection(
                    gc.geometries
                        .iter()
                        .map(geo::Geometry::try_from)
                        .collect::<Result<_>>()?,
                ))
            }
            Geometry::Triangle(triangle) => geo::Geometry::Triangle(to_geo_triangle(triangle)?),
            Geometry::Tin(tin) => geo::Geometry::GeometryCollection(geo::GeometryCollection(
                tin.triangles
                    .iter()
                    .map(|t| to_geo_triangle(t).map(geo::Geometry::Triangle))
                    .collect::<Result<_>>()?,
            )),
        })
    }
}

impl TryFrom<Geometry> for geo::Geometry<f64> {
    type Error = GeoCodecError;

    fn try_from(geometry: Geometry) -> Result<Self> {
        geo::Geometry::try_from(&geometry)
    }
}

fn from_geo_coord(coord: &geo::Coord<f64>) -> Coord {
    Coord::xy(coord.x, coord.y)
}

fn from_geo_coords(line: &geo::LineString<f64>) -> Vec<Coord> {
    line.0.iter().map(from_geo_coord).collect()
}

fn from_geo_point(point: &geo::Point<f64>) -> Point {
    if point.x().is_nan() && point.y().is_nan() {
        Point::empty()
    } else {
        Point::new(point.x(), point.y())
    }
}

fn from_geo_polygon(polygon: &geo::Polygon<f64>) -> Polygon {
    let exterior_ring = from_geo_coords(polygon.exterior());
    let interior_rings = if exterior_ring.is_empty() {
        Vec::new()
    } else {
        polygon.interiors().iter().map(from_geo_coords).collect()
    };
    Polygon {
        header: Header::default(),
        exterior_ring,
        interior_rings,
    }
}

fn from_geo_triangle(triangle: &geo::Triangle<f64>) -> Triangle {
    let [a, b, c] = triangle.to_array();
    Triangle::new([a, b, c, a].iter().map(from_geo_coord).collect())
}

impl From<&geo::Geometry<f64>> for Geometry {
    fn from(geometry: &geo::Geometry<f64>) -> Self {
        match geometry {
            geo::Geometry::Point(point) => from_geo_point(point).into(),
            geo::Geometry::Line(line) => {
                LineString::new(vec![from_geo_coord(&line.start), from_geo_coord(&line.end)]).into()
            }
            geo::Geometry::LineString(ls) => LineString::new(from_geo_coords(ls)).into(),
            geo::Geometry::Polygon(polygon) => from_geo_polygon(polygon).into(),
            geo::Geometry::MultiPoint(mp) => MultiPoint {
                header: Header::default(),
                points: mp.0.iter().map(from_geo_point).collect(),
            }
            .into(),
            geo::Geometry::MultiLineString(mls) => MultiLineString {
                header: Header::default(),
                line_strings: mls
                    .0
                    .iter()
                    .map(|ls| LineString::new(from_geo_coords(ls)))
                    .collect(),
            }
            .into(),
            geo::Geometry::MultiPolygon(mp) => MultiPolygon {
                header: Header::default(),
                polygons: mp.0.iter().map(from_geo_polygon).collect(),
            }
            .into(),
            geo::Geometry::GeometryCollection(gc) => GeometryCollection {
                header: Header::default(),
                geometries: gc.0.iter().map(Geometry::from).collect(),
            }
            .into(),
            geo::Geometry::Rect(rect) => from_geo_polygon(&rect.to_polygon()).into(),
            geo::Geometry::Triangle(triangle) => from_geo_triangle(triangle).into(),
        }
    }
}

impl From<geo::Geometry<f64>> for Geometry {
    fn from(geometry: geo::Geometry<f64>) -> Self {
        Geometry::from(&geometry)
    }
}

impl Geometry {
    /// Convert to a `geo` geometry, dropping Z, M and the SRID.
    ///
    /// # Example
    ///
    /// ```
    /// use geocodec_core::prelude::*;
    ///
    /// let geom = Geometry::parse("LINESTRING Z (0 0 1,3 4 1)").unwrap();
    /// let line = geom.to_geo().unwrap();
    /// assert!(matches!(line, geo::Geometry::LineString(_)));
    /// ```
    pub fn to_geo(&self) -> Result<geo::Geometry<f64>> {
        geo::Geometry::try_from(self)
    }

    /// True when converting to `geo` would lose Z or M values.
    pub fn is_lossy_for_geo(&self) -> bool {
        self.has_z() || self.has_m()
    }
}
