//! Well-Known Text, with the PostGIS `SRID=n;` prefix (EWKT).
//!
//! The reader is a small hand-written recursive descent over a cursor into
//! the input string. Keywords are case-insensitive; the dimension qualifier
//! (`Z`, `M`, `ZM`) is optional and, when absent, inferred from the arity of
//! the first coordinate. The writer produces the canonical compact form,
//! e.g. `POINT(1 2)`, `LINESTRING Z (1 2 3,4 5 6)`, `POLYGON EMPTY`.

use std::fmt::Write as _;

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{GeoCodecError, Result};
use crate::geometry::{
    dispatch, Coord, Geometry, GeometryCollection, GeometryInfo, Header, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Tin, Triangle,
};
use crate::parse::check_depth;
use crate::types::{Dimensions, GeometryKind, RESERVED_WKT_KEYWORDS};

static SRID_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^SRID\s*=\s*(-?\d+)\s*;").expect("SRID prefix pattern is valid"));

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("number pattern is valid")
});

/// Characters of remaining input quoted in a parse error.
const ERROR_CONTEXT_LEN: usize = 20;

/// Coordinate layout while a geometry is being read. `declared` is set when
/// the layout came from a `Z`/`M`/`ZM` qualifier (or a parent's), so an arity
/// mismatch is a malformed coordinate rather than mixed input.
#[derive(Debug, Clone, Copy)]
struct Layout {
    dims: Option<Dimensions>,
    declared: bool,
}

impl Layout {
    fn resolved(&self) -> Dimensions {
        self.dims.unwrap_or(Dimensions::XY)
    }
}

/// Cursor over WKT input.
pub struct WktParser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> WktParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();
    }

    /// Consume the first of `candidates` (case-insensitive) the input starts with.
    pub fn match_literal(&mut self, candidates: &[&'static str]) -> Option<&'static str> {
        self.skip_whitespace();
        let rest = self.rest();
        let found = candidates.iter().copied().find(|candidate| {
            rest.get(..candidate.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(candidate))
        })?;
        self.position += found.len();
        Some(found)
    }

    pub fn is_match(&mut self, candidates: &[&'static str]) -> bool {
        self.match_literal(candidates).is_some()
    }

    /// Consume the first pattern that matches at the cursor. Patterns must be
    /// anchored with `^`.
    pub fn match_regex(&mut self, patterns: &[&Regex]) -> Option<Captures<'a>> {
        self.skip_whitespace();
        let rest = self.rest();
        let captures = patterns.iter().find_map(|pattern| pattern.captures(rest))?;
        self.position += captures.get(0).map_or(0, |m| m.end());
        Some(captures)
    }

    fn error(&self, message: &'static str) -> GeoCodecError {
        GeoCodecError::Format {
            message,
            position: self.position,
            context: self.rest().chars().take(ERROR_CONTEXT_LEN).collect(),
        }
    }

    pub fn expect_group_start(&mut self) -> Result<()> {
        if self.is_match(&["("]) {
            Ok(())
        } else {
            Err(self.error("expected group start"))
        }
    }

    pub fn expect_group_end(&mut self) -> Result<()> {
        if self.is_match(&[")"]) {
            Ok(())
        } else {
            Err(self.error("expected group end"))
        }
    }

    /// Fail unless only whitespace is left.
    pub fn expect_end(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            Ok(())
        } else {
            Err(self.error("unexpected trailing input"))
        }
    }

    /// Optional `SRID=n;` prefix.
    pub fn match_srid(&mut self) -> Result<Option<u32>> {
        let start = self.position;
        let Some(captures) = self.match_regex(&[&*SRID_PREFIX]) else {
            return Ok(None);
        };
        let digits = captures.get(1).map_or("", |m| m.as_str());
        match digits.parse::<u32>() {
            Ok(srid) => Ok(Some(srid)),
            Err(_) => {
                self.position = start;
                Err(GeoCodecError::invalid(format!("SRID {digits} out of range")))
            }
        }
    }

    pub fn match_type(&mut self) -> Result<GeometryKind> {
        let keywords = GeometryKind::wkt_keywords_longest_first();
        if let Some(kind) = self
            .match_literal(&keywords)
            .and_then(GeometryKind::from_wkt_keyword)
        {
            return Ok(kind);
        }
        if let Some(reserved) = self.match_literal(&RESERVED_WKT_KEYWORDS) {
            debug!("rejecting unsupported WKT geometry type {reserved}");
            return Err(GeoCodecError::unsupported(reserved));
        }
        Err(self.error("expected geometry type"))
    }

    pub fn match_dimension(&mut self) -> Option<Dimensions> {
        match self.match_literal(&["ZM", "Z", "M"])? {
            "ZM" => Some(Dimensions::XYZM),
            "Z" => Some(Dimensions::XYZ),
            _ => Some(Dimensions::XYM),
        }
    }

    /// A number token, which must end at whitespace, `,`, `)` or the end of
    /// input (`1.2.3` and `1-2` are malformed, not two numbers).
    fn match_number(&mut self) -> Result<Option<f64>> {
        self.skip_whitespace();
        let start = self.position;
        let Some(captures) = self.match_regex(&[&*NUMBER]) else {
            return Ok(None);
        };
        let value = captures.get(0).map(|m| m.as_str().parse::<f64>());
        let terminated = self
            .rest()
            .chars()
            .next()
            .is_none_or(|c| c.is_whitespace() || c == ',' || c == ')');
        match value {
            Some(Ok(value)) if terminated => Ok(Some(value)),
            _ => {
                self.position = start;
                Err(self.error("expected coordinates"))
            }
        }
    }

    fn match_coordinate(&mut self, layout: &mut Layout) -> Result<Coord> {
        let start = self.position;
        let mut ordinates = [0.0; 4];
        let mut arity = 0;
        while arity < ordinates.len() {
            match self.match_number()? {
                Some(value) => {
                    ordinates[arity] = value;
                    arity += 1;
                }
                None => break,
            }
        }
        if arity < 2 {
            self.position = start;
            return Err(self.error("expected coordinates"));
        }

        let dims = match layout.dims {
            Some(dims) if dims.count() == arity => dims,
            Some(_) => {
                self.position = start;
                return Err(self.error(if layout.declared {
                    "expected coordinates"
                } else {
                    "mixed coordinate dimensions"
                }));
            }
            None => {
                let dims = match arity {
                    2 => Dimensions::XY,
                    3 => Dimensions::XYZ,
                    _ => Dimensions::XYZM,
                };
                layout.dims = Some(dims);
                dims
            }
        };
        Ok(Coord::from_ordinates(&ordinates[..arity], dims))
    }

    /// `coord (, coord)*`, each optionally wrapped in its own parentheses.
    fn match_coordinates(&mut self, layout: &mut Layout) -> Result<Vec<Coord>> {
        let mut coords = Vec::new();
        loop {
            let wrapped = self.is_match(&["("]);
            coords.push(self.match_coordinate(layout)?);
            if wrapped {
                self.expect_group_end()?;
            }
            if !self.is_match(&[","]) {
                return Ok(coords);
            }
        }
    }

    /// `EMPTY | ( ... )` where `item` parses one list element.
    fn match_list<T>(
        &mut self,
        layout: &mut Layout,
        mut item: impl FnMut(&mut Self, &mut Layout) -> Result<T>,
    ) -> Result<Vec<T>> {
        if self.is_match(&["EMPTY"]) {
            return Ok(Vec::new());
        }
        self.expect_group_start()?;
        let mut items = vec![item(self, layout)?];
        while self.is_match(&[","]) {
            items.push(item(self, layout)?);
        }
        self.expect_group_end()?;
        Ok(items)
    }

    fn match_point_body(&mut self, layout: &mut Layout) -> Result<Option<Coord>> {
        if self.is_match(&["EMPTY"]) {
            return Ok(None);
        }
        self.expect_group_start()?;
        let coord = self.match_coordinate(layout)?;
        self.expect_group_end()?;
        Ok(Some(coord))
    }

    fn match_line_body(&mut self, layout: &mut Layout) -> Result<Vec<Coord>> {
        if self.is_match(&["EMPTY"]) {
            return Ok(Vec::new());
        }
        self.expect_group_start()?;
        let coords = self.match_coordinates(layout)?;
        self.expect_group_end()?;
        Ok(coords)
    }

    fn match_polygon_body(&mut self, layout: &mut Layout) -> Result<Vec<Vec<Coord>>> {
        self.match_list(layout, |p, layout| p.match_line_body(layout))
    }

    /// A multipoint element: `EMPTY`, `(x y)` or a bare `x y`.
    fn match_multi_point_item(&mut self, layout: &mut Layout) -> Result<Option<Coord>> {
        if self.is_match(&["EMPTY"]) {
            return Ok(None);
        }
        let wrapped = self.is_match(&["("]);
        let coord = self.match_coordinate(layout)?;
        if wrapped {
            self.expect_group_end()?;
        }
        Ok(Some(coord))
    }

    /// Parse one geometry (without any SRID prefix) at the cursor.
    pub fn parse_geometry(
        &mut self,
        srid: u32,
        inherited: Option<Dimensions>,
        depth: usize,
    ) -> Result<Geometry> {
        check_depth(depth)?;
        let kind = self.match_type()?;
        let declared = self.match_dimension();
        let dims = match (declared, inherited) {
            (Some(own), Some(parent)) if own != parent => {
                return Err(self.error("mixed coordinate dimensions"));
            }
            (Some(dims), _) | (None, Some(dims)) => Some(dims),
            (None, None) => None,
        };
        let mut layout = Layout {
            dims,
            declared: dims.is_some(),
        };

        let geometry = match kind {
            GeometryKind::Point => {
                let coord = self.match_point_body(&mut layout)?;
                Geometry::Point(Point {
                    header: Header::new(srid, layout.resolved()),
                    coord,
                })
            }
            GeometryKind::LineString => {
                let points = self.match_line_body(&mut layout)?;
                Geometry::LineString(LineString {
                    header: Header::new(srid, layout.resolved()),
                    points,
                })
            }
            GeometryKind::Polygon => {
                let rings = self.match_polygon_body(&mut layout)?;
                Geometry::Polygon(polygon_from_rings(
                    Header::new(srid, layout.resolved()),
                    rings,
                ))
            }
            GeometryKind::MultiPoint => {
                let coords =
                    self.match_list(&mut layout, |p, layout| p.match_multi_point_item(layout))?;
                let child = Header::new(0, layout.resolved());
                Geometry::MultiPoint(MultiPoint {
                    header: Header::new(srid, layout.resolved()),
                    points: coords
                        .into_iter()
                        .map(|coord| Point { header: child, coord })
                        .collect(),
                })
            }
            GeometryKind::MultiLineString => {
                let lines = self.match_list(&mut layout, |p, layout| p.match_line_body(layout))?;
                let child = Header::new(0, layout.resolved());
                Geometry::MultiLineString(MultiLineString {
                    header: Header::new(srid, layout.resolved()),
                    line_strings: lines
                        .into_iter()
                        .map(|points| LineString { header: child, points })
                        .collect(),
                })
            }
            GeometryKind::MultiPolygon => {
                let polygons =
                    self.match_list(&mut layout, |p, layout| p.match_polygon_body(layout))?;
                let child = Header::new(0, layout.resolved());
                Geometry::MultiPolygon(MultiPolygon {
                    header: Header::new(srid, layout.resolved()),
                    polygons: polygons
                        .into_iter()
                        .map(|rings| polygon_from_rings(child, rings))
                        .collect(),
                })
            }
            GeometryKind::GeometryCollection => {
                let geometries = self.match_list(&mut layout, |p, layout| {
                    let child = p.parse_geometry(0, layout.dims, depth + 1)?;
                    if layout.dims.is_none() {
                        layout.dims = Some(child.dimensions());
                    }
                    Ok(child)
                })?;
                Geometry::GeometryCollection(GeometryCollection {
                    header: Header::new(srid, layout.resolved()),
                    geometries,
                })
            }
            GeometryKind::Triangle => {
                let ring = self.match_triangle_body(&mut layout)?;
                Geometry::Triangle(Triangle {
                    header: Header::new(srid, layout.resolved()),
                    exterior_ring: ring,
                })
            }
            GeometryKind::Tin => {
                let rings =
                    self.match_list(&mut layout, |p, layout| p.match_triangle_body(layout))?;
                let child = Header::new(0, layout.resolved());
                Geometry::Tin(Tin {
                    header: Header::new(srid, layout.resolved()),
                    triangles: rings
                        .into_iter()
                        .map(|exterior_ring| Triangle {
                            header: child,
                            exterior_ring,
                        })
                        .collect(),
                })
            }
        };
        Ok(geometry)
    }

    /// `EMPTY | ((ring))`; a triangle has exactly one ring.
    fn match_triangle_body(&mut self, layout: &mut Layout) -> Result<Vec<Coord>> {
        if self.is_match(&["EMPTY"]) {
            return Ok(Vec::new());
        }
        self.expect_group_start()?;
        let ring = self.match_line_body(layout)?;
        self.expect_group_end()?;
        Ok(ring)
    }
}

fn polygon_from_rings(header: Header, rings: Vec<Vec<Coord>>) -> Polygon {
    let mut rings = rings.into_iter();
    let exterior_ring = rings.next().unwrap_or_default();
    Polygon {
        header,
        interior_rings: if exterior_ring.is_empty() {
            Vec::new()
        } else {
            rings.collect()
        },
        exterior_ring,
    }
}

/// Parse WKT or EWKT. Trailing non-whitespace input is an error.
pub(crate) fn parse(input: &str) -> Result<Geometry> {
    trace!("parsing {} bytes of WKT", input.len());
    let mut parser = WktParser::new(input);
    let srid = parser.match_srid()?.unwrap_or(0);
    let geometry = parser.parse_geometry(srid, None, 0)?;
    parser.expect_end()?;
    Ok(geometry)
}

/// Serialize to WKT / EWKT.
pub trait ToWkt: GeometryInfo {
    /// Append everything after the keyword and dimension qualifier of a
    /// non-empty geometry.
    #[doc(hidden)]
    fn write_wkt_body(&self, out: &mut String);

    /// Append the full WKT text of this geometry.
    fn write_wkt(&self, out: &mut String) {
        out.push_str(self.kind().wkt_keyword());
        let suffix = self.dimensions().wkt_suffix();
        if let Some(suffix) = suffix {
            out.push(' ');
            out.push_str(suffix);
            out.push(' ');
        }
        if self.is_empty() {
            if suffix.is_none() {
                out.push(' ');
            }
            out.push_str("EMPTY");
        } else {
            self.write_wkt_body(out);
        }
    }

    /// Plain WKT; the SRID is not represented.
    fn to_wkt(&self) -> String {
        let mut out = String::new();
        self.write_wkt(&mut out);
        out
    }

    /// WKT prefixed with `SRID=n;` when the SRID is set.
    fn to_ewkt(&self) -> String {
        let mut out = String::new();
        if self.srid() != 0 {
            let _ = write!(out, "SRID={};", self.srid());
        }
        self.write_wkt(&mut out);
        out
    }
}

fn write_coord(out: &mut String, coord: &Coord, dims: Dimensions) {
    for (i, ordinate) in coord.ordinates(dims).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{ordinate}");
    }
}

fn write_coords(out: &mut String, coords: &[Coord], dims: Dimensions) {
    out.push('(');
    for (i, coord) in coords.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_coord(out, coord, dims);
    }
    out.push(')');
}

fn write_rings<'r>(
    out: &mut String,
    rings: impl Iterator<Item = &'r Vec<Coord>>,
    dims: Dimensions,
) {
    out.push('(');
    for (i, ring) in rings.enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_coords(out, ring, dims);
    }
    out.push(')');
}

/// `(item,item,...)` with `EMPTY` standing in for empty elements.
fn write_list<T>(
    out: &mut String,
    items: &[T],
    is_empty: impl Fn(&T) -> bool,
    mut write_item: impl FnMut(&mut String, &T),
) {
    out.push('(');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if is_empty(item) {
            out.push_str("EMPTY");
        } else {
            write_item(out, item);
        }
    }
    out.push(')');
}

impl ToWkt for Point {
    fn write_wkt_body(&self, out: &mut String) {
        if let Some(coord) = &self.coord {
            write_coords(out, std::slice::from_ref(coord), self.dimensions());
        }
    }
}

impl ToWkt for LineString {
    fn write_wkt_body(&self, out: &mut String) {
        write_coords(out, &self.points, self.dimensions());
    }
}

impl ToWkt for Polygon {
    fn write_wkt_body(&self, out: &mut String) {
        write_rings(out, self.rings(), self.dimensions());
    }
}

impl ToWkt for MultiPoint {
    fn write_wkt_body(&self, out: &mut String) {
        let dims = self.dimensions();
        write_list(out, &self.points, Point::is_empty, |out, point| {
            if let Some(coord) = &point.coord {
                write_coord(out, coord, dims);
            }
        });
    }
}

impl ToWkt for MultiLineString {
    fn write_wkt_body(&self, out: &mut String) {
        let dims = self.dimensions();
        write_list(out, &self.line_strings, LineString::is_empty, |out, ls| {
            write_coords(out, &ls.points, dims);
        });
    }
}

impl ToWkt for MultiPolygon {
    fn write_wkt_body(&self, out: &mut String) {
        let dims = self.dimensions();
        write_list(out, &self.polygons, Polygon::is_empty, |out, polygon| {
            write_rings(out, polygon.rings(), dims);
        });
    }
}

impl ToWkt for GeometryCollection {
    fn write_wkt_body(&self, out: &mut String) {
        out.push('(');
        for (i, geometry) in self.geometries.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            geometry.write_wkt(out);
        }
        out.push(')');
    }
}

impl ToWkt for Triangle {
    fn write_wkt_body(&self, out: &mut String) {
        write_rings(out, std::iter::once(&self.exterior_ring), self.dimensions());
    }
}

impl ToWkt for Tin {
    fn write_wkt_body(&self, out: &mut String) {
        let dims = self.dimensions();
        write_list(out, &self.triangles, Triangle::is_empty, |out, triangle| {
            write_rings(out, std::iter::once(&triangle.exterior_ring), dims);
        });
    }
}

impl ToWkt for Geometry {
    fn write_wkt_body(&self, out: &mut String) {
        dispatch!(self, g => g.write_wkt_body(out))
    }
}
