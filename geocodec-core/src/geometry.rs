//! Geometry value model.
//!
//! Every kind embeds a [`Header`] (`srid`, `has_z`, `has_m`) next to its
//! payload; [`Geometry`] is the closed sum over all nine kinds. Values are
//! plain owned trees: `GeometryCollection` and `Tin` hold their children in
//! `Vec`s, and equality is structural.

use crate::types::{Dimensions, GeometryKind};

/// A single position. `z` and `m` are present exactly when the owning
/// geometry's header says so.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    pub const fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    pub const fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    pub const fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    pub const fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.z.is_some(), self.m.is_some())
    }

    /// Ordinates in `x, y[, z][, m]` order for the given layout. A missing
    /// ordinate the layout asks for comes back as NaN.
    pub(crate) fn ordinates(&self, dims: Dimensions) -> impl Iterator<Item = f64> {
        let z = dims.has_z.then(|| self.z.unwrap_or(f64::NAN));
        let m = dims.has_m.then(|| self.m.unwrap_or(f64::NAN));
        [Some(self.x), Some(self.y), z, m].into_iter().flatten()
    }

    /// This position in `dims`: extra ordinates are dropped and missing ones
    /// become 0, the fill PostGIS `ST_Force3D`/`ST_Force4D` use.
    pub fn conformed(self, dims: Dimensions) -> Self {
        Self {
            z: dims.has_z.then(|| self.z.unwrap_or(0.0)),
            m: dims.has_m.then(|| self.m.unwrap_or(0.0)),
            ..self
        }
    }

    /// Inverse of [`Coord::ordinates`].
    pub(crate) fn from_ordinates(ordinates: &[f64], dims: Dimensions) -> Self {
        let mut rest = ordinates.iter().skip(2).copied();
        Self {
            x: ordinates[0],
            y: ordinates[1],
            z: if dims.has_z { rest.next() } else { None },
            m: if dims.has_m { rest.next() } else { None },
        }
    }
}

/// Attributes shared by every geometry kind. `srid == 0` means "no SRID".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Header {
    pub srid: u32,
    pub has_z: bool,
    pub has_m: bool,
}

impl Header {
    pub const fn new(srid: u32, dims: Dimensions) -> Self {
        Self {
            srid,
            has_z: dims.has_z,
            has_m: dims.has_m,
        }
    }

    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.has_z, self.has_m)
    }
}

/// Read access shared by all geometry kinds and by [`Geometry`] itself.
pub trait GeometryInfo {
    fn header(&self) -> &Header;

    fn kind(&self) -> GeometryKind;

    /// True when the geometry carries no coordinates at all.
    fn is_empty(&self) -> bool;

    fn srid(&self) -> u32 {
        self.header().srid
    }

    fn has_z(&self) -> bool {
        self.header().has_z
    }

    fn has_m(&self) -> bool {
        self.header().has_m
    }

    fn dimensions(&self) -> Dimensions {
        self.header().dimensions()
    }
}

fn dims_of_first<T>(items: &[T], dims: impl Fn(&T) -> Dimensions) -> Dimensions {
    items.first().map(dims).unwrap_or_default()
}

fn conform_coords(coords: &mut [Coord], dims: Dimensions) {
    for coord in coords {
        *coord = coord.conformed(dims);
    }
}

/// A point; `coord == None` is the empty point, distinct from `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    pub header: Header,
    pub coord: Option<Coord>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_coord(Coord::xy(x, y))
    }

    pub fn new_z(x: f64, y: f64, z: f64) -> Self {
        Self::from_coord(Coord::xyz(x, y, z))
    }

    pub fn new_m(x: f64, y: f64, m: f64) -> Self {
        Self::from_coord(Coord::xym(x, y, m))
    }

    pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self::from_coord(Coord::xyzm(x, y, z, m))
    }

    pub fn from_coord(coord: Coord) -> Self {
        Self {
            header: Header::new(0, coord.dimensions()),
            coord: Some(coord),
        }
    }

    /// `POINT EMPTY`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An empty point that still declares Z and/or M (`POINT Z EMPTY`).
    pub fn empty_with(dims: Dimensions) -> Self {
        Self {
            header: Header::new(0, dims),
            coord: None,
        }
    }

    pub fn x(&self) -> Option<f64> {
        self.coord.map(|c| c.x)
    }

    pub fn y(&self) -> Option<f64> {
        self.coord.map(|c| c.y)
    }

    pub fn z(&self) -> Option<f64> {
        self.coord.and_then(|c| c.z)
    }

    pub fn m(&self) -> Option<f64> {
        self.coord.and_then(|c| c.m)
    }

    pub(crate) fn conform(&mut self, dims: Dimensions) {
        self.header = Header::new(self.header.srid, dims);
        self.coord = self.coord.map(|c| c.conformed(dims));
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    pub header: Header,
    pub points: Vec<Coord>,
}

impl LineString {
    /// The first point decides the layout; the others are conformed to it.
    pub fn new(points: Vec<Coord>) -> Self {
        let dims = dims_of_first(&points, Coord::dimensions);
        let mut line = Self {
            header: Header::default(),
            points,
        };
        line.conform(dims);
        line
    }

    pub(crate) fn conform(&mut self, dims: Dimensions) {
        self.header = Header::new(self.header.srid, dims);
        conform_coords(&mut self.points, dims);
    }
}

/// A polygon. An empty exterior ring means the polygon is empty, and then
/// `interior_rings` must be empty as well.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub header: Header,
    pub exterior_ring: Vec<Coord>,
    pub interior_rings: Vec<Vec<Coord>>,
}

impl Polygon {
    /// The first exterior point decides the layout of every ring.
    pub fn new(exterior_ring: Vec<Coord>, interior_rings: Vec<Vec<Coord>>) -> Self {
        let dims = dims_of_first(&exterior_ring, Coord::dimensions);
        let mut polygon = Self {
            header: Header::default(),
            exterior_ring,
            interior_rings,
        };
        polygon.conform(dims);
        polygon
    }

    pub(crate) fn conform(&mut self, dims: Dimensions) {
        self.header = Header::new(self.header.srid, dims);
        conform_coords(&mut self.exterior_ring, dims);
        for ring in &mut self.interior_rings {
            conform_coords(ring, dims);
        }
    }

    /// Exterior ring followed by the interior rings; nothing for an empty polygon.
    pub fn rings(&self) -> impl Iterator<Item = &Vec<Coord>> {
        let interiors = if self.exterior_ring.is_empty() {
            &[][..]
        } else {
            &self.interior_rings[..]
        };
        (!self.exterior_ring.is_empty())
            .then_some(&self.exterior_ring)
            .into_iter()
            .chain(interiors)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint {
    pub header: Header,
    pub points: Vec<Point>,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        let dims = dims_of_first(&points, Point::dimensions);
        let mut geometry = Self {
            header: Header::default(),
            points,
        };
        geometry.conform(dims);
        geometry
    }

    pub(crate) fn conform(&mut self, dims: Dimensions) {
        self.header = Header::new(self.header.srid, dims);
        for member in &mut self.points {
            member.conform(dims);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString {
    pub header: Header,
    pub line_strings: Vec<LineString>,
}

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        let dims = dims_of_first(&line_strings, LineString::dimensions);
        let mut geometry = Self {
            header: Header::default(),
            line_strings,
        };
        geometry.conform(dims);
        geometry
    }

    pub(crate) fn conform(&mut self, dims: Dimensions) {
        self.header = Header::new(self.header.srid, dims);
        for member in &mut self.line_strings {
            member.conform(dims);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    pub header: Header,
    pub polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let dims = dims_of_first(&polygons, Polygon::dimensions);
        let mut geometry = Self {
            header: Header::default(),
            polygons,
        };
        geometry.conform(dims);
        geometry
    }

    pub(crate) fn conform(&mut self, dims: Dimensions) {
        self.header = Header::new(self.header.srid, dims);
        for member in &mut self.polygons {
            member.conform(dims);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    pub header: Header,
    pub geometries: Vec<Geometry>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        let dims = dims_of_first(&geometries, Geometry::dimensions);
        let mut geometry = Self {
            header: Header::default(),
            geometries,
        };
        geometry.conform(dims);
        geometry
    }

    pub(crate) fn conform(&mut self, dims: Dimensions) {
        self.header = Header::new(self.header.srid, dims);
        for member in &mut self.geometries {
            member.conform(dims);
        }
    }
}

/// A polygon without interior rings, conventionally four points with the
/// first repeated last.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Triangle {
    pub header: Header,
    pub exterior_ring: Vec<Coord>,
}

impl Triangle {
    pub fn new(exterior_ring: Vec<Coord>) -> Self {
        let dims = dims_of_first(&exterior_ring, Coord::dimensions);
        let mut triangle = Self {
            header: Header::default(),
            exterior_ring,
        };
        triangle.conform(dims);
        triangle
    }

    pub(crate) fn conform(&mut self, dims: Dimensions) {
        self.header = Header::new(self.header.srid, dims);
        conform_coords(&mut self.exterior_ring, dims);
    }
}

/// Triangulated irregular network.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tin {
    pub header: Header,
    pub triangles: Vec<Triangle>,
}

impl Tin {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        let dims = dims_of_first(&triangles, Triangle::dimensions);
        let mut geometry = Self {
            header: Header::default(),
            triangles,
        };
        geometry.conform(dims);
        geometry
    }

    pub(crate) fn conform(&mut self, dims: Dimensions) {
        self.header = Header::new(self.header.srid, dims);
        for member in &mut self.triangles {
            member.conform(dims);
        }
    }
}

/// Any geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    Triangle(Triangle),
    Tin(Tin),
}

/// Evaluate `$body` with `$g` bound to the concrete kind inside a [`Geometry`].
macro_rules! dispatch {
    ($geom:expr, $g:ident => $body:expr) => {
        match $geom {
            $crate::geometry::Geometry::Point($g) => $body,
            $crate::geometry::Geometry::LineString($g) => $body,
            $crate::geometry::Geometry::Polygon($g) => $body,
            $crate::geometry::Geometry::MultiPoint($g) => $body,
            $crate::geometry::Geometry::MultiLineString($g) => $body,
            $crate::geometry::Geometry::MultiPolygon($g) => $body,
            $crate::geometry::Geometry::GeometryCollection($g) => $body,
            $crate::geometry::Geometry::Triangle($g) => $body,
            $crate::geometry::Geometry::Tin($g) => $body,
        }
    };
}
pub(crate) use dispatch;

macro_rules! impl_kind {
    ($ty:ident, $kind:ident, |$s:ident| $empty:expr) => {
        impl GeometryInfo for $ty {
            fn header(&self) -> &Header {
                &self.header
            }

            fn kind(&self) -> GeometryKind {
                GeometryKind::$kind
            }

            fn is_empty(&self) -> bool {
                let $s = self;
                $empty
            }
        }

        impl $ty {
            /// Return the geometry with its SRID replaced.
            pub fn with_srid(mut self, srid: u32) -> Self {
                self.header.srid = srid;
                self
            }
        }

        impl From<$ty> for Geometry {
            fn from(value: $ty) -> Self {
                Geometry::$kind(value)
            }
        }
    };
}

impl_kind!(Point, Point, |p| p.coord.is_none());
impl_kind!(LineString, LineString, |ls| ls.points.is_empty());
impl_kind!(Polygon, Polygon, |p| p.exterior_ring.is_empty());
impl_kind!(MultiPoint, MultiPoint, |mp| mp.points.is_empty());
impl_kind!(MultiLineString, MultiLineString, |mls| mls.line_strings.is_empty());
impl_kind!(MultiPolygon, MultiPolygon, |mp| mp.polygons.is_empty());
impl_kind!(GeometryCollection, GeometryCollection, |gc| gc.geometries.is_empty());
impl_kind!(Triangle, Triangle, |t| t.exterior_ring.is_empty());
impl_kind!(Tin, Tin, |t| t.triangles.is_empty());

impl GeometryInfo for Geometry {
    fn header(&self) -> &Header {
        dispatch!(self, g => g.header())
    }

    fn kind(&self) -> GeometryKind {
        dispatch!(self, g => g.kind())
    }

    fn is_empty(&self) -> bool {
        dispatch!(self, g => g.is_empty())
    }
}

impl Geometry {
    pub fn header_mut(&mut self) -> &mut Header {
        dispatch!(self, g => &mut g.header)
    }

    pub fn set_srid(&mut self, srid: u32) {
        self.header_mut().srid = srid;
    }

    /// Rewrite this geometry and everything below it in `dims`.
    pub(crate) fn conform(&mut self, dims: Dimensions) {
        dispatch!(self, g => g.conform(dims))
    }

    /// Return the geometry with its SRID replaced.
    pub fn with_srid(mut self, srid: u32) -> Self {
        self.set_srid(srid);
        self
    }

    /// An empty geometry of `kind` with the given header.
    pub fn empty(kind: GeometryKind, header: Header) -> Self {
        match kind {
            GeometryKind::Point => Point {
                header,
                coord: None,
            }
            .into(),
            GeometryKind::LineString => LineString {
                header,
                points: Vec::new(),
            }
            .into(),
            GeometryKind::Polygon => Polygon {
                header,
                ..Polygon::default()
            }
            .into(),
            GeometryKind::MultiPoint => MultiPoint {
                header,
                points: Vec::new(),
            }
            .into(),
            GeometryKind::MultiLineString => MultiLineString {
                header,
                line_strings: Vec::new(),
            }
            .into(),
            GeometryKind::MultiPolygon => MultiPolygon {
                header,
                polygons: Vec::new(),
            }
            .into(),
            GeometryKind::GeometryCollection => GeometryCollection {
                header,
                geometries: Vec::new(),
            }
            .into(),
            GeometryKind::Triangle => Triangle {
                header,
                exterior_ring: Vec::new(),
            }
            .into(),
            GeometryKind::Tin => Tin {
                header,
                triangles: Vec::new(),
            }
            .into(),
        }
    }
}
