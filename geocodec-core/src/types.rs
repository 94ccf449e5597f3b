//! Geometry type codes and keywords for every supported format.
//!
//! The three encodings name the same logical set of geometry kinds through
//! unrelated code spaces, so each gets its own read-only table.

use std::fmt;

// ── EWKB flag constants ───────────────────────────────────────────────────────
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;
pub const EWKB_M_FLAG: u32 = 0x4000_0000;
pub const EWKB_FLAG_MASK: u32 = EWKB_SRID_FLAG | EWKB_Z_FLAG | EWKB_M_FLAG;

// ── Geometry type codes (OGC / ISO WKB) ───────────────────────────────────────
pub const WKB_POINT: u32 = 1;
pub const WKB_LINESTRING: u32 = 2;
pub const WKB_POLYGON: u32 = 3;
pub const WKB_MULTIPOINT: u32 = 4;
pub const WKB_MULTILINESTRING: u32 = 5;
pub const WKB_MULTIPOLYGON: u32 = 6;
pub const WKB_GEOMETRYCOLLECTION: u32 = 7;
pub const WKB_TIN: u32 = 16;
pub const WKB_TRIANGLE: u32 = 17;

/// ISO SQL/MM adds this multiple of 1000 to the base code per dimension layout.
pub const ISO_Z_OFFSET: u32 = 1000;
pub const ISO_M_OFFSET: u32 = 2000;
pub const ISO_ZM_OFFSET: u32 = 3000;

/// The closed set of geometry kinds this crate models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Triangle,
    Tin,
}

const WKT_KEYWORDS: [(&str, GeometryKind); 9] = [
    ("POINT", GeometryKind::Point),
    ("LINESTRING", GeometryKind::LineString),
    ("POLYGON", GeometryKind::Polygon),
    ("MULTIPOINT", GeometryKind::MultiPoint),
    ("MULTILINESTRING", GeometryKind::MultiLineString),
    ("MULTIPOLYGON", GeometryKind::MultiPolygon),
    ("GEOMETRYCOLLECTION", GeometryKind::GeometryCollection),
    ("TRIANGLE", GeometryKind::Triangle),
    ("TIN", GeometryKind::Tin),
];

/// Keywords of OGC / SQL-MM kinds this crate deliberately does not model.
/// They are recognized only to report them as unsupported.
pub const RESERVED_WKT_KEYWORDS: [&str; 9] = [
    "POLYHEDRALSURFACE",
    "MULTISURFACE",
    "CIRCULARSTRING",
    "COMPOUNDCURVE",
    "CURVEPOLYGON",
    "MULTICURVE",
    "GEOMETRY",
    "SURFACE",
    "CURVE",
];

const WKB_CODES: [(u32, GeometryKind); 9] = [
    (WKB_POINT, GeometryKind::Point),
    (WKB_LINESTRING, GeometryKind::LineString),
    (WKB_POLYGON, GeometryKind::Polygon),
    (WKB_MULTIPOINT, GeometryKind::MultiPoint),
    (WKB_MULTILINESTRING, GeometryKind::MultiLineString),
    (WKB_MULTIPOLYGON, GeometryKind::MultiPolygon),
    (WKB_GEOMETRYCOLLECTION, GeometryKind::GeometryCollection),
    (WKB_TIN, GeometryKind::Tin),
    (WKB_TRIANGLE, GeometryKind::Triangle),
];

// TWKB reuses the WKB base codes but only has a nibble for them.
const TWKB_CODES: [(u8, GeometryKind); 7] = [
    (1, GeometryKind::Point),
    (2, GeometryKind::LineString),
    (3, GeometryKind::Polygon),
    (4, GeometryKind::MultiPoint),
    (5, GeometryKind::MultiLineString),
    (6, GeometryKind::MultiPolygon),
    (7, GeometryKind::GeometryCollection),
];

const GEOJSON_TYPES: [(&str, GeometryKind); 7] = [
    ("Point", GeometryKind::Point),
    ("LineString", GeometryKind::LineString),
    ("Polygon", GeometryKind::Polygon),
    ("MultiPoint", GeometryKind::MultiPoint),
    ("MultiLineString", GeometryKind::MultiLineString),
    ("MultiPolygon", GeometryKind::MultiPolygon),
    ("GeometryCollection", GeometryKind::GeometryCollection),
];

impl GeometryKind {
    /// Upper-case WKT keyword.
    pub fn wkt_keyword(self) -> &'static str {
        lookup_by_kind(&WKT_KEYWORDS, self).unwrap_or("GEOMETRY")
    }

    /// Base WKB type code, without dimension offsets or EWKB flags.
    pub fn wkb_code(self) -> u32 {
        lookup_by_kind(&WKB_CODES, self).unwrap_or(0)
    }

    /// TWKB type nibble; `None` for kinds TWKB cannot express.
    pub fn twkb_code(self) -> Option<u8> {
        lookup_by_kind(&TWKB_CODES, self)
    }

    /// GeoJSON `type` member; `None` for kinds GeoJSON cannot express.
    pub fn geojson_type(self) -> Option<&'static str> {
        lookup_by_kind(&GEOJSON_TYPES, self)
    }

    /// Case-insensitive WKT keyword lookup.
    pub fn from_wkt_keyword(keyword: &str) -> Option<Self> {
        WKT_KEYWORDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(keyword))
            .map(|&(_, kind)| kind)
    }

    pub fn from_wkb_code(code: u32) -> Option<Self> {
        WKB_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(_, kind)| kind)
    }

    pub fn from_twkb_code(code: u8) -> Option<Self> {
        TWKB_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(_, kind)| kind)
    }

    pub fn from_geojson_type(name: &str) -> Option<Self> {
        GEOJSON_TYPES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, kind)| kind)
    }

    /// All WKT keywords, longest first so prefix matching never stops early.
    pub(crate) fn wkt_keywords_longest_first() -> [&'static str; 9] {
        let mut keywords = WKT_KEYWORDS.map(|(name, _)| name);
        keywords.sort_by(|a, b| b.len().cmp(&a.len()));
        keywords
    }
}

fn lookup_by_kind<T: Copy>(table: &[(T, GeometryKind)], kind: GeometryKind) -> Option<T> {
    table.iter().find(|(_, k)| *k == kind).map(|&(value, _)| value)
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
            GeometryKind::Triangle => "Triangle",
            GeometryKind::Tin => "Tin",
        })
    }
}

/// Which optional ordinates every coordinate of a geometry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub has_z: bool,
    pub has_m: bool,
}

impl Dimensions {
    pub const XY: Dimensions = Dimensions::new(false, false);
    pub const XYZ: Dimensions = Dimensions::new(true, false);
    pub const XYM: Dimensions = Dimensions::new(false, true);
    pub const XYZM: Dimensions = Dimensions::new(true, true);

    pub const fn new(has_z: bool, has_m: bool) -> Self {
        Self { has_z, has_m }
    }

    /// Number of ordinates per coordinate (2, 3 or 4).
    pub const fn count(self) -> usize {
        2 + self.has_z as usize + self.has_m as usize
    }

    /// WKT dimension qualifier, `None` for plain XY.
    pub const fn wkt_suffix(self) -> Option<&'static str> {
        match (self.has_z, self.has_m) {
            (true, true) => Some("ZM"),
            (true, false) => Some("Z"),
            (false, true) => Some("M"),
            (false, false) => None,
        }
    }

    pub const fn iso_offset(self) -> u32 {
        match (self.has_z, self.has_m) {
            (true, true) => ISO_ZM_OFFSET,
            (true, false) => ISO_Z_OFFSET,
            (false, true) => ISO_M_OFFSET,
            (false, false) => 0,
        }
    }

    pub const fn ewkb_flags(self) -> u32 {
        let mut flags = 0;
        if self.has_z {
            flags |= EWKB_Z_FLAG;
        }
        if self.has_m {
            flags |= EWKB_M_FLAG;
        }
        flags
    }
}
