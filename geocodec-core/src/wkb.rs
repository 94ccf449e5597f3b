//! WKB and PostGIS EWKB.
//!
//! Both share one byte layout: an endianness marker, a 4-byte type code, an
//! optional SRID (EWKB only) and a kind-specific payload in which multi
//! geometries embed complete nested WKB geometries. The reader accepts ISO
//! dimension offsets and EWKB flags at every level and in either byte order;
//! the writer emits little-endian and always knows the exact output size up
//! front.

use log::{debug, trace};

use crate::binary::{BinaryReader, BinaryWriter, Endianness};
use crate::error::{GeoCodecError, Result};
use crate::geometry::{
    dispatch, Coord, Geometry, GeometryCollection, GeometryInfo, Header, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Tin, Triangle,
};
use crate::parse::{check_child_dimensions, check_depth};
use crate::types::{
    Dimensions, GeometryKind, EWKB_FLAG_MASK, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG,
    ISO_M_OFFSET, ISO_ZM_OFFSET, ISO_Z_OFFSET,
};

/// Endianness marker plus type code.
const HEADER_SIZE: usize = 1 + 4;
const SRID_SIZE: usize = 4;
const COUNT_SIZE: usize = 4;

/// Which type-code convention the writer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WkbFlavor {
    /// OGC / ISO SQL-MM: dimensions as +1000/+2000/+3000 offsets, no SRID.
    #[default]
    Iso,
    /// PostGIS EWKB: dimensions and SRID presence as high flag bits.
    Extended,
}

/// Decoded type-code field of one geometry.
#[derive(Debug, Clone, Copy)]
struct WkbHeader {
    kind: GeometryKind,
    dims: Dimensions,
    srid: Option<u32>,
}

fn read_header(reader: &mut BinaryReader<'_>) -> Result<WkbHeader> {
    let endianness = Endianness::from_marker(reader.read_u8()?)?;
    reader.set_endianness(endianness);
    let raw = reader.read_u32()?;
    let srid = if raw & EWKB_SRID_FLAG != 0 {
        Some(reader.read_u32()?)
    } else {
        None
    };

    let code = raw & !EWKB_FLAG_MASK;
    let (iso_z, iso_m) = match code / 1000 * 1000 {
        0 => (false, false),
        ISO_Z_OFFSET => (true, false),
        ISO_M_OFFSET => (false, true),
        ISO_ZM_OFFSET => (true, true),
        _ => return Err(unsupported(code)),
    };
    let kind = GeometryKind::from_wkb_code(code % 1000).ok_or_else(|| unsupported(code))?;
    let dims = Dimensions::new(
        iso_z || raw & EWKB_Z_FLAG != 0,
        iso_m || raw & EWKB_M_FLAG != 0,
    );
    Ok(WkbHeader { kind, dims, srid })
}

fn unsupported(code: u32) -> GeoCodecError {
    debug!("rejecting unsupported WKB geometry type {code}");
    GeoCodecError::unsupported(code)
}

fn read_coord(reader: &mut BinaryReader<'_>, dims: Dimensions) -> Result<Coord> {
    let mut ordinates = [0.0; 4];
    for ordinate in ordinates.iter_mut().take(dims.count()) {
        *ordinate = reader.read_f64()?;
    }
    Ok(Coord::from_ordinates(&ordinates[..dims.count()], dims))
}

fn read_coords(reader: &mut BinaryReader<'_>, dims: Dimensions) -> Result<Vec<Coord>> {
    let count = u64::from(reader.read_u32()?);
    let count = reader.checked_count(count, dims.count() * 8)?;
    (0..count).map(|_| read_coord(reader, dims)).collect()
}

fn read_rings(reader: &mut BinaryReader<'_>, dims: Dimensions) -> Result<Vec<Vec<Coord>>> {
    let count = u64::from(reader.read_u32()?);
    let count = reader.checked_count(count, COUNT_SIZE)?;
    (0..count).map(|_| read_coords(reader, dims)).collect()
}

/// Read `count` nested geometries that must all be of `expected` kind and
/// share the parent's `dims`.
fn read_children(
    reader: &mut BinaryReader<'_>,
    expected: Option<GeometryKind>,
    dims: Dimensions,
    depth: usize,
) -> Result<Vec<Geometry>> {
    let count = u64::from(reader.read_u32()?);
    let count = reader.checked_count(count, HEADER_SIZE)?;
    (0..count)
        .map(|_| {
            let child = read_geometry(reader, expected, depth + 1)?;
            check_child_dimensions(dims, &child, reader.position())?;
            Ok(child)
        })
        .collect()
}

fn mismatched_child(reader: &BinaryReader<'_>, found: &Geometry) -> GeoCodecError {
    GeoCodecError::Format {
        message: "expected geometry type",
        position: reader.position(),
        context: found.kind().to_string(),
    }
}

/// Read one complete geometry at the reader's cursor. The reader's byte
/// order is restored afterwards so a parent is unaffected by its children.
fn read_geometry(
    reader: &mut BinaryReader<'_>,
    expected: Option<GeometryKind>,
    depth: usize,
) -> Result<Geometry> {
    check_depth(depth)?;
    let parent_endianness = reader.endianness();
    let wkb = read_header(reader)?;
    let header = Header::new(wkb.srid.unwrap_or(0), wkb.dims);
    let dims = wkb.dims;

    let geometry = match wkb.kind {
        GeometryKind::Point => {
            let coord = read_coord(reader, dims)?;
            Geometry::Point(Point {
                header,
                coord: (!(coord.x.is_nan() && coord.y.is_nan())).then_some(coord),
            })
        }
        GeometryKind::LineString => Geometry::LineString(LineString {
            header,
            points: read_coords(reader, dims)?,
        }),
        GeometryKind::Polygon => {
            let mut rings = read_rings(reader, dims)?.into_iter();
            Geometry::Polygon(Polygon {
                header,
                exterior_ring: rings.next().unwrap_or_default(),
                interior_rings: rings.collect(),
            })
        }
        GeometryKind::Triangle => {
            let mut rings = read_rings(reader, dims)?.into_iter();
            let exterior_ring = rings.next().unwrap_or_default();
            if rings.next().is_some() {
                return Err(GeoCodecError::invalid("triangle with more than one ring"));
            }
            Geometry::Triangle(Triangle {
                header,
                exterior_ring,
            })
        }
        GeometryKind::MultiPoint => {
            let points = read_children(reader, Some(GeometryKind::Point), dims, depth)?
                .into_iter()
                .map(|child| match child {
                    Geometry::Point(point) => Ok(point),
                    other => Err(mismatched_child(reader, &other)),
                })
                .collect::<Result<_>>()?;
            Geometry::MultiPoint(MultiPoint { header, points })
        }
        GeometryKind::MultiLineString => {
            let line_strings = read_children(reader, Some(GeometryKind::LineString), dims, depth)?
                .into_iter()
                .map(|child| match child {
                    Geometry::LineString(ls) => Ok(ls),
                    other => Err(mismatched_child(reader, &other)),
                })
                .collect::<Result<_>>()?;
            Geometry::MultiLineString(MultiLineString {
                header,
                line_strings,
            })
        }
        GeometryKind::MultiPolygon => {
            let polygons = read_children(reader, Some(GeometryKind::Polygon), dims, depth)?
                .into_iter()
                .map(|child| match child {
                    Geometry::Polygon(polygon) => Ok(polygon),
                    other => Err(mismatched_child(reader, &other)),
                })
                .collect::<Result<_>>()?;
            Geometry::MultiPolygon(MultiPolygon { header, polygons })
        }
        GeometryKind::Tin => {
            let triangles = read_children(reader, Some(GeometryKind::Triangle), dims, depth)?
                .into_iter()
                .map(|child| match child {
                    Geometry::Triangle(triangle) => Ok(triangle),
                    other => Err(mismatched_child(reader, &other)),
                })
                .collect::<Result<_>>()?;
            Geometry::Tin(Tin { header, triangles })
        }
        GeometryKind::GeometryCollection => Geometry::GeometryCollection(GeometryCollection {
            header,
            geometries: read_children(reader, None, dims, depth)?,
        }),
    };

    // Inside a multipoint, an empty multipoint is how an empty member point
    // was written.
    let geometry = match (expected, geometry) {
        (Some(GeometryKind::Point), Geometry::MultiPoint(mp)) if mp.is_empty() => {
            Geometry::Point(Point {
                header: mp.header,
                coord: None,
            })
        }
        (_, geometry) => geometry,
    };
    if let Some(expected) = expected {
        if geometry.kind() != expected {
            return Err(mismatched_child(reader, &geometry));
        }
    }
    reader.set_endianness(parent_endianness);
    Ok(geometry)
}

/// Parse WKB or EWKB. Bytes after the first complete geometry are ignored.
pub(crate) fn parse(bytes: &[u8]) -> Result<Geometry> {
    trace!("parsing {} bytes of WKB", bytes.len());
    let mut reader = BinaryReader::new(bytes);
    let geometry = read_geometry(&mut reader, None, 0)?;
    if !reader.is_at_end() {
        debug!("ignoring {} bytes after WKB geometry", reader.remaining());
    }
    Ok(geometry)
}

/// Serialize to WKB / EWKB.
pub trait ToWkb: GeometryInfo {
    /// Exact size of the payload that follows the type code (and SRID).
    #[doc(hidden)]
    fn wkb_body_size(&self) -> usize;

    #[doc(hidden)]
    fn write_wkb_body(&self, writer: &mut BinaryWriter, flavor: WkbFlavor) -> Result<()>;

    /// Exact length of [`ToWkb::to_wkb`]'s output.
    fn wkb_size(&self) -> usize {
        HEADER_SIZE + self.wkb_body_size()
    }

    /// Write this geometry in `flavor` using the writer's byte order. The
    /// SRID is only written for [`WkbFlavor::Extended`] with `with_srid` set
    /// and a non-zero SRID.
    fn write_wkb(
        &self,
        writer: &mut BinaryWriter,
        flavor: WkbFlavor,
        with_srid: bool,
    ) -> Result<()> {
        // Empty points have no WKB encoding of their own.
        let kind = match self.kind() {
            GeometryKind::Point if self.is_empty() => GeometryKind::MultiPoint,
            kind => kind,
        };
        let dims = self.dimensions();
        let srid = (flavor == WkbFlavor::Extended && with_srid && self.srid() != 0)
            .then(|| self.srid());

        writer.write_u8(writer.endianness().marker())?;
        match flavor {
            WkbFlavor::Iso => writer.write_u32(kind.wkb_code() + dims.iso_offset())?,
            WkbFlavor::Extended => {
                let srid_flag = if srid.is_some() { EWKB_SRID_FLAG } else { 0 };
                writer.write_u32(kind.wkb_code() | dims.ewkb_flags() | srid_flag)?;
            }
        }
        if let Some(srid) = srid {
            writer.write_u32(srid)?;
        }
        self.write_wkb_body(writer, flavor)
    }

    /// Little-endian ISO WKB; the SRID is not represented.
    fn to_wkb(&self) -> Result<Vec<u8>> {
        let mut writer = BinaryWriter::fixed(self.wkb_size());
        self.write_wkb(&mut writer, WkbFlavor::Iso, false)?;
        Ok(writer.into_inner())
    }

    /// Little-endian EWKB carrying the SRID when it is set.
    fn to_ewkb(&self) -> Result<Vec<u8>> {
        let size = self.wkb_size() + if self.srid() != 0 { SRID_SIZE } else { 0 };
        let mut writer = BinaryWriter::fixed(size);
        self.write_wkb(&mut writer, WkbFlavor::Extended, true)?;
        Ok(writer.into_inner())
    }
}

fn coords_size(coords: &[Coord], dims: Dimensions) -> usize {
    COUNT_SIZE + coords.len() * dims.count() * 8
}

fn children_size<T: ToWkb>(children: &[T]) -> usize {
    COUNT_SIZE + children.iter().map(ToWkb::wkb_size).sum::<usize>()
}

fn write_coord(writer: &mut BinaryWriter, coord: &Coord, dims: Dimensions) -> Result<()> {
    coord
        .ordinates(dims)
        .try_for_each(|ordinate| writer.write_f64(ordinate))
}

fn write_count(writer: &mut BinaryWriter, count: usize) -> Result<()> {
    let count = u32::try_from(count).map_err(|_| {
        GeoCodecError::invalid(format!("{count} elements exceed the WKB count range"))
    })?;
    writer.write_u32(count)
}

fn write_coords(writer: &mut BinaryWriter, coords: &[Coord], dims: Dimensions) -> Result<()> {
    write_count(writer, coords.len())?;
    coords
        .iter()
        .try_for_each(|coord| write_coord(writer, coord, dims))
}

fn write_children<T: ToWkb>(
    writer: &mut BinaryWriter,
    children: &[T],
    flavor: WkbFlavor,
) -> Result<()> {
    write_count(writer, children.len())?;
    children
        .iter()
        .try_for_each(|child| child.write_wkb(writer, flavor, false))
}

impl ToWkb for Point {
    fn wkb_body_size(&self) -> usize {
        match self.coord {
            Some(_) => self.dimensions().count() * 8,
            None => COUNT_SIZE,
        }
    }

    fn write_wkb_body(&self, writer: &mut BinaryWriter, _flavor: WkbFlavor) -> Result<()> {
        match &self.coord {
            Some(coord) => write_coord(writer, coord, self.dimensions()),
            None => writer.write_u32(0),
        }
    }
}

impl ToWkb for LineString {
    fn wkb_body_size(&self) -> usize {
        coords_size(&self.points, self.dimensions())
    }

    fn write_wkb_body(&self, writer: &mut BinaryWriter, _flavor: WkbFlavor) -> Result<()> {
        write_coords(writer, &self.points, self.dimensions())
    }
}

impl ToWkb for Polygon {
    fn wkb_body_size(&self) -> usize {
        let dims = self.dimensions();
        COUNT_SIZE + self.rings().map(|ring| coords_size(ring, dims)).sum::<usize>()
    }

    fn write_wkb_body(&self, writer: &mut BinaryWriter, _flavor: WkbFlavor) -> Result<()> {
        let dims = self.dimensions();
        write_count(writer, self.rings().count())?;
        self.rings()
            .try_for_each(|ring| write_coords(writer, ring, dims))
    }
}

impl ToWkb for Triangle {
    fn wkb_body_size(&self) -> usize {
        if self.is_empty() {
            COUNT_SIZE
        } else {
            COUNT_SIZE + coords_size(&self.exterior_ring, self.dimensions())
        }
    }

    fn write_wkb_body(&self, writer: &mut BinaryWriter, _flavor: WkbFlavor) -> Result<()> {
        if self.is_empty() {
            return writer.write_u32(0);
        }
        writer.write_u32(1)?;
        write_coords(writer, &self.exterior_ring, self.dimensions())
    }
}

macro_rules! impl_to_wkb_multi {
    ($ty:ident, $children:ident) => {
        impl ToWkb for $ty {
            fn wkb_body_size(&self) -> usize {
                children_size(&self.$children)
            }

            fn write_wkb_body(&self, writer: &mut BinaryWriter, flavor: WkbFlavor) -> Result<()> {
                write_children(writer, &self.$children, flavor)
            }
        }
    };
}

impl_to_wkb_multi!(MultiPoint, points);
impl_to_wkb_multi!(MultiLineString, line_strings);
impl_to_wkb_multi!(MultiPolygon, polygons);
impl_to_wkb_multi!(GeometryCollection, geometries);
impl_to_wkb_multi!(Tin, triangles);

impl ToWkb for Geometry {
    fn wkb_body_size(&self) -> usize {
        dispatch!(self, g => g.wkb_body_size())
    }

    fn write_wkb_body(&self, writer: &mut BinaryWriter, flavor: WkbFlavor) -> Result<()> {
        dispatch!(self, g => g.write_wkb_body(writer, flavor))
    }
}
