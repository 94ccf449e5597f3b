//! Tiny WKB: precision-reduced, delta- and varint-encoded geometries.
//!
//! Every geometry starts with a type/precision byte and a metadata byte,
//! optionally followed by an extended-dimensions byte, a size attribute and a
//! bounding box. Coordinates are scaled by `10^precision`, rounded, and
//! written as zigzag varint deltas from the previous coordinate of the same
//! geometry. Collections embed fully independent child geometries.

use log::{debug, trace};

use crate::binary::{BinaryReader, BinaryWriter};
use crate::error::{GeoCodecError, Result};
use crate::geometry::{
    dispatch, Coord, Geometry, GeometryCollection, GeometryInfo, Header, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Tin, Triangle,
};
use crate::parse::{check_child_dimensions, check_depth};
use crate::types::{Dimensions, GeometryKind};
use crate::zigzag;

const FLAG_BBOX: u8 = 0x01;
const FLAG_SIZE: u8 = 0x02;
const FLAG_ID_LIST: u8 = 0x04;
const FLAG_EXTENDED: u8 = 0x08;
const FLAG_EMPTY: u8 = 0x10;

/// Largest precision magnitude a TWKB header can carry.
const MAX_PRECISION: u8 = 7;

/// Precision and optional-attribute settings for [`ToTwkb::to_twkb_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwkbOptions {
    /// Decimal digits kept for x and y; negative values round to tens,
    /// hundreds, ...
    pub xy_precision: i8,
    pub z_precision: u8,
    pub m_precision: u8,
    pub include_bbox: bool,
    pub include_size: bool,
}

impl Default for TwkbOptions {
    fn default() -> Self {
        Self {
            xy_precision: 5,
            z_precision: 0,
            m_precision: 0,
            include_bbox: false,
            include_size: false,
        }
    }
}

impl TwkbOptions {
    pub fn with_precision(mut self, xy: i8, z: u8, m: u8) -> Self {
        self.xy_precision = xy;
        self.z_precision = z;
        self.m_precision = m;
        self
    }

    pub fn with_bbox(mut self, include_bbox: bool) -> Self {
        self.include_bbox = include_bbox;
        self
    }

    pub fn with_size(mut self, include_size: bool) -> Self {
        self.include_size = include_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.xy_precision.unsigned_abs() > MAX_PRECISION {
            return Err(GeoCodecError::invalid(format!(
                "xy precision {} outside -7..=7",
                self.xy_precision
            )));
        }
        for (name, precision) in [("z", self.z_precision), ("m", self.m_precision)] {
            if precision > MAX_PRECISION {
                return Err(GeoCodecError::invalid(format!(
                    "{name} precision {precision} outside 0..=7"
                )));
            }
        }
        Ok(())
    }
}

/// Per-ordinate precisions in `x, y[, z][, m]` order.
fn precisions(dims: Dimensions, xy: i32, z: i32, m: i32) -> Vec<i32> {
    let mut out = vec![xy, xy];
    if dims.has_z {
        out.push(z);
    }
    if dims.has_m {
        out.push(m);
    }
    out
}

fn scale(value: f64, precision: i32) -> Result<i64> {
    if !value.is_finite() {
        return Err(GeoCodecError::invalid(format!(
            "TWKB cannot encode ordinate {value}"
        )));
    }
    let scaled = if precision >= 0 {
        value * 10f64.powi(precision)
    } else {
        value / 10f64.powi(-precision)
    };
    let rounded = scaled.round();
    // 2^63: the first magnitude an i64 cannot hold
    if rounded.abs() >= 9_223_372_036_854_775_808.0 && rounded != i64::MIN as f64 {
        return Err(GeoCodecError::invalid(format!(
            "TWKB cannot encode ordinate {value} at precision {precision}"
        )));
    }
    Ok(rounded as i64)
}

fn unscale(value: i64, precision: i32) -> f64 {
    if precision >= 0 {
        value as f64 / 10f64.powi(precision)
    } else {
        value as f64 * 10f64.powi(-precision)
    }
}

/// Running delta state while one geometry's coordinates are written.
#[derive(Debug, Clone)]
pub struct DeltaEncoder {
    dims: Dimensions,
    precisions: Vec<i32>,
    last: [i64; 4],
}

impl DeltaEncoder {
    fn new(dims: Dimensions, options: &TwkbOptions) -> Self {
        Self {
            dims,
            precisions: precisions(
                dims,
                i32::from(options.xy_precision),
                i32::from(options.z_precision),
                i32::from(options.m_precision),
            ),
            last: [0; 4],
        }
    }

    fn write_coord(&mut self, writer: &mut BinaryWriter, coord: &Coord) -> Result<()> {
        for (i, ordinate) in coord.ordinates(self.dims).enumerate() {
            let value = scale(ordinate, self.precisions[i])?;
            writer.write_var_int(zigzag::encode(value.wrapping_sub(self.last[i])))?;
            self.last[i] = value;
        }
        Ok(())
    }

    fn write_coords(&mut self, writer: &mut BinaryWriter, coords: &[Coord]) -> Result<()> {
        writer.write_var_int(coords.len() as u64)?;
        coords
            .iter()
            .try_for_each(|coord| self.write_coord(writer, coord))
    }

    fn write_rings<'r>(
        &mut self,
        writer: &mut BinaryWriter,
        rings: impl ExactSizeIterator<Item = &'r Vec<Coord>>,
    ) -> Result<()> {
        writer.write_var_int(rings.len() as u64)?;
        for ring in rings {
            self.write_coords(writer, ring)?;
        }
        Ok(())
    }
}

/// Serialize to TWKB.
pub trait ToTwkb: GeometryInfo {
    /// Append the coordinate body of a non-empty geometry.
    #[doc(hidden)]
    fn write_twkb_body(
        &self,
        writer: &mut BinaryWriter,
        encoder: &mut DeltaEncoder,
        options: &TwkbOptions,
    ) -> Result<()>;

    /// Visit every coordinate, descending into children.
    #[doc(hidden)]
    fn for_each_coord(&self, f: &mut dyn FnMut(&Coord));

    /// Append this geometry, header included. `options` must be valid.
    fn write_twkb(&self, writer: &mut BinaryWriter, options: &TwkbOptions) -> Result<()> {
        let kind = self.kind();
        let code = kind.twkb_code().ok_or_else(|| {
            debug!("{kind} has no TWKB type code");
            GeoCodecError::unsupported(kind)
        })?;
        let dims = self.dimensions();
        let empty = self.is_empty();
        let include_bbox = options.include_bbox && !empty;
        let extended = dims.has_z || dims.has_m;

        let mut metadata = 0;
        if include_bbox {
            metadata |= FLAG_BBOX;
        }
        if options.include_size {
            metadata |= FLAG_SIZE;
        }
        if extended {
            metadata |= FLAG_EXTENDED;
        }
        if empty {
            metadata |= FLAG_EMPTY;
        }

        let precision = zigzag::encode(i64::from(options.xy_precision)) as u8;
        writer.write_u8(precision << 4 | code)?;
        writer.write_u8(metadata)?;
        if extended {
            writer.write_u8(
                u8::from(dims.has_z)
                    | u8::from(dims.has_m) << 1
                    | (options.z_precision & 0x07) << 2
                    | (options.m_precision & 0x07) << 5,
            )?;
        }

        let mut body = BinaryWriter::growable(64);
        if include_bbox {
            write_bbox(self, &mut body, options)?;
        }
        if !empty {
            let mut encoder = DeltaEncoder::new(dims, options);
            self.write_twkb_body(&mut body, &mut encoder, options)?;
        }
        let body = body.into_inner();
        if options.include_size {
            writer.write_var_int(body.len() as u64)?;
        }
        writer.write_bytes(&body)
    }

    /// TWKB with [`TwkbOptions::default`].
    ///
    /// # Example
    ///
    /// ```
    /// use geocodec_core::prelude::*;
    ///
    /// let bytes = Point::new(1.0, 2.0).to_twkb().unwrap();
    /// assert_eq!(bytes, [0xa1, 0x00, 0xc0, 0x9a, 0x0c, 0x80, 0xb5, 0x18]);
    /// ```
    fn to_twkb(&self) -> Result<Vec<u8>> {
        self.to_twkb_with(&TwkbOptions::default())
    }

    fn to_twkb_with(&self, options: &TwkbOptions) -> Result<Vec<u8>> {
        options.validate()?;
        let mut writer = BinaryWriter::growable(32);
        self.write_twkb(&mut writer, options)?;
        Ok(writer.into_inner())
    }
}

fn write_bbox<G: ToTwkb + ?Sized>(
    geometry: &G,
    writer: &mut BinaryWriter,
    options: &TwkbOptions,
) -> Result<()> {
    let dims = geometry.dimensions();
    let precisions = precisions(
        dims,
        i32::from(options.xy_precision),
        i32::from(options.z_precision),
        i32::from(options.m_precision),
    );
    let mut bounds = [(i64::MAX, i64::MIN); 4];
    let mut failure = None;
    geometry.for_each_coord(&mut |coord| {
        for (i, ordinate) in coord.ordinates(dims).enumerate() {
            match scale(ordinate, precisions[i]) {
                Ok(value) => {
                    bounds[i].0 = bounds[i].0.min(value);
                    bounds[i].1 = bounds[i].1.max(value);
                }
                Err(err) => failure = Some(err),
            }
        }
    });
    if let Some(err) = failure {
        return Err(err);
    }
    for &(min, max) in &bounds[..dims.count()] {
        // a collection of empty children has no extent
        let (min, max) = if min > max { (0, 0) } else { (min, max) };
        writer.write_var_int(zigzag::encode(min))?;
        writer.write_var_int(zigzag::encode(max.wrapping_sub(min)))?;
    }
    Ok(())
}

fn write_count(writer: &mut BinaryWriter, count: usize) -> Result<()> {
    writer.write_var_int(count as u64).map(|_| ())
}

impl ToTwkb for Point {
    fn write_twkb_body(
        &self,
        writer: &mut BinaryWriter,
        encoder: &mut DeltaEncoder,
        _options: &TwkbOptions,
    ) -> Result<()> {
        match &self.coord {
            Some(coord) => encoder.write_coord(writer, coord),
            None => Ok(()),
        }
    }

    fn for_each_coord(&self, f: &mut dyn FnMut(&Coord)) {
        self.coord.iter().for_each(f);
    }
}

impl ToTwkb for LineString {
    fn write_twkb_body(
        &self,
        writer: &mut BinaryWriter,
        encoder: &mut DeltaEncoder,
        _options: &TwkbOptions,
    ) -> Result<()> {
        encoder.write_coords(writer, &self.points)
    }

    fn for_each_coord(&self, f: &mut dyn FnMut(&Coord)) {
        self.points.iter().for_each(f);
    }
}

impl ToTwkb for Polygon {
    fn write_twkb_body(
        &self,
        writer: &mut BinaryWriter,
        encoder: &mut DeltaEncoder,
        _options: &TwkbOptions,
    ) -> Result<()> {
        let rings: Vec<&Vec<Coord>> = self.rings().collect();
        encoder.write_rings(writer, rings.into_iter())
    }

    fn for_each_coord(&self, f: &mut dyn FnMut(&Coord)) {
        self.rings().flatten().for_each(f);
    }
}

impl ToTwkb for MultiPoint {
    fn write_twkb_body(
        &self,
        writer: &mut BinaryWriter,
        encoder: &mut DeltaEncoder,
        _options: &TwkbOptions,
    ) -> Result<()> {
        write_count(writer, self.points.len())?;
        for point in &self.points {
            let coord = point.coord.as_ref().ok_or_else(|| {
                GeoCodecError::invalid("TWKB cannot encode an empty point inside a multipoint")
            })?;
            encoder.write_coord(writer, coord)?;
        }
        Ok(())
    }

    fn for_each_coord(&self, f: &mut dyn FnMut(&Coord)) {
        self.points.iter().for_each(|point| point.for_each_coord(f));
    }
}

impl ToTwkb for MultiLineString {
    fn write_twkb_body(
        &self,
        writer: &mut BinaryWriter,
        encoder: &mut DeltaEncoder,
        _options: &TwkbOptions,
    ) -> Result<()> {
        write_count(writer, self.line_strings.len())?;
        self.line_strings
            .iter()
            .try_for_each(|ls| encoder.write_coords(writer, &ls.points))
    }

    fn for_each_coord(&self, f: &mut dyn FnMut(&Coord)) {
        self.line_strings.iter().for_each(|ls| ls.for_each_coord(f));
    }
}

impl ToTwkb for MultiPolygon {
    fn write_twkb_body(
        &self,
        writer: &mut BinaryWriter,
        encoder: &mut DeltaEncoder,
        options: &TwkbOptions,
    ) -> Result<()> {
        write_count(writer, self.polygons.len())?;
        self.polygons
            .iter()
            .try_for_each(|polygon| polygon.write_twkb_body(writer, encoder, options))
    }

    fn for_each_coord(&self, f: &mut dyn FnMut(&Coord)) {
        self.polygons
            .iter()
            .for_each(|polygon| polygon.for_each_coord(f));
    }
}

impl ToTwkb for GeometryCollection {
    fn write_twkb_body(
        &self,
        writer: &mut BinaryWriter,
        _encoder: &mut DeltaEncoder,
        options: &TwkbOptions,
    ) -> Result<()> {
        write_count(writer, self.geometries.len())?;
        self.geometries
            .iter()
            .try_for_each(|child| child.write_twkb(writer, options))
    }

    fn for_each_coord(&self, f: &mut dyn FnMut(&Coord)) {
        self.geometries
            .iter()
            .for_each(|child| child.for_each_coord(f));
    }
}

// Triangle and Tin are rejected by `write_twkb` before any body is written.
impl ToTwkb for Triangle {
    fn write_twkb_body(
        &self,
        _writer: &mut BinaryWriter,
        _encoder: &mut DeltaEncoder,
        _options: &TwkbOptions,
    ) -> Result<()> {
        Err(GeoCodecError::unsupported(self.kind()))
    }

    fn for_each_coord(&self, f: &mut dyn FnMut(&Coord)) {
        self.exterior_ring.iter().for_each(f);
    }
}

impl ToTwkb for Tin {
    fn write_twkb_body(
        &self,
        _writer: &mut BinaryWriter,
        _encoder: &mut DeltaEncoder,
        _options: &TwkbOptions,
    ) -> Result<()> {
        Err(GeoCodecError::unsupported(self.kind()))
    }

    fn for_each_coord(&self, f: &mut dyn FnMut(&Coord)) {
        self.triangles
            .iter()
            .for_each(|triangle| triangle.for_each_coord(f));
    }
}

impl ToTwkb for Geometry {
    fn write_twkb_body(
        &self,
        writer: &mut BinaryWriter,
        encoder: &mut DeltaEncoder,
        options: &TwkbOptions,
    ) -> Result<()> {
        dispatch!(self, g => g.write_twkb_body(writer, encoder, options))
    }

    fn for_each_coord(&self, f: &mut dyn FnMut(&Coord)) {
        dispatch!(self, g => g.for_each_coord(f))
    }
}

/// Running delta state while one geometry's coordinates are read.
struct DeltaDecoder {
    dims: Dimensions,
    precisions: Vec<i32>,
    last: [i64; 4],
}

impl DeltaDecoder {
    fn read_coord(&mut self, reader: &mut BinaryReader<'_>) -> Result<Coord> {
        let count = self.dims.count();
        let mut ordinates = [0.0; 4];
        for i in 0..count {
            let delta = zigzag::decode(reader.read_var_int()?);
            self.last[i] = self.last[i].wrapping_add(delta);
            ordinates[i] = unscale(self.last[i], self.precisions[i]);
        }
        Ok(Coord::from_ordinates(&ordinates[..count], self.dims))
    }

    fn read_coords(&mut self, reader: &mut BinaryReader<'_>) -> Result<Vec<Coord>> {
        let count = read_count(reader, self.dims.count())?;
        (0..count).map(|_| self.read_coord(reader)).collect()
    }

    fn read_rings(&mut self, reader: &mut BinaryReader<'_>) -> Result<Vec<Vec<Coord>>> {
        let count = read_count(reader, 1)?;
        (0..count).map(|_| self.read_coords(reader)).collect()
    }

    fn read_polygon(&mut self, reader: &mut BinaryReader<'_>, header: Header) -> Result<Polygon> {
        let mut rings = self.read_rings(reader)?.into_iter();
        Ok(Polygon {
            header,
            exterior_ring: rings.next().unwrap_or_default(),
            interior_rings: rings.collect(),
        })
    }
}

/// A varint element count, each element taking at least `min_element_size`
/// bytes.
fn read_count(reader: &mut BinaryReader<'_>, min_element_size: usize) -> Result<usize> {
    let count = reader.read_var_int()?;
    reader.checked_count(count, min_element_size)
}

fn skip_id_list(reader: &mut BinaryReader<'_>, count: usize) -> Result<()> {
    for _ in 0..count {
        reader.read_var_int()?;
    }
    Ok(())
}

fn read_geometry(reader: &mut BinaryReader<'_>, depth: usize) -> Result<Geometry> {
    check_depth(depth)?;
    let type_byte = reader.read_u8()?;
    let code = type_byte & 0x0f;
    let xy_precision = zigzag::decode(u64::from(type_byte >> 4)) as i32;
    let kind = GeometryKind::from_twkb_code(code).ok_or_else(|| {
        debug!("rejecting unsupported TWKB geometry type {code}");
        GeoCodecError::unsupported(code)
    })?;

    let metadata = reader.read_u8()?;
    let (dims, z_precision, m_precision) = if metadata & FLAG_EXTENDED != 0 {
        let extended = reader.read_u8()?;
        (
            Dimensions::new(extended & 0x01 != 0, extended & 0x02 != 0),
            i32::from(extended >> 2 & 0x07),
            i32::from(extended >> 5 & 0x07),
        )
    } else {
        (Dimensions::XY, 0, 0)
    };
    let declared_end = if metadata & FLAG_SIZE != 0 {
        let size = reader.read_var_int()?;
        Some((reader.position() as u64).saturating_add(size))
    } else {
        None
    };
    if metadata & FLAG_BBOX != 0 {
        for _ in 0..dims.count() * 2 {
            reader.read_var_int()?;
        }
    }

    let header = Header::new(0, dims);
    if metadata & FLAG_EMPTY != 0 {
        return Ok(Geometry::empty(kind, header));
    }

    let has_ids = metadata & FLAG_ID_LIST != 0;
    let mut decoder = DeltaDecoder {
        dims,
        precisions: precisions(dims, xy_precision, z_precision, m_precision),
        last: [0; 4],
    };
    let geometry = match kind {
        GeometryKind::Point => Geometry::Point(Point {
            header,
            coord: Some(decoder.read_coord(reader)?),
        }),
        GeometryKind::LineString => Geometry::LineString(LineString {
            header,
            points: decoder.read_coords(reader)?,
        }),
        GeometryKind::Polygon => Geometry::Polygon(decoder.read_polygon(reader, header)?),
        GeometryKind::MultiPoint => {
            let count = read_count(reader, dims.count())?;
            if has_ids {
                skip_id_list(reader, count)?;
            }
            let points = (0..count)
                .map(|_| {
                    Ok(Point {
                        header,
                        coord: Some(decoder.read_coord(reader)?),
                    })
                })
                .collect::<Result<_>>()?;
            Geometry::MultiPoint(MultiPoint { header, points })
        }
        GeometryKind::MultiLineString => {
            let count = read_count(reader, 1)?;
            if has_ids {
                skip_id_list(reader, count)?;
            }
            let line_strings = (0..count)
                .map(|_| {
                    Ok(LineString {
                        header,
                        points: decoder.read_coords(reader)?,
                    })
                })
                .collect::<Result<_>>()?;
            Geometry::MultiLineString(MultiLineString {
                header,
                line_strings,
            })
        }
        GeometryKind::MultiPolygon => {
            let count = read_count(reader, 1)?;
            if has_ids {
                skip_id_list(reader, count)?;
            }
            let polygons = (0..count)
                .map(|_| decoder.read_polygon(reader, header))
                .collect::<Result<_>>()?;
            Geometry::MultiPolygon(MultiPolygon { header, polygons })
        }
        GeometryKind::GeometryCollection => {
            let count = read_count(reader, 2)?;
            if has_ids {
                skip_id_list(reader, count)?;
            }
            let geometries = (0..count)
                .map(|_| {
                    let child = read_geometry(reader, depth + 1)?;
                    check_child_dimensions(dims, &child, reader.position())?;
                    Ok(child)
                })
                .collect::<Result<_>>()?;
            Geometry::GeometryCollection(GeometryCollection { header, geometries })
        }
        GeometryKind::Triangle | GeometryKind::Tin => {
            return Err(GeoCodecError::unsupported(code));
        }
    };

    if let Some(end) = declared_end {
        if end != reader.position() as u64 {
            debug!(
                "TWKB size attribute ends at byte {end}, body ended at byte {}",
                reader.position()
            );
        }
    }
    Ok(geometry)
}

/// Parse one TWKB geometry. Bytes after it are ignored.
pub(crate) fn parse(bytes: &[u8]) -> Result<Geometry> {
    trace!("parsing {} bytes of TWKB", bytes.len());
    let mut reader = BinaryReader::new(bytes);
    read_geometry(&mut reader, 0)
}
