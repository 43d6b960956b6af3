//! Binary interchange codec for paths.
//!
//! Bit-exact stream layout: a header of {storage-kind byte, segment count
//! as a big-endian i32 (or −1 for "read until terminator"), coordinate
//! count as a big-endian i32 (or −1), winding-rule byte}, followed by one
//! record per segment — a tag byte and that segment's coordinate pairs as
//! big-endian doubles — and a final end marker.

use std::io::{Read, Write};

use tracing::debug;

use crate::error::StreamError;
use crate::path::{Path, SegmentType, WindingRule, INIT_SIZE};

/// Storage hint: coordinates were held as floats.
pub const SERIAL_STORAGE_FLT_ARRAY: u8 = 0x30;
/// Storage hint: coordinates were held as doubles.
pub const SERIAL_STORAGE_DBL_ARRAY: u8 = 0x31;

const SERIAL_SEG_FLT_MOVETO: u8 = 0x40;
const SERIAL_SEG_FLT_LINETO: u8 = 0x41;
const SERIAL_SEG_FLT_QUADTO: u8 = 0x42;
const SERIAL_SEG_FLT_CUBICTO: u8 = 0x43;

/// Record tag: move segment, two doubles follow.
pub const SERIAL_SEG_DBL_MOVETO: u8 = 0x50;
/// Record tag: line segment, two doubles follow.
pub const SERIAL_SEG_DBL_LINETO: u8 = 0x51;
/// Record tag: quadratic segment, four doubles follow.
pub const SERIAL_SEG_DBL_QUADTO: u8 = 0x52;
/// Record tag: cubic segment, six doubles follow.
pub const SERIAL_SEG_DBL_CUBICTO: u8 = 0x53;
/// Record tag: close segment, no payload.
pub const SERIAL_SEG_CLOSE: u8 = 0x60;
/// End-of-path marker.
pub const SERIAL_PATH_END: u8 = 0x61;

/// Serialize `path` to the interchange format.
///
/// The header always declares double storage and carries the exact
/// segment and coordinate counts.
pub fn write_path<W: Write>(path: &Path, w: &mut W) -> Result<(), StreamError> {
    let num_types = i32::try_from(path.num_segments())
        .map_err(|_| StreamError::Corrupt("segment count exceeds interchange header range".into()))?;
    let num_coords = i32::try_from(path.num_coords())
        .map_err(|_| StreamError::Corrupt("coordinate count exceeds interchange header range".into()))?;

    w.write_all(&[SERIAL_STORAGE_DBL_ARRAY])?;
    w.write_all(&num_types.to_be_bytes())?;
    w.write_all(&num_coords.to_be_bytes())?;
    w.write_all(&[path.winding_rule().as_byte()])?;

    let mut cindex = 0;
    for &ty in path.segment_types() {
        let tag = match ty {
            SegmentType::MoveTo => SERIAL_SEG_DBL_MOVETO,
            SegmentType::LineTo => SERIAL_SEG_DBL_LINETO,
            SegmentType::QuadTo => SERIAL_SEG_DBL_QUADTO,
            SegmentType::CubicTo => SERIAL_SEG_DBL_CUBICTO,
            SegmentType::Close => SERIAL_SEG_CLOSE,
        };
        w.write_all(&[tag])?;
        for &c in &path.coords()[cindex..cindex + ty.num_coords()] {
            w.write_all(&c.to_be_bytes())?;
        }
        cindex += ty.num_coords();
    }
    w.write_all(&[SERIAL_PATH_END])?;
    Ok(())
}

/// Deserialize a path from the interchange format.
///
/// The storage-kind byte is a hint and is ignored; both double-payload
/// (0x50–0x53) and float-payload (0x40–0x43) record tags are accepted,
/// float payloads being widened to doubles. A negative segment count in
/// the header means "read records until the end marker". Unrecognized
/// tags, a premature or missing end marker, an invalid winding-rule byte,
/// and a leading drawing record are all reported as stream corruption.
pub fn read_path<R: Read>(r: &mut R) -> Result<Path, StreamError> {
    read_u8(r)?; // storage hint
    let num_types = read_i32(r)?;
    let num_coords = read_i32(r)?;
    let rule = WindingRule::from_byte(read_u8(r)?)?;

    // Pre-size from the header only within the default capacity, so a
    // hostile header cannot trigger a huge allocation up front.
    let type_cap = if num_types < 0 || num_types as usize > INIT_SIZE {
        INIT_SIZE
    } else {
        num_types as usize
    };
    let coord_cap = if num_coords < 0 || num_coords as usize > INIT_SIZE * 2 {
        INIT_SIZE * 2
    } else {
        num_coords as usize
    };
    let mut path = Path::with_raw_capacity(rule, type_cap, coord_cap);

    let mut coords = [0.0f64; 6];
    let mut i = 0;
    while num_types < 0 || i < num_types {
        let tag = read_u8(r)?;
        let (is_dbl, ty) = match tag {
            SERIAL_SEG_FLT_MOVETO => (false, SegmentType::MoveTo),
            SERIAL_SEG_FLT_LINETO => (false, SegmentType::LineTo),
            SERIAL_SEG_FLT_QUADTO => (false, SegmentType::QuadTo),
            SERIAL_SEG_FLT_CUBICTO => (false, SegmentType::CubicTo),
            SERIAL_SEG_DBL_MOVETO => (true, SegmentType::MoveTo),
            SERIAL_SEG_DBL_LINETO => (true, SegmentType::LineTo),
            SERIAL_SEG_DBL_QUADTO => (true, SegmentType::QuadTo),
            SERIAL_SEG_DBL_CUBICTO => (true, SegmentType::CubicTo),
            SERIAL_SEG_CLOSE => (false, SegmentType::Close),
            SERIAL_PATH_END => {
                if num_types < 0 {
                    break;
                }
                return Err(StreamError::Corrupt("unexpected PATH_END".into()));
            }
            _ => {
                return Err(StreamError::Corrupt(format!(
                    "unrecognized path segment type 0x{tag:02x}"
                )));
            }
        };
        let n = ty.num_coords();
        for c in coords.iter_mut().take(n) {
            *c = if is_dbl {
                read_f64(r)?
            } else {
                read_f32(r)? as f64
            };
        }
        path.push_raw(ty, &coords[..n])?;
        i += 1;
    }
    if num_types >= 0 && read_u8(r)? != SERIAL_PATH_END {
        return Err(StreamError::Corrupt("missing PATH_END".into()));
    }

    debug!(
        segments = path.num_segments(),
        coords = path.num_coords(),
        "read path from stream"
    );
    Ok(path)
}

fn read_u8<R: Read>(r: &mut R) -> Result<u8, StreamError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_i32<R: Read>(r: &mut R) -> Result<i32, StreamError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_be_bytes(buf))
}

fn read_f32<R: Read>(r: &mut R) -> Result<f32, StreamError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(f32::from_be_bytes(buf))
}

fn read_f64<R: Read>(r: &mut R) -> Result<f64, StreamError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_be_bytes(buf))
}
