//! Minimal PNG writer: 8-bit RGBA, no interlacing, filter type 0 on every row,
//! a single zlib-compressed IDAT chunk.

use crate::error::EncodeError;
use flate2::{write::ZlibEncoder, Compression, Crc};
use std::io::Write;

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const BYTES_PER_PIXEL: usize = 4;
const MAX_DIMENSION: u32 = i32::MAX as u32;

/// A single length-tag-payload-CRC block of a PNG stream.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub tag: [u8; 4],
    pub payload: Vec<u8>,
}

impl Chunk {
    pub fn new(tag: &[u8; 4], payload: Vec<u8>) -> Self {
        Self { tag: *tag, payload }
    }

    /// CRC32 over the tag followed by the payload.
    pub fn crc(&self) -> u32 {
        let mut crc = Crc::new();
        crc.update(&self.tag);
        crc.update(&self.payload);
        crc.sum()
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        // payload length is bounded by the compressed image size, well under u32::MAX
        out.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.crc().to_be_bytes());
    }
}

fn header_chunk(width: u32, height: u32) -> Chunk {
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    // bit depth, color type, compression, filter, interlace
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGBA, 0, 0, 0]);
    Chunk::new(b"IHDR", ihdr)
}

fn check_dimensions(width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::EmptyImage { width, height });
    }
    for dimension in [width, height] {
        if dimension > MAX_DIMENSION {
            return Err(EncodeError::DimensionTooLarge(dimension));
        }
    }
    Ok(())
}

/// Prefix every row with filter type 0 and concatenate them.
fn filter_rows<R: AsRef<[u8]>>(width: u32, height: u32, rows: &[R]) -> Result<Vec<u8>, EncodeError> {
    let expected_rows = height as usize;
    if rows.len() != expected_rows {
        return Err(EncodeError::RowCount {
            expected: expected_rows,
            actual: rows.len(),
        });
    }

    let stride = width as usize * BYTES_PER_PIXEL;
    let mut raw = Vec::with_capacity(expected_rows * (stride + 1));
    for (index, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != stride {
            return Err(EncodeError::RowLength {
                row: index,
                expected: stride,
                actual: row.len(),
            });
        }
        raw.push(0);
        raw.extend_from_slice(row);
    }
    Ok(raw)
}

fn compress(raw: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// Encode `height` RGBA scanlines of `4 * width` bytes each into a PNG file image.
pub fn encode<R: AsRef<[u8]>>(width: u32, height: u32, rows: &[R]) -> Result<Vec<u8>, EncodeError> {
    check_dimensions(width, height)?;
    let raw = filter_rows(width, height, rows)?;
    let compressed = compress(&raw)?;
    log::trace!(
        "encoded {}x{} image: {} raw bytes, {} compressed",
        width,
        height,
        raw.len(),
        compressed.len()
    );

    let chunks = [
        header_chunk(width, height),
        Chunk::new(b"IDAT", compressed),
        Chunk::new(b"IEND", Vec::new()),
    ];
    Ok(chunks.iter().fold(SIGNATURE.to_vec(), |mut png, chunk| {
        chunk.write_to(&mut png);
        png
    }))
}
