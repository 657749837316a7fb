use thiserror::Error;

/// Caller-contract violations detected while encoding a PNG.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("image dimension {0} exceeds the PNG limit of 2^31-1")]
    DimensionTooLarge(u32),

    #[error("expected {expected} scanlines, got {actual}")]
    RowCount { expected: usize, actual: usize },

    #[error("scanline {row} is {actual} bytes long, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("failed to compress image data")]
    Compress(#[from] std::io::Error),
}
