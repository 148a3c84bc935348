//! Snappy block format: one varint header carrying the uncompressed length,
//! followed by a single compressed block.
use snap::raw::{Decoder, Encoder};
use snap::{Error, Result};

/// Compress `input` into a freshly allocated buffer.
#[inline(always)]
pub fn compress_vec(input: &[u8]) -> Result<Vec<u8>> {
    Encoder::new().compress_vec(input)
}

/// Compress `input` into `output`, returning the number of bytes written.
///
/// `output` must hold at least `max_compress_len(input.len())` bytes.
#[inline(always)]
pub fn compress(input: &[u8], output: &mut [u8]) -> Result<usize> {
    Encoder::new().compress(input, output)
}

/// Decompress a block into a freshly allocated buffer.
#[inline(always)]
pub fn decompress_vec(input: &[u8]) -> Result<Vec<u8>> {
    Decoder::new().decompress_vec(input)
}

/// Decompress a block into `output`, returning the number of bytes written.
///
/// `output` must hold at least `decompress_len(input)` bytes.
#[inline(always)]
pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize> {
    Decoder::new().decompress(input, output)
}

/// Worst-case compressed size for an input of `input_len` bytes, independent
/// of the input's content.
///
/// Returns 0 if `input_len` is past the format's 2^32 - 1 byte ceiling.
#[inline(always)]
pub fn max_compress_len(input_len: usize) -> usize {
    snap::raw::max_compress_len(input_len)
}

/// Read the uncompressed length out of a block's varint header without
/// decompressing the body.
///
/// An empty buffer has no header and is rejected as [`Error::Empty`].
pub fn decompress_len(input: &[u8]) -> Result<usize> {
    if input.is_empty() {
        return Err(Error::Empty);
    }
    snap::raw::decompress_len(input)
}

/// Report whether `input` is a structurally valid snappy block.
///
/// `snap` exposes no walk-only validator, so this decodes the whole block
/// into a scratch buffer sized from the header. Any input rejected by
/// [`decompress_len`] is reported invalid here as well.
pub fn validate(input: &[u8]) -> bool {
    match decompress_len(input) {
        Ok(len) => {
            let mut scratch = vec![0; len];
            decompress(input, &mut scratch).is_ok()
        }
        Err(_) => false,
    }
}
