//! Fixed-width big-endian integer conversion
//!
//! Key material arrives as big-endian integer byte strings of uneven
//! length: a value may carry a leading zero sign byte (33 bytes for a
//! 256-bit integer whose high bit is set), be exactly the target width, or
//! be shorter than the target width. The curve service wants exactly-W-byte
//! encodings, so one conversion rule is applied everywhere:
//!
//! - W+1 bytes with a leading zero: drop the sign byte
//! - exactly W bytes: use as-is
//! - fewer than W bytes: left-pad with zeros
//!
//! Anything else cannot represent a value below 2^(8·W) and is rejected.

use super::error::Sm2Error;

/// Width of a curve coordinate or private scalar in bytes.
pub const SCALAR_LEN: usize = 32;

/// Convert a big-endian integer byte string to exactly `width` bytes.
///
/// # Errors
///
/// `Format` if the value does not fit in `width` bytes.
pub fn to_fixed_width(bytes: &[u8], width: usize) -> Result<Vec<u8>, Sm2Error> {
    if bytes.len() == width + 1 && bytes[0] == 0 {
        return Ok(bytes[1..].to_vec());
    }
    if bytes.len() == width {
        return Ok(bytes.to_vec());
    }
    if bytes.len() < width {
        let mut out = vec![0u8; width];
        out[width - bytes.len()..].copy_from_slice(bytes);
        return Ok(out);
    }
    Err(Sm2Error::Format {
        reason: format!("integer of {} bytes does not fit in {} bytes", bytes.len(), width),
    })
}

/// Convert a big-endian integer byte string to a 32-byte array.
///
/// # Errors
///
/// `Format` if the value does not fit in 32 bytes.
pub fn to_scalar_bytes(bytes: &[u8]) -> Result<[u8; SCALAR_LEN], Sm2Error> {
    let mut out = [0u8; SCALAR_LEN];
    out.copy_from_slice(&to_fixed_width(bytes, SCALAR_LEN)?);
    Ok(out)
}
