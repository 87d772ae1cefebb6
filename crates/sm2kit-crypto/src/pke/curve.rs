//! Adapter over the external curve service (RustCrypto `sm2`)
//!
//! Point decode/encode, scalar multiplication, and scalar generation are
//! consumed as black boxes; this module pins down the exact contract the
//! rest of the crate relies on and maps library failures onto [`Sm2Error`].

use rand_core::{OsRng, RngCore};
use sm2::{
    AffinePoint, EncodedPoint, FieldBytes, NonZeroScalar, ProjectivePoint,
    elliptic_curve::{
        Group, PrimeField,
        sec1::{FromEncodedPoint, ToEncodedPoint},
    },
};

use super::{
    convert,
    convert::SCALAR_LEN,
    envelope::POINT_LEN,
    error::Sm2Error,
};

/// Scalar rejection sampling bound. A uniformly random 32-byte string is a
/// valid non-zero scalar with overwhelming probability, so more than a
/// couple of iterations means the random source is broken.
const RANDOM_SCALAR_ATTEMPTS: usize = 8;

/// Decode a SEC1-encoded point and verify it lies on the curve.
pub(crate) fn decode_point(bytes: &[u8]) -> Result<AffinePoint, Sm2Error> {
    let encoded = EncodedPoint::from_bytes(bytes)
        .map_err(|err| Sm2Error::Curve { reason: format!("point decode failed: {err}") })?;
    if encoded.is_identity() {
        return Err(Sm2Error::Curve { reason: "point is the identity".to_string() });
    }
    Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
        .ok_or_else(|| Sm2Error::Curve { reason: "point is not on the curve".to_string() })
}

/// Encode a point in uncompressed SEC1 form (65 bytes).
pub(crate) fn encode_point(point: &AffinePoint) -> Result<[u8; POINT_LEN], Sm2Error> {
    let encoded = point.to_encoded_point(false);
    let bytes = encoded.as_bytes();
    if bytes.len() != POINT_LEN {
        return Err(Sm2Error::Curve {
            reason: "the identity point has no uncompressed encoding".to_string(),
        });
    }
    let mut out = [0u8; POINT_LEN];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Affine coordinates of a point as fixed 32-byte big-endian integers.
pub(crate) fn coordinates(
    point: &AffinePoint,
) -> Result<([u8; SCALAR_LEN], [u8; SCALAR_LEN]), Sm2Error> {
    let encoded = point.to_encoded_point(false);
    let x = encoded
        .x()
        .ok_or_else(|| Sm2Error::Curve { reason: "point has no x coordinate".to_string() })?;
    let y = encoded
        .y()
        .ok_or_else(|| Sm2Error::Curve { reason: "point has no y coordinate".to_string() })?;
    Ok((convert::to_scalar_bytes(x)?, convert::to_scalar_bytes(y)?))
}

/// Scalar-multiply a point, rejecting a result at infinity.
pub(crate) fn multiply(
    point: &AffinePoint,
    scalar: &NonZeroScalar,
) -> Result<AffinePoint, Sm2Error> {
    let product = ProjectivePoint::from(*point) * scalar.as_ref();
    if bool::from(product.is_identity()) {
        return Err(Sm2Error::Curve {
            reason: "scalar multiple is the point at infinity".to_string(),
        });
    }
    Ok(product.to_affine())
}

/// Multiply the curve generator by a non-zero scalar.
pub(crate) fn mul_generator(scalar: &NonZeroScalar) -> AffinePoint {
    (ProjectivePoint::generator() * scalar.as_ref()).to_affine()
}

/// Draw a uniformly random non-zero scalar from the process-wide OS random
/// source. Rejection-sampled; the source is shared between sessions and
/// safe for concurrent use.
pub(crate) fn random_scalar() -> Result<NonZeroScalar, Sm2Error> {
    for _ in 0..RANDOM_SCALAR_ATTEMPTS {
        let mut bytes = FieldBytes::default();
        OsRng.try_fill_bytes(&mut bytes).map_err(|_| Sm2Error::Randomness)?;
        if let Some(scalar) = Option::<NonZeroScalar>::from(NonZeroScalar::from_repr(bytes)) {
            return Ok(scalar);
        }
    }
    Err(Sm2Error::Randomness)
}

/// Parse a private scalar from a big-endian integer byte string, applying
/// the fixed-width conversion rule (sign-byte drop / zero padding).
pub(crate) fn scalar_from_be_bytes(bytes: &[u8]) -> Result<NonZeroScalar, Sm2Error> {
    let fixed = convert::to_scalar_bytes(bytes)?;
    Option::<NonZeroScalar>::from(NonZeroScalar::from_repr(fixed.into())).ok_or_else(|| {
        Sm2Error::Curve { reason: "private scalar is zero or out of range".to_string() }
    })
}

/// Fixed 32-byte big-endian encoding of a scalar.
pub(crate) fn scalar_to_be_bytes(scalar: &NonZeroScalar) -> [u8; SCALAR_LEN] {
    scalar.as_ref().to_repr().into()
}
