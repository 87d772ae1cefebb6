//! Key pair generation and public-key normalization
//!
//! Key material is exchanged as hex: the public key as an uncompressed
//! SEC1 point (130 hex characters), the private key as a 32-byte
//! big-endian scalar (64 hex characters).
//!
//! Peers sometimes strip the constant framing from a public key and ship
//! only the raw coordinate bytes. [`NormalizeRule`] captures that framing
//! as data (a bare width plus a constant prefix) so a stripped key can be
//! rebuilt before decoding, and new framings need a rule value rather
//! than new code.

use zeroize::Zeroize;

use super::{
    convert::SCALAR_LEN,
    curve,
    envelope::POINT_LEN,
    error::Sm2Error,
};

/// Framing rule for a transmitted public key: a key of `bare_len` bytes
/// is completed by prepending `prefix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeRule {
    /// Length of a key with the framing stripped
    pub bare_len: usize,
    /// Constant bytes to restore in front of a bare key
    pub prefix: &'static [u8],
}

impl NormalizeRule {
    /// Uncompressed SEC1 framing: 64 coordinate bytes behind an `0x04` tag.
    pub const SEC1_UNCOMPRESSED: Self = Self { bare_len: 64, prefix: &[0x04] };

    /// Length of a fully framed key under this rule.
    pub const fn full_len(&self) -> usize {
        self.bare_len + self.prefix.len()
    }
}

/// Restore a public key's constant framing if the sender stripped it.
///
/// A key already at full width passes through unchanged; a bare key gets
/// the rule's prefix prepended.
///
/// # Errors
///
/// `Format` if the key matches neither length.
pub fn normalize_public_point(bytes: &[u8], rule: &NormalizeRule) -> Result<Vec<u8>, Sm2Error> {
    if bytes.len() == rule.full_len() {
        return Ok(bytes.to_vec());
    }
    if bytes.len() == rule.bare_len {
        let mut out = Vec::with_capacity(rule.full_len());
        out.extend_from_slice(rule.prefix);
        out.extend_from_slice(bytes);
        return Ok(out);
    }
    Err(Sm2Error::Format {
        reason: format!(
            "public key of {} bytes matches neither the bare ({}) nor full ({}) width",
            bytes.len(),
            rule.bare_len,
            rule.full_len()
        ),
    })
}

/// A generated SM2 key pair.
///
/// The private scalar is wiped on drop.
pub struct KeyPair {
    public_key: [u8; POINT_LEN],
    private_key: [u8; SCALAR_LEN],
}

impl KeyPair {
    /// Generate a fresh key pair from the OS random source.
    ///
    /// # Errors
    ///
    /// `Randomness` if the OS random source fails.
    pub fn generate() -> Result<Self, Sm2Error> {
        let private = curve::random_scalar()?;
        let public_key = curve::encode_point(&curve::mul_generator(&private))?;
        Ok(Self { public_key, private_key: curve::scalar_to_be_bytes(&private) })
    }

    /// Public key as an uncompressed SEC1 point.
    pub fn public_key(&self) -> &[u8; POINT_LEN] {
        &self.public_key
    }

    /// Private scalar as 32 big-endian bytes.
    pub fn private_key(&self) -> &[u8; SCALAR_LEN] {
        &self.private_key
    }

    /// Public key as 130 uppercase hex characters.
    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(self.public_key)
    }

    /// Private key as 64 uppercase hex characters.
    pub fn private_key_hex(&self) -> String {
        hex::encode_upper(self.private_key)
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}
