//! Top-level encrypt/decrypt orchestration
//!
//! Wires the pieces together for the common one-shot case: hex key in,
//! hex envelope out (and back). Chunked processing is available by using
//! [`CipherSession`] and [`Envelope`] directly.
//!
//! Decryption verifies the C3 tag and refuses to release plaintext on a
//! mismatch. Every failure path reports a typed [`Sm2Error`]; no
//! operation returns partial or unauthenticated output.

use tracing::{debug, warn};
use zeroize::Zeroize;

use super::{
    cipher::CipherSession,
    envelope::Envelope,
    error::Sm2Error,
    keypair::{NormalizeRule, normalize_public_point},
};

/// Encrypt a message to a public key, producing a C1‖C2‖C3 hex envelope.
///
/// The public key is hex, either a full uncompressed SEC1 point (130
/// characters) or the bare coordinates with the tag byte stripped (128
/// characters).
///
/// # Errors
///
/// `Format` for malformed key hex, `Curve` if the key is not a valid
/// curve point, `Randomness` if the OS random source fails.
pub fn encrypt(public_key_hex: &str, plaintext: &[u8]) -> Result<String, Sm2Error> {
    let key_bytes = hex::decode(public_key_hex)
        .map_err(|err| Sm2Error::Format { reason: format!("bad hex in public key: {err}") })?;
    let normalized = normalize_public_point(&key_bytes, &NormalizeRule::SEC1_UNCOMPRESSED)?;

    let (mut session, point) = CipherSession::init_encrypt(&normalized)?;
    let mut payload = plaintext.to_vec();
    session.transform(&mut payload)?;
    let tag = session.finalize()?;

    debug!(payload_len = plaintext.len(), "message encrypted");
    Ok(Envelope { point, payload, tag }.encode())
}

/// Decrypt a C1‖C2‖C3 hex envelope with a private key, verifying the
/// integrity tag before releasing the plaintext.
///
/// The private key is the scalar as 64 hex characters; a leading zero
/// sign byte (66 characters) is tolerated.
///
/// # Errors
///
/// `Format` for malformed hex or a truncated envelope, `Curve` for an
/// invalid key or C1 point, `IntegrityMismatch` if the recomputed tag
/// differs from the envelope's.
pub fn decrypt(private_key_hex: &str, ciphertext_hex: &str) -> Result<Vec<u8>, Sm2Error> {
    let mut key_bytes = hex::decode(private_key_hex)
        .map_err(|err| Sm2Error::Format { reason: format!("bad hex in private key: {err}") })?;

    let envelope = Envelope::decode(ciphertext_hex)?;
    let session = CipherSession::init_decrypt(&key_bytes, &envelope.point);
    key_bytes.zeroize();
    let mut session = session?;
    let mut payload = envelope.payload;
    session.transform(&mut payload)?;
    let tag = session.finalize()?;

    if tag != envelope.tag {
        warn!("envelope integrity tag mismatch");
        payload.zeroize();
        return Err(Sm2Error::IntegrityMismatch);
    }

    debug!(payload_len = payload.len(), "message decrypted");
    Ok(payload)
}
