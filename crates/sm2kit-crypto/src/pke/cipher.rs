//! Stateful SM2 cipher session
//!
//! A session owns everything derived from one key agreement: the shared
//! point's coordinates, the keystream position, and the running integrity
//! digest. Encrypt and decrypt sides run the same machinery; the only
//! asymmetry is whether the integrity digest is fed before or after the
//! XOR, so that both sides hash the plaintext.
//!
//! The tag binds the shared point to the message: the digest is seeded
//! with x₂ at construction, absorbs the plaintext during [`transform`],
//! and absorbs y₂ at [`finalize`], yielding `SM3(x₂ ‖ M ‖ y₂)`.
//!
//! Sessions are single-shot. Calling [`transform`] or [`finalize`] on a
//! finalized session is a caller bug and reports [`Sm2Error::State`];
//! [`reset`] rewinds the session for another message under the same
//! shared point.
//!
//! [`transform`]: CipherSession::transform
//! [`finalize`]: CipherSession::finalize
//! [`reset`]: CipherSession::reset

use sm2::AffinePoint;
use sm3::{Digest, Sm3};
use zeroize::Zeroize;

use super::{
    convert::SCALAR_LEN,
    curve,
    envelope::{POINT_LEN, TAG_LEN},
    error::Sm2Error,
    kdf::KeyStream,
};

/// Which side of the exchange this session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Encrypt,
    Decrypt,
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Ready,
    Finalized,
}

/// One SM2 encryption or decryption session.
pub struct CipherSession {
    mode: Mode,
    state: SessionState,
    shared_x: [u8; SCALAR_LEN],
    shared_y: [u8; SCALAR_LEN],
    keystream: KeyStream,
    tag_digest: Sm3,
}

impl CipherSession {
    fn new(mode: Mode, shared: &AffinePoint) -> Result<Self, Sm2Error> {
        let (shared_x, shared_y) = curve::coordinates(shared)?;
        let keystream = KeyStream::new(&shared_x, &shared_y);
        let mut tag_digest = Sm3::new();
        Digest::update(&mut tag_digest, shared_x);
        Ok(Self { mode, state: SessionState::Ready, shared_x, shared_y, keystream, tag_digest })
    }

    /// Start an encryption session against a recipient's public key
    /// (uncompressed SEC1 point bytes).
    ///
    /// Draws a fresh ephemeral scalar, computes the shared point, and
    /// returns the session together with the uncompressed SEC1 encoding
    /// of the ephemeral public point (the envelope's C1 field).
    ///
    /// # Errors
    ///
    /// `Curve` if the key is not a valid curve point or the shared point
    /// degenerates to the identity; `Randomness` if the OS random source
    /// fails.
    pub fn init_encrypt(public_key: &[u8]) -> Result<(Self, [u8; POINT_LEN]), Sm2Error> {
        let public = curve::decode_point(public_key)?;
        let ephemeral = curve::random_scalar()?;
        let ephemeral_point = curve::mul_generator(&ephemeral);
        let shared = curve::multiply(&public, &ephemeral)?;
        let session = Self::new(Mode::Encrypt, &shared)?;
        Ok((session, curve::encode_point(&ephemeral_point)?))
    }

    /// Start a decryption session from a private scalar (big-endian
    /// bytes) and the sender's ephemeral point (the envelope's C1 field).
    ///
    /// # Errors
    ///
    /// `Format` if the scalar bytes are oversized; `Curve` if the scalar
    /// is out of range, the point is invalid, or the shared point
    /// degenerates to the identity.
    pub fn init_decrypt(private_key: &[u8], ephemeral_point: &[u8]) -> Result<Self, Sm2Error> {
        let private = curve::scalar_from_be_bytes(private_key)?;
        let ephemeral = curve::decode_point(ephemeral_point)?;
        let shared = curve::multiply(&ephemeral, &private)?;
        Self::new(Mode::Decrypt, &shared)
    }

    /// XOR the keystream through `data` in place, feeding the plaintext
    /// side into the integrity digest.
    ///
    /// May be called repeatedly to process a message in chunks.
    ///
    /// # Errors
    ///
    /// `State` if the session has been finalized.
    pub fn transform(&mut self, data: &mut [u8]) -> Result<(), Sm2Error> {
        if self.state == SessionState::Finalized {
            return Err(Sm2Error::State { operation: "transform", state: "finalized" });
        }
        match self.mode {
            Mode::Encrypt => {
                // Data is plaintext going in
                Digest::update(&mut self.tag_digest, &*data);
                self.keystream.xor_in_place(data);
            }
            Mode::Decrypt => {
                // Data is plaintext coming out
                self.keystream.xor_in_place(data);
                Digest::update(&mut self.tag_digest, &*data);
            }
        }
        Ok(())
    }

    /// Complete the integrity digest and return the C3 tag.
    ///
    /// # Errors
    ///
    /// `State` if the session has already been finalized.
    pub fn finalize(&mut self) -> Result<[u8; TAG_LEN], Sm2Error> {
        if self.state == SessionState::Finalized {
            return Err(Sm2Error::State { operation: "finalize", state: "finalized" });
        }
        Digest::update(&mut self.tag_digest, self.shared_y);
        self.state = SessionState::Finalized;
        Ok(self.tag_digest.finalize_reset().into())
    }

    /// Rewind the session for another message under the same shared point:
    /// fresh keystream, re-seeded digest, ready state.
    pub fn reset(&mut self) {
        self.keystream = KeyStream::new(&self.shared_x, &self.shared_y);
        self.tag_digest = Sm3::new();
        Digest::update(&mut self.tag_digest, self.shared_x);
        self.state = SessionState::Ready;
    }
}

impl Drop for CipherSession {
    fn drop(&mut self) {
        self.shared_x.zeroize();
        self.shared_y.zeroize();
    }
}
