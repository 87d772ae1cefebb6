//! SM2 Public-Key Encryption Primitives
//!
//! Cryptographic building blocks for the SM2 public-key encryption scheme
//! (GB/T 32918): an elliptic-curve Diffie-Hellman key agreement combined
//! with a counter-mode key-derivation stream cipher and an SM3 integrity
//! digest, assembled into a three-part hex envelope.
//!
//! # Data Flow
//!
//! ```text
//! Recipient Public Key ──┐
//!                        ▼
//! Ephemeral Scalar ──► Scalar Multiply ──► Shared Point (x₂, y₂)
//!                        │                        │
//!                        ▼                        ▼
//!                  C1 (ephemeral     SM3 Counter KDF ──► Keystream ⊕ M ──► C2
//!                   public point)            │
//!                                            ▼
//!                              SM3(x₂ ‖ M ‖ y₂) ──► C3
//!
//! Envelope = hex(C1) ‖ hex(C2) ‖ hex(C3)
//! ```
//!
//! Curve arithmetic and the SM3 digest are consumed from the RustCrypto
//! `sm2` and `sm3` crates; this crate implements the key-derivation stream,
//! the stateful cipher session, the envelope codec, and key-pair handling
//! on top of them.
//!
//! # Security
//!
//! Symmetry of the shared point (k·P_recipient == d·C1) is the basis of the
//! scheme; a mismatch there is a correctness bug, never a transient failure.
//!
//! - Integrity: C3 covers the true plaintext in both directions; the
//!   decrypt path compares the recomputed tag and rejects on mismatch
//! - No silent failure: malformed envelopes and invalid points abort the
//!   whole operation instead of producing partial plaintext
//! - Key hygiene: private scalars and keystream state are zeroized on drop
//!
//! Each [`CipherSession`] is a single-use owned value; give every
//! encryption or decryption operation its own session. The only shared
//! state between sessions is the process-wide OS random source.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod pke;

pub use pke::{
    CipherSession, Envelope, KeyPair, KeyStream, NormalizeRule, Sm2Error, decrypt, encrypt,
    normalize_public_point,
};
