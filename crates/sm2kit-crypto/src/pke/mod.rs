//! SM2 public-key encryption: key agreement, keystream, envelope
//!
//! The scheme splits into small, independently testable pieces:
//!
//! - Key agreement and ephemeral keys: [`keypair`], curve service adapter
//! - Counter-mode key derivation: [`kdf`]
//! - Stateful cipher session (XOR + integrity digest): [`cipher`]
//! - C1‖C2‖C3 hex wire format: [`envelope`]
//! - Top-level encrypt/decrypt orchestration: [`encryption`]
//!
//! # Architecture
//!
//! ```text
//! encrypt(pubkey, M)                      decrypt(privkey, hex)
//!        │                                        │
//!        ▼                                        ▼
//! CipherSession::init_encrypt             Envelope::decode
//!        │                                        │
//!        ▼                                        ▼
//! transform (M ⊕ keystream)               CipherSession::init_decrypt
//!        │                                        │
//!        ▼                                        ▼
//! finalize → C3 tag                       transform + finalize
//!        │                                        │
//!        ▼                                        ▼
//! Envelope::encode → hex                  tag comparison → plaintext
//! ```

pub mod cipher;
pub mod convert;
pub(crate) mod curve;
pub mod encryption;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod keypair;

pub use cipher::CipherSession;
pub use encryption::{decrypt, encrypt};
pub use envelope::Envelope;
pub use error::Sm2Error;
pub use kdf::KeyStream;
pub use keypair::{KeyPair, NormalizeRule, normalize_public_point};
