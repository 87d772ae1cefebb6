//! Counter-mode key derivation stream over SM3
//!
//! Turns a shared curve point into an arbitrarily long keystream: a base
//! digest context is pre-loaded with the point's x and y coordinates, and
//! block *n* is `SM3(x₂ ‖ y₂ ‖ n)` for a 32-bit big-endian counter
//! starting at 1. Cloning the base context per block is the snapshot
//! operation the scheme requires of its digest service; the RustCrypto
//! digest types are `Clone`, which reproduces the exact internal state.
//!
//! # Invariants
//!
//! - `offset` is always in `0..=BLOCK_LEN`; a new block is generated
//!   exactly when it reaches `BLOCK_LEN`, advancing the counter by one
//! - Refill is lazy: constructing the stream, or consuming zero bytes,
//!   never generates a block
//! - Requesting N bytes one at a time yields the same bytes as one batch

use sm3::{Digest, Sm3};
use zeroize::Zeroize;

use super::convert::SCALAR_LEN;

/// Width of one keystream block (the SM3 output size).
const BLOCK_LEN: usize = 32;

/// Stateful keystream generator derived from a shared curve point.
pub struct KeyStream {
    /// Digest context pre-loaded with x₂ ‖ y₂; cloned per block
    base: Sm3,
    /// Block counter fed to the digest, starting at 1
    counter: u32,
    /// Current keystream block
    block: [u8; BLOCK_LEN],
    /// Next unconsumed byte in `block`; `BLOCK_LEN` means exhausted
    offset: usize,
}

impl KeyStream {
    /// Create a keystream from the shared point's fixed-width coordinates.
    ///
    /// No block is generated until the first byte is requested.
    pub fn new(x: &[u8; SCALAR_LEN], y: &[u8; SCALAR_LEN]) -> Self {
        let mut base = Sm3::new();
        Digest::update(&mut base, x);
        Digest::update(&mut base, y);
        Self { base, counter: 1, block: [0; BLOCK_LEN], offset: BLOCK_LEN }
    }

    /// Number of 32-byte blocks generated so far.
    pub fn blocks_generated(&self) -> u32 {
        self.counter.wrapping_sub(1)
    }

    /// Next keystream byte, generating a fresh block when the current one
    /// is exhausted.
    pub fn next_byte(&mut self) -> u8 {
        if self.offset == BLOCK_LEN {
            self.refill();
        }
        let byte = self.block[self.offset];
        self.offset += 1;
        byte
    }

    /// XOR the keystream into `data` in place.
    pub fn xor_in_place(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte ^= self.next_byte();
        }
    }

    fn refill(&mut self) {
        let mut digest = self.base.clone();
        Digest::update(&mut digest, self.counter.to_be_bytes());
        self.block = digest.finalize().into();
        self.offset = 0;
        self.counter = self.counter.wrapping_add(1);
    }
}

impl Drop for KeyStream {
    fn drop(&mut self) {
        self.block.zeroize();
    }
}
