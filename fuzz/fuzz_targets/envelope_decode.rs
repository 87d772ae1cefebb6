//! Fuzz target for envelope decoding
//!
//! # Strategy
//!
//! - Completely arbitrary strings (general malformation)
//! - Valid-hex strings of arbitrary length (field boundary handling)
//!
//! # Invariants
//!
//! - Decoding NEVER panics, whatever the input
//! - Anything that decodes re-encodes to an equivalent envelope

#![no_main]

use libfuzzer_sys::fuzz_target;
use sm2kit_crypto::Envelope;

fuzz_target!(|data: &[u8]| {
    // Raw bytes as a string: mostly non-hex, exercises every rejection path
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Envelope::decode(text);
    }

    // Hex-encoded bytes: always valid hex, exercises the length checks and
    // the field split
    let hex_text = hex::encode_upper(data);
    if let Ok(envelope) = Envelope::decode(&hex_text) {
        let reencoded = envelope.encode();
        assert_eq!(reencoded, hex_text);
        assert_eq!(Envelope::decode(&reencoded).unwrap(), envelope);
    }
});
