//! C1‖C2‖C3 hex envelope codec
//!
//! Ciphertext travels as a single hex string with three concatenated
//! fields:
//!
//! ```text
//! ┌──────────────────────┬───────────────────┬──────────────────┐
//! │ C1: ephemeral point  │ C2: XOR payload   │ C3: SM3 tag      │
//! │ 65 bytes (130 hex)   │ N bytes (2N hex)  │ 32 bytes (64 hex)│
//! └──────────────────────┴───────────────────┴──────────────────┘
//! ```
//!
//! C1 is the uncompressed SEC1 encoding of the sender's ephemeral public
//! point (0x04 tag byte plus two 32-byte coordinates). Fields are fixed
//! width except the payload, so the envelope needs no length prefixes:
//! everything between the first 130 and the last 64 hex characters is C2.
//! An empty payload is legal; the minimum envelope is 194 hex characters.
//!
//! Encoding emits uppercase hex. Decoding accepts either case.

use super::error::Sm2Error;

/// Uncompressed SEC1 point width: tag byte plus two coordinates.
pub const POINT_LEN: usize = 65;

/// Integrity tag width (the SM3 output size).
pub const TAG_LEN: usize = 32;

/// Hex characters occupied by C1.
pub const POINT_HEX_LEN: usize = POINT_LEN * 2;

/// Hex characters occupied by C3.
pub const TAG_HEX_LEN: usize = TAG_LEN * 2;

/// Minimum envelope length in hex characters (empty payload).
pub const MIN_HEX_LEN: usize = POINT_HEX_LEN + TAG_HEX_LEN;

/// Decoded ciphertext envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// C1: ephemeral public point, uncompressed SEC1
    pub point: [u8; POINT_LEN],
    /// C2: XOR-stream payload, same length as the plaintext
    pub payload: Vec<u8>,
    /// C3: integrity tag over the shared point and plaintext
    pub tag: [u8; TAG_LEN],
}

impl Envelope {
    /// Serialize as an uppercase hex string.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(MIN_HEX_LEN + self.payload.len() * 2);
        out.push_str(&hex::encode_upper(self.point));
        out.push_str(&hex::encode_upper(&self.payload));
        out.push_str(&hex::encode_upper(self.tag));
        out
    }

    /// Parse an envelope from a hex string.
    ///
    /// # Errors
    ///
    /// `Format` if the string is shorter than the minimum envelope, has an
    /// odd number of characters, or contains non-hex characters.
    pub fn decode(hex_text: &str) -> Result<Self, Sm2Error> {
        // Split on raw bytes: str slicing would panic on a multi-byte
        // character straddling a field boundary
        let raw = hex_text.as_bytes();
        if raw.len() < MIN_HEX_LEN {
            return Err(Sm2Error::Format {
                reason: format!(
                    "envelope of {} hex chars is below the {MIN_HEX_LEN}-char minimum",
                    raw.len()
                ),
            });
        }
        if raw.len() % 2 != 0 {
            return Err(Sm2Error::Format {
                reason: "envelope has an odd number of hex characters".to_string(),
            });
        }

        let tag_start = raw.len() - TAG_HEX_LEN;
        let mut point = [0u8; POINT_LEN];
        hex::decode_to_slice(&raw[..POINT_HEX_LEN], &mut point)
            .map_err(|err| Sm2Error::Format { reason: format!("bad hex in point field: {err}") })?;
        let payload = hex::decode(&raw[POINT_HEX_LEN..tag_start])
            .map_err(|err| Sm2Error::Format { reason: format!("bad hex in payload: {err}") })?;
        let mut tag = [0u8; TAG_LEN];
        hex::decode_to_slice(&raw[tag_start..], &mut tag)
            .map_err(|err| Sm2Error::Format { reason: format!("bad hex in tag field: {err}") })?;

        Ok(Self { point, payload, tag })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(payload_len: usize) -> Envelope {
        let mut point = [0xAAu8; POINT_LEN];
        point[0] = 0x04;
        Envelope { point, payload: vec![0x5C; payload_len], tag: [0x33; TAG_LEN] }
    }

    #[test]
    fn encode_decode_round_trip() {
        for len in [0, 1, 31, 32, 33, 1000] {
            let envelope = sample(len);
            let hex_text = envelope.encode();
            assert_eq!(hex_text.len(), MIN_HEX_LEN + len * 2);
            assert_eq!(Envelope::decode(&hex_text).unwrap(), envelope);
        }
    }

    #[test]
    fn encoding_is_uppercase() {
        let hex_text = sample(4).encode();
        assert_eq!(hex_text, hex_text.to_uppercase());
    }

    #[test]
    fn decode_accepts_lowercase() {
        let envelope = sample(8);
        let lower = envelope.encode().to_lowercase();
        assert_eq!(Envelope::decode(&lower).unwrap(), envelope);
    }

    #[test]
    fn empty_payload_is_exactly_the_minimum() {
        let hex_text = sample(0).encode();
        assert_eq!(hex_text.len(), MIN_HEX_LEN);
        let decoded = Envelope::decode(&hex_text).unwrap();
        assert!(decoded.payload.is_empty());
    }

    #[test]
    fn short_input_is_rejected() {
        let hex_text = sample(0).encode();
        let err = Envelope::decode(&hex_text[..MIN_HEX_LEN - 2]).unwrap_err();
        assert!(matches!(err, Sm2Error::Format { .. }));
        assert!(Envelope::decode("").is_err());
    }

    #[test]
    fn odd_length_is_rejected() {
        let mut hex_text = sample(1).encode();
        hex_text.push('A');
        assert!(matches!(Envelope::decode(&hex_text), Err(Sm2Error::Format { .. })));
    }

    #[test]
    fn non_hex_characters_are_rejected() {
        let mut hex_text = sample(2).encode();
        // Corrupt one character in each field
        let payload_pos = POINT_HEX_LEN + 1;
        let tag_pos = hex_text.len() - 1;
        for pos in [5, payload_pos, tag_pos] {
            let mut bad = hex_text.clone();
            bad.replace_range(pos..=pos, "G");
            assert!(matches!(Envelope::decode(&bad), Err(Sm2Error::Format { .. })));
        }
        hex_text.truncate(MIN_HEX_LEN);
        assert!(Envelope::decode(&hex_text).is_ok());
    }

    #[test]
    fn multibyte_character_at_a_field_boundary_is_rejected() {
        // Two-byte UTF-8 straddling the end of C1: byte length passes the
        // checks, so the field split must not assume character boundaries
        let mut at_point_boundary = "A".repeat(POINT_HEX_LEN - 1);
        at_point_boundary.push('é');
        at_point_boundary.push_str(&"A".repeat(TAG_HEX_LEN - 1));
        assert_eq!(at_point_boundary.len(), MIN_HEX_LEN);
        assert!(matches!(
            Envelope::decode(&at_point_boundary),
            Err(Sm2Error::Format { .. })
        ));

        // Same straddle at the start of C3 (with a payload present)
        let mut at_tag_boundary = "A".repeat(POINT_HEX_LEN + 3);
        at_tag_boundary.push('é');
        at_tag_boundary.push_str(&"A".repeat(TAG_HEX_LEN - 1));
        assert_eq!(at_tag_boundary.len() % 2, 0);
        assert!(matches!(
            Envelope::decode(&at_tag_boundary),
            Err(Sm2Error::Format { .. })
        ));
    }

    #[test]
    fn non_ascii_input_is_rejected() {
        let text = "é".repeat(MIN_HEX_LEN / 2);
        assert_eq!(text.len(), MIN_HEX_LEN);
        assert!(matches!(Envelope::decode(&text), Err(Sm2Error::Format { .. })));
    }

    #[test]
    fn fields_land_in_the_right_positions() {
        let envelope = sample(3);
        let hex_text = envelope.encode();
        assert!(hex_text.starts_with("04AAAA"));
        assert!(hex_text.ends_with("3333"));
        let decoded = Envelope::decode(&hex_text).unwrap();
        assert_eq!(decoded.payload, vec![0x5C; 3]);
    }
}
