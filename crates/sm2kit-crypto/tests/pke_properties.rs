//! Property-based tests for SM2 public-key encryption
//!
//! These tests verify the fundamental invariants of the scheme:
//!
//! 1. **Round-trip**: decrypt(encrypt(m)) == m for all messages
//! 2. **Envelope codec**: decode(encode(e)) == e for all field contents
//! 3. **Keystream**: output is independent of the consumption pattern
//! 4. **Integrity**: any payload or tag corruption is detected

use proptest::prelude::*;
use sm2kit_crypto::pke::convert::to_fixed_width;
use sm2kit_crypto::{Envelope, KeyPair, KeyStream, Sm2Error, decrypt, encrypt};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_encrypt_decrypt_roundtrip(
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
    ) {
        let pair = KeyPair::generate().unwrap();
        let ciphertext = encrypt(&pair.public_key_hex(), &plaintext).unwrap();
        let recovered = decrypt(&pair.private_key_hex(), &ciphertext).unwrap();
        prop_assert_eq!(recovered, plaintext);
    }

    #[test]
    fn prop_ciphertext_length_tracks_plaintext_length(
        plaintext in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let pair = KeyPair::generate().unwrap();
        let ciphertext = encrypt(&pair.public_key_hex(), &plaintext).unwrap();
        prop_assert_eq!(ciphertext.len(), 194 + plaintext.len() * 2);
    }

    #[test]
    fn prop_payload_corruption_is_detected(
        plaintext in prop::collection::vec(any::<u8>(), 1..200),
        corrupt_index: prop::sample::Index,
    ) {
        let pair = KeyPair::generate().unwrap();
        let mut ciphertext = encrypt(&pair.public_key_hex(), &plaintext).unwrap();

        // Corrupt one hex digit anywhere in C2 or C3
        let pos = 130 + corrupt_index.index(ciphertext.len() - 130);
        let original = ciphertext.as_bytes()[pos];
        let flipped = if original == b'0' { "F" } else { "0" };
        ciphertext.replace_range(pos..=pos, flipped);

        let result = decrypt(&pair.private_key_hex(), &ciphertext);
        prop_assert!(matches!(result, Err(Sm2Error::IntegrityMismatch)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_envelope_codec_roundtrip(
        point in any::<[u8; 65]>(),
        payload in prop::collection::vec(any::<u8>(), 0..500),
        tag in any::<[u8; 32]>(),
    ) {
        let envelope = Envelope { point, payload, tag };
        let decoded = Envelope::decode(&envelope.encode()).unwrap();
        prop_assert_eq!(decoded, envelope);
    }

    #[test]
    fn prop_keystream_is_consumption_order_independent(
        x in any::<[u8; 32]>(),
        y in any::<[u8; 32]>(),
        len in 0usize..200,
        split in any::<prop::sample::Index>(),
    ) {
        let mut whole = KeyStream::new(&x, &y);
        let mut buf_whole = vec![0u8; len];
        whole.xor_in_place(&mut buf_whole);

        let mut chunked = KeyStream::new(&x, &y);
        let mut buf_chunked = vec![0u8; len];
        let mid = if len == 0 { 0 } else { split.index(len) };
        let (head, tail) = buf_chunked.split_at_mut(mid);
        chunked.xor_in_place(head);
        chunked.xor_in_place(tail);

        prop_assert_eq!(buf_chunked, buf_whole);
        prop_assert_eq!(chunked.blocks_generated(), whole.blocks_generated());
    }

    #[test]
    fn prop_fixed_width_preserves_value(
        value in prop::collection::vec(any::<u8>(), 0..=32),
    ) {
        let fixed = to_fixed_width(&value, 32).unwrap();
        prop_assert_eq!(fixed.len(), 32);

        let stripped: Vec<u8> = fixed.iter().copied().skip_while(|&b| b == 0).collect();
        let original: Vec<u8> = value.iter().copied().skip_while(|&b| b == 0).collect();
        prop_assert_eq!(stripped, original);
    }

    #[test]
    fn prop_sign_byte_is_dropped(
        mut value in any::<[u8; 32]>(),
    ) {
        // Force the high bit: the signed encoding would carry a zero byte
        value[0] |= 0x80;
        let mut signed = vec![0u8];
        signed.extend_from_slice(&value);

        prop_assert_eq!(to_fixed_width(&signed, 32).unwrap(), value);
    }

    #[test]
    fn prop_keystream_block_count_matches_demand(
        x in any::<[u8; 32]>(),
        y in any::<[u8; 32]>(),
        len in 0usize..500,
    ) {
        let mut stream = KeyStream::new(&x, &y);
        let mut buf = vec![0u8; len];
        stream.xor_in_place(&mut buf);
        prop_assert_eq!(stream.blocks_generated() as usize, len.div_ceil(32));
    }
}
