//! Base64URL decoding per RFC 4648 §5
//!
//! JWT producers disagree on padding, so segments are accepted both with and
//! without trailing `=`.

use base64::{
    DecodeError, Engine,
    alphabet::URL_SAFE,
    engine::{
        DecodePaddingMode,
        general_purpose::{GeneralPurpose, NO_PAD},
    },
};

/// URL-safe alphabet, padding optional on decode
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &URL_SAFE,
    NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a Base64URL segment to bytes
pub(crate) fn decode_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_LENIENT.decode(input)
}
