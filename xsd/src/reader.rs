use std::borrow::Cow;
use std::io::Read;

use encoding_rs::{Encoding, UTF_8};

use crate::error::DecodeError;

/// Drains `source` and decodes it into text.
///
/// A byte order mark selects UTF-8 or UTF-16; without one the input must be UTF-8. Malformed
/// sequences are rejected instead of being replaced.
pub(crate) fn read_text(mut source: impl Read) -> Result<String, DecodeError> {
    let mut buf = Vec::new();
    source.read_to_end(&mut buf)?;
    decode_bytes(&buf).map(Cow::into_owned)
}

fn decode_bytes(buf: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
    let (decoded, encoding, had_errors) = Encoding::decode(UTF_8, buf);
    if had_errors {
        return Err(DecodeError::Encoding {
            encoding: encoding.name(),
        });
    }
    Ok(decoded)
}
