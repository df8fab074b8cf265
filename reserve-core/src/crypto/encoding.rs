use super::{CryptoError, Digest, Result, DIGEST_LEN};

/// Lowercase hex, no separators, no prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string of any even length. Both cases are accepted.
pub fn from_hex(encoded: &str) -> Result<Vec<u8>> {
    hex::decode(encoded).map_err(|e| CryptoError::InvalidEncoding(format!("{e}: {encoded:?}")))
}

/// Decode exactly one digest worth of hex.
pub fn digest_from_hex(encoded: &str) -> Result<Digest> {
    let mut digest = [0u8; DIGEST_LEN];
    hex::decode_to_slice(encoded, &mut digest)
        .map_err(|e| CryptoError::InvalidEncoding(format!("{e}: {encoded:?}")))?;
    Ok(digest)
}

/// `first || second`, order preserved.
pub fn concat_bytes(first: &[u8], second: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(first.len() + second.len());
    out.extend_from_slice(first);
    out.extend_from_slice(second);
    out
}
