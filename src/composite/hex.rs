//! `0x`-prefixed hex strings for byte vectors and bitfields.

use crate::SSZError;
use alloc::{string::ToString, vec::Vec};
use alloy_primitives::hex;
use core::fmt;

/// Decodes a `0x`-prefixed hex string. An odd number of digits is read as if left-padded with a
/// zero nibble.
pub(crate) fn decode_prefixed(s: &str) -> Result<Vec<u8>, SSZError> {
    let digits = s.strip_prefix("0x").ok_or(SSZError::MissingHexPrefix)?;
    let decoded = if digits.len() % 2 == 1 {
        let mut padded = alloc::string::String::with_capacity(digits.len() + 1);
        padded.push('0');
        padded.push_str(digits);
        hex::decode(padded)
    } else {
        hex::decode(digits)
    };
    decoded.map_err(|err| SSZError::InvalidHex(err.to_string()))
}

/// Writes `bytes` as `0x` followed by two lowercase digits per byte.
pub(crate) fn fmt_prefixed(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("0x")?;
    for byte in bytes {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}

/// Serde support through the hex string form.
#[cfg(feature = "serde")]
pub(crate) mod serde_hex {
    use alloc::string::String;
    use core::{fmt::Display, str::FromStr};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub(crate) fn serialize<T: Display, S: Serializer>(
        value: &T,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_decode_prefixed() {
        assert_eq!(decode_prefixed("0x"), Ok(vec![]));
        assert_eq!(decode_prefixed("0x0a0B"), Ok(vec![0x0a, 0x0b]));
        assert_eq!(decode_prefixed("0xabc"), Ok(vec![0x0a, 0xbc]));
        assert_eq!(decode_prefixed("abcd"), Err(SSZError::MissingHexPrefix));
        assert!(matches!(decode_prefixed("0xzz"), Err(SSZError::InvalidHex(_))));
    }
}
