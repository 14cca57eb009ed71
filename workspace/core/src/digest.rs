//! Message digests consumed by signing and recovery.
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest as _, Keccak256};
use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// Prefix for messages signed with `eth_sign`.
pub const MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Number of bytes in a digest.
pub const DIGEST_LEN: usize = 32;

/// Keccak-256 hash fed into signing and recovery.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Compute the keccak-256 hash of some bytes.
    pub fn keccak256(data: impl AsRef<[u8]>) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&Keccak256::digest(data));
        Self(bytes)
    }

    /// Raw bytes of the digest.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(value: [u8; DIGEST_LEN]) -> Self {
        Self(value)
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() != DIGEST_LEN * 2 {
            return Err(Error::InvalidLength {
                expected: DIGEST_LEN * 2,
                actual: digits.len(),
            });
        }
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// Payload of a message signed with the Ethereum prefix.
///
/// A `0x` (or `0X`) prefixed string of hex digits is signed as the
/// decoded bytes, any other string is signed as its UTF-8 encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<'a> {
    /// Plain text message.
    Text(&'a str),
    /// Message given as hex encoded bytes.
    Bytes(Vec<u8>),
}

impl<'a> Message<'a> {
    /// Classify a message string.
    ///
    /// Hex digits after `0x` or `0X` must come in pairs; an odd number
    /// of digits is an error rather than being signed as text.
    pub fn parse(message: &'a str) -> Result<Self> {
        let digits = message
            .strip_prefix("0x")
            .or_else(|| message.strip_prefix("0X"));
        if let Some(digits) = digits {
            if digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                if digits.len() % 2 != 0 {
                    return Err(Error::MalformedHexMessage(
                        message.to_owned(),
                    ));
                }
                return Ok(Self::Bytes(hex::decode(digits)?));
            }
        }
        Ok(Self::Text(message))
    }

    /// Length written into the message prefix.
    ///
    /// Hex messages count decoded bytes. Text counts UTF-16 code
    /// units, which is the character count JavaScript signers use.
    pub fn prefix_length(&self) -> usize {
        match self {
            Self::Text(value) => value.encode_utf16().count(),
            Self::Bytes(value) => value.len(),
        }
    }

    /// Bytes that are hashed for this message.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(value) => value.as_bytes(),
            Self::Bytes(value) => value.as_slice(),
        }
    }
}

/// Digest of a message with the Ethereum signed message prefix.
///
/// The length in the prefix is [`Message::prefix_length`], so
/// `"0x1234"` has a length of two and `"héllo"` a length of five.
pub fn prefixed_digest(message: &str) -> Result<Digest> {
    let message = Message::parse(message)?;
    Ok(digest_with_prefix(message.prefix_length(), message.as_bytes()))
}

/// Digest of raw bytes with the Ethereum signed message prefix.
pub fn prefixed_digest_bytes(message: &[u8]) -> Digest {
    digest_with_prefix(message.len(), message)
}

fn digest_with_prefix(length: usize, payload: &[u8]) -> Digest {
    let mut hasher = Keccak256::new();
    hasher.update(MESSAGE_PREFIX.as_bytes());
    hasher.update(length.to_string().as_bytes());
    hasher.update(payload);
    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(&hasher.finalize());
    Digest(bytes)
}

/// Digest of a plain string without any prefix.
pub fn simple_digest(message: &str) -> Digest {
    Digest::keccak256(message.as_bytes())
}
