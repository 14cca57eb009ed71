//! Raw signature layouts.
//!
//! A 65 byte signature carries no tag describing the order of its
//! fields and both of these orderings are produced in the wild:
//!
//! * RSV: `r (32) || s (32) || v (1)`
//! * VRS: `v (1) || r (32) || s (32)`
//!
//! Parsing is structural only; whether a layout is the right one
//! is decided by recovering the signer.
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// Number of bytes in a raw signature.
pub const SIGNATURE_LEN: usize = 65;

/// Smallest canonical recovery id.
const V_OFFSET: u8 = 27;

/// Signature bytes in an unknown layout.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawSignature([u8; SIGNATURE_LEN]);

impl RawSignature {
    /// Raw bytes of the signature.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }
}

impl From<[u8; SIGNATURE_LEN]> for RawSignature {
    fn from(value: [u8; SIGNATURE_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for RawSignature {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes: [u8; SIGNATURE_LEN] =
            value.try_into().map_err(|_| Error::InvalidLength {
                expected: SIGNATURE_LEN,
                actual: value.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl FromStr for RawSignature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() != SIGNATURE_LEN * 2 {
            return Err(Error::InvalidLength {
                expected: SIGNATURE_LEN * 2,
                actual: digits.len(),
            });
        }
        let mut bytes = [0u8; SIGNATURE_LEN];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for RawSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for RawSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Byte order of the fields in a raw signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `r || s || v`
    Rsv,
    /// `v || r || s`
    Vrs,
}

impl Layout {
    /// Order in which layouts are tried when the layout
    /// of a signature is not known.
    pub const TRIAL_ORDER: [Layout; 2] = [Layout::Rsv, Layout::Vrs];

    /// Split a raw signature into its fields.
    pub fn parse(self, raw: &RawSignature) -> ParsedSignature {
        let bytes = raw.as_bytes();
        let (v, r, s) = match self {
            Self::Rsv => (bytes[64], &bytes[0..32], &bytes[32..64]),
            Self::Vrs => (bytes[0], &bytes[1..33], &bytes[33..65]),
        };
        let mut signature = ParsedSignature {
            r: [0u8; 32],
            s: [0u8; 32],
            v: normalize_v(v),
        };
        signature.r.copy_from_slice(r);
        signature.s.copy_from_slice(s);
        signature
    }

    /// Write signature fields in this layout.
    pub fn encode(self, signature: &ParsedSignature) -> RawSignature {
        let mut bytes = [0u8; SIGNATURE_LEN];
        match self {
            Self::Rsv => {
                bytes[0..32].copy_from_slice(&signature.r);
                bytes[32..64].copy_from_slice(&signature.s);
                bytes[64] = signature.v;
            }
            Self::Vrs => {
                bytes[0] = signature.v;
                bytes[1..33].copy_from_slice(&signature.r);
                bytes[33..65].copy_from_slice(&signature.s);
            }
        }
        RawSignature(bytes)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Rsv => "rsv",
                Self::Vrs => "vrs",
            }
        )
    }
}

/// Parse a raw signature as `r || s || v`.
pub fn parse_as_rsv(raw: &RawSignature) -> ParsedSignature {
    Layout::Rsv.parse(raw)
}

/// Parse a raw signature as `v || r || s`.
pub fn parse_as_vrs(raw: &RawSignature) -> ParsedSignature {
    Layout::Vrs.parse(raw)
}

/// Map a `{0, 1}` recovery id into `{27, 28}`.
fn normalize_v(v: u8) -> u8 {
    if v < V_OFFSET {
        v + V_OFFSET
    } else {
        v
    }
}

/// Signature split into its fields.
///
/// The recovery id `v` is kept in the `{27, 28}` convention.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSignature {
    /// The `r` scalar.
    #[serde(with = "prefixed_hex")]
    pub r: [u8; 32],
    /// The `s` scalar.
    #[serde(with = "prefixed_hex")]
    pub s: [u8; 32],
    /// Recovery id.
    pub v: u8,
}

impl ParsedSignature {
    /// Create a signature from its fields, normalizing the
    /// recovery id.
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self {
            r,
            s,
            v: normalize_v(v),
        }
    }

    /// Recovery id in the `{0, 1}` convention.
    ///
    /// Values outside `{27, 28}` are returned unchanged so the
    /// caller can reject them.
    pub fn recovery_byte(&self) -> u8 {
        self.v.checked_sub(V_OFFSET).unwrap_or(self.v)
    }

    /// Serialize as `r || s || v`.
    pub fn to_rsv(&self) -> RawSignature {
        Layout::Rsv.encode(self)
    }

    /// Serialize as `v || r || s`.
    pub fn to_vrs(&self) -> RawSignature {
        Layout::Vrs.encode(self)
    }
}

impl fmt::Display for ParsedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_rsv(), f)
    }
}

impl fmt::Debug for ParsedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedSignature")
            .field("r", &hex::encode(self.r))
            .field("s", &hex::encode(self.s))
            .field("v", &self.v)
            .finish()
    }
}

mod prefixed_hex {
    use super::*;

    pub fn serialize<S>(
        value: &[u8; 32],
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&format_args!("0x{}", hex::encode(value)))
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> std::result::Result<[u8; 32], D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        let digits = value.strip_prefix("0x").unwrap_or(&value);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes).map_err(de::Error::custom)?;
        Ok(bytes)
    }
}
