//! Bech32 account addresses.

use bech32::{Bech32, Hrp};
use once_cell::sync::Lazy;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Human-readable prefix carried by every account address.
pub const ADDRESS_PREFIX: &str = "g";

/// Raw byte length of an account address.
pub const ADDRESS_LEN: usize = 20;

static ADDRESS_HRP: Lazy<Hrp> =
    Lazy::new(|| Hrp::parse(ADDRESS_PREFIX).expect("valid address prefix"));

/// Errors raised while parsing an [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The string is not well-formed bech32.
    #[error("malformed bech32 address: {0}")]
    Bech32(String),
    /// The decoded payload is not [`ADDRESS_LEN`] bytes.
    #[error("invalid address length: expected {expected} bytes, found {found}")]
    InvalidLength {
        /// Required payload length.
        expected: usize,
        /// Length actually decoded.
        found: usize,
    },
    /// The human-readable prefix is not [`ADDRESS_PREFIX`].
    #[error("invalid address prefix: expected {expected:?}, found {found:?}")]
    InvalidPrefix {
        /// Required prefix.
        expected: &'static str,
        /// Prefix actually decoded.
        found: String,
    },
}

/// Account address, 20 bytes rendered as bech32 with the `g` prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address, used as the unset sentinel.
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    /// Parse a bech32 string into an address.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] when the string is not bech32, carries the
    /// wrong prefix, or decodes to a payload that is not 20 bytes.
    pub fn from_bech32(s: &str) -> Result<Self, AddressError> {
        let (hrp, data) = bech32::decode(s).map_err(|err| AddressError::Bech32(err.to_string()))?;
        if hrp.to_string() != ADDRESS_PREFIX {
            return Err(AddressError::InvalidPrefix {
                expected: ADDRESS_PREFIX,
                found: hrp.to_string(),
            });
        }
        if data.len() != ADDRESS_LEN {
            return Err(AddressError::InvalidLength {
                expected: ADDRESS_LEN,
                found: data.len(),
            });
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&data);
        Ok(Self(bytes))
    }

    /// Render the address as its canonical bech32 string.
    pub fn to_bech32(&self) -> String {
        bech32::encode::<Bech32>(*ADDRESS_HRP, &self.0)
            .expect("20-byte payload is within bech32 limits")
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Whether this is the all-zero sentinel address.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bech32())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_bech32())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_bech32())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        Self::from_bech32(&string).map_err(D::Error::custom)
    }
}
