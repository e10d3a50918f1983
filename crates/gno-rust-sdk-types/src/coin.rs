//! Coin amounts and denomination-tagged coin sets.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing or assembling coins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinError {
    /// The coin expression is empty.
    #[error("empty coin expression")]
    Empty,

    /// The amount part is missing or does not fit an i64.
    #[error("invalid coin amount: {0:?}")]
    InvalidAmount(String),

    /// The amount is negative.
    #[error("negative coin amount: {0}")]
    NegativeAmount(i64),

    /// The denomination violates the denomination grammar.
    #[error("invalid coin denomination: {0:?}")]
    InvalidDenom(String),

    /// The same denomination appears twice in one coin set.
    #[error("duplicate coin denomination: {0:?}")]
    DuplicateDenom(String),
}

/// A single denominated amount, rendered as `{amount}{denom}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coin {
    /// Denomination tag, e.g. `ugnot`.
    pub denom: String,
    /// Non-negative amount in the denomination's base unit.
    pub amount: i64,
}

impl Coin {
    /// Create a coin, validating the denomination and the amount sign.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::InvalidDenom`] or [`CoinError::NegativeAmount`].
    pub fn new(denom: impl Into<String>, amount: i64) -> Result<Self, CoinError> {
        let denom = denom.into();
        if !is_valid_denom(&denom) {
            return Err(CoinError::InvalidDenom(denom));
        }
        if amount < 0 {
            return Err(CoinError::NegativeAmount(amount));
        }
        Ok(Self { denom, amount })
    }

    /// Parse a single `{amount}{denom}` expression, e.g. `10000ugnot`.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError`] when the expression is empty, the amount does
    /// not fit an i64, or the denomination is malformed.
    pub fn parse(s: &str) -> Result<Self, CoinError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoinError::Empty);
        }
        let boundary = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (amount_part, denom_part) = trimmed.split_at(boundary);
        if amount_part.is_empty() {
            return Err(CoinError::InvalidAmount(trimmed.to_string()));
        }
        let amount = amount_part
            .parse::<i64>()
            .map_err(|_| CoinError::InvalidAmount(trimmed.to_string()))?;
        if !is_valid_denom(denom_part) {
            return Err(CoinError::InvalidDenom(denom_part.to_string()));
        }
        Ok(Self {
            denom: denom_part.to_string(),
            amount,
        })
    }

    /// Whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Coin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Coin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        Self::parse(&string).map_err(D::Error::custom)
    }
}

/// An ordered coin set with unique denominations.
///
/// Insertion order is kept for display; equality ignores it.
#[derive(Clone, Debug, Default)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Assemble a coin set, rejecting duplicate denominations.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError::DuplicateDenom`] when a denomination repeats.
    pub fn new(coins: Vec<Coin>) -> Result<Self, CoinError> {
        for (idx, coin) in coins.iter().enumerate() {
            if coins[..idx].iter().any(|seen| seen.denom == coin.denom) {
                return Err(CoinError::DuplicateDenom(coin.denom.clone()));
            }
        }
        Ok(Self(coins))
    }

    /// The empty coin set.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Parse a comma-separated coin list, e.g. `100ugnot,5uatom`.
    ///
    /// An empty or whitespace-only string parses to the empty set.
    ///
    /// # Errors
    ///
    /// Returns [`CoinError`] when any element fails to parse or a
    /// denomination repeats.
    pub fn parse(s: &str) -> Result<Self, CoinError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::empty());
        }
        let mut coins = Vec::new();
        for part in trimmed.split(',') {
            coins.push(Coin::parse(part)?);
        }
        Self::new(coins)
    }

    /// Whether the set holds no coins.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of coins in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The coins in insertion order.
    pub fn as_slice(&self) -> &[Coin] {
        &self.0
    }

    /// Amount held under `denom`, zero when absent.
    pub fn amount_of(&self, denom: &str) -> i64 {
        self.0
            .iter()
            .find(|coin| coin.denom == denom)
            .map(|coin| coin.amount)
            .unwrap_or(0)
    }
}

impl PartialEq for Coins {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.0.clone();
        let mut right = other.0.clone();
        left.sort_by(|a, b| a.denom.cmp(&b.denom));
        right.sort_by(|a, b| a.denom.cmp(&b.denom));
        left == right
    }
}

impl Eq for Coins {}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        Self(vec![coin])
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(Coin::to_string).collect();
        write!(f, "{}", rendered.join(","))
    }
}

impl FromStr for Coins {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Coins {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Coins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        Self::parse(&string).map_err(D::Error::custom)
    }
}

/// Denominations are lowercase alphanumeric, start with a letter, and run
/// 3 to 16 characters.
fn is_valid_denom(denom: &str) -> bool {
    if denom.len() < 3 || denom.len() > 16 {
        return false;
    }
    let mut chars = denom.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}
