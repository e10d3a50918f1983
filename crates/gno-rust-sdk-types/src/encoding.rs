//! Serde adapters for the node's JSON conventions.
//!
//! 64-bit integers travel as decimal strings and byte fields as base64,
//! matching the Tendermint-family wire encoding.

/// i64 encoded as a decimal string.
pub(crate) mod int_str {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let string = String::deserialize(deserializer)?;
        string.parse::<i64>().map_err(D::Error::custom)
    }
}

/// u64 encoded as a decimal string.
pub(crate) mod uint_str {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let string = String::deserialize(deserializer)?;
        string.parse::<u64>().map_err(D::Error::custom)
    }
}

/// Byte vectors encoded as base64 strings.
pub(crate) mod b64_bytes {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(
        value: &[u8],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&base64::encode(value))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<u8>, D::Error> {
        let string = String::deserialize(deserializer)?;
        base64::decode(&string).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "super::int_str")]
        height: i64,
        #[serde(with = "super::uint_str")]
        sequence: u64,
        #[serde(with = "super::b64_bytes")]
        data: Vec<u8>,
    }

    #[test]
    fn test_wire_encoding_round_trip() {
        let sample = Sample {
            height: -42,
            sequence: 7,
            data: b"it works!".to_vec(),
        };
        let json = serde_json::to_string(&sample).unwrap();
        assert!(json.contains("\"-42\""));
        assert!(json.contains("\"7\""));
        assert!(json.contains(&base64::encode(b"it works!")));

        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn test_rejects_non_numeric_strings() {
        let result: Result<Sample, _> =
            serde_json::from_str(r#"{"height":"ten","sequence":"1","data":""}"#);
        assert!(result.is_err());
    }
}
