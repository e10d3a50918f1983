//! Query and broadcast results reported by the node.

use crate::encoding;
use serde::{Deserialize, Serialize};

/// A single key/value pair attached to an event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttribute {
    /// Attribute key.
    pub key: String,
    /// Attribute value.
    pub value: String,
}

/// An event emitted during message execution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event type identifier.
    #[serde(rename = "type")]
    pub kind: String,
    /// Event attributes.
    #[serde(default)]
    pub attrs: Vec<EventAttribute>,
    /// Package that emitted the event.
    #[serde(default)]
    pub pkg_path: String,
    /// Function that emitted the event.
    #[serde(default)]
    pub func: String,
}

/// Result of one phase of transaction processing.
///
/// The same shape reports both the pre-execution admission check and the
/// post-execution delivery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResult {
    /// Chain error identifier, absent on success.
    #[serde(default)]
    pub error: Option<String>,
    /// Phase output data.
    #[serde(default, with = "encoding::b64_bytes")]
    pub data: Vec<u8>,
    /// Chain-provided log text, populated on failure.
    #[serde(default)]
    pub log: String,
    /// Additional information.
    #[serde(default)]
    pub info: String,
    /// Events emitted during the phase.
    #[serde(default)]
    pub events: Vec<Event>,
    /// Gas budget visible to the phase.
    #[serde(default, with = "encoding::int_str")]
    pub gas_wanted: i64,
    /// Gas actually consumed.
    #[serde(default, with = "encoding::int_str")]
    pub gas_used: i64,
}

impl TxResult {
    /// Whether the phase reported an error.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// The output data as UTF-8 text.
    pub fn data_str(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

/// Full outcome of a broadcast-and-commit call.
///
/// `check_tx` reports mempool admission; a failure there means the
/// transaction never executed and consumed no resources. `deliver_tx`
/// reports block execution; a failure there is final and gas may have
/// been spent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastTxCommitResult {
    /// Pre-execution admission result.
    #[serde(default)]
    pub check_tx: TxResult,
    /// Post-execution delivery result.
    #[serde(default)]
    pub deliver_tx: TxResult,
    /// Transaction hash assigned by the node.
    #[serde(default, with = "encoding::b64_bytes")]
    pub hash: Vec<u8>,
    /// Height of the block that included the transaction.
    #[serde(default, with = "encoding::int_str")]
    pub height: i64,
}

impl BroadcastTxCommitResult {
    /// The transaction hash as lowercase hex.
    pub fn hash_hex(&self) -> String {
        hex::encode(&self.hash)
    }
}

/// Result of a read-only state query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbciQueryResult {
    /// Chain error identifier, absent on success.
    #[serde(default)]
    pub error: Option<String>,
    /// Response payload.
    #[serde(default, with = "encoding::b64_bytes")]
    pub data: Vec<u8>,
    /// Chain-provided log text, populated on failure.
    #[serde(default)]
    pub log: String,
    /// Height the query was evaluated at.
    #[serde(default, with = "encoding::int_str")]
    pub height: i64,
}

impl AbciQueryResult {
    /// Whether the query reported an error.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_failed_check_phase() {
        let json = r#"{
            "check_tx": {
                "error": "/std.UnauthorizedError",
                "log": "unauthorized: signature verification failed",
                "gas_wanted": "100000",
                "gas_used": "0"
            },
            "deliver_tx": {},
            "hash": "3q2+7w==",
            "height": "0"
        }"#;
        let outcome: BroadcastTxCommitResult = serde_json::from_str(json).unwrap();
        assert!(outcome.check_tx.is_err());
        assert!(!outcome.deliver_tx.is_err());
        assert_eq!(
            outcome.check_tx.log,
            "unauthorized: signature verification failed"
        );
        assert_eq!(outcome.hash_hex(), "deadbeef");
    }

    #[test]
    fn test_deliver_data_decodes_to_text() {
        let json = r#"{
            "check_tx": {},
            "deliver_tx": {
                "data": "aXQgd29ya3Mh",
                "gas_wanted": "100000",
                "gas_used": "54321"
            },
            "hash": "",
            "height": "42"
        }"#;
        let outcome: BroadcastTxCommitResult = serde_json::from_str(json).unwrap();
        assert!(!outcome.deliver_tx.is_err());
        assert_eq!(outcome.deliver_tx.data_str(), "it works!");
        assert_eq!(outcome.deliver_tx.gas_used, 54321);
        assert_eq!(outcome.height, 42);
    }

    #[test]
    fn test_all_fields_default() {
        let result: TxResult = serde_json::from_str("{}").unwrap();
        assert!(!result.is_err());
        assert!(result.data.is_empty());
        assert_eq!(result.gas_used, 0);

        let query: AbciQueryResult = serde_json::from_str("{}").unwrap();
        assert!(!query.is_err());
    }

    #[test]
    fn test_event_round_trip() {
        let event = Event {
            kind: "transfer".to_string(),
            attrs: vec![EventAttribute {
                key: "amount".to_string(),
                value: "100ugnot".to_string(),
            }],
            pkg_path: "gno.land/r/demo/app".to_string(),
            func: "Render".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"transfer""#));
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
