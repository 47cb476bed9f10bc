// crates/vouch-core/src/operation.rs
//
// Operation records as consumed from the backing store's feed.
//
// Operations arrive signed and externally validated; this crate only models
// their shape. Sparse payloads are the norm — most fields of `data` are
// absent for most op codes — so everything optional defaults cleanly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifiers::{Mid, OperationId, Uid};

/// The kind of an operation record.
///
/// Only `RequestInvite` and `Trust` affect the member graph; the remaining
/// codes belong to other subsystems and fold to no-ops. Codes this build
/// does not know about deserialize as `Other` rather than failing the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpCode {
    RequestInvite,
    Trust,
    Mint,
    Give,
    #[serde(other)]
    Other,
}

/// The payload of an operation. Which fields are present depends on the
/// op code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationData {
    /// Target member of a request-invite or trust.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_uid: Option<Uid>,
    /// Target member's secondary identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_mid: Option<Mid>,
    /// Display name of the member a request-invite creates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// One record from the ordered operation feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub id: OperationId,
    /// Absent only on a handful of allow-listed bootstrap records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_uid: Option<Uid>,
    pub creator_mid: Mid,
    pub op_code: OpCode,
    #[serde(default)]
    pub data: OperationData,
    /// Recorded by the backing store; the oldest records lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_trust_record() {
        let json = r#"{
            "id": "op1",
            "creator_uid": "B",
            "creator_mid": "bob.1",
            "op_code": "TRUST",
            "data": { "to_uid": "A" }
        }"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        assert_eq!(op.op_code, OpCode::Trust);
        assert_eq!(op.data.to_uid, Some(Uid::from("A")));
        assert_eq!(op.data.full_name, None);
        assert_eq!(op.created_at, None);
    }

    #[test]
    fn missing_creator_and_data_default() {
        let json = r#"{
            "id": "va9A8nQ4C4ZiAsJG2nLt",
            "creator_mid": "bootstrap",
            "op_code": "TRUST"
        }"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        assert_eq!(op.creator_uid, None);
        assert_eq!(op.data, OperationData::default());
    }

    #[test]
    fn unknown_op_code_falls_back_to_other() {
        let json = r#"{
            "id": "op2",
            "creator_uid": "A",
            "creator_mid": "alice.1",
            "op_code": "FLAG",
            "data": {}
        }"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        assert_eq!(op.op_code, OpCode::Other);
    }
}
