// crates/vouch-graph/src/validator.rs
//
// Structural validation of a single operation against the current snapshot.
//
// "Relevant" means the operation should affect member-graph state at all;
// op codes belonging to other subsystems are simply not relevant. Structural
// problems (a missing creator outside the bootstrap allow-list) are a
// rejection, not a skip.

use vouch_core::genesis;
use vouch_core::{OpCode, Operation, RejectionReason};

/// Decide whether `operation` should affect graph state.
///
/// Returns `Ok(false)` for operations this layer ignores, `Ok(true)` for
/// ones the fold engine must apply, and `Err` for structurally invalid
/// records.
pub fn is_relevant(operation: &Operation) -> Result<bool, RejectionReason> {
    if operation.creator_uid.is_none() {
        if genesis::is_genesis_trust(&operation.id) {
            // Bootstrap trust records never surface in app state.
            return Ok(false);
        }
        return Err(RejectionReason::MissingCreator);
    }

    match operation.op_code {
        OpCode::RequestInvite => {
            if operation.data.to_uid.is_some() {
                return Ok(true);
            }
            // No inviter named: relevant only for the founding members.
            Ok(genesis::is_genesis_request_invite(&operation.id))
        }
        OpCode::Trust => Ok(operation.data.to_uid.is_some()),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_core::{Mid, OperationData, OperationId, Uid};

    fn op(id: &str, creator: Option<&str>, code: OpCode, to_uid: Option<&str>) -> Operation {
        Operation {
            id: OperationId::from(id),
            creator_uid: creator.map(Uid::from),
            creator_mid: Mid::from("someone.1"),
            op_code: code,
            data: OperationData {
                to_uid: to_uid.map(Uid::from),
                ..OperationData::default()
            },
            created_at: None,
        }
    }

    #[test]
    fn genesis_trust_without_creator_is_skipped() {
        let r = is_relevant(&op("va9A8nQ4C4ZiAsJG2nLt", None, OpCode::Trust, None));
        assert_eq!(r, Ok(false));
    }

    #[test]
    fn missing_creator_outside_allow_list_is_rejected() {
        let r = is_relevant(&op("randomOp", None, OpCode::Trust, Some("A")));
        assert_eq!(r, Err(RejectionReason::MissingCreator));
    }

    #[test]
    fn request_invite_with_target_is_relevant() {
        let r = is_relevant(&op("op1", Some("B"), OpCode::RequestInvite, Some("A")));
        assert_eq!(r, Ok(true));
    }

    #[test]
    fn genesis_request_invite_without_target_is_relevant() {
        let r = is_relevant(&op(
            "InuYAjMISl6operovXIR",
            Some("A"),
            OpCode::RequestInvite,
            None,
        ));
        assert_eq!(r, Ok(true));
    }

    #[test]
    fn ordinary_request_invite_without_target_is_not_relevant() {
        let r = is_relevant(&op("op1", Some("B"), OpCode::RequestInvite, None));
        assert_eq!(r, Ok(false));
    }

    #[test]
    fn trust_relevance_tracks_target_presence() {
        assert_eq!(
            is_relevant(&op("op1", Some("B"), OpCode::Trust, Some("A"))),
            Ok(true)
        );
        assert_eq!(is_relevant(&op("op1", Some("B"), OpCode::Trust, None)), Ok(false));
    }

    #[test]
    fn other_op_codes_are_ignored() {
        assert_eq!(is_relevant(&op("op1", Some("A"), OpCode::Mint, None)), Ok(false));
        assert_eq!(
            is_relevant(&op("op1", Some("A"), OpCode::Give, Some("B"))),
            Ok(false)
        );
        assert_eq!(is_relevant(&op("op1", Some("A"), OpCode::Other, None)), Ok(false));
    }
}
