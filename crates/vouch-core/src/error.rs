// crates/vouch-core/src/error.rs

use thiserror::Error;

use crate::identifiers::{OperationId, Uid};

/// Why an operation was rejected by the fold pipeline.
///
/// These are expected data-validity failures, distinct from programming
/// errors: the batch folder logs and skips them, it never aborts on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// Operation carries no creator and is not an allow-listed bootstrap
    /// record.
    #[error("operation must have a creator")]
    MissingCreator,

    /// A request-invite named an inviter that is not in the graph.
    #[error("inviter {0} not present")]
    InviterNotPresent(Uid),

    /// A trust operation referenced a member that is not in the graph.
    #[error("member {0} not present")]
    MemberNotPresent(Uid),
}

/// An operation rejected during folding, with the record's identity kept for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation {operation_id} rejected: {reason}")]
pub struct OperationRejected {
    pub operation_id: OperationId,
    pub reason: RejectionReason,
}

impl OperationRejected {
    pub fn new(operation_id: OperationId, reason: RejectionReason) -> Self {
        OperationRejected {
            operation_id,
            reason,
        }
    }
}
