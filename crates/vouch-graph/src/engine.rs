// crates/vouch-graph/src/engine.rs
//
// The fold engine: applies validated operations to a member graph snapshot.
//
// `apply_one` is a pure step function — prior snapshot in, outcome out.
// `apply_batch` folds a whole ordered sequence, skipping rejected operations
// so one bad record never poisons the feed. Ordering is the caller's
// responsibility: a trust operation may reference a member created by the
// request-invite just before it, so the fold must run strictly in sequence.

use vouch_core::{
    genesis, InvitedBy, Member, OpCode, Operation, OperationRejected, RejectionReason,
};

use crate::store::MemberGraph;
use crate::validator;

/// The result of applying one operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The operation changed the graph; here is the next snapshot.
    Applied(MemberGraph),
    /// The operation was not relevant to this layer; the caller keeps the
    /// prior snapshot, preserving referential equality for change detection.
    Unchanged,
}

/// Apply a single operation to `prev`.
///
/// Rejections are expected data-validity failures (spec'd in
/// `RejectionReason`); anything else that goes wrong in here is a bug and
/// panics rather than being folded into a rejection.
pub fn apply_one(
    prev: &MemberGraph,
    operation: &Operation,
) -> Result<ApplyOutcome, OperationRejected> {
    let reject = |reason| OperationRejected::new(operation.id.clone(), reason);

    if !validator::is_relevant(operation).map_err(reject)? {
        return Ok(ApplyOutcome::Unchanged);
    }

    // The validator only classifies creator-less operations as relevant when
    // they are allow-listed genesis trusts, and those came back not-relevant
    // above.
    let creator_uid = operation
        .creator_uid
        .clone()
        .ok_or_else(|| reject(RejectionReason::MissingCreator))?;

    match operation.op_code {
        OpCode::RequestInvite => {
            let full_name = operation.data.full_name.clone().unwrap_or_default();

            // The founding members weren't invited by anyone, so there is no
            // inviter side to update.
            if genesis::is_genesis_request_invite(&operation.id) {
                let founder = Member::new(
                    creator_uid,
                    operation.creator_mid.clone(),
                    full_name,
                    InvitedBy::Genesis,
                );
                let mut next = prev.clone();
                next.insert(founder);
                return Ok(ApplyOutcome::Applied(next));
            }

            let Some(to_uid) = operation.data.to_uid.clone() else {
                // Validator guarantees a target for the non-genesis case.
                return Ok(ApplyOutcome::Unchanged);
            };
            let Some(inviter) = prev.get_by_uid(&to_uid) else {
                return Err(reject(RejectionReason::InviterNotPresent(to_uid)));
            };

            let inviter = inviter.with_invited(creator_uid.clone());
            // An invitation implies the requester starts out trusting their
            // inviter.
            let requester = Member::new(
                creator_uid,
                operation.creator_mid.clone(),
                full_name,
                InvitedBy::Member(to_uid.clone()),
            )
            .with_trust_for(to_uid);

            let mut next = prev.clone();
            next.insert(inviter);
            next.insert(requester);
            Ok(ApplyOutcome::Applied(next))
        }
        OpCode::Trust => {
            let Some(to_uid) = operation.data.to_uid.clone() else {
                return Ok(ApplyOutcome::Unchanged);
            };
            let Some(truster) = prev.get_by_uid(&creator_uid) else {
                return Err(reject(RejectionReason::MemberNotPresent(creator_uid)));
            };
            let Some(trusted) = prev.get_by_uid(&to_uid) else {
                return Err(reject(RejectionReason::MemberNotPresent(to_uid)));
            };

            let truster = truster.with_trust_for(to_uid);
            let trusted = trusted.with_trust_from(creator_uid);

            let mut next = prev.clone();
            next.insert(truster);
            next.insert(trusted);
            Ok(ApplyOutcome::Applied(next))
        }
        _ => Ok(ApplyOutcome::Unchanged),
    }
}

/// Fold an ordered sequence of operations into `prev`, left to right.
///
/// A rejected operation is logged at `warn` with its payload and skipped;
/// the batch always produces a snapshot. An empty batch returns `prev`
/// unchanged.
pub fn apply_batch<'a, I>(prev: MemberGraph, operations: I) -> MemberGraph
where
    I: IntoIterator<Item = &'a Operation>,
{
    operations
        .into_iter()
        .fold(prev, |state, operation| match apply_one(&state, operation) {
            Ok(ApplyOutcome::Applied(next)) => next,
            Ok(ApplyOutcome::Unchanged) => state,
            Err(rejected) => {
                tracing::warn!(
                    operation_id = %rejected.operation_id,
                    reason = %rejected.reason,
                    payload = ?operation,
                    "skipping invalid operation"
                );
                state
            }
        })
}
