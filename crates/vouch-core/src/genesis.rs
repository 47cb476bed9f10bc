// crates/vouch-core/src/genesis.rs
//
// Allow-lists of the historical operations that bootstrapped the network.
//
// The trust network has no dedicated genesis operation type: the founding
// members were created via real, already-recorded operations that are missing
// fields a generic validator would reject. These lists are a narrow
// compatibility shim, not a general validation bypass, and must be preserved
// verbatim — they name real records in the backing store.

use crate::identifiers::OperationId;

/// Request-invite operations that created the founding members. These carry
/// no `to_uid`; the resulting members have no inviter.
pub const GENESIS_REQUEST_INVITE_OPS: [&str; 4] = [
    "InuYAjMISl6operovXIR",
    "SKI5CxMXWd4qjJm1zm1y",
    "SUswrxogVQ6S0rH8O2h7",
    "Y8FiyjOLs9O8AZNGzhwQ",
];

/// Trust operations recorded during bootstrap with no creator. They are
/// skipped outright rather than rejected.
pub const GENESIS_TRUST_OPS: [&str; 4] = [
    "va9A8nQ4C4ZiAsJG2nLt",
    "CmVDdktn3c3Uo5pP4rV6",
    "uAFLhBjYtrpTXOZkJ6BD",
    "y5EKzzihWm8RlDCcfv6d",
];

/// True if `id` is one of the founding request-invite operations.
pub fn is_genesis_request_invite(id: &OperationId) -> bool {
    GENESIS_REQUEST_INVITE_OPS.contains(&id.as_str())
}

/// True if `id` is one of the founding trust operations.
pub fn is_genesis_trust(id: &OperationId) -> bool {
    GENESIS_TRUST_OPS.contains(&id.as_str())
}
