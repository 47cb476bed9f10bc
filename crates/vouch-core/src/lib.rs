// crates/vouch-core/src/lib.rs
//
// vouch-core: Core types for the Vouch trust network.
//
// This is the leaf crate that the other crates in the workspace depend on.
// It defines member identifiers, the Member entity, the operation records
// consumed from the backing store, the genesis allow-lists, and the error
// types used throughout the fold pipeline.

pub mod error;
pub mod genesis;
pub mod identifiers;
pub mod member;
pub mod operation;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use vouch_core::Member;`

pub use error::{OperationRejected, RejectionReason};
pub use identifiers::{Mid, OperationId, Uid, UidSet};
pub use member::{InvitedBy, Member};
pub use operation::{OpCode, Operation, OperationData};
