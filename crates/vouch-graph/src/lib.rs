// crates/vouch-graph/src/lib.rs
//
// vouch-graph: Member graph store, operation validator, and fold engine
// for the Vouch trust network.
//
// This crate folds the ordered operation feed into immutable snapshots of
// the member graph. The engine is purely functional: each step takes a prior
// snapshot and one operation and produces a new snapshot, rejecting
// operations that would violate referential integrity.

pub mod engine;
pub mod store;
pub mod validator;

pub use engine::{apply_batch, apply_one, ApplyOutcome};
pub use store::MemberGraph;
