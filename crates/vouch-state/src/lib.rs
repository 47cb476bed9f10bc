// crates/vouch-state/src/lib.rs
//
// vouch-state: Owns the operation log and the current member graph snapshot.
//
// The rest of the application treats this crate as the single publisher of
// "the current graph": new operations stream in through `Action::AddOperations`
// and a reconnect replaces the whole history through `Action::SetOperations`.
// Snapshots are published as `Arc<MemberGraph>`, so a reader holding one is
// never affected by later transitions.

pub mod store;

pub use store::{Action, MemberStore};
