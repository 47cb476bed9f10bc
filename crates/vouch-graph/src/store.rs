// crates/vouch-graph/src/store.rs
//
// The member graph snapshot — every known member and their relationships.
//
// One canonical map owns the members, keyed by uid. The mid index is
// derived: it is only ever written through `insert`, together with the
// canonical map, so the two can never drift apart. Members are Arc-shared
// between snapshots; a transition clones the maps but not the unchanged
// member payloads, and `Arc::ptr_eq` gives readers cheap change detection.

use std::collections::HashMap;
use std::sync::Arc;

use vouch_core::{Member, Mid, Uid, UidSet};

/// An immutable snapshot of the member graph.
///
/// Only the fold engine writes to a snapshot, and only while deriving the
/// next one; everything public here is a read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberGraph {
    by_uid: HashMap<Uid, Arc<Member>>,
    mid_index: HashMap<Mid, Uid>,
}

impl MemberGraph {
    /// The empty graph — the starting snapshot for a full resync.
    pub fn empty() -> Self {
        MemberGraph::default()
    }

    /// Look up a member by primary identifier.
    pub fn get_by_uid(&self, uid: &Uid) -> Option<&Arc<Member>> {
        self.by_uid.get(uid)
    }

    /// Look up a member by secondary identifier.
    pub fn get_by_mid(&self, mid: &Mid) -> Option<&Arc<Member>> {
        self.mid_index.get(mid).and_then(|uid| self.by_uid.get(uid))
    }

    pub fn contains_uid(&self, uid: &Uid) -> bool {
        self.by_uid.contains_key(uid)
    }

    pub fn len(&self) -> usize {
        self.by_uid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_uid.is_empty()
    }

    /// All members, in no particular order.
    pub fn members(&self) -> impl Iterator<Item = &Arc<Member>> {
        self.by_uid.values()
    }

    /// Resolve a relationship set to the members it references, skipping
    /// uids not present in this snapshot.
    pub fn members_for(&self, uids: &UidSet) -> Vec<Arc<Member>> {
        uids.iter()
            .filter_map(|uid| self.by_uid.get(uid).cloned())
            .collect()
    }

    /// All `(truster, trusted)` uid pairs — the trust edges of the network
    /// visualization.
    pub fn trust_edges(&self) -> Vec<(Uid, Uid)> {
        self.edges(|m| &m.trusts)
    }

    /// All `(inviter, invitee)` uid pairs.
    pub fn invite_edges(&self) -> Vec<(Uid, Uid)> {
        self.edges(|m| &m.invited)
    }

    fn edges(&self, set: impl Fn(&Member) -> &UidSet) -> Vec<(Uid, Uid)> {
        self.by_uid
            .values()
            .flat_map(|m| {
                set(m.as_ref())
                    .iter()
                    .map(move |to| (m.uid.clone(), to.clone()))
            })
            .collect()
    }

    /// Insert or replace a member, updating both the canonical map and the
    /// mid index in one step.
    pub(crate) fn insert(&mut self, member: Member) {
        let member = Arc::new(member);
        self.mid_index
            .insert(member.mid.clone(), member.uid.clone());
        self.by_uid.insert(member.uid.clone(), member);
    }

    /// Verify that every uid referenced from any relationship set is a key
    /// of the canonical map. Returns the first dangling uid found.
    ///
    /// Snapshots built by the fold engine from valid operations always pass;
    /// this exists for tests and debug assertions.
    pub fn check_referential_integrity(&self) -> Result<(), Uid> {
        for member in self.by_uid.values() {
            for set in [&member.trusts, &member.trusted_by, &member.invited] {
                for uid in set {
                    if !self.by_uid.contains_key(uid) {
                        return Err(uid.clone());
                    }
                }
            }
        }
        Ok(())
    }
}
