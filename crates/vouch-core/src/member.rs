// crates/vouch-core/src/member.rs
//
// The Member entity — one participant node in the trust graph.
//
// Members are immutable values: every relationship update returns a new
// Member and leaves the original untouched, so any snapshot of the graph a
// reader holds stays internally consistent while newer snapshots are built.

use serde::{Deserialize, Serialize};

use crate::identifiers::{Mid, Uid, UidSet};

/// Who caused a member to join the network.
///
/// Founding members were bootstrapped from allow-listed historical operations
/// and have no inviter; everyone else was invited by an existing member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvitedBy {
    /// Founding member, no inviter.
    Genesis,
    /// Invited by the member with this uid.
    Member(Uid),
}

impl InvitedBy {
    /// The inviter's uid, or `None` for founding members.
    pub fn inviter(&self) -> Option<&Uid> {
        match self {
            InvitedBy::Genesis => None,
            InvitedBy::Member(uid) => Some(uid),
        }
    }
}

/// One participant in the trust network.
///
/// `uid`, `mid`, `full_name`, and `invited_by` are fixed at creation. The
/// three relationship sets grow monotonically — there is no untrust or
/// uninvite operation in this design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Primary identifier, assigned at creation.
    pub uid: Uid,
    /// Secondary human-readable identifier, assigned at creation.
    pub mid: Mid,
    /// Display name.
    pub full_name: String,
    /// How this member joined.
    pub invited_by: InvitedBy,
    /// Uids this member vouches for.
    pub trusts: UidSet,
    /// Uids that vouch for this member.
    pub trusted_by: UidSet,
    /// Uids this member invited. Invitation also creates trust edges, but
    /// the "invited" category is tracked separately for the UI.
    pub invited: UidSet,
}

impl Member {
    /// Create a member with empty relationship sets.
    pub fn new(uid: Uid, mid: Mid, full_name: impl Into<String>, invited_by: InvitedBy) -> Self {
        Member {
            uid,
            mid,
            full_name: full_name.into(),
            invited_by,
            trusts: UidSet::new(),
            trusted_by: UidSet::new(),
            invited: UidSet::new(),
        }
    }

    /// Derive the inviter-side update for an invitation: the new member lands
    /// in both `invited` and `trusted_by` (inviting someone implies vouching
    /// is reciprocated provisionally).
    pub fn with_invited(&self, uid: Uid) -> Member {
        let mut next = self.clone();
        next.trusted_by.insert(uid.clone());
        next.invited.insert(uid);
        next
    }

    /// Derive a member whose `trusts` set gains `uid`.
    pub fn with_trust_for(&self, uid: Uid) -> Member {
        let mut next = self.clone();
        next.trusts.insert(uid);
        next
    }

    /// Derive a member whose `trusted_by` set gains `uid`.
    pub fn with_trust_from(&self, uid: Uid) -> Member {
        let mut next = self.clone();
        next.trusted_by.insert(uid);
        next
    }

    /// Whether this member's invite has been confirmed — true for founding
    /// members, and for invited members once their inviter vouches for them.
    /// The UI gates features (e.g. the profile video) on this.
    pub fn invite_confirmed(&self) -> bool {
        match &self.invited_by {
            InvitedBy::Genesis => true,
            InvitedBy::Member(inviter) => self.trusted_by.contains(inviter),
        }
    }
}
