// crates/vouch-core/src/identifiers.rs
//
// Identifier newtypes for the Vouch trust network.
//
// The backing store assigns both identifiers at member creation and never
// changes them: `Uid` is the primary key (an opaque push id), `Mid` is the
// secondary human-readable handle shown in profile URLs.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary member identifier. Opaque, unique, immutable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(pub String);

/// Secondary human-readable member identifier. Unique, immutable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mid(pub String);

/// Identifier of an operation record in the backing store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(pub String);

/// A set of member uids, as carried by the relationship fields of a Member.
///
/// BTreeSet rather than HashSet so iteration order is deterministic for the
/// presentation layer.
pub type UidSet = BTreeSet<Uid>;

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s)
            }
        }
    };
}

string_id!(Uid);
string_id!(Mid);
string_id!(OperationId);
