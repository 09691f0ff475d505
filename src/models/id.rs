use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the store (or by the remote service).
///
/// Records built locally start as `Unassigned`; only the authority that
/// persists them hands out a real id. On the wire `Unassigned` is written
/// as `0`, and a `0` read back is treated as `Unassigned`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum RecordId {
    #[default]
    Unassigned,
    Assigned(i64),
}

impl RecordId {
    pub fn is_assigned(&self) -> bool {
        matches!(self, RecordId::Assigned(_))
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            RecordId::Unassigned => None,
            RecordId::Assigned(v) => Some(*v),
        }
    }
}

impl From<i64> for RecordId {
    fn from(raw: i64) -> Self {
        if raw == 0 {
            RecordId::Unassigned
        } else {
            RecordId::Assigned(raw)
        }
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.value().unwrap_or(0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Unassigned => write!(f, "<unassigned>"),
            RecordId::Assigned(v) => write!(f, "{v}"),
        }
    }
}
