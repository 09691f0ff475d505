use super::RecordId;
use serde::{Deserialize, Serialize};

/// A named category of work owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: RecordId,
    user_id: RecordId,
    name: String,
}

impl Task {
    pub fn new(user_id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id: RecordId::Unassigned,
            user_id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn user_id(&self) -> RecordId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
