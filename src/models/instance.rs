use super::RecordId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single time-bounded occurrence of a task.
///
/// `start <= end` is expected but not checked here: rejecting bad data is
/// left to the service that stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    id: RecordId,
    task_id: RecordId,
    #[serde(with = "crate::models::timestamp")]
    start: NaiveDateTime,
    #[serde(with = "crate::models::timestamp")]
    end: NaiveDateTime,
}

impl Instance {
    pub fn new(task_id: RecordId, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: RecordId::Unassigned,
            task_id,
            start,
            end,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn task_id(&self) -> RecordId {
        self.task_id
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }
}
