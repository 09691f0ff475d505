// src/seed/command.rs

use crate::errors::AppResult;
use crate::models::{Instance, Task, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Commands accepted by the `/user` route.
///
/// Encodes as `{"Create": {"id": 0, "username": ..., "name": ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UserCommand {
    Create(User),
}

/// A task together with all of its instances.
///
/// Encoded positionally as `[task, [instance, ...]]` so that the service
/// can create the task and its instances as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGroup(pub Task, pub Vec<Instance>);

impl TaskGroup {
    pub fn task(&self) -> &Task {
        &self.0
    }

    pub fn instances(&self) -> &[Instance] {
        &self.1
    }
}

/// Commands accepted by the `/task` route.
///
/// Encodes as `{"InsertAll": {"tasks": [[task, [instance, ...]], ...]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskCommand {
    InsertAll { tasks: Vec<TaskGroup> },
}

/// Encode any command into the JSON payload sent on the wire.
pub fn encode<C: Serialize>(command: &C) -> AppResult<Value> {
    Ok(serde_json::to_value(command)?)
}
