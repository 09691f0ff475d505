// src/seed/seeder.rs

use crate::errors::AppResult;
use crate::models::User;
use crate::seed::command::{TaskCommand, TaskGroup, UserCommand, encode};
use crate::seed::transport::{Route, Transport};
use crate::ui::messages::{error, info};
use serde_json::Value;

/// Result of a complete seeding run.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub users: Vec<Value>,
    /// Reply to the single `InsertAll`.
    pub tasks: Value,
}

/// Sends the seed commands, stopping at the first failure.
///
/// Nothing already created is rolled back.
pub struct Seeder<T: Transport> {
    transport: T,
}

impl<T: Transport> Seeder<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// One `Create` per user, in order.
    pub fn create_users(&self, users: &[User]) -> AppResult<Vec<Value>> {
        let mut replies = Vec::with_capacity(users.len());

        for user in users {
            let payload = encode(&UserCommand::Create(user.clone()))?;
            info(format!("Request {payload}"));

            let reply = self.send(Route::User, &payload)?;
            info(format!("Result {reply}"));
            replies.push(reply);
        }

        Ok(replies)
    }

    /// All groups in a single `InsertAll`.
    pub fn create_tasks(&self, groups: Vec<TaskGroup>) -> AppResult<Value> {
        info("Creating tasks.");

        let payload = encode(&TaskCommand::InsertAll { tasks: groups })?;
        info(format!("Request: {payload}"));

        let reply = self.send(Route::Task, &payload)?;
        info(format!("Result: {reply}"));
        info("Done creating tasks.");

        Ok(reply)
    }

    pub fn run(&self, users: &[User], groups: Vec<TaskGroup>) -> AppResult<SeedReport> {
        let users = self.create_users(users)?;
        let tasks = self.create_tasks(groups)?;

        Ok(SeedReport { users, tasks })
    }

    fn send(&self, route: Route, payload: &Value) -> AppResult<Value> {
        self.transport.send(route, payload).inspect_err(|e| {
            tracing::error!(route = route.path(), "command rejected: {e}");
            error(format!("Failed with: {e}"));
        })
    }
}
