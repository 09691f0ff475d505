//! Built-in dummy data used to fill a fresh service.

use crate::errors::{AppError, AppResult};
use crate::models::{Instance, RecordId, Task, User};
use crate::seed::command::TaskGroup;
use chrono::{NaiveDate, NaiveDateTime};

/// Owner of every fixture task.
pub const FIXTURE_USER_ID: i64 = 1;

type Moment = (i32, u32, u32, u32, u32, u32);

const USERS: [(&str, &str); 3] = [
    ("jqphu", "Justin"),
    ("evil_justin", "Evil Justin"),
    ("cool_justin", "Cool Justin"),
];

// (task name, [(start, end)])
const TASKS: [(&str, &[(Moment, Moment)]); 5] = [
    (
        "Exercise",
        &[
            ((2020, 8, 22, 12, 30, 22), (2020, 8, 22, 14, 2, 2)),
            ((2020, 8, 22, 5, 30, 22), (2020, 8, 22, 7, 2, 2)),
            ((2020, 8, 21, 1, 30, 22), (2020, 8, 22, 14, 2, 2)),
            ((2020, 8, 12, 12, 30, 22), (2020, 8, 13, 14, 2, 2)),
        ],
    ),
    (
        "Sleep",
        &[
            ((2020, 8, 22, 11, 30, 22), (2020, 8, 22, 14, 2, 2)),
            ((2020, 8, 22, 7, 30, 22), (2020, 8, 22, 8, 2, 2)),
            ((2020, 8, 21, 1, 30, 22), (2020, 8, 21, 14, 2, 2)),
        ],
    ),
    (
        "Project",
        &[((2020, 8, 16, 12, 30, 22), (2020, 8, 17, 14, 2, 2))],
    ),
    (
        "Work",
        &[((2020, 8, 20, 10, 30, 22), (2020, 8, 21, 14, 2, 2))],
    ),
    ("Misc", &[]),
];

fn at(m: Moment) -> AppResult<NaiveDateTime> {
    let (y, mo, d, h, mi, s) = m;
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, s))
        .ok_or_else(|| AppError::InvalidFixture(format!("{m:?} is not a valid date-time")))
}

pub fn users() -> Vec<User> {
    USERS
        .iter()
        .map(|(username, name)| User::new(*username, *name))
        .collect()
}

/// Fixture tasks in declaration order.
///
/// Instance `task_id`s are the 1-based position of their task; the service
/// rewrites them once the task has a real id.
pub fn task_groups() -> AppResult<Vec<TaskGroup>> {
    let mut groups = Vec::with_capacity(TASKS.len());

    for (position, (name, spans)) in (1_i64..).zip(TASKS.iter()) {
        let task = Task::new(RecordId::Assigned(FIXTURE_USER_ID), *name);

        let instances = spans
            .iter()
            .map(|(start, end)| -> AppResult<Instance> {
                Ok(Instance::new(
                    RecordId::Assigned(position),
                    at(*start)?,
                    at(*end)?,
                ))
            })
            .collect::<AppResult<Vec<_>>>()?;

        groups.push(TaskGroup(task, instances));
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_users_are_unassigned() {
        let users = users();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].username(), "jqphu");
        assert!(users.iter().all(|u| !u.id().is_assigned()));
    }

    #[test]
    fn fixture_tasks_keep_declaration_order() {
        let groups = task_groups().unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.task().name()).collect();
        assert_eq!(names, vec!["Exercise", "Sleep", "Project", "Work", "Misc"]);

        let counts: Vec<usize> = groups.iter().map(|g| g.instances().len()).collect();
        assert_eq!(counts, vec![4, 3, 1, 1, 0]);

        assert!(
            groups[1]
                .instances()
                .iter()
                .all(|i| i.task_id() == RecordId::Assigned(2))
        );
    }
}
