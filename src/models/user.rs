use super::RecordId;
use serde::{Deserialize, Serialize};

/// A person owning tasks.
///
/// `username` is the unique login, `name` is only for display. The `id` is
/// assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: RecordId,
    username: String,
    name: String,
}

impl User {
    pub fn new(username: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RecordId::Unassigned,
            username: username.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_is_unassigned_with_login_and_display_name() {
        let u = User::new("evil_justin", "Evil Justin");
        assert_eq!(u.id(), RecordId::Unassigned);
        assert_eq!(u.username(), "evil_justin");
        assert_eq!(u.name(), "Evil Justin");
    }
}
