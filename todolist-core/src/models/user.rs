use serde::{Deserialize, Serialize};

use super::id::UserId;

/// A registered account row in the `users` table.
///
/// The password column holds whatever the (not yet implemented) registration
/// handler stores; hashing is out of scope for this service skeleton.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    #[must_use]
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_fresh_id() {
        let a = User::new("alice".into(), "alice@example.com".into(), "pw".into());
        let b = User::new("alice".into(), "alice@example.com".into(), "pw".into());

        assert_eq!(a.id.as_str().len(), 36);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_user_serializes_with_transparent_id() {
        let user = User {
            id: UserId::from_string("00000000-0000-0000-0000-000000000000".into()),
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "pw".into(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["username"], "alice");
    }
}
