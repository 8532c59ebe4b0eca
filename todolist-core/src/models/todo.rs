use serde::{Deserialize, Serialize};

use super::id::TodoId;

/// A to-do item row in the `todos` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
}

impl Todo {
    #[must_use]
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: TodoId::new(),
            title,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_gets_fresh_id() {
        let a = Todo::new("buy milk".into(), "2 liters".into());
        let b = Todo::new("buy milk".into(), "2 liters".into());

        assert_eq!(a.id.as_str().len(), 36);
        assert_ne!(a.id, b.id);
    }
}
