pub mod id;
pub mod todo;
pub mod user;

pub use id::{generate_id, TodoId, UserId};
pub use todo::Todo;
pub use user::User;
