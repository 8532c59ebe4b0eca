use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // Map "no rows" to NotFound
            sqlx::Error::RowNotFound => Self::NotFound("Resource not found".to_string()),
            // Map constraint violations to domain errors
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().unwrap_or_default();
                match code.as_ref() {
                    // MySQL integrity_constraint_violation covers duplicate
                    // keys and foreign key failures; the message tells them apart
                    "23000" => {
                        let detail = db_err.message().to_string();
                        if detail.contains("Duplicate entry") {
                            if detail.contains("username") {
                                Self::AlreadyExists("Username already taken".to_string())
                            } else if detail.contains("email") {
                                Self::AlreadyExists("Email already registered".to_string())
                            } else {
                                Self::AlreadyExists("Resource already exists".to_string())
                            }
                        } else if detail.contains("foreign key") {
                            Self::NotFound("Referenced resource not found".to_string())
                        } else if detail.contains("cannot be null") {
                            Self::InvalidInput("Required field is missing".to_string())
                        } else {
                            Self::InvalidInput("Constraint violation".to_string())
                        }
                    }
                    _ => Self::Database(err),
                }
            }
            _ => Self::Database(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
