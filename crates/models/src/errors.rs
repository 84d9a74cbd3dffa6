use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    /// Carries the driver message, which names the violated index.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("record not found")]
    NotFound,
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => ModelError::UniqueViolation(msg),
            _ => match e {
                sea_orm::DbErr::RecordNotFound(_) | sea_orm::DbErr::RecordNotUpdated => ModelError::NotFound,
                other => ModelError::Db(other.to_string()),
            },
        }
    }
}
