use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("ORM error: {0}")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

pub type AppResult<T> = Result<T, AppError>;
