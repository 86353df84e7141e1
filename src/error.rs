use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("not found")]
    NotFound,

    #[error("already exists")]
    AlreadyExists,

    #[error("token lookup collision")]
    TokenLookupCollision,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("invalid token format")]
    InvalidTokenFormat,

    #[error("token expired")]
    TokenExpired,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("invitation expired")]
    Expired,

    #[error("user is already a member of this project")]
    AlreadyMember,

    #[error("user already has a pending invitation to this project")]
    AlreadyInvited,

    #[error("no user named '{0}'")]
    UnknownInvitee(String),

    #[error("cannot remove your own membership")]
    SelfRemovalForbidden,

    #[error("consistency violation: {0}")]
    ConsistencyViolation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
