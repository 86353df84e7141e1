mod helpers;
mod middleware;
mod token;

pub use helpers::{TokenValidationError, ValidatedToken, extract_token_from_header, validate_token};
pub use middleware::{AuthError, RequireAdmin, RequireUser};
pub use token::{TokenGenerator, issue_token, parse_token};
