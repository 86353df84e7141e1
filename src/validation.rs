use crate::error::{Error, Result};

const MAX_PROJECT_NAME_LEN: usize = 50;
const MAX_USERNAME_LEN: usize = 64;
const MAX_ASSIGNEE_LEN: usize = 15;

fn is_valid_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
}

pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::BadRequest("Project name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_PROJECT_NAME_LEN {
        return Err(Error::BadRequest(format!(
            "Project name cannot exceed {MAX_PROJECT_NAME_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_username(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::BadRequest("Username cannot be empty".to_string()));
    }
    if name.len() > MAX_USERNAME_LEN {
        return Err(Error::BadRequest(format!(
            "Username cannot exceed {MAX_USERNAME_LEN} characters"
        )));
    }
    if !name.chars().all(is_valid_username_char) {
        return Err(Error::BadRequest(
            "Username can only contain alphanumeric characters, hyphens, underscores, and periods"
                .to_string(),
        ));
    }
    if name.starts_with('-') || name.starts_with('.') {
        return Err(Error::BadRequest(
            "Username cannot start with a hyphen or period".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_assignee(assignee: &str) -> Result<()> {
    if assignee.chars().count() > MAX_ASSIGNEE_LEN {
        return Err(Error::BadRequest(format!(
            "Assignee cannot exceed {MAX_ASSIGNEE_LEN} characters"
        )));
    }
    Ok(())
}
