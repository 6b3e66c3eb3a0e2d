// core/src/actions/validation.rs

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Returns the message to show when `username` is too short.
pub fn validate_username(username: &str) -> Option<String> {
  if username.chars().count() < MIN_USERNAME_LEN {
    return Some(format!("Usernames must be at least {} characters long", MIN_USERNAME_LEN));
  }
  None
}

/// Returns the message to show when `password` is too short.
pub fn validate_password(password: &str) -> Option<String> {
  if password.chars().count() < MIN_PASSWORD_LEN {
    return Some(format!("Passwords must be at least {} characters long", MIN_PASSWORD_LEN));
  }
  None
}
