use std::fmt;

use derive_more::AsRef;
use thiserror::Error;

use crate::{DeleteError, LoginError, RegistrationError, StorageError};

/// Operations of the session gate.
///
/// The gate is the single owner of the authenticated identity. `login` and
/// `register` are the only suspending operations; `logout` and `session` act
/// on the in-memory state and the durable store only.
#[allow(async_fn_in_trait)]
pub trait SessionService {
    async fn login(&mut self, credentials: Credentials) -> Result<Session, LoginError>;
    async fn register(
        &mut self,
        credentials: Credentials,
        role: Role,
    ) -> Result<Session, RegistrationError>;
    fn logout(&mut self) -> Result<(), DeleteError>;
    fn session(&self) -> Option<&Session>;
}

/// Authentication endpoints of the remote API.
#[allow(async_fn_in_trait)]
pub trait AuthRepository {
    async fn request_session(&self, credentials: &Credentials) -> Result<Session, LoginError>;
    async fn register_session(
        &self,
        credentials: &Credentials,
        role: Role,
    ) -> Result<Session, RegistrationError>;
}

/// Durable client-side copy of the session.
///
/// The store is synchronous so that persistence happens within the same state
/// transition that changes the in-memory session.
pub trait SessionRepository {
    fn read_session(&self) -> Result<Option<Session>, StorageError>;
    fn write_session(&self, session: &Session) -> Result<(), StorageError>;
    fn delete_session(&self) -> Result<(), StorageError>;
}

/// The authenticated identity. Either absent or fully populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: Username,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: Username,
    pub password: Password,
}

#[derive(AsRef, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    pub fn new(username: &str) -> Result<Self, UsernameError> {
        let trimmed = username.trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        let len = trimmed.len();

        if len > 64 {
            return Err(UsernameError::TooLong(len));
        }

        Ok(Username(trimmed.to_string()))
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,
    #[error("Username must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[derive(AsRef, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(password: &str) -> Result<Self, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Empty);
        }

        Ok(Password(password.to_string()))
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    Empty,
}

/// Determines which dashboard is reachable.
///
/// Any role string other than `manager` and `deliverer` maps to `User`, the
/// least-privileged view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    Deliverer,
    #[default]
    User,
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "manager" => Role::Manager,
            "deliverer" => Role::Deliverer,
            _ => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Role::Manager => "manager",
                Role::Deliverer => "deliverer",
                Role::User => "user",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("alice", Ok(Username(String::from("alice"))))]
    #[case(" alice ", Ok(Username(String::from("alice"))))]
    #[case("", Err(UsernameError::Empty))]
    #[case("  ", Err(UsernameError::Empty))]
    #[case(&"x".repeat(65), Err(UsernameError::TooLong(65)))]
    fn test_username_new(#[case] input: &str, #[case] expected: Result<Username, UsernameError>) {
        assert_eq!(Username::new(input), expected);
    }

    #[test]
    fn test_password_new() {
        assert_eq!(
            Password::new("pw123"),
            Ok(Password(String::from("pw123")))
        );
        assert_eq!(Password::new(""), Err(PasswordError::Empty));
    }

    #[test]
    fn test_password_debug_hides_value() {
        assert_eq!(
            format!("{:?}", Password::new("secret").unwrap()),
            "Password(***)"
        );
    }

    #[rstest]
    #[case("manager", Role::Manager)]
    #[case("deliverer", Role::Deliverer)]
    #[case("user", Role::User)]
    #[case("administrator", Role::User)]
    #[case("", Role::User)]
    fn test_role_from_str(#[case] value: &str, #[case] expected: Role) {
        assert_eq!(Role::from(value), expected);
    }

    #[rstest]
    #[case(Role::Manager, "manager")]
    #[case(Role::Deliverer, "deliverer")]
    #[case(Role::User, "user")]
    fn test_role_display(#[case] role: Role, #[case] string: &str) {
        assert_eq!(role.to_string(), string);
    }
}
