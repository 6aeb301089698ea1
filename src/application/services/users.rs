//! User directory: registration and authentication.
//!
//! A flat list scan; the only invariant is username uniqueness. Gates the
//! interactive session, never called by the catalog core.

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    password: String,
}

#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account. Fails with `UserAlreadyExists` before any
    /// mutation if the name is taken.
    pub fn register(&mut self, username: &str, password: &str) -> ApplicationResult<()> {
        debug!("register: {}", username);
        if self.users.iter().any(|u| u.username == username) {
            return Err(ApplicationError::UserAlreadyExists(username.to_string()));
        }
        self.users.push(User {
            username: username.to_string(),
            password: password.to_string(),
        });
        Ok(())
    }

    /// Check an exact username+password pair.
    ///
    /// Unknown username and wrong password both yield `InvalidCredentials`;
    /// the caller cannot tell them apart.
    pub fn authenticate(&self, username: &str, password: &str) -> ApplicationResult<()> {
        debug!("authenticate: {}", username);
        let matched = self
            .users
            .iter()
            .any(|u| u.username == username && u.password == password);
        if matched {
            Ok(())
        } else {
            Err(ApplicationError::InvalidCredentials)
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
