//! Users
//!
//! Minimal user directory: serial ids, unique usernames, an admin flag for
//! gating catalog writes. Password handling beyond storage is out of scope.

use thiserror::Error;

/// Errors from user operations.
#[derive(Debug, Error, PartialEq)]
pub enum UserError {
    /// The username is already registered.
    #[error("username {0} is already taken")]
    UsernameTaken(String),
}

/// A registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Serial user id.
    pub id: u32,

    /// Unique username.
    pub username: String,

    /// Stored credential. Opaque to this module.
    pub password: String,

    /// Whether the user may perform catalog writes.
    pub is_admin: bool,
}

/// Fields for registering a user; the directory assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Desired username.
    pub username: String,

    /// Credential to store.
    pub password: String,

    /// Admin flag.
    pub is_admin: bool,
}

/// In-memory user directory with unique usernames.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    next_id: u32,
}

impl UserDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::UsernameTaken`] when the username exists.
    pub fn create(&mut self, new: NewUser) -> Result<&User, UserError> {
        if self.by_username(&new.username).is_some() {
            return Err(UserError::UsernameTaken(new.username));
        }

        self.next_id += 1;

        self.users.push(User {
            id: self.next_id,
            username: new.username,
            password: new.password,
            is_admin: new.is_admin,
        });

        self.users
            .last()
            .ok_or_else(|| UserError::UsernameTaken(String::new()))
    }

    /// Look up a user by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Look up a user by username.
    #[must_use]
    pub fn by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }
}
