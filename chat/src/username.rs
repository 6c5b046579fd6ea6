//! Validated username for one chat session.

#[cfg(test)]
#[path = "username_test.rs"]
mod username_test;

use std::fmt;

/// Longest name the server stores without truncating.
pub const MAX_USERNAME_BYTES: usize = 31;

/// Error returned by [`Username::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameError {
    /// Input was empty or whitespace-only.
    #[error("username must not be blank")]
    Blank,
    /// Trimmed input exceeds [`MAX_USERNAME_BYTES`].
    #[error("username is {len} bytes; the limit is {max}")]
    TooLong { len: usize, max: usize },
}

/// A trimmed, non-empty username. Immutable for the session.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Trim and validate raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`UsernameError::Blank`] for empty or whitespace-only input and
    /// [`UsernameError::TooLong`] when the trimmed value exceeds
    /// [`MAX_USERNAME_BYTES`].
    pub fn parse(raw: &str) -> Result<Self, UsernameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UsernameError::Blank);
        }
        if trimmed.len() > MAX_USERNAME_BYTES {
            return Err(UsernameError::TooLong { len: trimmed.len(), max: MAX_USERNAME_BYTES });
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
