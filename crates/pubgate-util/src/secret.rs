//! A string wrapper that never prints its contents.

use std::fmt;

const MASK: &str = "********";

/// Credential value (token, password) that is masked in `Debug` and `Display`.
///
/// The raw value is only reachable through [`Secret::expose`], which keeps
/// credentials out of `tracing` output and error messages.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw credential, for building request headers.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// The value as printed to users: masked unless `reveal` is set.
    pub fn display(&self, reveal: bool) -> &str {
        if reveal {
            &self.0
        } else {
            MASK
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({MASK})")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
