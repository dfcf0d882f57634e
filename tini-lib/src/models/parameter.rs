use std::fmt::Display;

use crate::{TiniError, storage::try_copy};

/// A single `key=value` pair owned by a [`Section`](crate::models::Section).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub(crate) key: String,
    pub(crate) value: String,
}

impl Parameter {
    pub(crate) fn try_new(key: &str, value: &str) -> Result<Self, TiniError> {
        Ok(Self { key: try_copy(key)?, value: try_copy(value)? })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
