//! Provider priority
//!
//! Higher priorities win. Providers that do not declare one use
//! [`Priority::DEFAULT`]; last-resort implementations use
//! [`Priority::FALLBACK`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ranking of a provider among the candidates for one capability
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Priority(i32);

impl Priority {
    /// Priority of providers that do not declare one
    pub const DEFAULT: Self = Self(0);

    /// Lowest possible priority, used by fallback implementations
    pub const FALLBACK: Self = Self(i32::MIN);

    /// Create a priority from its raw value
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw priority value
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::FALLBACK {
            f.write_str("fallback")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
